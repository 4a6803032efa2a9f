use finder_core::{AppViewModel, PagerView, PostCardView};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout::{split, Areas};
use crate::platform::input::Focus;

pub fn draw(frame: &mut Frame, view: &AppViewModel, focus: Focus) {
    let areas = split(
        frame.area(),
        view.show_filters,
        view.pager.is_some(),
        view.cards.len(),
    );

    draw_header(frame, areas.header, view);
    draw_host(frame, &areas, view, focus);
    if let Some(filters) = areas.filters {
        draw_input(
            frame,
            filters.tags,
            TAGS_LABEL,
            &view.tags_input,
            focus == Focus::Tags,
        );
        draw_input(
            frame,
            filters.date_start,
            DATE_START_LABEL,
            &view.date_start_input,
            focus == Focus::DateStart,
        );
        draw_input(
            frame,
            filters.date_end,
            DATE_END_LABEL,
            &view.date_end_input,
            focus == Focus::DateEnd,
        );
    }
    frame.render_widget(Paragraph::new(message_line(view)), areas.message);

    for (card, area) in view.cards.iter().zip(areas.cards.iter()) {
        if areas.compact_cards {
            draw_compact_card(frame, *area, card);
        } else {
            draw_card(frame, *area, card);
        }
    }

    if let (Some(pager), Some(area)) = (view.pager, areas.pager) {
        frame.render_widget(Paragraph::new(pager_line(&pager)).centered(), area);
    }
    frame.render_widget(Paragraph::new(Span::styled(KEY_HINTS, muted())), areas.footer);
}

fn draw_header(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let mut spans = vec![Span::styled(APP_TITLE.to_uppercase(), focused())];
    if let Some(title) = &view.publication_title {
        spans.push(Span::raw("  ·  "));
        spans.push(Span::styled(title.clone(), accent()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_host(frame: &mut Frame, areas: &Areas, view: &AppViewModel, focus: Focus) {
    let [input, hint] =
        Layout::vertical([Constraint::Length(INPUT_HEIGHT), Constraint::Length(1)])
            .areas(areas.host);
    draw_input(frame, input, HOST_LABEL, &view.host_input, focus == Focus::Host);
    frame.render_widget(Paragraph::new(Span::styled(HOST_HINT, muted())), hint);

    let focused_area = match (focus, areas.filters) {
        (Focus::Host, _) | (_, None) => Some(input),
        (Focus::Tags, Some(filters)) => Some(filters.tags),
        (Focus::DateStart, Some(filters)) => Some(filters.date_start),
        (Focus::DateEnd, Some(filters)) => Some(filters.date_end),
    };
    if let Some(area) = focused_area {
        frame.set_cursor_position(cursor_position(area, focus.text(view)));
    }
}

/// End of `text` inside a bordered input, clamped to the inner right edge.
fn cursor_position(area: Rect, text: &str) -> (u16, u16) {
    let text_width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(text_width)
        .min(max_x);
    (x, area.y.saturating_add(1))
}

fn draw_input(frame: &mut Frame, area: Rect, label: &str, text: &str, has_focus: bool) {
    let style = if has_focus { focused() } else { accent() };
    let block = Block::bordered().title(label).border_style(style);
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn message_line(view: &AppViewModel) -> Line<'static> {
    if view.searching {
        return Line::styled(SEARCHING_TEXT, accent());
    }
    if let Some(error) = &view.error {
        return Line::styled(error.clone(), alert());
    }
    if view.date_range_invalid {
        return Line::styled(INVALID_DATE_TEXT, alert());
    }
    if view.show_filters {
        return Line::styled(
            format!(
                "{} of {} posts match",
                view.matched_count, view.fetched_count
            ),
            muted(),
        );
    }
    Line::default()
}

fn draw_card(frame: &mut Frame, area: Rect, card: &PostCardView) {
    let mut block = Block::bordered()
        .title(Line::from(Span::styled(card.title.clone(), focused())))
        .border_style(accent());
    if card.featured {
        let featured = Line::from(Span::styled(FEATURED_BADGE, badge())).right_aligned();
        block = block.title_top(featured);
    }

    let cover = if card.has_cover {
        Line::from(vec![
            Span::styled("Cover: ", muted()),
            Span::raw(card.image_url.clone()),
        ])
    } else {
        Line::from(vec![
            Span::styled("Cover: ", muted()),
            Span::styled("placeholder image", muted()),
        ])
    };
    let lines = vec![
        Line::raw(card.brief.clone()),
        cover,
        Line::from(vec![
            Span::styled("Read more: ", muted()),
            Span::styled(card.url.clone(), accent()),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// Borderless card for short terminals: headline, brief, then cover as
/// far as the row height allows.
fn draw_compact_card(frame: &mut Frame, area: Rect, card: &PostCardView) {
    let mut headline = vec![Span::styled(card.title.clone(), focused())];
    if card.featured {
        headline.push(Span::raw(" "));
        headline.push(Span::styled(FEATURED_BADGE, badge()));
    }
    headline.push(Span::raw("  "));
    headline.push(Span::styled(card.url.clone(), accent()));

    let cover = if card.has_cover {
        card.image_url.clone()
    } else {
        "placeholder image".to_string()
    };
    let lines = vec![
        Line::from(headline),
        Line::raw(format!("  {}", card.brief)),
        Line::from(vec![Span::styled("  Cover: ", muted()), Span::styled(cover, muted())]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn pager_line(pager: &PagerView) -> Line<'static> {
    let button = |label: &'static str, enabled: bool| {
        if enabled {
            Span::styled(label, focused())
        } else {
            Span::styled(label, muted())
        }
    };
    Line::from(vec![
        button("◀ Previous", pager.previous_enabled),
        Span::raw(format!("   {}   ", pager.label())),
        button("Next ▶", pager.next_enabled),
    ])
}
