use ratatui::layout::{Constraint, Layout, Rect};

use super::constants::{CARD_HEIGHT, INPUT_HEIGHT};

/// Screen regions for one frame. Optional regions are absent when hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Areas {
    pub header: Rect,
    pub host: Rect,
    pub filters: Option<FilterAreas>,
    pub message: Rect,
    pub cards: Vec<Rect>,
    /// Cards are squeezed into short rows without borders.
    pub compact_cards: bool,
    pub pager: Option<Rect>,
    pub footer: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterAreas {
    pub tags: Rect,
    pub date_start: Rect,
    pub date_end: Rect,
}

pub fn split(area: Rect, show_filters: bool, show_pager: bool, card_count: usize) -> Areas {
    let filters_height = if show_filters { INPUT_HEIGHT } else { 0 };
    let pager_height = u16::from(show_pager);

    let [header, host, filters, message, cards, pager, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(INPUT_HEIGHT + 1),
        Constraint::Length(filters_height),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(pager_height),
        Constraint::Length(1),
    ])
    .areas(area);

    let (cards, compact_cards) = split_cards(cards, card_count);
    Areas {
        header,
        host,
        filters: show_filters.then(|| split_filters(filters)),
        message,
        cards,
        compact_cards,
        pager: show_pager.then_some(pager),
        footer,
    }
}

fn split_filters(area: Rect) -> FilterAreas {
    let [tags, date_start, date_end] = Layout::horizontal([
        Constraint::Percentage(50),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ])
    .areas(area);
    FilterAreas {
        tags,
        date_start,
        date_end,
    }
}

/// One slot per card. Full bordered cards when they all fit, otherwise
/// every card shares the height evenly as a compact row.
///
/// Returns the slots and whether they are compact.
fn split_cards(area: Rect, count: usize) -> (Vec<Rect>, bool) {
    if count == 0 || area.height == 0 {
        return (Vec::new(), false);
    }
    let count_u16 = u16::try_from(count).unwrap_or(u16::MAX);
    let compact = area.height < CARD_HEIGHT.saturating_mul(count_u16);
    let height = if compact {
        (area.height / count_u16).clamp(1, CARD_HEIGHT)
    } else {
        CARD_HEIGHT
    };

    let fitting = usize::from(area.height / height).min(count);
    let mut constraints = vec![Constraint::Length(height); fitting];
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(area);
    (rows.iter().take(fitting).copied().collect(), compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_regions_are_absent() {
        let areas = split(Rect::new(0, 0, 80, 40), false, false, 0);
        assert!(areas.filters.is_none());
        assert!(areas.pager.is_none());
        assert!(areas.cards.is_empty());
        assert_eq!(areas.footer.y, 39);
    }

    #[test]
    fn tall_area_gets_full_cards() {
        let areas = split(Rect::new(0, 0, 80, 60), true, true, 5);
        assert!(!areas.compact_cards);
        assert_eq!(areas.cards.len(), 5);
        assert!(areas.cards.iter().all(|card| card.height == CARD_HEIGHT));
    }

    #[test]
    fn short_area_keeps_every_card_as_compact_row() {
        let areas = split(Rect::new(0, 0, 80, 30), true, true, 5);
        // 30 rows minus header, host, filters, message, pager, footer = 19.
        assert!(areas.compact_cards);
        assert_eq!(areas.cards.len(), 5);
        assert!(areas.cards.iter().all(|card| card.height == 3));
        assert!(areas.pager.is_some());
    }
}
