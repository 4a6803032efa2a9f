use ratatui::style::{Color, Modifier, Style};

pub const APP_TITLE: &str = "Find Hashnode blogs of any host";
pub const HOST_LABEL: &str = " Host ";
pub const HOST_HINT: &str = "Example: snehafarkya.hashnode.dev";
pub const TAGS_LABEL: &str = " Tags (comma separated) ";
pub const DATE_START_LABEL: &str = " From (YYYY-MM-DD) ";
pub const DATE_END_LABEL: &str = " To (YYYY-MM-DD) ";
pub const SEARCHING_TEXT: &str = "Searching…";
pub const INVALID_DATE_TEXT: &str = "Dates must look like 2024-01-31; date filter not applied.";
pub const FEATURED_BADGE: &str = " ★ Featured ";
pub const KEY_HINTS: &str =
    "Enter search · Tab next field · ←/→ or PgUp/PgDn page · Ctrl-U clear · Esc quit";

pub const INPUT_HEIGHT: u16 = 3;
pub const CARD_HEIGHT: u16 = 7;

pub fn accent() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn focused() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn alert() -> Style {
    Style::default().fg(Color::LightRed)
}

pub fn badge() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}
