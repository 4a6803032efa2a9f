use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use finder_core::{AppViewModel, Msg};

/// Input field that receives typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Host,
    Tags,
    DateStart,
    DateEnd,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Host, Focus::Tags, Focus::DateStart, Focus::DateEnd];

    /// Next field; filter fields are skipped while hidden.
    pub fn next(self, show_filters: bool) -> Self {
        if !show_filters {
            return Focus::Host;
        }
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn previous(self, show_filters: bool) -> Self {
        if !show_filters {
            return Focus::Host;
        }
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn text<'a>(self, view: &'a AppViewModel) -> &'a str {
        match self {
            Focus::Host => &view.host_input,
            Focus::Tags => &view.tags_input,
            Focus::DateStart => &view.date_start_input,
            Focus::DateEnd => &view.date_end_input,
        }
    }

    pub fn changed_msg(self, text: String) -> Msg {
        match self {
            Focus::Host => Msg::HostChanged(text),
            Focus::Tags => Msg::TagsChanged(text),
            Focus::DateStart => Msg::DateStartChanged(text),
            Focus::DateEnd => Msg::DateEndChanged(text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Insert(char),
    Backspace,
    Clear,
}

impl EditOp {
    pub fn apply(self, text: &str) -> String {
        let mut out = text.to_string();
        match self {
            EditOp::Insert(ch) => out.push(ch),
            EditOp::Backspace => {
                out.pop();
            }
            EditOp::Clear => out.clear(),
        }
        out
    }
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Quit,
    FocusNext,
    FocusPrevious,
    Search,
    NextPage,
    PreviousPage,
    Edit(EditOp),
    Ignore,
}

/// Text is only ever appended, so Left/Right are free for paging.
pub fn map_key(key: KeyEvent) -> UiAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => UiAction::Quit,
        KeyCode::Char('u') if ctrl => UiAction::Edit(EditOp::Clear),
        KeyCode::Esc => UiAction::Quit,
        KeyCode::Enter => UiAction::Search,
        KeyCode::Tab | KeyCode::Down => UiAction::FocusNext,
        KeyCode::BackTab | KeyCode::Up => UiAction::FocusPrevious,
        KeyCode::PageDown | KeyCode::Right => UiAction::NextPage,
        KeyCode::PageUp | KeyCode::Left => UiAction::PreviousPage,
        KeyCode::Backspace => UiAction::Edit(EditOp::Backspace),
        KeyCode::Char(ch) if !ctrl => UiAction::Edit(EditOp::Insert(ch)),
        _ => UiAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_and_navigation_keys() {
        assert_eq!(map_key(key(KeyCode::Char('a'))), UiAction::Edit(EditOp::Insert('a')));
        assert_eq!(map_key(key(KeyCode::Enter)), UiAction::Search);
        assert_eq!(map_key(key(KeyCode::Right)), UiAction::NextPage);
        assert_eq!(map_key(key(KeyCode::PageUp)), UiAction::PreviousPage);
        assert_eq!(map_key(key(KeyCode::Esc)), UiAction::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            UiAction::Quit
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            UiAction::Edit(EditOp::Clear)
        );
    }

    #[test]
    fn focus_cycles_only_when_filters_visible() {
        assert_eq!(Focus::Host.next(false), Focus::Host);
        assert_eq!(Focus::Host.next(true), Focus::Tags);
        assert_eq!(Focus::DateEnd.next(true), Focus::Host);
        assert_eq!(Focus::Host.previous(true), Focus::DateEnd);
        assert_eq!(Focus::DateStart.previous(false), Focus::Host);
    }

    #[test]
    fn edits_apply_at_end_of_text() {
        assert_eq!(EditOp::Insert('x').apply("ab"), "abx");
        assert_eq!(EditOp::Backspace.apply("é"), "");
        assert_eq!(EditOp::Backspace.apply(""), "");
        assert_eq!(EditOp::Clear.apply("abc"), "");
    }
}
