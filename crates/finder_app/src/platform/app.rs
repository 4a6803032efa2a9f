use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use finder_core::{update, AppState, AppViewModel, Msg};
use finder_logging::finder_info;
use ratatui::DefaultTerminal;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::input::{map_key, Focus, UiAction};
use super::ui;

/// Input poll interval; engine results are drained at the same rate.
const TICK: Duration = Duration::from_millis(75);

pub fn run_app(config: AppConfig) -> Result<()> {
    let runner = EffectRunner::new(config.fetch).context("failed to start network engine")?;
    let mut app = App::new(runner);
    if let Some(host) = config.initial_host {
        app.dispatch(Msg::HostChanged(host));
        app.dispatch(Msg::SearchSubmitted);
    }

    let mut terminal = ratatui::try_init().context("failed to initialise terminal")?;
    let result = app.run(&mut terminal);
    ratatui::restore();
    finder_info!("Finder exiting");
    result
}

struct App {
    state: AppState,
    view: AppViewModel,
    focus: Focus,
    runner: EffectRunner,
    needs_redraw: bool,
    quit: bool,
}

impl App {
    fn new(runner: EffectRunner) -> Self {
        let state = AppState::new();
        let view = state.view();
        Self {
            state,
            view,
            focus: Focus::Host,
            runner,
            needs_redraw: true,
            quit: false,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.quit {
            if self.needs_redraw {
                terminal.draw(|frame| ui::render::draw(frame, &self.view, self.focus))?;
                self.needs_redraw = false;
            }

            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_action(map_key(key));
                    }
                    Event::Resize(..) => self.needs_redraw = true,
                    _ => {}
                }
            }

            for msg in self.runner.poll() {
                self.dispatch(msg);
            }
        }
        Ok(())
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::Quit => self.quit = true,
            UiAction::FocusNext => self.set_focus(self.focus.next(self.view.show_filters)),
            UiAction::FocusPrevious => {
                self.set_focus(self.focus.previous(self.view.show_filters))
            }
            UiAction::Search => self.dispatch(Msg::SearchSubmitted),
            UiAction::NextPage => self.dispatch(Msg::NextPageClicked),
            UiAction::PreviousPage => self.dispatch(Msg::PreviousPageClicked),
            UiAction::Edit(op) => {
                let text = op.apply(self.focus.text(&self.view));
                self.dispatch(self.focus.changed_msg(text));
            }
            UiAction::Ignore => {}
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        if focus != self.focus {
            self.focus = focus;
            self.needs_redraw = true;
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
            self.needs_redraw = true;
            if !self.view.show_filters {
                self.focus = Focus::Host;
            }
        }
        self.state = state;
        self.runner.enqueue(effects);
    }
}
