//! Session state and command dispatch.
//!
//! A `Session` is the terminal attached to one page. Every keystroke goes
//! through one of the synchronous entry points, which runs to completion
//! before the host delivers the next event.

use std::time::Duration;

use siteterm_platform::{ClockService, Navigator};
use siteterm_types::input::KeyEvent;
use siteterm_types::page::Page;

use crate::completion::{Completion, complete};
use crate::history::History;
use crate::registry::{Builtin, Registry, Target, resolve_target};
use crate::surface::{LineStyle, TerminalSurface};
use crate::tokenizer::{CommandLine, MAX_COMMAND_LENGTH, ValidationError, validate};

/// Output line for `whoami`.
const WHOAMI: &str = "root (Administrator Access)";

/// Format used by `date`.
const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Collaborators every entry point writes through.
pub struct Environment<'a> {
    /// Output region and input line.
    pub surface: &'a mut dyn TerminalSurface,
    /// Source of the local time for `date`.
    pub clock: &'a dyn ClockService,
    /// Page transition effector.
    pub navigator: &'a mut dyn Navigator,
}

/// A command that was understood but could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("bash: {0}: command not found. Type 'help'.")]
    UnknownCommand(String),

    #[error("cd: {0}: No such directory")]
    UnknownDirectory(String),
}

/// Result of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line: nothing echoed, nothing recorded.
    Empty,
    /// Refused by the validator.
    Rejected(ValidationError),
    /// Dispatched but failed.
    Failed(CommandError),
    /// A builtin ran and produced its output.
    Ran(Builtin),
    /// A page transition was scheduled.
    Navigating(Page),
}

/// History browsing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Older,
    Newer,
}

/// Dispatcher state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Executing,
}

/// The terminal attached to one page load.
#[derive(Debug)]
pub struct Session {
    registry: Registry,
    history: History,
    pending: String,
    caret: usize,
    current_page: Page,
    navigation_delay: Duration,
    state: SessionState,
}

impl Session {
    /// Attach a terminal to `current_page`.
    pub fn new(registry: Registry, current_page: Page, navigation_delay: Duration) -> Self {
        log::debug!("Terminal attached on /{current_page}");
        Self {
            registry,
            history: History::new(),
            pending: String::new(),
            caret: 0,
            current_page,
            navigation_delay,
            state: SessionState::Idle,
        }
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Caret position as a char index into the pending input.
    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    // -- Entry points --

    /// Route one key press.
    ///
    /// `ToggleTheme` and `Quit` belong to the host and are ignored here.
    pub fn handle_key(&mut self, key: KeyEvent, env: &mut Environment<'_>) -> Option<Outcome> {
        match key {
            KeyEvent::Enter => return Some(self.submit(env)),
            KeyEvent::Tab => self.handle_tab(env),
            KeyEvent::ArrowUp => self.handle_arrow(Direction::Older, env),
            KeyEvent::ArrowDown => self.handle_arrow(Direction::Newer, env),
            KeyEvent::ArrowLeft => self.move_caret(self.caret.saturating_sub(1), env),
            KeyEvent::ArrowRight => self.move_caret(self.caret + 1, env),
            KeyEvent::Home => self.move_caret(0, env),
            KeyEvent::End => self.move_caret(usize::MAX, env),
            KeyEvent::Backspace => self.backspace(env),
            KeyEvent::Delete => self.delete(env),
            KeyEvent::Char(ch) => self.insert(ch, env),
            KeyEvent::ToggleTheme | KeyEvent::Quit => {},
        }
        None
    }

    /// Submit the pending input.
    pub fn submit(&mut self, env: &mut Environment<'_>) -> Outcome {
        let line = std::mem::take(&mut self.pending);
        self.handle_submit(&line, env)
    }

    /// Process one submitted line.
    ///
    /// The input always empties. Anything non-blank is echoed and recorded
    /// before validation, so rejected and unknown commands still land in
    /// history.
    pub fn handle_submit(&mut self, line: &str, env: &mut Environment<'_>) -> Outcome {
        self.set_pending(String::new(), 0, env);

        let text = line.trim();
        if text.is_empty() {
            return Outcome::Empty;
        }

        self.state = SessionState::Executing;
        env.surface.echo(text);
        self.history.record(text);

        let outcome = match validate(text) {
            Ok(Some(cmd)) => self.dispatch(&cmd, env),
            Ok(None) => Outcome::Empty,
            Err(e) => {
                log::debug!("Rejected input: {e:?}");
                env.surface.append(vec![e.to_string()], LineStyle::Error);
                Outcome::Rejected(e)
            },
        };
        self.state = SessionState::Idle;
        outcome
    }

    /// Autocomplete at the caret.
    pub fn handle_tab(&mut self, env: &mut Environment<'_>) {
        match complete(&self.pending, self.caret) {
            Completion::Unchanged => {},
            Completion::Replaced { line, caret } => self.set_pending(line, caret, env),
            Completion::Suggestions(candidates) => {
                env.surface.append(
                    vec![format!("Suggestions: {}", candidates.join("  "))],
                    LineStyle::Normal,
                );
            },
        }
    }

    /// Recall history into the input.
    pub fn handle_arrow(&mut self, direction: Direction, env: &mut Environment<'_>) {
        let recalled = match direction {
            Direction::Older => match self.history.recall_older() {
                Some(entry) => entry.to_string(),
                None => return,
            },
            Direction::Newer => self.history.recall_newer().to_string(),
        };
        let caret = recalled.chars().count();
        self.set_pending(recalled, caret, env);
    }

    // -- Dispatch --

    fn dispatch(&mut self, cmd: &CommandLine, env: &mut Environment<'_>) -> Outcome {
        let Some(builtin) = Builtin::from_name(&cmd.name) else {
            let err = CommandError::UnknownCommand(cmd.name.clone());
            env.surface.append(vec![err.to_string()], LineStyle::Error);
            return Outcome::Failed(err);
        };
        log::debug!("Dispatching {}", builtin.name());

        match builtin {
            Builtin::Help => env
                .surface
                .append(self.registry.help_lines(), LineStyle::Normal),
            Builtin::Ls => env
                .surface
                .append(self.registry.ls_lines(), LineStyle::Normal),
            Builtin::Whoami => env
                .surface
                .append(vec![WHOAMI.to_string()], LineStyle::Normal),
            Builtin::Date => match env.clock.now() {
                Ok(now) => env
                    .surface
                    .append(vec![now.format(DATE_FORMAT).to_string()], LineStyle::Normal),
                Err(e) => env
                    .surface
                    .append(vec![format!("date: {e}")], LineStyle::Error),
            },
            Builtin::Clear => env.surface.clear(),
            Builtin::Cd => return self.change_page(cmd.first_arg(), env),
        }
        Outcome::Ran(builtin)
    }

    fn change_page(&mut self, raw: &str, env: &mut Environment<'_>) -> Outcome {
        let page = match resolve_target(raw) {
            Target::Home => Page::Home,
            Target::Page(p) => p,
            Target::Unknown => {
                let err = CommandError::UnknownDirectory(raw.to_string());
                env.surface.append(vec![err.to_string()], LineStyle::Error);
                return Outcome::Failed(err);
            },
        };

        if page == self.current_page {
            env.surface
                .append(vec![format!("Already at /{page}")], LineStyle::Normal);
            return Outcome::Ran(Builtin::Cd);
        }

        env.surface
            .append(vec![format!("Navigating to /{page}...")], LineStyle::Normal);
        env.navigator.fade_out();
        env.navigator
            .schedule(self.registry.destination_of(page), self.navigation_delay);
        log::info!("Leaving /{} for /{page}", self.current_page);
        Outcome::Navigating(page)
    }

    // -- Line editing --

    fn set_pending(&mut self, text: String, caret: usize, env: &mut Environment<'_>) {
        self.caret = caret.min(text.chars().count());
        self.pending = text;
        env.surface.set_input(&self.pending, self.caret);
    }

    fn move_caret(&mut self, caret: usize, env: &mut Environment<'_>) {
        self.caret = caret.min(self.pending.chars().count());
        env.surface.set_input(&self.pending, self.caret);
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.pending
            .char_indices()
            .nth(char_idx)
            .map_or(self.pending.len(), |(i, _)| i)
    }

    fn insert(&mut self, ch: char, env: &mut Environment<'_>) {
        if self.pending.chars().count() >= MAX_COMMAND_LENGTH {
            return;
        }
        let at = self.byte_index(self.caret);
        self.pending.insert(at, ch);
        self.move_caret(self.caret + 1, env);
    }

    fn backspace(&mut self, env: &mut Environment<'_>) {
        if self.caret == 0 {
            return;
        }
        let at = self.byte_index(self.caret - 1);
        self.pending.remove(at);
        self.move_caret(self.caret - 1, env);
    }

    fn delete(&mut self, env: &mut Environment<'_>) {
        if self.caret >= self.pending.chars().count() {
            return;
        }
        let at = self.byte_index(self.caret);
        self.pending.remove(at);
        self.move_caret(self.caret, env);
    }
}
