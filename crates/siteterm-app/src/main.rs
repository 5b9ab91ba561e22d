//! siteterm desktop entry point.
//!
//! Runs the site terminal full-screen: status line with clock and theme
//! button, rain band in the hacker theme, scrollback, and the prompt.
//! Ctrl-T or F2 toggles the theme, Esc or Ctrl-C quits.

mod app_state;
mod input;
mod render;

use std::fs::File;
use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute, terminal};
use siteterm_types::config::SiteConfig;
use siteterm_types::page::Page;

use app_state::AppState;
use input::{InputResult, map_key};

fn main() -> Result<()> {
    // Resolve config from CLI arg, SITETERM_CONFIG env var, or the default file.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SITETERM_CONFIG").ok())
        .map_or_else(|| PathBuf::from("siteterm.toml"), PathBuf::from);
    let config = SiteConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    // The screen belongs to the UI, so logs go to a file.
    let log_file = File::create(&config.log_file)
        .with_context(|| format!("creating {}", config.log_file.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let page = Page::from_path(&std::env::var("SITETERM_PAGE").unwrap_or_default());
    log::info!("Starting siteterm on /{page} ({})", config_path.display());

    let result = {
        let _screen = enter_screen()?;
        run(&mut stdout(), config, page)
    };
    if let Err(e) = &result {
        log::error!("siteterm stopped: {e:#}");
    }
    result
}

/// Undoes screen setup when dropped, on every exit path.
struct ScreenGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> ScreenGuard<F> {
    /// Run `setup`; `restore` runs on drop even if `setup` fails halfway.
    fn enter_with(setup: impl FnOnce() -> std::io::Result<()>, restore: F) -> std::io::Result<Self> {
        let guard = Self { restore };
        setup()?;
        Ok(guard)
    }
}

impl<F: FnMut()> Drop for ScreenGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Raw mode plus alternate screen.
fn enter_screen() -> std::io::Result<ScreenGuard<impl FnMut()>> {
    ScreenGuard::enter_with(
        || {
            enable_raw_mode()?;
            execute!(stdout(), EnterAlternateScreen)
        },
        || {
            if let Err(e) = disable_raw_mode() {
                log::warn!("Failed to leave raw mode: {e}");
            }
            if let Err(e) = execute!(stdout(), LeaveAlternateScreen, cursor::Show) {
                log::warn!("Failed to restore the screen: {e}");
            }
        },
    )
}

fn run(out: &mut Stdout, config: SiteConfig, page: Page) -> Result<()> {
    let (mut width, mut height) = terminal::size()?;
    let frame = Duration::from_millis(config.rain_interval_ms.max(1));
    let mut state = AppState::new(config, page, width);

    loop {
        state.tick(Instant::now());
        render::draw(out, &state, width, height)?;

        if !event::poll(frame)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                let Some(key) = map_key(&key) else {
                    continue;
                };
                if state.handle_key(key) == InputResult::Quit {
                    break;
                }
            },
            Event::Resize(w, h) => {
                width = w;
                height = h;
                state.resize(width);
            },
            _ => {},
        }
    }

    log::info!("Shutting down");
    Ok(())
}
