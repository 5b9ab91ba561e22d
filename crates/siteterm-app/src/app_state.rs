use std::time::{Duration, Instant};

use chrono::{SecondsFormat, Utc};
use siteterm_platform::{ClockService, DesktopPlatform, FilePreferenceStore, NavigationTimer};
use siteterm_skin::{RainEffect, Theme, ThemeToggle};
use siteterm_terminal::{
    Environment, LineStyle, Registry, ScrollbackSurface, Session, TerminalSurface,
};
use siteterm_types::config::SiteConfig;
use siteterm_types::input::KeyEvent;
use siteterm_types::page::Page;

use crate::input::InputResult;
use crate::render::RainCanvas;

/// Rows reserved for the rain band at the top of the screen.
pub const RAIN_ROWS: u16 = 6;

/// All mutable application state.
pub struct AppState {
    pub config: SiteConfig,
    pub registry: Registry,
    pub platform: DesktopPlatform,
    pub session: Session,
    pub surface: ScrollbackSurface,
    pub navigator: NavigationTimer,
    pub theme: ThemeToggle,
    pub prefs: FilePreferenceStore,
    pub rain: RainEffect,
    pub canvas: RainCanvas,
    pub clock_text: String,
    last_clock: Option<Instant>,
    last_rain: Option<Instant>,
}

impl AppState {
    /// Load the page the process was started on.
    pub fn new(config: SiteConfig, page: Page, width: u16) -> Self {
        let registry = Registry::from_config(&config);
        let prefs = FilePreferenceStore::new(&config.preferences_path);
        let theme = ThemeToggle::load(&prefs, config.prefers_light);
        let mut rain = RainEffect::new(width, RAIN_ROWS, seed());
        rain.set_enabled(!config.reduced_motion);
        let session = attach(&registry, &config, page);
        let surface = welcome_surface(&config, &registry, page);
        Self {
            config,
            registry,
            platform: DesktopPlatform::new(),
            session,
            surface,
            navigator: NavigationTimer::new(),
            theme,
            prefs,
            rain,
            canvas: RainCanvas::new(width, RAIN_ROWS),
            clock_text: String::new(),
            last_clock: None,
            last_rain: None,
        }
    }

    pub fn current_page(&self) -> Page {
        self.session.current_page()
    }

    /// Route one key press to the host or the terminal.
    pub fn handle_key(&mut self, key: KeyEvent) -> InputResult {
        match key {
            KeyEvent::Quit => return InputResult::Quit,
            KeyEvent::ToggleTheme => {
                let theme = self.theme.toggle(&mut self.prefs);
                log::info!("Theme switched to {}", theme.as_str());
            },
            _ => {
                let mut env = Environment {
                    surface: &mut self.surface,
                    clock: &self.platform,
                    navigator: &mut self.navigator,
                };
                if let Some(outcome) = self.session.handle_key(key, &mut env) {
                    log::debug!("Submission outcome: {outcome:?}");
                }
            },
        }
        InputResult::Continue
    }

    /// Run any timers that came due.
    pub fn tick(&mut self, now: Instant) {
        if let Some(destination) = self.navigator.poll(now) {
            self.load_page(&destination);
        }

        if due(self.last_clock, now, self.config.clock_interval_ms) {
            self.last_clock = Some(now);
            self.clock_text = match self.platform.now() {
                Ok(t) => t
                    .with_timezone(&Utc)
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
                Err(e) => {
                    log::warn!("Clock unavailable: {e}");
                    String::new()
                },
            };
        }

        if due(self.last_rain, now, self.config.rain_interval_ms) {
            self.last_rain = Some(now);
            if self.theme.theme() == Theme::Hacker {
                let cells = self.rain.tick();
                self.canvas.paint(&cells);
            }
        }
    }

    /// Adapt the rain to a new screen width.
    pub fn resize(&mut self, width: u16) {
        self.rain.resize(width, RAIN_ROWS);
        self.canvas = RainCanvas::new(width, RAIN_ROWS);
    }

    /// Full page transition: the old session is dropped, a new one attached.
    ///
    /// Configured destinations are matched first; anything else is
    /// identified by its file name.
    pub fn load_page(&mut self, destination: &str) {
        let page = self
            .registry
            .page_of(destination)
            .unwrap_or_else(|| Page::from_path(destination));
        log::info!("Loaded {destination} (/{page})");
        self.session = attach(&self.registry, &self.config, page);
        self.surface = welcome_surface(&self.config, &self.registry, page);
    }
}

fn attach(registry: &Registry, config: &SiteConfig, page: Page) -> Session {
    Session::new(
        registry.clone(),
        page,
        Duration::from_millis(config.navigation_delay_ms),
    )
}

fn welcome_surface(config: &SiteConfig, registry: &Registry, page: Page) -> ScrollbackSurface {
    let mut surface = ScrollbackSurface::new(config.max_output_lines);
    surface.append(
        vec![format!("[ /{page} ] {}", registry.destination_of(page))],
        LineStyle::Normal,
    );
    surface
}

fn due(last: Option<Instant>, now: Instant, interval_ms: u64) -> bool {
    last.is_none_or(|t| now.duration_since(t) >= Duration::from_millis(interval_ms))
}

fn seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}
