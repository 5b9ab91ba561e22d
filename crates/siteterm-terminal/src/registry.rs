//! The closed command set and the `cd` navigation targets.

use siteterm_types::config::SiteConfig;
use siteterm_types::page::Page;

/// A built-in terminal command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Help,
    Ls,
    Cd,
    Whoami,
    Date,
    Clear,
}

impl Builtin {
    /// All commands, in help and completion order.
    pub const ALL: [Builtin; 6] = [
        Builtin::Help,
        Builtin::Ls,
        Builtin::Cd,
        Builtin::Whoami,
        Builtin::Date,
        Builtin::Clear,
    ];

    /// The command name (what the user types).
    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Ls => "ls",
            Self::Cd => "cd",
            Self::Whoami => "whoami",
            Self::Date => "date",
            Self::Clear => "clear",
        }
    }

    /// Usage string shown in `help`.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Cd => "cd <dir>",
            other => other.name(),
        }
    }

    /// One-line description for `help`.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Help => "Show command list",
            Self::Ls => "List site directories",
            Self::Cd => "Navigate to page (home/about/projects/certs/contact)",
            Self::Whoami => "Show current user",
            Self::Date => "Show local date and time",
            Self::Clear => "Clear terminal output",
        }
    }

    /// Look up an already lower-cased command name.
    pub fn from_name(name: &str) -> Option<Builtin> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }
}

/// Tokens that `cd` treats as "go home".
pub const NAV_ALIASES: [&str; 3] = ["~", "/", ".."];

/// Where a `cd` argument leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Empty argument or one of [`NAV_ALIASES`].
    Home,
    /// A named section.
    Page(Page),
    /// Nothing we know about.
    Unknown,
}

impl Target {
    /// The section this target lands on, if any.
    pub fn page(self) -> Option<Page> {
        match self {
            Self::Home => Some(Page::Home),
            Self::Page(p) => Some(p),
            Self::Unknown => None,
        }
    }
}

/// Whether `name` is a built-in command.
pub fn is_known_command(name: &str) -> bool {
    Builtin::from_name(name).is_some()
}

/// Whether `name` names a section once normalized.
pub fn is_nav_target(name: &str) -> bool {
    Page::from_name(&normalize_target(name)).is_some()
}

/// Normalize a `cd` argument.
///
/// Trims, lower-cases, strips a single leading `./` or `/`, then strips
/// trailing slashes. Repeated leading slashes are left alone, so `//about`
/// does not reach `about`.
pub fn normalize_target(raw: &str) -> String {
    let lower = raw.trim().to_ascii_lowercase();
    let stripped = lower
        .strip_prefix("./")
        .or_else(|| lower.strip_prefix('/'))
        .unwrap_or(lower.as_str());
    stripped.trim_end_matches('/').to_string()
}

/// Resolve a raw `cd` argument.
pub fn resolve_target(raw: &str) -> Target {
    let normalized = normalize_target(raw);
    if normalized.is_empty() || NAV_ALIASES.contains(&normalized.as_str()) {
        return Target::Home;
    }
    Page::from_name(&normalized).map_or(Target::Unknown, Target::Page)
}

/// Command and navigation lookup, with destinations taken from config.
#[derive(Debug, Clone)]
pub struct Registry {
    destinations: [String; 5],
}

impl Registry {
    /// Registry with the built-in destinations.
    pub fn new() -> Self {
        Self::from_config(&SiteConfig::default())
    }

    /// Registry with destinations from a site configuration.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            destinations: Page::ALL.map(|p| config.destination(p).to_string()),
        }
    }

    /// Destination identifier for a section.
    pub fn destination_of(&self, page: Page) -> &str {
        let idx = Page::ALL.iter().position(|p| *p == page).unwrap_or(0);
        &self.destinations[idx]
    }

    /// Section a configured destination belongs to.
    pub fn page_of(&self, destination: &str) -> Option<Page> {
        Page::ALL
            .into_iter()
            .zip(&self.destinations)
            .find(|(_, d)| d.as_str() == destination)
            .map(|(page, _)| page)
    }

    /// Fixed output of `help`.
    pub fn help_lines(&self) -> Vec<String> {
        let mut lines = vec!["Available commands:".to_string()];
        lines.extend(
            Builtin::ALL
                .iter()
                .map(|b| format!("  {:<15}{}", b.usage(), b.summary())),
        );
        lines.push("Tips: Use TAB for autocomplete and arrows for command history.".to_string());
        lines
    }

    /// Fixed output of `ls`.
    pub fn ls_lines(&self) -> Vec<String> {
        let listing: Vec<String> = Page::ALL.iter().map(|p| format!("{p}/")).collect();
        vec![listing.join("  "), "Use: cd <dir>".to_string()]
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
