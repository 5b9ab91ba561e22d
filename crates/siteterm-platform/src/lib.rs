//! Platform services consumed by the terminal and its host.
//!
//! The terminal core only talks to these traits; the desktop host wires in
//! the `std`/`chrono` backed implementations.

mod navigation;
mod services;

pub use navigation::NavigationTimer;
pub use services::{
    ClockService, DesktopPlatform, FilePreferenceStore, MemoryPreferenceStore, Navigator,
    PreferenceStore,
};
