//! Simulated terminal for the site.
//!
//! A fixed command set (`help`, `ls`, `cd`, `whoami`, `date`, `clear`)
//! mapped onto a fixed set of site sections. The `Session` validates each
//! submitted line, echoes and records it, then dispatches it; Tab and the
//! arrow keys drive completion and history recall.

mod completion;
mod history;
mod interpreter;
mod registry;
mod surface;
mod tokenizer;

/// Tab completion outcome and the longest-common-prefix helper.
pub use completion::{Completion, common_prefix, complete};
/// Bounded command history.
pub use history::{History, MAX_HISTORY};
/// Session state machine and its collaborators.
pub use interpreter::{CommandError, Direction, Environment, Outcome, Session, SessionState};
/// Command table and `cd` target resolution.
pub use registry::{
    Builtin, NAV_ALIASES, Registry, Target, is_known_command, is_nav_target, normalize_target,
    resolve_target,
};
/// Output surface abstraction and the in-memory scrollback.
pub use surface::{LineStyle, OutputBlock, ScrollbackSurface, TerminalSurface};
/// Input validation.
pub use tokenizer::{CommandLine, MAX_COMMAND_LENGTH, ValidationError, validate};
