//! Input validation and tokenization.

/// Longest accepted command line, in characters, after trimming.
pub const MAX_COMMAND_LENGTH: usize = 200;

/// Why a submitted line was refused before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Input too long. Keep commands below 200 characters.")]
    TooLong,

    #[error("Unsupported control characters detected in input.")]
    InvalidCharacters,
}

/// A validated, tokenized command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// The trimmed line as typed.
    pub text: String,
    /// First token, lower-cased.
    pub name: String,
    /// Remaining tokens, case preserved.
    pub args: Vec<String>,
}

impl CommandLine {
    /// First positional argument, or `""` when there is none.
    pub fn first_arg(&self) -> &str {
        self.args.first().map_or("", String::as_str)
    }
}

/// Validate and tokenize a raw line.
///
/// Returns `Ok(None)` for blank input. Length is checked before content,
/// and both before splitting.
pub fn validate(raw: &str) -> Result<Option<CommandLine>, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(None);
    }
    if text.chars().count() > MAX_COMMAND_LENGTH {
        return Err(ValidationError::TooLong);
    }
    if !text.chars().all(is_printable_ascii) {
        return Err(ValidationError::InvalidCharacters);
    }

    let mut tokens = text.split_ascii_whitespace();
    let name = tokens.next().unwrap_or_default().to_ascii_lowercase();
    let args = tokens.map(str::to_string).collect();
    Ok(Some(CommandLine {
        text: text.to_string(),
        name,
        args,
    }))
}

fn is_printable_ascii(ch: char) -> bool {
    (' '..='~').contains(&ch)
}
