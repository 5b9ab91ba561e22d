//! Tab completion for command names and `cd` targets.

use siteterm_types::page::Page;

use crate::registry::{Builtin, NAV_ALIASES};

/// What a Tab press should do to the pending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Leave the input alone.
    Unchanged,
    /// Replace the input; the caret goes to `caret` (end of line).
    Replaced { line: String, caret: usize },
    /// Ambiguous: show these candidates without touching the input.
    Suggestions(Vec<String>),
}

/// Propose a completion for `line` with the caret at char index `caret`.
///
/// Completion only happens when no whitespace follows the caret. Any text
/// right of the caret is replaced along with the partial token.
pub fn complete(line: &str, caret: usize) -> Completion {
    let split = line
        .char_indices()
        .nth(caret)
        .map_or(line.len(), |(i, _)| i);
    let (left, right) = line.split_at(split);
    if right.chars().any(char::is_whitespace) {
        return Completion::Unchanged;
    }

    if let Some((lead, partial)) = split_cd_argument(left) {
        let candidates = Page::ALL
            .iter()
            .map(|p| p.name())
            .chain(NAV_ALIASES)
            .collect::<Vec<_>>();
        return resolve(lead, partial, &candidates);
    }

    let partial = left.trim_start();
    if partial.chars().any(char::is_whitespace) {
        return Completion::Unchanged;
    }
    let lead = &left[..left.len() - partial.len()];
    let candidates = Builtin::ALL.map(Builtin::name);
    resolve(lead, partial, &candidates)
}

/// Split `"<ws>cd<ws+><partial>"` into the kept lead and the partial token.
fn split_cd_argument(left: &str) -> Option<(&str, &str)> {
    let after_ws = left.trim_start();
    let word = after_ws.get(..2)?;
    if !word.eq_ignore_ascii_case("cd") {
        return None;
    }
    let rest = &after_ws[2..];
    let partial = rest.trim_start();
    if partial.len() == rest.len() || partial.chars().any(char::is_whitespace) {
        return None;
    }
    Some(left.split_at(left.len() - partial.len()))
}

fn resolve(lead: &str, partial: &str, candidates: &[&str]) -> Completion {
    let partial = partial.to_lowercase();
    let matches: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|c| c.starts_with(&partial))
        .collect();

    match matches.as_slice() {
        [] => Completion::Unchanged,
        [only] => replaced(format!("{lead}{only} ")),
        _ => {
            let prefix = common_prefix(&matches);
            if prefix.len() > partial.len() {
                replaced(format!("{lead}{prefix}"))
            } else {
                Completion::Suggestions(matches.iter().map(|m| m.to_string()).collect())
            }
        },
    }
}

fn replaced(line: String) -> Completion {
    let caret = line.chars().count();
    Completion::Replaced { line, caret }
}

/// Longest string that is a literal prefix of every value.
///
/// Starts from the first value and shortens it from the right until it
/// prefixes each of the others.
pub fn common_prefix<'a>(values: &[&'a str]) -> &'a str {
    let Some((first, rest)) = values.split_first() else {
        return "";
    };
    let mut prefix: &str = first;
    for value in rest {
        while !value.starts_with(prefix) && !prefix.is_empty() {
            let cut = prefix.char_indices().last().map_or(0, |(i, _)| i);
            prefix = &prefix[..cut];
        }
    }
    prefix
}
