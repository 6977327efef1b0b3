//! Merge command parsing
//!
//! A comment triggers the plugin when one of its lines is exactly `/merge`
//! or `/merge cancel`, ignoring case and surrounding whitespace. The two
//! words of `/merge cancel` are separated by exactly one space; anything
//! else on the line disqualifies it.

/// Intent expressed by a comment body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeCommand {
    /// `/merge`: the label should be present
    MergeRequested,
    /// `/merge cancel`: the label should be absent
    MergeCancelled,
    /// No command line in the body
    NoCommand,
}

impl MergeCommand {
    /// Desired label presence, or `None` when there is nothing to do
    pub const fn wants_merge(self) -> Option<bool> {
        match self {
            Self::MergeRequested => Some(true),
            Self::MergeCancelled => Some(false),
            Self::NoCommand => None,
        }
    }
}

/// Command recognized on a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineCommand {
    Merge,
    Cancel,
}

fn parse_line(line: &str) -> Option<LineCommand> {
    let line = line.trim_matches(|c: char| c.is_ascii_whitespace());
    if line.eq_ignore_ascii_case("/merge") {
        Some(LineCommand::Merge)
    } else if line.eq_ignore_ascii_case("/merge cancel") {
        Some(LineCommand::Cancel)
    } else {
        None
    }
}

/// Classify a comment body
///
/// The whole body is searched for `/merge` before `/merge cancel` is
/// considered, so a body containing both requests the merge regardless of
/// line order.
pub fn parse_command(body: &str) -> MergeCommand {
    let has = |want: LineCommand| body.lines().any(|line| parse_line(line) == Some(want));

    if has(LineCommand::Merge) {
        MergeCommand::MergeRequested
    } else if has(LineCommand::Cancel) {
        MergeCommand::MergeCancelled
    } else {
        MergeCommand::NoCommand
    }
}
