//! Label planning - pure decision of which mutation, if any, to issue
//!
//! No I/O happens here. The current label state is passed in, making the
//! idempotence rules easy to unit test.

/// A single label mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelChange {
    /// Add the label
    Add(String),
    /// Remove the label
    Remove(String),
}

impl LabelChange {
    /// The label being changed
    pub fn label(&self) -> &str {
        match self {
            Self::Add(label) | Self::Remove(label) => label,
        }
    }
}

impl std::fmt::Display for LabelChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add(label) => write!(f, "add label '{label}'"),
            Self::Remove(label) => write!(f, "remove label '{label}'"),
        }
    }
}

/// Decide the mutation that makes label presence match `want`
///
/// Returns `None` when `has == want`, so repeating a command never repeats
/// a write.
pub fn plan_label_change(label: &str, has: bool, want: bool) -> Option<LabelChange> {
    match (has, want) {
        (true, false) => Some(LabelChange::Remove(label.to_string())),
        (false, true) => Some(LabelChange::Add(label.to_string())),
        _ => None,
    }
}
