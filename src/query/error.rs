use super::grammar::CommandKind;
use thiserror::Error;

/// A command whose keyword was recognized but whose shape was not.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Proper format is:\n{expected}")]
pub struct FormatErr {
    pub kind: CommandKind,
    pub expected: &'static str,
}

impl FormatErr {
    pub fn new(kind: CommandKind) -> Self {
        Self {
            kind,
            expected: kind.expected_format(),
        }
    }
}

#[derive(Error, Debug)]
pub enum InputErr {
    #[error("Error reading the input. Try again.")]
    Empty,
    #[error("Failed to read line: {0}")]
    Io(#[from] std::io::Error),
}
