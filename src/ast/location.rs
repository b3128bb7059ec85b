use std::{fmt, panic};

/// Place in caller code where a query clause was declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: String,
    pub line: u32,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self { file: file.into(), line }
    }

    /// Location of the code calling the (`#[track_caller]`) function this is used in.
    #[track_caller]
    pub fn caller() -> Self {
        let caller = panic::Location::caller();
        Self::new(caller.file(), caller.line())
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("nofile", 0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
