//! Error types for reading mission input.
//!
//! The simulation itself cannot fail; every error here is raised while turning
//! text into a [`Mission`](crate::Mission).

use thiserror::Error;

/// Errors that can occur while parsing mission text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Grid line does not have exactly two fields.
    #[error("world declaration needs 2 fields, found {0}")]
    WorldFieldCount(usize),

    /// Grid bound is not a non-negative integer.
    #[error("invalid world bound {0:?}")]
    InvalidWorldBound(String),

    /// Robot line does not have 3 or 4 fields.
    #[error("robot position needs 3 or 4 fields, found {0}")]
    PositionFieldCount(usize),

    /// Robot coordinate is not a non-negative integer.
    #[error("invalid robot coordinate {0:?}")]
    InvalidCoordinate(String),

    /// Heading is not one of `N`, `E`, `S`, `W`.
    #[error("invalid orientation {0:?}")]
    InvalidOrientation(String),

    /// Fourth robot field is something other than `LOST`.
    #[error("expected LOST marker, found {0:?}")]
    InvalidLostMarker(String),

    /// Instruction letter is not one of `L`, `R`, `F`.
    #[error("invalid instruction {0:?}")]
    InvalidInstruction(char),

    /// Input has no grid line.
    #[error("input is empty")]
    EmptyInput,

    /// Robot position is the last line of input.
    #[error("robot has no instruction line")]
    MissingInstructions,

    /// Coordinate is above the configured maximum.
    #[error("coordinate {value} exceeds limit {max}")]
    CoordinateLimitExceeded { value: u32, max: u32 },

    /// Instruction line is longer than the configured maximum.
    #[error("{len} instructions exceed limit {max}")]
    InstructionLimitExceeded { len: usize, max: usize },

    /// Wraps any of the above with the 1-based line it was found on.
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Attaches a line number.
    pub fn at_line(self, line: usize) -> Self {
        Self::AtLine {
            line,
            source: Box::new(self),
        }
    }

    /// The error without any line information.
    pub fn kind(&self) -> &ParseError {
        match self {
            Self::AtLine { source, .. } => source.kind(),
            other => other,
        }
    }
}
