//! # martian-robots
//!
//! Simulates robots exploring a bounded rectangular patch of Mars.
//!
//! Each robot is dropped onto a shared [`Grid`] and executes a string of
//! turn and move instructions. A robot that steps off the edge is lost and
//! leaves a *scent* on its last cell; later robots standing on a scented cell
//! refuse the same fatal move. Robots run strictly in order so that every
//! scent is visible to the robots after it.
//!
//! ```
//! let output = martian_robots::process("5 3\n3 2 N\nFRRFLLFFRRFLL\n").unwrap();
//! assert_eq!(output, "3 3 N LOST");
//! ```

pub mod error;
pub mod grid;
pub mod interpreter;
pub mod parser;
pub mod report;
pub mod rover;

pub use error::*;
pub use grid::*;
pub use interpreter::*;
pub use parser::*;
pub use report::*;
pub use rover::*;
