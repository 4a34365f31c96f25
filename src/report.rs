//! Rendering of batch results.

use crate::error::ParseError;
use crate::grid::Grid;
use crate::parser::{ParseConfig, parse_mission};
use crate::rover::RobotPosition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Final positions of every robot in a batch, plus the grid they left behind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionReport {
    /// One entry per robot, in input order.
    pub positions: Vec<RobotPosition>,

    /// The grid after the last robot, carrying every scent.
    pub grid: Grid,
}

impl MissionReport {
    pub fn lost_count(&self) -> usize {
        self.positions.iter().filter(|p| p.is_lost).count()
    }
}

/// One robot per line, no trailing newline.
impl fmt::Display for MissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, position) in self.positions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{position}")?;
        }
        Ok(())
    }
}

/// Parses `input` with default limits, runs the mission and renders the result.
pub fn process(input: &str) -> Result<String, ParseError> {
    let mission = parse_mission(input, &ParseConfig::default())?;
    Ok(mission.run().to_string())
}
