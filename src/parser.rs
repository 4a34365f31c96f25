//! Text front-end: turns mission files into [`Mission`] values.
//!
//! A mission file is line oriented. The first non-blank line declares the
//! grid's upper-right corner (`"5 3"`). It is followed by pairs of lines: a
//! robot position (`"1 1 E"`, optionally suffixed with `LOST`) and that robot's
//! instructions (`"RFRFRFRF"`). Blank lines and surrounding whitespace are
//! ignored.

use crate::error::ParseError;
use crate::grid::Grid;
use crate::interpreter::{Mission, RobotProgram};
use crate::rover::{Instruction, Orientation, RobotPosition};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

const LOST_MARKER: &str = "LOST";

/// Optional input limits.
///
/// Both default to `None`, which accepts anything that fits in the target type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Largest accepted grid bound or robot coordinate.
    pub max_coordinate: Option<u32>,
    /// Longest accepted instruction line.
    pub max_instructions: Option<usize>,
}

impl ParseConfig {
    fn check_coordinate(&self, value: u32) -> Result<(), ParseError> {
        match self.max_coordinate {
            Some(max) if value > max => Err(ParseError::CoordinateLimitExceeded { value, max }),
            _ => Ok(()),
        }
    }

    fn check_instructions(&self, len: usize) -> Result<(), ParseError> {
        match self.max_instructions {
            Some(max) if len > max => Err(ParseError::InstructionLimitExceeded { len, max }),
            _ => Ok(()),
        }
    }
}

impl TryFrom<char> for Orientation {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(Self::North),
            'E' => Ok(Self::East),
            'S' => Ok(Self::South),
            'W' => Ok(Self::West),
            other => Err(ParseError::InvalidOrientation(other.to_string())),
        }
    }
}

impl FromStr for Orientation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(ParseError::InvalidOrientation(s.to_string())),
        }
    }
}

impl TryFrom<char> for Instruction {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'L' => Ok(Self::TurnLeft),
            'R' => Ok(Self::TurnRight),
            'F' => Ok(Self::MoveForward),
            other => Err(ParseError::InvalidInstruction(other)),
        }
    }
}

/// Parses `"<max_x> <max_y>"`.
impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let [x, y] = fields[..] else {
            return Err(ParseError::WorldFieldCount(fields.len()));
        };
        let bound = |field: &str| {
            field
                .parse::<u32>()
                .map_err(|_| ParseError::InvalidWorldBound(field.to_string()))
        };
        Ok(Grid::new(bound(x)?, bound(y)?))
    }
}

/// Parses `"<x> <y> <O>"` or `"<x> <y> <O> LOST"`.
impl FromStr for RobotPosition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let (x, y, orientation, marker) = match fields[..] {
            [x, y, o] => (x, y, o, None),
            [x, y, o, m] => (x, y, o, Some(m)),
            _ => return Err(ParseError::PositionFieldCount(fields.len())),
        };
        let coordinate = |field: &str| {
            field
                .parse::<u32>()
                .map_err(|_| ParseError::InvalidCoordinate(field.to_string()))
        };

        let position = RobotPosition::new(coordinate(x)?, coordinate(y)?, orientation.parse()?);
        match marker {
            None => Ok(position),
            Some(LOST_MARKER) => Ok(position.lost()),
            Some(other) => Err(ParseError::InvalidLostMarker(other.to_string())),
        }
    }
}

/// Parses an instruction line, one instruction per character.
pub fn parse_instructions(line: &str) -> Result<Vec<Instruction>, ParseError> {
    line.chars().map(Instruction::try_from).collect()
}

/// Parses a whole mission file.
///
/// Errors are tagged with the 1-based line number they occurred on, counting
/// blank lines.
pub fn parse_mission(input: &str, config: &ParseConfig) -> Result<Mission, ParseError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (grid_line, text) = lines.next().ok_or(ParseError::EmptyInput)?;
    let grid = parse_grid_line(text, config).map_err(|e| e.at_line(grid_line))?;

    let mut robots = Vec::new();
    while let Some((position_line, text)) = lines.next() {
        let start = parse_position_line(text, config).map_err(|e| e.at_line(position_line))?;

        let Some((instruction_line, text)) = lines.next() else {
            return Err(ParseError::MissingInstructions.at_line(position_line));
        };
        config
            .check_instructions(text.chars().count())
            .map_err(|e| e.at_line(instruction_line))?;
        let instructions = parse_instructions(text).map_err(|e| e.at_line(instruction_line))?;

        robots.push(RobotProgram::new(start, instructions));
    }

    debug!(grid = %grid, robots = robots.len(), "parsed mission");
    Ok(Mission::new(grid, robots))
}

fn parse_grid_line(text: &str, config: &ParseConfig) -> Result<Grid, ParseError> {
    let grid: Grid = text.parse()?;
    config.check_coordinate(grid.max_x())?;
    config.check_coordinate(grid.max_y())?;
    Ok(grid)
}

fn parse_position_line(text: &str, config: &ParseConfig) -> Result<RobotPosition, ParseError> {
    let position: RobotPosition = text.parse()?;
    config.check_coordinate(position.x())?;
    config.check_coordinate(position.y())?;
    Ok(position)
}
