//! Robot state and the instructions it understands.

use crate::grid::Coord;
use glam::{I64Vec2, UVec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cardinal heading of a robot.
///
/// Headings form a cycle: turning right goes N → E → S → W → N, turning left
/// walks the same cycle backwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Heading after a 90 degree counter-clockwise turn.
    pub fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Heading after a 90 degree clockwise turn.
    pub fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit step for one forward move. North is `+y`, east is `+x`.
    pub fn step(self) -> I64Vec2 {
        match self {
            Self::North => I64Vec2::Y,
            Self::East => I64Vec2::X,
            Self::South => I64Vec2::NEG_Y,
            Self::West => I64Vec2::NEG_X,
        }
    }

    /// The single-letter form used in mission files.
    pub fn as_char(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Commands a robot can execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Rotate 90 degrees counter-clockwise in place (`L`).
    TurnLeft,
    /// Rotate 90 degrees clockwise in place (`R`).
    TurnRight,
    /// Advance one cell along the current heading (`F`).
    MoveForward,
}

impl Instruction {
    /// The single-letter form used in mission files.
    pub fn as_char(self) -> char {
        match self {
            Self::TurnLeft => 'L',
            Self::TurnRight => 'R',
            Self::MoveForward => 'F',
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Where a robot is, which way it faces, and whether it has fallen off the grid.
///
/// Positions are plain values: every instruction produces a new one. Once
/// `is_lost` is set the position is frozen at the last cell the robot occupied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RobotPosition {
    /// Current cell.
    pub coord: Coord,

    /// Current heading.
    pub orientation: Orientation,

    /// Set once the robot has stepped off the edge.
    pub is_lost: bool,
}

impl RobotPosition {
    /// Creates a robot that is still on the surface.
    pub fn new(x: u32, y: u32, orientation: Orientation) -> Self {
        Self {
            coord: UVec2::new(x, y),
            orientation,
            is_lost: false,
        }
    }

    /// Column of the current cell.
    pub fn x(&self) -> u32 {
        self.coord.x
    }

    /// Row of the current cell.
    pub fn y(&self) -> u32 {
        self.coord.y
    }

    /// The cell one step ahead, in signed space so it may fall below zero.
    pub fn forward_candidate(&self) -> I64Vec2 {
        self.coord.as_i64vec2() + self.orientation.step()
    }

    #[must_use]
    pub fn with_orientation(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    #[must_use]
    pub fn with_coord(self, coord: Coord) -> Self {
        Self { coord, ..self }
    }

    #[must_use]
    pub fn lost(self) -> Self {
        Self {
            is_lost: true,
            ..self
        }
    }
}

impl fmt::Display for RobotPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.coord.x, self.coord.y, self.orientation)?;
        if self.is_lost {
            write!(f, " LOST")?;
        }
        Ok(())
    }
}
