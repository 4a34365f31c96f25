//! State machine that drives robots across a [`Grid`].
//!
//! The entry points are [`apply_instruction`] for a single step,
//! [`apply_instructions`] for one robot's full program, and [`run_batch`] /
//! [`run_batch_with_grid`] for a whole [`Mission`]. The grid is moved through
//! every step and handed back, so scents left by one robot are seen by every
//! robot after it.

use crate::grid::Grid;
use crate::report::MissionReport;
use crate::rover::{Instruction, RobotPosition};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

/// One robot's starting position and the instructions it will execute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotProgram {
    pub start: RobotPosition,
    pub instructions: Vec<Instruction>,
}

impl RobotProgram {
    pub fn new(start: RobotPosition, instructions: Vec<Instruction>) -> Self {
        Self {
            start,
            instructions,
        }
    }
}

/// A grid and the ordered robots to run on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub grid: Grid,
    pub robots: Vec<RobotProgram>,
}

impl Mission {
    pub fn new(grid: Grid, robots: Vec<RobotProgram>) -> Self {
        Self { grid, robots }
    }

    /// Runs every robot in order and returns their final positions along with
    /// the grid's final scents.
    pub fn run(self) -> MissionReport {
        run_batch_with_grid(self.grid, &self.robots)
    }
}

/// Applies one instruction.
///
/// # Forward moves
///
/// The candidate cell is computed in signed space. If it is on the grid the
/// robot moves there. Otherwise the robot's *current* cell is checked against
/// the scents:
/// 1. Scented: the move is ignored and the robot stays where it is.
/// 2. Not scented: the robot is marked lost at its current cell and that cell
///    becomes a scent. The off-grid candidate is never recorded.
///
/// A lost robot ignores every instruction.
pub fn apply_instruction(
    position: RobotPosition,
    grid: Grid,
    instruction: Instruction,
) -> (RobotPosition, Grid) {
    if position.is_lost {
        return (position, grid);
    }

    match instruction {
        Instruction::TurnLeft => (
            position.with_orientation(position.orientation.turn_left()),
            grid,
        ),
        Instruction::TurnRight => (
            position.with_orientation(position.orientation.turn_right()),
            grid,
        ),
        Instruction::MoveForward => {
            let candidate = position.forward_candidate();
            if grid.contains(candidate) {
                return (position.with_coord(candidate.as_uvec2()), grid);
            }

            if grid.has_scent(position.coord) {
                trace!(
                    x = position.x(),
                    y = position.y(),
                    "scent suppressed move off the grid"
                );
                return (position, grid);
            }

            debug!(
                x = position.x(),
                y = position.y(),
                orientation = %position.orientation,
                "robot lost"
            );
            let grid = grid.with_scent(position.coord);
            (position.lost(), grid)
        }
    }
}

/// Folds [`apply_instruction`] over `instructions`, left to right.
pub fn apply_instructions(
    position: RobotPosition,
    grid: Grid,
    instructions: &[Instruction],
) -> (RobotPosition, Grid) {
    instructions
        .iter()
        .fold((position, grid), |(position, grid), &instruction| {
            apply_instruction(position, grid, instruction)
        })
}

/// Runs `robots` in order on `grid` and returns one final position per robot.
pub fn run_batch(grid: Grid, robots: &[RobotProgram]) -> Vec<RobotPosition> {
    run_batch_with_grid(grid, robots).positions
}

/// Like [`run_batch`], but also returns the grid with every scent the batch left.
pub fn run_batch_with_grid(grid: Grid, robots: &[RobotProgram]) -> MissionReport {
    let mut grid = grid;
    let mut positions = Vec::with_capacity(robots.len());

    for (index, robot) in robots.iter().enumerate() {
        let (final_position, next_grid) =
            apply_instructions(robot.start, grid, &robot.instructions);
        trace!(robot = index, result = %final_position, "robot finished");
        positions.push(final_position);
        grid = next_grid;
    }

    let report = MissionReport { positions, grid };
    info!(
        robots = report.positions.len(),
        lost = report.lost_count(),
        scents = report.grid.scents().len(),
        "batch complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rover::Orientation;
    use glam::UVec2;

    fn step(
        position: RobotPosition,
        grid: Grid,
        instruction: Instruction,
    ) -> (RobotPosition, Grid) {
        apply_instruction(position, grid, instruction)
    }

    #[test]
    fn turns_keep_coordinates_and_grid() {
        let grid = Grid::new(5, 3);
        let start = RobotPosition::new(2, 2, Orientation::North);

        let (left, g) = step(start, grid.clone(), Instruction::TurnLeft);
        assert_eq!(left, RobotPosition::new(2, 2, Orientation::West));
        assert_eq!(g, grid);

        let (right, _) = step(start, grid, Instruction::TurnRight);
        assert_eq!(right, RobotPosition::new(2, 2, Orientation::East));
    }

    #[test]
    fn forward_moves_within_bounds() {
        let grid = Grid::new(5, 3);
        let (moved, _) = step(
            RobotPosition::new(0, 1, Orientation::South),
            grid,
            Instruction::MoveForward,
        );
        assert_eq!(moved, RobotPosition::new(0, 0, Orientation::South));
    }

    #[test]
    fn falling_off_records_current_cell() {
        let grid = Grid::new(5, 3);
        let (lost, grid) = step(
            RobotPosition::new(0, 0, Orientation::South),
            grid,
            Instruction::MoveForward,
        );
        assert!(lost.is_lost);
        assert_eq!(lost.coord, UVec2::new(0, 0));
        assert_eq!(lost.orientation, Orientation::South);
        assert_eq!(grid.scents().len(), 1);
        assert!(grid.has_scent(UVec2::new(0, 0)));
    }

    #[test]
    fn scent_blocks_fatal_move() {
        let grid = Grid::new(5, 3).with_scent(UVec2::new(5, 3));
        let start = RobotPosition::new(5, 3, Orientation::East);
        let (after, after_grid) = step(start, grid.clone(), Instruction::MoveForward);
        assert_eq!(after, start);
        assert_eq!(after_grid, grid);
    }

    #[test]
    fn scent_does_not_block_moves_that_stay_on_grid() {
        let grid = Grid::new(5, 3).with_scent(UVec2::new(5, 3));
        let (after, _) = step(
            RobotPosition::new(5, 3, Orientation::West),
            grid,
            Instruction::MoveForward,
        );
        assert_eq!(after, RobotPosition::new(4, 3, Orientation::West));
    }

    #[test]
    fn lost_robot_ignores_everything() {
        let grid = Grid::new(1, 1);
        let lost = RobotPosition::new(1, 1, Orientation::North).lost();
        let (after, after_grid) = apply_instructions(
            lost,
            grid.clone(),
            &[
                Instruction::TurnLeft,
                Instruction::MoveForward,
                Instruction::TurnRight,
                Instruction::MoveForward,
            ],
        );
        assert_eq!(after, lost);
        assert_eq!(after_grid, grid);
    }

    #[test]
    fn later_robot_sees_earlier_scent() {
        let robots = vec![
            RobotProgram::new(
                RobotPosition::new(0, 0, Orientation::West),
                vec![Instruction::MoveForward],
            ),
            RobotProgram::new(
                RobotPosition::new(0, 0, Orientation::West),
                vec![Instruction::MoveForward],
            ),
        ];
        let report = run_batch_with_grid(Grid::new(2, 2), &robots);
        assert!(report.positions[0].is_lost);
        assert!(!report.positions[1].is_lost);
        assert_eq!(report.grid.scents().len(), 1);
    }

    #[test]
    fn empty_batch_returns_grid_untouched() {
        let grid = Grid::new(3, 3).with_scent(UVec2::new(0, 3));
        let report = run_batch_with_grid(grid.clone(), &[]);
        assert!(report.positions.is_empty());
        assert_eq!(report.grid, grid);
    }
}
