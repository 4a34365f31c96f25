// tests/mission_scenarios.rs
use glam::UVec2;
use martian_robots::{
    Grid, Instruction, Orientation, ParseConfig, RobotPosition, RobotProgram, apply_instructions,
    parse_instructions, parse_mission, process, run_batch, run_batch_with_grid,
};

fn program(x: u32, y: u32, o: Orientation, instructions: &str) -> RobotProgram {
    RobotProgram::new(
        RobotPosition::new(x, y, o),
        parse_instructions(instructions).unwrap(),
    )
}

fn sample_robots() -> Vec<RobotProgram> {
    vec![
        program(1, 1, Orientation::East, "RFRFRFRF"),
        program(3, 2, Orientation::North, "FRRFLLFFRRFLL"),
        program(0, 3, Orientation::West, "LLFFFLFLFL"),
    ]
}

#[test]
fn test_sample_batch() {
    let positions = run_batch(Grid::new(5, 3), &sample_robots());

    let rendered: Vec<String> = positions.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["1 1 E", "3 3 N LOST", "2 3 S"]);
}

#[test]
fn test_sample_text_round_trip() {
    let input = "
        5 3
        1 1 E
        RFRFRFRF

        3 2 N
        FRRFLLFFRRFLL

        0 3 W
        LLFFFLFLFL
    ";

    assert_eq!(process(input).unwrap(), "1 1 E\n3 3 N LOST\n2 3 S");
}

#[test]
fn test_third_robot_depends_on_second_scent() {
    // Without the scent from robot B, robot C walks off the north edge.
    let alone = run_batch(Grid::new(5, 3), &sample_robots()[2..]);
    assert_eq!(alone[0].to_string(), "3 3 N LOST");

    let report = run_batch_with_grid(Grid::new(5, 3), &sample_robots());
    assert_eq!(report.positions[2].to_string(), "2 3 S");
    assert_eq!(report.grid.scents().len(), 1);
    assert!(report.grid.has_scent(UVec2::new(3, 3)));
}

#[test]
fn test_robot_order_matters() {
    let mut robots = sample_robots();
    robots.swap(1, 2);

    let rendered: Vec<String> = run_batch(Grid::new(5, 3), &robots)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(rendered, ["1 1 E", "3 3 N LOST", "3 2 N"]);
}

#[test]
fn test_pre_lost_robot_passes_through() {
    let report = parse_mission("4 5\n50 2323 W LOST\nFFRFF\n", &ParseConfig::default())
        .unwrap()
        .run();
    assert_eq!(report.to_string(), "50 2323 W LOST");
    assert!(report.grid.scents().is_empty());
}

#[test]
fn test_off_grid_start_moves_back_on() {
    let positions = run_batch(
        Grid::new(5, 3),
        &[program(6, 3, Orientation::West, "F")],
    );
    assert_eq!(positions[0].to_string(), "5 3 W");
}

#[test]
fn test_off_grid_start_is_lost_where_it_stands() {
    let report = parse_mission("4 5\n50 2323 W\nF\n", &ParseConfig::default())
        .unwrap()
        .run();
    assert_eq!(report.to_string(), "50 2323 W LOST");
    assert_eq!(report.grid.scents().len(), 1);
    assert!(report.grid.has_scent(UVec2::new(50, 2323)));
}

#[test]
fn test_single_cell_grid() {
    let grid = Grid::new(0, 0);
    for o in Orientation::ALL {
        let (first, grid) = apply_instructions(
            RobotPosition::new(0, 0, o),
            grid.clone(),
            &[Instruction::MoveForward],
        );
        assert!(first.is_lost, "{o} should fall off a single cell");

        // The cell is now scented, so a second robot in any heading survives.
        let (second, _) = apply_instructions(
            RobotPosition::new(0, 0, o.turn_right()),
            grid,
            &[Instruction::MoveForward],
        );
        assert_eq!(second, RobotPosition::new(0, 0, o.turn_right()));
    }
}

#[test]
fn test_json_report_lists_scents() {
    let report = run_batch_with_grid(Grid::new(5, 3), &sample_robots());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["positions"].as_array().unwrap().len(), 3);
    assert_eq!(json["positions"][1]["is_lost"], true);
    assert_eq!(json["grid"]["scents"], serde_json::json!([[3, 3]]));
}
