//! Headless script runner.

use noughts::script::{parse_move, run_moves, write_steps};
use noughts_core::{GameEngine, MarkResult, Rejection};

fn run(moves: &[&str]) -> Vec<noughts::ScriptStep> {
    let moves: Vec<_> = moves.iter().map(|m| parse_move(m).unwrap()).collect();
    let mut engine = GameEngine::new();
    engine.start_round("Ann", "Bo");
    run_moves(&mut engine, &moves)
}

#[test]
fn test_scripted_win_text() {
    let steps = run(&["0,0", "1,1", "0,1", "2,2", "0,2"]);
    let mut out = Vec::new();
    write_steps(&mut out, &steps, false).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "0,0: Bo (O) to move",
            "1,1: Ann (X) to move",
            "0,1: Bo (O) to move",
            "2,2: Ann (X) to move",
            "0,2: [X] Ann wins on (0, 0) (0, 1) (0, 2)",
        ]
    );
}

#[test]
fn test_scripted_draw() {
    let steps = run(&["0,0", "0,1", "0,2", "1,1", "1,0", "1,2", "2,1", "2,0", "2,2"]);
    assert_eq!(steps.last().unwrap().result, MarkResult::Draw);
    assert_eq!(steps.last().unwrap().message, "draw");
}

#[test]
fn test_moves_after_win_rejected() {
    let steps = run(&["0,0", "1,1", "0,1", "2,2", "0,2", "2,0"]);
    assert_eq!(
        steps.last().unwrap().result,
        MarkResult::Rejected(Rejection::RoundOver)
    );
    assert_eq!(steps.last().unwrap().message, "rejected: the round is over");
}

#[test]
fn test_json_lines() {
    let steps = run(&["1,1", "7,0"]);
    let mut out = Vec::new();
    write_steps(&mut out, &steps, true).unwrap();

    let text = String::from_utf8(out).unwrap();
    let values: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(values[0]["row"], 1);
    assert_eq!(values[0]["result"], serde_json::json!({ "Continue": "O" }));
    assert_eq!(
        values[1]["result"],
        serde_json::json!({ "Rejected": { "OutOfBounds": { "row": 7, "col": 0 } } })
    );
}
