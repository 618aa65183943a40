//! Round scenarios played through the public engine API.

use noughts_core::{
    Board, Cell, Coord, GameEngine, Line, Mark, MarkResult, Outcome, Rejection, RoundState,
};

fn at(row: usize, col: usize) -> Coord {
    Coord::new(row, col).expect("coordinate on the board")
}

fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) -> Vec<MarkResult> {
    moves
        .iter()
        .map(|&(row, col)| engine.attempt_mark(row, col))
        .collect()
}

/// Picks `count` cells off `line` for the losing side, never letting them
/// form a line of their own.
fn fillers(line: &Line, count: usize) -> Vec<Coord> {
    let mut chosen: Vec<Coord> = Vec::new();
    for coord in Coord::ALL {
        if chosen.len() == count {
            break;
        }
        if line.contains(coord) {
            continue;
        }
        chosen.push(coord);
        let completes = Line::all().any(|l| l.coords().iter().all(|c| chosen.contains(c)));
        if completes {
            chosen.pop();
        }
    }
    assert_eq!(chosen.len(), count, "not enough filler cells");
    chosen
}

#[test]
fn test_ann_and_bo_top_row() {
    let mut engine = GameEngine::new();
    engine.start_round("Ann", "Bo");

    let results = play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    assert_eq!(
        results,
        vec![
            MarkResult::Continue(Mark::O),
            MarkResult::Continue(Mark::X),
            MarkResult::Continue(Mark::O),
            MarkResult::Continue(Mark::X),
            MarkResult::Win {
                mark: Mark::X,
                cells: [at(0, 0), at(0, 1), at(0, 2)],
            },
        ]
    );
    assert!(engine.player(Mark::X).has_won());
    assert_eq!(engine.player(Mark::X).name(), "Ann");
}

#[test]
fn test_full_board_draw() {
    // X O X
    // X O O
    // O X X
    let mut engine = GameEngine::new();
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ];
    let results = play(&mut engine, &moves);

    let (last, rest) = results.split_last().unwrap();
    assert_eq!(*last, MarkResult::Draw);
    assert!(rest.iter().all(|r| matches!(r, MarkResult::Continue(_))));
    assert_eq!(engine.state(), &RoundState::Over(Outcome::Draw));
    assert!(!engine.player(Mark::X).has_won());
    assert!(!engine.player(Mark::O).has_won());
    assert_eq!(
        engine.board().row(2),
        Some([
            Cell::Marked(Mark::O),
            Cell::Marked(Mark::X),
            Cell::Marked(Mark::X)
        ])
    );
}

#[test]
fn test_winning_ninth_mark_is_win_not_draw() {
    // X O X
    // X O O
    // X X O  <- the last mark at (2, 0) fills the board and completes column 0
    let mut engine = GameEngine::new();
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 2),
        (2, 0),
    ];
    let results = play(&mut engine, &moves);

    assert!(engine.board().is_full());
    assert_eq!(
        results.last(),
        Some(&MarkResult::Win {
            mark: Mark::X,
            cells: [at(0, 0), at(1, 0), at(2, 0)],
        })
    );
}

#[test]
fn test_every_line_wins_for_x() {
    for line in Line::all() {
        let mut engine = GameEngine::new();
        let others = fillers(&line, 2);
        let [a, b, c] = line.coords();

        for (x, o) in [(a, others[0]), (b, others[1])] {
            assert!(matches!(engine.attempt_mark(x.row(), x.col()), MarkResult::Continue(Mark::O)));
            assert!(matches!(engine.attempt_mark(o.row(), o.col()), MarkResult::Continue(Mark::X)));
        }

        assert_eq!(
            engine.attempt_mark(c.row(), c.col()),
            MarkResult::Win {
                mark: Mark::X,
                cells: line.coords(),
            },
            "line {:?}",
            line.kind()
        );
    }
}

#[test]
fn test_every_line_wins_for_o() {
    for line in Line::all() {
        let mut engine = GameEngine::new();
        let others = fillers(&line, 3);

        for (x, o) in others.iter().zip(line.coords()) {
            engine.attempt_mark(x.row(), x.col());
            let result = engine.attempt_mark(o.row(), o.col());
            if o == line.coords()[2] {
                assert_eq!(
                    result,
                    MarkResult::Win {
                        mark: Mark::O,
                        cells: line.coords(),
                    },
                    "line {:?}",
                    line.kind()
                );
            } else {
                assert_eq!(result, MarkResult::Continue(Mark::X));
            }
        }
        assert!(engine.player(Mark::O).has_won());
    }
}

#[test]
fn test_occupied_cell_leaves_round_unchanged() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(1, 1), (0, 0)]);
    let before = engine.round().clone();

    assert_eq!(
        engine.attempt_mark(1, 1),
        MarkResult::Rejected(Rejection::Occupied { at: at(1, 1) })
    );
    assert_eq!(engine.round(), &before);
    assert_eq!(engine.current_player().mark(), Mark::X);
}

#[test]
fn test_marks_after_round_over_are_rejected() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    let before = engine.round().clone();

    for coord in Coord::ALL {
        assert_eq!(
            engine.attempt_mark(coord.row(), coord.col()),
            MarkResult::Rejected(Rejection::RoundOver)
        );
    }
    assert_eq!(engine.round(), &before);
}

#[test]
fn test_out_of_range_is_rejected() {
    let mut engine = GameEngine::new();
    for (row, col) in [(3, 0), (0, 3), (usize::MAX, 1)] {
        assert_eq!(
            engine.attempt_mark(row, col),
            MarkResult::Rejected(Rejection::OutOfBounds { row, col })
        );
    }
    assert_eq!(engine.board(), &Board::new());
}

#[test]
fn test_start_round_mid_game_discards_state() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (1, 1), (2, 2)]);

    engine.start_round("Cy", "Di");

    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.current_player().name(), "Cy");
    assert_eq!(engine.attempt_mark(0, 0), MarkResult::Continue(Mark::O));
}

#[test]
fn test_start_round_after_win_clears_winner() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert!(engine.player(Mark::X).has_won());

    engine.start_round("Ann", "Bo");

    assert!(!engine.player(Mark::X).has_won());
    assert_eq!(engine.winning_cells(), None);
    assert_eq!(engine.state(), &RoundState::InProgress);
}

#[test]
fn test_engines_are_independent() {
    let mut first = GameEngine::new();
    let second = GameEngine::new();

    first.attempt_mark(1, 1);

    assert_eq!(second.board(), &Board::new());
    assert_eq!(second.current_player().mark(), Mark::X);
}

#[test]
fn test_result_serializes() {
    let result = MarkResult::Win {
        mark: Mark::O,
        cells: [at(0, 2), at(1, 1), at(2, 0)],
    };
    let json = serde_json::to_value(result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "Win": { "mark": "O", "cells": [[0, 2], [1, 1], [2, 0]] } })
    );
}
