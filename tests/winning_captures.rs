use std::sync::atomic::AtomicBool;

use serde::Deserialize;

use draughts_engine::board::{search, CaptureRule, Game, Position, SearchConfig, SearchState};
use draughts_engine::cli::format_move;

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    position: String,
    rule: String,
    best: String,
}

const PROBLEMS: &str = r#"{
    "problems": [
        { "position": "W:Wc3,g3:Bd4", "rule": "optional", "best": "c3xe5" },
        { "position": "W:Wa1:Bb2,b4", "rule": "optional", "best": "a1xc3xa5" },
        { "position": "W:WKh2:Bg3", "rule": "optional", "best": "h2xf4" },
        { "position": "W:Wc1,e1:Bd2,f4", "rule": "forced", "best": "c1xe3xg5" }
    ]
}"#;

#[test]
fn finds_game_ending_captures() {
    let set: ProblemSet = serde_json::from_str(PROBLEMS).expect("invalid problem set");

    for problem in &set.problems {
        let position: Position = problem.position.parse().expect("invalid position");
        let rule: CaptureRule = problem.rule.parse().expect("invalid capture rule");
        let mut game = Game::from_position(position, rule);
        let mut state = SearchState::new(1);
        let stop = AtomicBool::new(false);

        let result = search(&mut game, &mut state, SearchConfig::depth(4), &stop);
        let best = result.best_move.expect("search returned no move");

        assert_eq!(
            format_move(best),
            problem.best,
            "wrong move for {}",
            problem.position
        );
    }
}

#[cfg(feature = "serde")]
#[test]
fn core_types_round_trip_through_json() {
    use draughts_engine::board::{Color, Square};

    let position: Position = "W:Wa1:Bb2,b4".parse().expect("invalid position");
    let moves = position.generate_moves(CaptureRule::Optional);
    let chain = moves
        .iter()
        .copied()
        .find(|mv| mv.jump_len() == 2)
        .expect("double jump available");

    let json = serde_json::to_string(&chain).expect("serialize move");
    let back: draughts_engine::board::Move = serde_json::from_str(&json).expect("deserialize move");
    assert_eq!(back, chain);

    let square: Square = "c3".parse().expect("valid square");
    let json = serde_json::to_string(&square).expect("serialize square");
    assert_eq!(serde_json::from_str::<Square>(&json).expect("deserialize square"), square);

    let json = serde_json::to_string(&Color::Black).expect("serialize color");
    assert_eq!(json, "\"Black\"");
    assert_eq!(serde_json::from_str::<Color>(&json).expect("deserialize color"), Color::Black);

    let json = serde_json::to_string(&CaptureRule::Optional).expect("serialize rule");
    assert_eq!(
        serde_json::from_str::<CaptureRule>(&json).expect("deserialize rule"),
        CaptureRule::Optional
    );
}
