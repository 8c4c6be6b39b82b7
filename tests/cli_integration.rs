use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

use draughts_engine::board::{CaptureRule, Color};
use draughts_engine::cli::{CliError, CommandResult, Session};

fn run(session: &mut Session, line: &str) -> String {
    let mut out = Vec::new();
    session
        .execute_line(line, &mut out)
        .unwrap_or_else(|e| panic!("'{line}' failed: {e}"));
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn position_with_moves() {
    let mut session = Session::default();
    run(&mut session, "position startpos moves c3-d4 f6-g5");
    assert_eq!(session.game().ply(), 2);
    assert_eq!(session.game().position().side_to_move(), Color::White);

    run(&mut session, "undo");
    assert_eq!(session.game().ply(), 1);
    run(&mut session, "new");
    assert_eq!(session.game().ply(), 0);
}

#[test]
fn perft_and_divide() {
    let mut session = Session::default();
    let perft = run(&mut session, "perft 3");
    assert!(perft.starts_with("perft 3: 302 nodes"), "{perft}");

    let divide = run(&mut session, "divide 2");
    let lines: Vec<&str> = divide.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines.last(), Some(&"total: 49"));
}

#[test]
fn capture_rule_option_changes_moves() {
    let mut session = Session::default();
    run(&mut session, "position W:Wc3:Bd4");
    assert_eq!(run(&mut session, "moves"), "c3xe5\n");

    run(&mut session, "setoption name Capture Rule value optional");
    assert_eq!(session.game().capture_rule(), CaptureRule::Optional);
    assert_eq!(run(&mut session, "moves"), "c3xe5 c3-b4\n");

    assert_eq!(run(&mut session, "move c3xe5"), "result: White wins\n");
    let mut out = Vec::new();
    let err = session
        .execute_line("go depth 2", &mut out)
        .expect_err("game is over");
    assert!(matches!(err, CliError::GameOver(_)));
}

#[test]
fn go_plays_the_best_move() {
    let mut session = Session::default();
    let reply = run(&mut session, "go depth 3");
    assert!(reply.starts_with("bestmove "), "{reply}");
    assert_eq!(session.game().ply(), 1);
}

#[test]
fn selfplay_reports_each_ply() {
    let mut session = Session::default();
    run(&mut session, "setoption name Move Time value 20");
    assert_eq!(session.options().movetime_ms, 20);

    let log = run(&mut session, "selfplay 4");
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 5, "{log}");
    assert!(lines[0].contains("White"));
    assert!(lines[1].contains("Black"));
    assert_eq!(lines[4], "no result after 4 plies");
}

#[test]
fn show_eval_and_options() {
    let mut session = Session::default();
    let board = run(&mut session, "show");
    assert!(board.contains("White to move"));
    assert!(run(&mut session, "eval").contains("total"));
    assert_eq!(run(&mut session, "options").lines().count(), 3);
}

#[test]
fn errors_are_reported() {
    let mut session = Session::default();
    let mut out = Vec::new();
    assert!(matches!(
        session.execute_line("position W:Wz9", &mut out),
        Err(CliError::InvalidPosition(_))
    ));
    assert!(matches!(
        session.execute_line("position", &mut out),
        Err(CliError::MissingParts)
    ));
    assert!(matches!(
        session.execute_line("setoption name Threads value 4", &mut out),
        Err(CliError::InvalidOption(_))
    ));
    assert_eq!(
        session.execute_line("quit", &mut out).expect("quit"),
        CommandResult::Quit
    );
}

#[test]
fn binary_smoke_test_returns_legal_move() {
    let exe = env!("CARGO_BIN_EXE_draughts_engine");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn engine binary");

    let mut stdin = child.stdin.take().expect("stdin");
    let stdout = child.stdout.take().expect("stdout");
    stdin
        .write_all(b"position startpos moves c3-d4\ngo depth 3\nquit\n")
        .expect("write commands");
    drop(stdin);

    let bestmove = BufReader::new(stdout)
        .lines()
        .map_while(Result::ok)
        .find(|line| line.starts_with("bestmove "))
        .expect("engine printed a bestmove line");
    let status = child.wait().expect("engine exits");
    assert!(status.success());

    let text = bestmove.trim_start_matches("bestmove ");
    let mut game = draughts_engine::board::Game::default();
    let c3d4 = game
        .position()
        .parse_move("c3-d4", CaptureRule::Forced)
        .expect("legal opening");
    game.apply_move(c3d4);
    assert!(game
        .position()
        .parse_move(text, CaptureRule::Forced)
        .is_ok());
}
