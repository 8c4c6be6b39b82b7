/// One line of host input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    New,
    /// `position startpos|<notation> [moves m1 m2 ...]`
    Position(Vec<String>),
    Moves,
    Move(String),
    Undo,
    Go(GoLimits),
    Perft(usize),
    Divide(usize),
    Eval,
    Show,
    Options,
    SetOption { name: String, value: Option<String> },
    SelfPlay(usize),
    Quit,
    Unknown(String),
}

/// Limits given to `go`; unset fields fall back to the engine options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoLimits {
    pub movetime_ms: Option<u64>,
    pub depth: Option<u32>,
    pub nodes: Option<u64>,
}

fn parse_go(parts: &[&str]) -> GoLimits {
    let mut limits = GoLimits::default();
    let mut i = 1;
    while i < parts.len() {
        let value = parts.get(i + 1);
        match parts[i] {
            "movetime" => {
                limits.movetime_ms = value.and_then(|v| v.parse().ok());
                i += 2;
            }
            "depth" => {
                limits.depth = value.and_then(|v| v.parse().ok());
                i += 2;
            }
            "nodes" => {
                limits.nodes = value.and_then(|v| v.parse().ok());
                i += 2;
            }
            _ => i += 1,
        }
    }
    limits
}

/// Split `setoption name <words...> [value <words...>]`.
fn parse_setoption(parts: &[&str]) -> (String, Option<String>) {
    let value_at = parts.iter().position(|p| *p == "value");
    let name_end = value_at.unwrap_or(parts.len());
    let name_start = if parts.get(1) == Some(&"name") { 2 } else { 1 };
    let name = parts
        .get(name_start..name_end)
        .map(|words| words.join(" "))
        .unwrap_or_default();
    let value = value_at
        .map(|at| parts[at + 1..].join(" "))
        .filter(|v| !v.is_empty());
    (name, value)
}

pub fn parse_command(line: &str) -> Option<CliCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *parts.first()?;

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();
    let count = |default: usize| {
        parts
            .get(1)
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(default)
    };

    let cmd = match first.to_ascii_lowercase().as_str() {
        "new" => CliCommand::New,
        "position" => CliCommand::Position(owned_parts()),
        "moves" => CliCommand::Moves,
        "move" => match parts.get(1) {
            Some(mv) => CliCommand::Move((*mv).to_string()),
            None => CliCommand::Unknown(trimmed.to_string()),
        },
        "undo" => CliCommand::Undo,
        "go" => CliCommand::Go(parse_go(&parts)),
        "perft" => CliCommand::Perft(count(1)),
        "divide" => CliCommand::Divide(count(1)),
        "eval" => CliCommand::Eval,
        "show" | "d" => CliCommand::Show,
        "options" => CliCommand::Options,
        "setoption" => {
            let (name, value) = parse_setoption(&parts);
            CliCommand::SetOption { name, value }
        }
        "selfplay" => CliCommand::SelfPlay(count(200)),
        "quit" | "exit" => CliCommand::Quit,
        _ => CliCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn go_limits() {
        let Some(CliCommand::Go(limits)) = parse_command("go movetime 250 depth 6") else {
            panic!("expected go");
        };
        assert_eq!(limits.movetime_ms, Some(250));
        assert_eq!(limits.depth, Some(6));
        assert_eq!(limits.nodes, None);
    }

    #[test]
    fn setoption_multi_word_name() {
        assert_eq!(
            parse_command("setoption name Capture Rule value optional"),
            Some(CliCommand::SetOption {
                name: "Capture Rule".to_string(),
                value: Some("optional".to_string()),
            })
        );
        assert_eq!(
            parse_command("setoption name Hash"),
            Some(CliCommand::SetOption {
                name: "Hash".to_string(),
                value: None,
            })
        );
    }

    #[test]
    fn counts_default_when_missing() {
        assert_eq!(parse_command("perft"), Some(CliCommand::Perft(1)));
        assert_eq!(parse_command("divide 3"), Some(CliCommand::Divide(3)));
        assert_eq!(parse_command("selfplay x"), Some(CliCommand::SelfPlay(200)));
    }

    #[test]
    fn move_requires_argument() {
        assert_eq!(
            parse_command("move c3-d4"),
            Some(CliCommand::Move("c3-d4".to_string()))
        );
        assert!(matches!(parse_command("move"), Some(CliCommand::Unknown(_))));
        assert!(matches!(parse_command("castle"), Some(CliCommand::Unknown(_))));
    }
}
