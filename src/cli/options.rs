use crate::board::CaptureRule;
use crate::tt::DEFAULT_TT_MB;

/// Side effect of an option change that the session has to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionAction {
    ReinitHash(usize),
    SetCaptureRule(CaptureRule),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    pub hash_mb: usize,
    pub capture_rule: CaptureRule,
    /// Thinking time for `go` and `selfplay` without an explicit limit
    pub movetime_ms: u64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            hash_mb: DEFAULT_TT_MB,
            capture_rule: CaptureRule::Forced,
            movetime_ms: 1000,
        }
    }
}

impl EngineOptions {
    /// One line per option, in `setoption` names.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!("option name Hash type spin default {} min 1 max 4096", self.hash_mb),
            format!(
                "option name Capture Rule type combo default {} var forced var optional",
                self.capture_rule
            ),
            format!(
                "option name Move Time type spin default {} min 1 max 3600000",
                self.movetime_ms
            ),
        ]
    }

    /// Apply `setoption name <name> value <value>`.
    ///
    /// Returns `Err` with a message when the name is unknown or the value
    /// does not parse.
    pub fn apply_setoption(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<Option<OptionAction>, String> {
        let normalized = name.trim().to_ascii_lowercase();
        let value = value.map(str::trim).unwrap_or_default();
        match normalized.as_str() {
            "hash" => {
                let mb = value
                    .parse::<usize>()
                    .map_err(|_| format!("invalid hash size '{value}'"))?
                    .max(1);
                if mb != self.hash_mb {
                    self.hash_mb = mb;
                    return Ok(Some(OptionAction::ReinitHash(mb)));
                }
            }
            "capture rule" | "capturerule" | "forced captures" => {
                let rule: CaptureRule = value.parse()?;
                self.capture_rule = rule;
                return Ok(Some(OptionAction::SetCaptureRule(rule)));
            }
            "move time" | "movetime" => {
                self.movetime_ms = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid move time '{value}'"))?
                    .max(1);
            }
            _ => return Err(format!("unknown option '{name}'")),
        }
        Ok(None)
    }
}
