//! Conversation messages and scammer-text aggregation.
//!
//! The conversation log is owned by the session layer; extraction only reads
//! it. Only scammer-authored turns feed the analysis text.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IntelError, IntelResult};

// ── Sender ───────────────────────────────────────────────────────────────

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The suspected scammer.
    Scammer,
    /// The honeypot persona.
    Agent,
    /// Any other tag (operator notes, system turns, unknown senders).
    #[serde(other)]
    Other,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scammer => write!(f, "scammer"),
            Self::Agent => write!(f, "agent"),
            Self::Other => write!(f, "other"),
        }
    }
}

// ── ConversationMessage ─────────────────────────────────────────────────

/// One turn of the conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub sender: Sender,
    #[serde(default)]
    pub text: String,
}

impl ConversationMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
        }
    }

    pub fn scammer(text: impl Into<String>) -> Self {
        Self::new(Sender::Scammer, text)
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Sender::Agent, text)
    }

    pub fn is_scammer(&self) -> bool {
        self.sender == Sender::Scammer
    }
}

// ── Aggregation ─────────────────────────────────────────────────────────

/// Build the analysis text: scammer turns in order, joined by single spaces,
/// then a space and `latest` (always included, whoever sent it).
///
/// With `window = Some(n)` only the last `n` history messages are considered.
pub fn aggregate_text(history: &[ConversationMessage], latest: &str, window: Option<usize>) -> String {
    let start = window.map_or(0, |n| history.len().saturating_sub(n));
    let mut text = history[start..]
        .iter()
        .filter(|m| m.is_scammer())
        .map(|m| m.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    text.push(' ');
    text.push_str(latest);
    text
}

/// Keep at most the last `max_bytes` bytes of `text`, never splitting a char.
pub fn truncate_tail(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut start = text.len() - max_bytes;
    while !text.is_char_boundary(start) {
        start += 1;
    }
    &text[start..]
}

/// Load a conversation log (JSON array of messages). `-` reads stdin.
pub fn load_history(path: &Path) -> IntelResult<Vec<ConversationMessage>> {
    let origin = path.display().to_string();
    let content = if origin == "-" {
        std::io::read_to_string(std::io::stdin()).map_err(|e| IntelError::InputRead {
            path: origin.clone(),
            source: e,
        })?
    } else {
        std::fs::read_to_string(path).map_err(|e| IntelError::InputRead {
            path: origin.clone(),
            source: e,
        })?
    };
    parse_history(&content, &origin)
}

/// Parse a conversation log from JSON text.
pub fn parse_history(content: &str, origin: &str) -> IntelResult<Vec<ConversationMessage>> {
    serde_json::from_str(content).map_err(|e| IntelError::InputParse {
        path: origin.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ConversationMessage> {
        vec![
            ConversationMessage::scammer("Your account is blocked."),
            ConversationMessage::agent("Oh no, why?"),
            ConversationMessage::scammer("Share the OTP."),
        ]
    }

    #[test]
    fn only_scammer_turns_aggregated() {
        let text = aggregate_text(&sample(), "Hurry up", None);
        assert_eq!(text, "Your account is blocked. Share the OTP. Hurry up");
    }

    #[test]
    fn latest_always_appended() {
        assert_eq!(aggregate_text(&[], "hello", None), " hello");
    }

    #[test]
    fn window_limits_history() {
        let text = aggregate_text(&sample(), "now", Some(2));
        assert_eq!(text, "Share the OTP. now");
        let text = aggregate_text(&sample(), "now", Some(10));
        assert!(text.starts_with("Your account"));
    }

    #[test]
    fn truncate_keeps_tail_on_char_boundary() {
        assert_eq!(truncate_tail("abcdef", 3), "def");
        assert_eq!(truncate_tail("abc", 10), "abc");
        // '₹' is three bytes; a cut inside it moves forward.
        assert_eq!(truncate_tail("a₹5", 3), "5");
        assert_eq!(truncate_tail("a₹5", 4), "₹5");
    }

    #[test]
    fn sender_deserialization() {
        let msgs = parse_history(
            r#"[{"sender":"scammer","text":"hi"},{"sender":"agent","text":"yo"},{"sender":"user"}]"#,
            "inline",
        )
        .unwrap();
        assert_eq!(msgs[0].sender, Sender::Scammer);
        assert_eq!(msgs[1].sender, Sender::Agent);
        assert_eq!(msgs[2].sender, Sender::Other);
        assert!(msgs[2].text.is_empty());
    }

    #[test]
    fn malformed_history_is_parse_error() {
        let err = parse_history("{not json", "broken.json").unwrap_err();
        assert!(matches!(err, IntelError::InputParse { .. }));
    }

    #[test]
    fn load_history_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("conv.json");
        std::fs::write(&path, r#"[{"sender":"scammer","text":"pay now"}]"#).unwrap();
        let msgs = load_history(&path).unwrap();
        assert_eq!(msgs, vec![ConversationMessage::scammer("pay now")]);
    }
}
