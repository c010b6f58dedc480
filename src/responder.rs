//! Victim-persona reply generation: staging, prompt context and offline fallback.
//!
//! The honeypot keeps a scammer talking by role-playing a confused but
//! cautious victim whose tone shifts with the turn count. A language-model
//! backend (not provided here) consumes [`system_prompt`] and
//! [`context_window`]; [`FallbackResponder`] answers from canned replies when
//! no backend is available.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::conversation::ConversationMessage;

/// Default number of history messages handed to a reply backend.
pub const DEFAULT_CONTEXT_TURNS: usize = 8;

// ── ConversationStage ────────────────────────────────────────────────────

/// Phase of the engagement, derived from the 1-based turn number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationStage {
    /// Turns 1-2: confusion, basic clarifying questions.
    Early,
    /// Turns 3-5: asks for verification and official contacts.
    Middle,
    /// Turn 6 onward: open skepticism, still leaves room to talk.
    Late,
}

impl ConversationStage {
    pub fn from_turn(turn: u32) -> Self {
        match turn {
            0..=2 => Self::Early,
            3..=5 => Self::Middle,
            _ => Self::Late,
        }
    }
}

impl std::fmt::Display for ConversationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Early => write!(f, "early"),
            Self::Middle => write!(f, "middle"),
            Self::Late => write!(f, "late"),
        }
    }
}

const PERSONA_PROMPT: &str = "\
You are playing a possible scam victim inside a honeypot. Keep the other side \
talking so they reveal payment details, phone numbers and links, while staying \
believable.

How to behave:
- Write like an ordinary person: casual wording, the odd typo
- Show real feelings such as confusion, worry and caution
- Ask questions that make the other side reveal details about themselves
- Never actually comply, and never let on that you suspect a scam
- Raise the hesitations a real person would have";

/// Persona prompt for a reply backend at the given stage.
pub fn system_prompt(stage: ConversationStage) -> String {
    let guidance = match stage {
        ConversationStage::Early => {
            "Early stage: sound confused and a little worried. Ask simple clarifying questions."
        }
        ConversationStage::Middle => {
            "Middle stage: get more curious. Ask for verification, official contact details \
             or how the process works. Let some doubt show."
        }
        ConversationStage::Late => {
            "Late stage: be openly doubtful but give them room to share more. Ask pointed \
             questions about legitimacy and mention going to the bank or office in person."
        }
    };
    format!("{PERSONA_PROMPT}\n\n{guidance}")
}

// ── Context window ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One message of the context handed to a reply backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// The last `limit` history messages as chat turns, followed by `latest`.
///
/// Scammer turns become `User`; everything else is the persona's own side.
pub fn context_window(history: &[ConversationMessage], latest: &str, limit: usize) -> Vec<ChatTurn> {
    let start = history.len().saturating_sub(limit);
    history[start..]
        .iter()
        .map(|m| ChatTurn {
            role: if m.is_scammer() {
                ChatRole::User
            } else {
                ChatRole::Assistant
            },
            content: m.text.clone(),
        })
        .chain(std::iter::once(ChatTurn {
            role: ChatRole::User,
            content: latest.to_string(),
        }))
        .collect()
}

// ── ResponseGenerator ───────────────────────────────────────────────────

/// Produces the persona's next reply.
pub trait ResponseGenerator {
    fn respond(&self, history: &[ConversationMessage], latest: &str, turn: u32) -> String;
}

const FALLBACK_REPLIES: [&[&str]; 4] = [
    &[
        "Wait, what? Why would my account be blocked?",
        "Sorry, I'm confused. Can you explain that again?",
        "Is this really the bank? How can I be sure?",
    ],
    &[
        "Before I do anything, what is your employee ID?",
        "Which branch are you calling from?",
        "Can I call the bank myself to check this?",
    ],
    &[
        "This feels odd. Why do you need my OTP?",
        "My friend told me banks never ask for this on the phone.",
        "Could you send me an official email instead?",
    ],
    &[
        "I think I'll just go to the branch in person.",
        "You're being very pushy. A real bank wouldn't do this.",
        "I'm going to call the number on the back of my card.",
    ],
];

/// Canned replies keyed by turn, for when no model backend is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackResponder;

impl FallbackResponder {
    /// Candidate replies for a turn. Turns outside 1..=3 use the last set.
    pub fn replies_for(turn: u32) -> &'static [&'static str] {
        let idx = match turn {
            1..=3 => turn as usize - 1,
            _ => FALLBACK_REPLIES.len() - 1,
        };
        FALLBACK_REPLIES[idx]
    }

    /// Pick a reply with the given RNG.
    pub fn respond_with<R: Rng + ?Sized>(&self, rng: &mut R, turn: u32) -> String {
        Self::replies_for(turn)
            .choose(rng)
            .copied()
            .unwrap_or_default()
            .to_string()
    }
}

impl ResponseGenerator for FallbackResponder {
    fn respond(&self, _history: &[ConversationMessage], _latest: &str, turn: u32) -> String {
        self.respond_with(&mut rand::thread_rng(), turn)
    }
}
