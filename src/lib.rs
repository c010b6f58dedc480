// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # honeypot-intel
//!
//! Intelligence extraction for a scam-baiting honeypot. A persona keeps the
//! scammer talking; this crate turns what they say into structured findings.
//!
//! ## Architecture
//!
//! - **Extraction** (`intel`): regex passes with per-category validation,
//!   account masking, keyword and scam-archetype inference
//! - **Conversation** (`conversation`): message log types and text aggregation
//! - **Responder** (`responder`): turn-staged persona prompts and offline replies
//! - **Config** (`config`): TOML-backed extractor settings
//!
//! ## Library usage
//!
//! ```
//! use honeypot_intel::conversation::ConversationMessage;
//! use honeypot_intel::intel::IntelligenceExtractor;
//!
//! let extractor = IntelligenceExtractor::default();
//! let history = vec![ConversationMessage::scammer("Your account is blocked.")];
//! let record = extractor.extract(&history, "Pay Rs.10 to verify@ybl now");
//! assert!(record.upi_ids().contains("verify@ybl"));
//! assert!(record.suspicious_keywords().contains("account_block_scam"));
//! ```

pub mod config;
pub mod conversation;
pub mod error;
pub mod intel;
pub mod responder;
