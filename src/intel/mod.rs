//! Intelligence extraction from scam conversations.
//!
//! Turns free-form scammer text into validated, deduplicated findings:
//! UPI IDs, phone numbers, masked bank accounts and IFSC codes, phishing links,
//! suspicious keywords and inferred scam-archetype tags.
//!
//! - **Regex passes** (`category`) find candidates per category and validate
//!   or normalize each one. Every pass is an independent [`CategoryExtractor`].
//! - **Context** (`context`) scans the lower-cased text for literal keywords
//!   and archetype trigger phrases.
//! - **Tables** (`patterns`) hold every pattern and vocabulary as constants.

pub mod category;
pub mod context;
pub mod extractor;
pub mod mask;
pub mod patterns;
pub mod record;

pub use category::{
    AccountExtractor, AmountExtractor, Category, CategoryExtractor, IfscExtractor,
    PhoneExtractor, UpiExtractor, UrlExtractor, normalize_amount, normalize_phone, normalize_url,
};
pub use context::{infer_archetypes, scan_keywords};
pub use extractor::IntelligenceExtractor;
pub use mask::MaskedAccount;
pub use record::IntelligenceRecord;
