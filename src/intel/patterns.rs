//! Regex patterns and fixed vocabularies for intelligence extraction.
//!
//! Every allow-list and keyword table lives here as an explicit constant so it
//! can be extended (via [`ExtractorConfig`](crate::config::ExtractorConfig))
//! and tested independently of the matching logic.

use std::sync::LazyLock;

use regex::Regex;

// ── Regex patterns ──────────────────────────────────────────────────────

/// `handle@provider`. Over-broad; refined by UPI validation.
pub static RE_UPI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[\w.\-]+@[\w.]+").unwrap());

/// Indian mobile (optional `+91`/`0`, leading 6-9, 10 digits with optional
/// separators) or a generic `+CC` international number.
pub static RE_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:\+91|0)?[\s\-.]?[6-9][0-9][\s\-.]?[0-9]{4}[\s\-.]?[0-9]{4}|\+[0-9]{1,3}[\s.\-]?[0-9]{6,14}",
    )
    .unwrap()
});

/// Bare run of 9-18 digits. Also hits phone-like runs; only length is checked later.
pub static RE_ACCOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]{9,18}\b").unwrap());

pub static RE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://\S+|www\.\S+|[a-z0-9\-]+\.[a-z]{2,}(?:/\S*)?").unwrap()
});

/// Case-sensitive: four letters, literal `0`, six alphanumerics.
pub static RE_IFSC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{4}0[A-Z0-9]{6}\b").unwrap());

pub static RE_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:₹|Rs\.?|INR)\s*[0-9,]+(?:\.[0-9]{2})?|\b[0-9]+\s*(?:rupees|rs|inr)\b",
    )
    .unwrap()
});

// ── Validation tables ───────────────────────────────────────────────────

/// Known UPI provider handles. Matched as substrings of the provider part.
pub const UPI_PROVIDERS: &[&str] = &[
    "paytm",
    "phonepe",
    "googlepay",
    "ybl",
    "okaxis",
    "oksbi",
    "okicici",
    "okhdfc",
    "upi",
    "apl",
    "axl",
    "ibl",
    "barodampay",
];

pub const UPI_MIN_LEN: usize = 5;

pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 15;

pub const ACCOUNT_MIN_DIGITS: usize = 9;
pub const ACCOUNT_MAX_DIGITS: usize = 18;

/// Characters stripped from the end of a URL candidate.
pub const URL_TRAILING_PUNCT: &[char] = &['.', ',', ';', '!', '?', '\'', '"', ')', ']'];

pub const URL_MIN_LEN: usize = 8;

pub const IFSC_PREFIX: &str = "IFSC:";

// ── Keyword vocabularies ────────────────────────────────────────────────

/// Literal suspicious phrases: urgency, credential requests, money movement.
pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "urgent",
    "immediate",
    "verify",
    "confirm",
    "blocked",
    "suspended",
    "expire",
    "deadline",
    "penalty",
    "fine",
    "arrest",
    "legal action",
    "click here",
    "download",
    "install",
    "otp",
    "cvv",
    "pin",
    "password",
    "account number",
    "card details",
    "transfer money",
    "refund",
    "cashback",
    "prize",
    "lottery",
    "winner",
    "reward",
    "tax refund",
    "government",
    "bank official",
    "customer care",
];

/// A scam archetype recognised by the presence of any trigger phrase.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeRule {
    pub triggers: &'static [&'static str],
    pub tags: &'static [&'static str],
}

pub const ARCHETYPE_RULES: &[ArchetypeRule] = &[
    ArchetypeRule {
        triggers: &["tax refund", "income tax", "refund pending"],
        tags: &["tax_refund_scam", "government_impersonation"],
    },
    ArchetypeRule {
        triggers: &["won prize", "lottery", "winner", "congratulations"],
        tags: &["lottery_scam", "prize_scam"],
    },
    ArchetypeRule {
        triggers: &[
            "account blocked",
            "account is blocked",
            "account suspended",
            "account is suspended",
            "kyc pending",
        ],
        tags: &["account_block_scam", "bank_impersonation"],
    },
    ArchetypeRule {
        triggers: &["share otp", "tell otp", "send otp"],
        tags: &["otp_fraud", "credential_theft"],
    },
    ArchetypeRule {
        triggers: &["click link", "open link", "visit website"],
        tags: &["phishing_attempt", "malicious_link"],
    },
    ArchetypeRule {
        triggers: &["transfer to", "send money to", "pay to"],
        tags: &["payment_redirection", "money_transfer_scam"],
    },
];

/// Payment apps; each hit yields `uses_<app>`.
pub const PAYMENT_APPS: &[&str] = &["paytm", "phonepe", "google pay", "gpay", "bhim", "whatsapp pay"];

/// Impersonated parties; each hit yields `impersonates_<target>`.
pub const IMPERSONATION_TARGETS: &[&str] = &[
    "bank",
    "police",
    "income tax",
    "government",
    "customer care",
    "security team",
    "fraud department",
    "cyber cell",
];
