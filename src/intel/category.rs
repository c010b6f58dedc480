//! Per-category extractors: a regex pass paired with a validator.
//!
//! Each category is an isolated unit implementing [`CategoryExtractor`], so a
//! new category can be added without touching the others.

use std::fmt;

use regex::Regex;
use super::mask::MaskedAccount;
use super::patterns::{
    ACCOUNT_MAX_DIGITS, ACCOUNT_MIN_DIGITS, IFSC_PREFIX, PHONE_MAX_DIGITS, PHONE_MIN_DIGITS,
    RE_ACCOUNT, RE_AMOUNT, RE_IFSC, RE_PHONE, RE_UPI, RE_URL, UPI_MIN_LEN, UPI_PROVIDERS,
    URL_MIN_LEN, URL_TRAILING_PUNCT,
};

// ── Category ────────────────────────────────────────────────────────────

/// Kind of intelligence a pass produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Upi,
    Phone,
    Account,
    Url,
    Ifsc,
    Amount,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upi => write!(f, "upi"),
            Self::Phone => write!(f, "phone"),
            Self::Account => write!(f, "account"),
            Self::Url => write!(f, "url"),
            Self::Ifsc => write!(f, "ifsc"),
            Self::Amount => write!(f, "amount"),
        }
    }
}

// ── Trait ───────────────────────────────────────────────────────────────

/// A regex pass plus validation for one intelligence category.
pub trait CategoryExtractor: Send + Sync {
    fn category(&self) -> Category;

    /// Pattern used to find raw candidates.
    fn pattern(&self) -> &Regex;

    /// Accept a raw candidate, returning its normalized form, or reject it.
    fn validate(&self, candidate: &str) -> Option<String>;

    /// Raw, unvalidated matches in `text`.
    fn candidates<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.pattern().find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Validated, normalized values in match order. May contain duplicates;
    /// the record's sets collapse them.
    fn extract(&self, text: &str) -> Vec<String> {
        self.candidates(text)
            .into_iter()
            .filter_map(|c| self.validate(c))
            .collect()
    }
}

fn ascii_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

// ── UPI ─────────────────────────────────────────────────────────────────

/// UPI payment identifiers (`handle@provider`).
#[derive(Debug, Clone)]
pub struct UpiExtractor {
    extra_providers: Vec<String>,
}

impl UpiExtractor {
    pub fn new() -> Self {
        Self {
            extra_providers: Vec::new(),
        }
    }

    /// Extend the known-provider allow-list.
    pub fn with_providers(providers: &[String]) -> Self {
        Self {
            extra_providers: providers.iter().map(|p| p.trim().to_lowercase()).collect(),
        }
    }

    fn known_provider(&self, provider: &str) -> bool {
        UPI_PROVIDERS.iter().any(|p| provider.contains(p))
            || self
                .extra_providers
                .iter()
                .any(|p| !p.is_empty() && provider.contains(p.as_str()))
    }
}

impl Default for UpiExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryExtractor for UpiExtractor {
    fn category(&self) -> Category {
        Category::Upi
    }

    fn pattern(&self) -> &Regex {
        &RE_UPI
    }

    fn validate(&self, candidate: &str) -> Option<String> {
        // A sentence-final period is picked up by the pattern.
        let upi = candidate.trim().trim_end_matches('.').to_lowercase();
        if !upi.contains('@') || upi.chars().count() < UPI_MIN_LEN {
            tracing::trace!(candidate = %upi, "upi rejected: missing @ or too short");
            return None;
        }

        let (_, provider) = upi.rsplit_once('@')?;
        let has_domain = provider.chars().count() > 2 && provider.contains('.');
        if self.known_provider(provider) || has_domain {
            Some(upi)
        } else {
            tracing::trace!(candidate = %upi, provider, "upi rejected: unknown provider");
            None
        }
    }
}

// ── Phone ───────────────────────────────────────────────────────────────

/// Phone numbers, normalized to `+<country><number>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneExtractor;

/// Normalize a phone candidate, assuming India (`+91`) for bare national numbers.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits = ascii_digits(raw);
    if !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits.len()) {
        return None;
    }

    let normalized = match digits.len() {
        10 => format!("+91{digits}"),
        11 if digits.starts_with('0') => format!("+91{}", &digits[1..]),
        _ => format!("+{digits}"),
    };
    Some(normalized)
}

impl CategoryExtractor for PhoneExtractor {
    fn category(&self) -> Category {
        Category::Phone
    }

    fn pattern(&self) -> &Regex {
        &RE_PHONE
    }

    fn validate(&self, candidate: &str) -> Option<String> {
        let phone = normalize_phone(candidate);
        if phone.is_none() {
            tracing::trace!(candidate, "phone rejected: digit count out of range");
        }
        phone
    }
}

// ── Account ─────────────────────────────────────────────────────────────

/// Bank account numbers. Output is always masked.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountExtractor;

impl AccountExtractor {
    pub fn mask(candidate: &str) -> Option<MaskedAccount> {
        let digits = ascii_digits(candidate);
        if (ACCOUNT_MIN_DIGITS..=ACCOUNT_MAX_DIGITS).contains(&digits.len()) {
            Some(MaskedAccount::mask(&digits))
        } else {
            None
        }
    }
}

impl CategoryExtractor for AccountExtractor {
    fn category(&self) -> Category {
        Category::Account
    }

    fn pattern(&self) -> &Regex {
        &RE_ACCOUNT
    }

    fn validate(&self, candidate: &str) -> Option<String> {
        let masked = Self::mask(candidate);
        if masked.is_none() {
            // Digits are never logged, only how many there were.
            let digits = ascii_digits(candidate).len();
            tracing::trace!(digits, "account rejected: digit count out of range");
        }
        masked.map(MaskedAccount::into_string)
    }
}

// ── URL ─────────────────────────────────────────────────────────────────

/// Phishing links, normalized to absolute `http(s)://` URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlExtractor;

fn has_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    })
}

pub fn normalize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches(URL_TRAILING_PUNCT);
    let url = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    if url.contains('.') && url.len() >= URL_MIN_LEN {
        Some(url)
    } else {
        None
    }
}

impl CategoryExtractor for UrlExtractor {
    fn category(&self) -> Category {
        Category::Url
    }

    fn pattern(&self) -> &Regex {
        &RE_URL
    }

    fn validate(&self, candidate: &str) -> Option<String> {
        let url = normalize_url(candidate);
        if url.is_none() {
            tracing::trace!(candidate, "url rejected: no dot or too short");
        }
        url
    }
}

// ── IFSC ────────────────────────────────────────────────────────────────

/// IFSC branch codes. The pattern is the whole validation; output is
/// prefixed so it can share the bank-account field.
#[derive(Debug, Clone, Copy, Default)]
pub struct IfscExtractor;

impl CategoryExtractor for IfscExtractor {
    fn category(&self) -> Category {
        Category::Ifsc
    }

    fn pattern(&self) -> &Regex {
        &RE_IFSC
    }

    fn validate(&self, candidate: &str) -> Option<String> {
        Some(format!("{IFSC_PREFIX}{candidate}"))
    }
}

// ── Amount ──────────────────────────────────────────────────────────────

/// Money amounts (`₹500`, `Rs. 1,000`, `200 rupees`), normalized to `INR <n>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountExtractor;

pub fn normalize_amount(raw: &str) -> Option<String> {
    // Skip the currency marker so "Rs." does not donate its period.
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let number: String = raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .filter(|c| *c != ',')
        .collect();
    let number = number.trim_end_matches('.');
    if number.is_empty() {
        return None;
    }
    Some(format!("INR {number}"))
}

impl CategoryExtractor for AmountExtractor {
    fn category(&self) -> Category {
        Category::Amount
    }

    fn pattern(&self) -> &Regex {
        &RE_AMOUNT
    }

    fn validate(&self, candidate: &str) -> Option<String> {
        normalize_amount(candidate)
    }
}
