//! The structured intelligence record returned by an extraction call.

use std::collections::BTreeSet;

use serde::Serialize;

use super::category::Category;

/// Deduplicated intelligence found in a conversation.
///
/// Every field is a set (ordered, for stable output) and is always present,
/// possibly empty. Fields are read through accessors; a record is built once
/// per extraction call and not mutated afterwards.
///
/// `amounts` is collected only when enabled in the extractor configuration and
/// is left out of serialized output while empty.
///
/// Records are serialize-only: the extractor is the sole producer, so every
/// value has passed validation and every account number is masked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelligenceRecord {
    bank_accounts: BTreeSet<String>,
    upi_ids: BTreeSet<String>,
    phishing_links: BTreeSet<String>,
    phone_numbers: BTreeSet<String>,
    suspicious_keywords: BTreeSet<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    amounts: BTreeSet<String>,
}

impl IntelligenceRecord {
    /// Masked account numbers and `IFSC:`-prefixed branch codes.
    pub fn bank_accounts(&self) -> &BTreeSet<String> {
        &self.bank_accounts
    }

    pub fn upi_ids(&self) -> &BTreeSet<String> {
        &self.upi_ids
    }

    pub fn phishing_links(&self) -> &BTreeSet<String> {
        &self.phishing_links
    }

    pub fn phone_numbers(&self) -> &BTreeSet<String> {
        &self.phone_numbers
    }

    /// Literal keywords plus inferred archetype tags.
    pub fn suspicious_keywords(&self) -> &BTreeSet<String> {
        &self.suspicious_keywords
    }

    pub fn amounts(&self) -> &BTreeSet<String> {
        &self.amounts
    }

    /// Whether nothing at all was found.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Number of entries across all fields.
    pub fn total(&self) -> usize {
        self.bank_accounts.len()
            + self.upi_ids.len()
            + self.phishing_links.len()
            + self.phone_numbers.len()
            + self.suspicious_keywords.len()
            + self.amounts.len()
    }

    /// Route validated values into the field owning `category`.
    ///
    /// Accounts and IFSC codes share `bank_accounts`. Empty strings are dropped.
    pub(crate) fn absorb(&mut self, category: Category, values: impl IntoIterator<Item = String>) {
        let field = match category {
            Category::Upi => &mut self.upi_ids,
            Category::Phone => &mut self.phone_numbers,
            Category::Account | Category::Ifsc => &mut self.bank_accounts,
            Category::Url => &mut self.phishing_links,
            Category::Amount => &mut self.amounts,
        };
        field.extend(values.into_iter().filter(|v| !v.is_empty()));
    }

    pub(crate) fn absorb_keywords(&mut self, keywords: impl IntoIterator<Item = String>) {
        self.suspicious_keywords
            .extend(keywords.into_iter().filter(|k| !k.is_empty()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_serializes_five_fields() {
        let json = serde_json::to_value(IntelligenceRecord::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        for key in ["bankAccounts", "upiIds", "phishingLinks", "phoneNumbers", "suspiciousKeywords"] {
            assert!(obj[key].as_array().unwrap().is_empty(), "{key}");
        }
    }

    #[test]
    fn account_and_ifsc_share_field() {
        let mut record = IntelligenceRecord::default();
        record.absorb(Category::Account, ["1234**7890".to_string()]);
        record.absorb(Category::Ifsc, ["IFSC:SBIN0001234".to_string()]);
        assert_eq!(record.bank_accounts().len(), 2);
    }

    #[test]
    fn duplicates_and_empties_collapse() {
        let mut record = IntelligenceRecord::default();
        record.absorb(Category::Upi, ["a@ybl".into(), "a@ybl".into(), String::new()]);
        record.absorb_keywords(["otp".into(), "otp".into()]);
        assert_eq!(record.upi_ids().len(), 1);
        assert_eq!(record.suspicious_keywords().len(), 1);
        assert_eq!(record.total(), 2);
    }

    #[test]
    fn amounts_serialized_only_when_present() {
        let mut record = IntelligenceRecord::default();
        record.absorb(Category::Amount, ["INR 500".to_string()]);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["amounts"][0], "INR 500");
    }
}
