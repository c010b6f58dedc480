//! Keyword scanning and scam-archetype inference over lower-cased text.

use super::patterns::{ARCHETYPE_RULES, IMPERSONATION_TARGETS, PAYMENT_APPS, SUSPICIOUS_KEYWORDS};

fn tag(prefix: &str, phrase: &str) -> String {
    format!("{prefix}_{}", phrase.replace(' ', "_"))
}

/// Archetype tags implied by the text.
///
/// `lower` must already be lower-cased. Each triggered rule contributes its
/// fixed tags; each mentioned payment app yields `uses_<app>` and each
/// impersonated party yields `impersonates_<target>`.
pub fn infer_archetypes(lower: &str) -> Vec<String> {
    let mut tags = Vec::new();

    for rule in ARCHETYPE_RULES {
        if rule.triggers.iter().any(|t| lower.contains(t)) {
            tags.extend(rule.tags.iter().map(|t| t.to_string()));
        }
    }

    tags.extend(
        PAYMENT_APPS
            .iter()
            .filter(|app| lower.contains(*app))
            .map(|app| tag("uses", app)),
    );
    tags.extend(
        IMPERSONATION_TARGETS
            .iter()
            .filter(|target| lower.contains(*target))
            .map(|target| tag("impersonates", target)),
    );

    tags
}

/// Literal suspicious keywords contained in the text.
///
/// `extra` entries are compared lower-cased and reported as given in lower case.
pub fn scan_keywords(lower: &str, extra: &[String]) -> Vec<String> {
    let builtin = SUSPICIOUS_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(*kw))
        .map(|kw| kw.to_string());
    let custom = extra
        .iter()
        .map(|kw| kw.trim().to_lowercase())
        .filter(|kw| !kw.is_empty() && lower.contains(kw.as_str()));
    builtin.chain(custom).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_refund_rule() {
        let tags = infer_archetypes("your income tax refund pending");
        assert!(tags.contains(&"tax_refund_scam".to_string()));
        assert!(tags.contains(&"government_impersonation".to_string()));
        assert!(tags.contains(&"impersonates_income_tax".to_string()));
    }

    #[test]
    fn account_block_rule_phrasings() {
        for text in ["account blocked today", "your account is blocked", "kyc pending"] {
            let tags = infer_archetypes(text);
            assert!(tags.contains(&"account_block_scam".to_string()), "{text}");
            assert!(tags.contains(&"bank_impersonation".to_string()), "{text}");
        }
    }

    #[test]
    fn payment_app_tags_use_underscores() {
        let tags = infer_archetypes("pay via google pay or whatsapp pay");
        assert!(tags.contains(&"uses_google_pay".to_string()));
        assert!(tags.contains(&"uses_whatsapp_pay".to_string()));
    }

    #[test]
    fn impersonation_tags() {
        let tags = infer_archetypes("this is the cyber cell and fraud department");
        assert!(tags.contains(&"impersonates_cyber_cell".to_string()));
        assert!(tags.contains(&"impersonates_fraud_department".to_string()));
    }

    #[test]
    fn no_triggers_no_tags() {
        assert!(infer_archetypes("this is urgent, verify your password immediately").is_empty());
    }

    #[test]
    fn literal_keywords_found() {
        let kws = scan_keywords("this is urgent, verify your password immediately", &[]);
        for kw in ["urgent", "verify", "password", "immediate"] {
            assert!(kws.contains(&kw.to_string()), "{kw}");
        }
    }

    #[test]
    fn extra_keywords_matched_case_insensitively() {
        let kws = scan_keywords("send a remote access code", &["Remote Access".to_string(), " ".to_string()]);
        assert_eq!(kws, vec!["remote access".to_string()]);
    }
}
