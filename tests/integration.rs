//! End-to-end tests for honeypot-intel.
//!
//! These exercise the full path from a JSON conversation log through
//! aggregation, every category pass and keyword inference, to the serialized
//! record.

use std::collections::BTreeSet;
use std::sync::Arc;

use honeypot_intel::config::ExtractorConfig;
use honeypot_intel::conversation::{ConversationMessage, parse_history};
use honeypot_intel::intel::{IntelligenceExtractor, IntelligenceRecord};

const SCENARIO: &str = "After verification, transfer Rs.1 to our security account: 1234567890@paytm. \
    Call +919876543210 or visit http://fake-bank-lottery.com/claim. \
    Your account is blocked, share otp now.";

fn conversation() -> Vec<ConversationMessage> {
    parse_history(
        r#"[
            {"sender": "scammer", "text": "Hello sir, this is SBI customer care."},
            {"sender": "agent", "text": "Hi, what happened? My number is 9123456780."},
            {"sender": "scammer", "text": "Your KYC pending. Click link www.sbi-kyc-update.com to verify."},
            {"sender": "agent", "text": "Is this safe?"},
            {"sender": "scammer", "text": "Yes. Or send money to refund.desk@oksbi, IFSC SBIN0004567."}
        ]"#,
        "inline",
    )
    .unwrap()
}

fn all_fields(record: &IntelligenceRecord) -> [&BTreeSet<String>; 5] {
    [
        record.bank_accounts(),
        record.upi_ids(),
        record.phishing_links(),
        record.phone_numbers(),
        record.suspicious_keywords(),
    ]
}

#[test]
fn scenario_from_single_message() {
    let record = IntelligenceExtractor::default().extract(&[], SCENARIO);

    assert!(record.upi_ids().contains("1234567890@paytm"));
    assert!(record.phone_numbers().contains("+919876543210"));
    assert!(record.phishing_links().contains("http://fake-bank-lottery.com/claim"));
    for kw in [
        "blocked",
        "otp",
        "account_block_scam",
        "bank_impersonation",
        "otp_fraud",
        "credential_theft",
        "uses_paytm",
    ] {
        assert!(record.suspicious_keywords().contains(kw), "missing {kw}");
    }
}

#[test]
fn multi_turn_conversation() {
    let record = IntelligenceExtractor::default()
        .extract(&conversation(), "Do it fast or your account will be suspended.");

    assert!(record.upi_ids().contains("refund.desk@oksbi"));
    assert!(record.bank_accounts().contains("IFSC:SBIN0004567"));
    assert!(record.phishing_links().contains("http://www.sbi-kyc-update.com"));

    let kws = record.suspicious_keywords();
    for kw in [
        "customer care",
        "verify",
        "refund",
        "suspended",
        "account_block_scam",
        "phishing_attempt",
        "payment_redirection",
        "impersonates_customer_care",
    ] {
        assert!(kws.contains(kw), "missing {kw}");
    }

    // The agent's own number must not be reported.
    assert!(!record.phone_numbers().contains("+919123456780"));
}

#[test]
fn idempotent_extraction() {
    let extractor = IntelligenceExtractor::default();
    let history = conversation();
    let first = extractor.extract(&history, SCENARIO);
    let second = extractor.extract(&history, SCENARIO);
    assert_eq!(first, second);
}

#[test]
fn fields_hold_nonempty_unique_values() {
    // Repeated identifiers across turns collapse.
    let history = vec![
        ConversationMessage::scammer("pay scam@ybl, call 9876543210"),
        ConversationMessage::scammer("again: scam@ybl and 09876543210"),
    ];
    let record = IntelligenceExtractor::default().extract(&history, "scam@ybl");

    assert_eq!(record.upi_ids().len(), 1);
    assert_eq!(record.phone_numbers().iter().filter(|p| *p == "+919876543210").count(), 1);
    for field in all_fields(&record) {
        assert!(field.iter().all(|v| !v.is_empty()));
    }
}

#[test]
fn no_triggers_no_archetypes() {
    let record =
        IntelligenceExtractor::default().extract(&[], "This is urgent. Verify your password immediately.");
    let kws = record.suspicious_keywords();
    assert!(kws.contains("urgent"));
    assert!(kws.contains("password"));
    assert!(kws.iter().all(|k| !k.contains('_')), "unexpected tag in {kws:?}");
}

#[test]
fn serialized_shape() {
    let record = IntelligenceExtractor::default().extract(&[], "nothing to see here");
    let json = serde_json::to_value(&record).unwrap();
    let keys: BTreeSet<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        BTreeSet::from(["bankAccounts", "phishingLinks", "phoneNumbers", "suspiciousKeywords", "upiIds"])
    );
}

#[test]
fn history_window_drops_old_turns() {
    let extractor = IntelligenceExtractor::new(ExtractorConfig {
        history_window: Some(1),
        ..Default::default()
    });
    let record = extractor.extract(&conversation(), "ok");
    assert!(record.upi_ids().contains("refund.desk@oksbi"));
    assert!(record.phishing_links().iter().all(|l| !l.contains("sbi-kyc-update")));
}

#[test]
fn concurrent_callers_agree() {
    let extractor = Arc::new(IntelligenceExtractor::default());
    let expected = extractor.extract(&conversation(), SCENARIO);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let extractor = Arc::clone(&extractor);
            std::thread::spawn(move || extractor.extract(&conversation(), SCENARIO))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
