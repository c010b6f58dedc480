//! The extraction pipeline.
//!
//! Pipeline:
//! 1. Aggregate scammer turns plus the latest message
//! 2. Run every category pass (optionally on the rayon pool)
//! 3. Merge validated values into the record on the calling thread
//! 4. Infer archetype tags and scan literal keywords on the lower-cased text
//! 5. Log one summary event

use rayon::prelude::*;

use crate::config::ExtractorConfig;
use crate::conversation::{ConversationMessage, aggregate_text, truncate_tail};

use super::category::{
    AccountExtractor, AmountExtractor, Category, CategoryExtractor, IfscExtractor,
    PhoneExtractor, UpiExtractor, UrlExtractor,
};
use super::context::{infer_archetypes, scan_keywords};
use super::record::IntelligenceRecord;

/// Turns scam conversations into [`IntelligenceRecord`]s.
///
/// Holds only read-only tables after construction, so one instance can be
/// shared across threads and called concurrently.
pub struct IntelligenceExtractor {
    config: ExtractorConfig,
    passes: Vec<Box<dyn CategoryExtractor>>,
}

impl IntelligenceExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        let mut passes: Vec<Box<dyn CategoryExtractor>> = vec![
            Box::new(UpiExtractor::with_providers(&config.extra_upi_providers)),
            Box::new(PhoneExtractor),
            Box::new(AccountExtractor),
            Box::new(UrlExtractor),
            Box::new(IfscExtractor),
        ];
        if config.surface_amounts {
            passes.push(Box::new(AmountExtractor));
        }
        Self { config, passes }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Categories this extractor runs, in pass order.
    pub fn categories(&self) -> Vec<Category> {
        self.passes.iter().map(|p| p.category()).collect()
    }

    /// Extract intelligence from a conversation and its newest message.
    ///
    /// Total over its inputs: no matches means empty sets.
    pub fn extract(&self, history: &[ConversationMessage], latest: &str) -> IntelligenceRecord {
        let text = aggregate_text(history, latest, self.config.history_window);
        self.extract_text(&text)
    }

    /// Extract intelligence from already-aggregated text.
    pub fn extract_text(&self, text: &str) -> IntelligenceRecord {
        let text = match self.config.max_text_bytes {
            Some(max) => truncate_tail(text, max),
            None => text,
        };

        let found: Vec<(Category, Vec<String>)> = if self.config.parallel {
            self.passes
                .par_iter()
                .map(|p| (p.category(), p.extract(text)))
                .collect()
        } else {
            self.passes
                .iter()
                .map(|p| (p.category(), p.extract(text)))
                .collect()
        };

        let mut record = IntelligenceRecord::default();
        for (category, values) in found {
            record.absorb(category, values);
        }

        let lower = text.to_lowercase();
        record.absorb_keywords(scan_keywords(&lower, &self.config.extra_keywords));
        record.absorb_keywords(infer_archetypes(&lower));

        tracing::info!(
            bank_accounts = record.bank_accounts().len(),
            upi_ids = record.upi_ids().len(),
            phishing_links = record.phishing_links().len(),
            phone_numbers = record.phone_numbers().len(),
            suspicious_keywords = record.suspicious_keywords().len(),
            record = %serde_json::to_string(&record).unwrap_or_default(),
            "extracted intelligence"
        );

        record
    }
}

impl Default for IntelligenceExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl std::fmt::Debug for IntelligenceExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntelligenceExtractor")
            .field("config", &self.config)
            .field("categories", &self.categories())
            .finish()
    }
}
