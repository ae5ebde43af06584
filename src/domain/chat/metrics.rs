//! Chat usage counters, accumulated in-process per server lifetime.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::intent::Intent;

/// Mutable counters, held behind the AppState mutex.
#[derive(Debug, Default)]
pub struct ChatMetrics {
    messages_processed: u64,
    by_intent: BTreeMap<Intent, u64>,
}

impl ChatMetrics {
    pub fn record(&mut self, intent: Intent) {
        self.messages_processed += 1;
        *self.by_intent.entry(intent).or_insert(0) += 1;
    }

    /// Snapshot for the stats endpoint, intents sorted by count descending
    /// (ties keep classifier priority order).
    pub fn snapshot(&self) -> ChatStats {
        let mut top_intents: Vec<IntentCount> = self
            .by_intent
            .iter()
            .map(|(intent, count)| IntentCount {
                intent: *intent,
                count: *count,
            })
            .collect();
        top_intents.sort_by(|a, b| b.count.cmp(&a.count));

        ChatStats {
            messages_processed: self.messages_processed,
            top_intents,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChatStats {
    pub messages_processed: u64,
    pub top_intents: Vec<IntentCount>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IntentCount {
    pub intent: Intent,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_messages_and_intents() {
        let mut metrics = ChatMetrics::default();
        metrics.record(Intent::Greeting);
        metrics.record(Intent::Prices);
        metrics.record(Intent::Prices);

        let stats = metrics.snapshot();
        assert_eq!(stats.messages_processed, 3);
        assert_eq!(stats.top_intents[0].intent, Intent::Prices);
        assert_eq!(stats.top_intents[0].count, 2);
        assert_eq!(stats.top_intents[1].intent, Intent::Greeting);
    }

    #[test]
    fn empty_metrics_snapshot() {
        let stats = ChatMetrics::default().snapshot();
        assert_eq!(stats.messages_processed, 0);
        assert!(stats.top_intents.is_empty());
    }
}
