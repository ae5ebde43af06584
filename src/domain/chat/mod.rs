//! Rule-based chatbot: intent classification, reply generation and usage
//! metrics.

pub mod intent;
pub mod metrics;
pub mod responder;

pub use intent::{classify, Intent};
pub use metrics::{ChatMetrics, ChatStats, IntentCount};
pub use responder::{fallback_reply, frequent_questions, respond, ChatReply};
