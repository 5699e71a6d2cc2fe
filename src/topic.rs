//! Topic handling module
//!
//! This module provides the topic tokenizer and the two topic trees the
//! in-memory provider is built from: the subscription tree (matched forward
//! against published topics) and the retained message tree (matched in
//! reverse against subscription filters).

pub mod error;
pub mod retained_tree;
pub mod subscription_tree;
pub mod topic_level;

#[cfg(test)]
mod retained_tree_tests;
#[cfg(test)]
mod topic_level_tests;

// Re-export commonly used types for convenience
pub use error::{TopicError, TopicResult};
pub use retained_tree::{retained_message, RetainNode, Retained};
pub use subscription_tree::{SubscribeNode, SubscriberEntry};
pub use topic_level::{
	has_wildcards, next_topic_level, topic_levels, TopicLevels,
	MULTI_LEVEL_WILDCARD, SINGLE_LEVEL_WILDCARD, TOPIC_SEPARATOR,
};
