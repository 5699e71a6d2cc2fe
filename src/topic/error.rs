//! Error types for the topic module
//!
//! Tokenizer and tree errors share one enum; the provider wraps it in
//! [`crate::routing::TopicsError`].

use thiserror::Error;

/// Errors produced by the tokenizer and the topic trees
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicError {
	/// Wildcard placement rules were violated
	#[error("Malformed topic '{topic}': {reason}")]
	MalformedTopic {
		/// The offending topic (or the unparsed remainder of it)
		topic: String,
		/// What rule was broken
		reason: &'static str,
	},

	/// No subscription tree path or no matching subscriber for the topic
	#[error("No subscriber found for topic '{topic}'")]
	SubscriberNotFound {
		/// Topic the removal was requested for
		topic: String,
	},

	/// No retained tree path exists for the topic
	#[error("Topic '{topic}' not found")]
	TopicNotFound {
		/// Topic the removal was requested for
		topic: String,
	},
}

impl TopicError {
	/// Creates a new MalformedTopic error
	pub fn malformed(topic: impl Into<String>, reason: &'static str) -> Self {
		Self::MalformedTopic {
			topic: topic.into(),
			reason,
		}
	}

	/// Creates a new SubscriberNotFound error
	pub fn subscriber_not_found(topic: impl Into<String>) -> Self {
		Self::SubscriberNotFound {
			topic: topic.into(),
		}
	}

	/// Creates a new TopicNotFound error
	pub fn topic_not_found(topic: impl Into<String>) -> Self {
		Self::TopicNotFound {
			topic: topic.into(),
		}
	}
}

/// Convenient Result type for topic operations
pub type TopicResult<T> = Result<T, TopicError>;
