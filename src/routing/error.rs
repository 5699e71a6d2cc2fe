use thiserror::Error;

use crate::topic::TopicError;

/// Errors returned by a topics provider
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopicsError {
	/// QoS outside of 0, 1 and 2
	#[error("Invalid QoS {0}")]
	InvalidQos(u8),

	/// Subscribe was called without a subscriber
	#[error("Subscriber cannot be nil")]
	NilSubscriber,

	/// Tokenizing or tree lookup failed
	#[error(transparent)]
	Topic(#[from] TopicError),

	/// Topic is the empty string
	#[error("Topic cannot be empty")]
	EmptyTopic,

	/// Topic is longer than the configured limit
	#[error("Topic length {len} exceeds the limit of {max} bytes")]
	TopicTooLong { len: usize, max: usize },

	/// Topic has more levels than the configured limit
	#[error("Topic has {levels} levels, the limit is {max}")]
	TooManyLevels { levels: usize, max: usize },

	/// A message to retain was published to a topic containing wildcards
	#[error("Cannot retain a message published to wildcard topic '{topic}'")]
	WildcardInPublishTopic { topic: String },

	/// The provider has been closed
	#[error("Topics provider is closed")]
	Closed,
}

impl TopicsError {
	/// Creates a new WildcardInPublishTopic error
	pub fn wildcard_in_publish_topic(topic: impl Into<String>) -> Self {
		Self::WildcardInPublishTopic {
			topic: topic.into(),
		}
	}
}

/// Convenient Result type for provider operations
pub type TopicsResult<T> = Result<T, TopicsError>;
