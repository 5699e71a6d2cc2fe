//! Subscription and retained message routing
//!
//! This module holds the in-memory topics provider, the trait the broker
//! programs against, and the subscriber identity used to tell subscribers
//! apart inside the subscription tree.

pub mod config;
/// Provider error types
pub mod error;
pub mod identity;
pub mod mem_topics;
pub mod provider;

pub use config::ProviderSettings;
pub use error::{TopicsError, TopicsResult};
pub use identity::{
	identical, subscriber_handle, CallbackSubscriber, Identity,
	SubscriberHandle, SubscriberToken,
};
pub use mem_topics::MemTopics;
pub use provider::{
	qos_from_u8, subscribe_reason_code, valid_qos, TopicsProvider,
	MEM_PROVIDER_NAME, QOS_FAILURE,
};
