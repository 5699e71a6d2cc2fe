//! # MQTT Topic Engine
//!
//! The topic matching core of an MQTT broker: it decides which subscribers
//! receive a published message and keeps the retained message of each topic.
//!
//! ## Features
//!
//! - **Wildcard subscriptions**: `+` and `#` filters stored in a topic tree
//! - **Forward matching**: concrete publish topics against stored filters
//! - **Reverse matching**: wildcard filters against stored retained topics
//! - **Concurrent access**: one reader/writer lock per tree, lookups run in
//!   parallel
//! - **Heterogeneous subscribers**: any [`Identity`] implementor can be a
//!   subscriber handle
//!
//! ## Quick Start
//!
//! ```rust
//! use mqtt_topic_engine::{
//! 	retained_message, subscriber_handle, MemTopics, TopicsProvider,
//! };
//! use rumqttc::QoS;
//!
//! let topics = MemTopics::new();
//!
//! // Subscribe two connections
//! topics.subscribe("home/+/temperature", 1, Some(subscriber_handle("conn-1")))?;
//! topics.subscribe("home/#", 2, Some(subscriber_handle("conn-2")))?;
//!
//! // Who receives a publish to home/kitchen/temperature at QoS 0?
//! let mut subscribers = Vec::new();
//! let mut qos_list = Vec::new();
//! topics.subscribers("home/kitchen/temperature", 0, &mut subscribers, &mut qos_list)?;
//! assert_eq!(subscribers.len(), 2);
//!
//! // Retain a message and look it up with a wildcard filter
//! topics.retain(retained_message("home/kitchen/temperature", QoS::AtLeastOnce, "21.5"))?;
//! let retained = topics.retained_for("home/+/temperature")?;
//! assert_eq!(retained.len(), 1);
//! # Ok::<(), mqtt_topic_engine::TopicsError>(())
//! ```
//!
//! ## Topic Rules
//!
//! - `+` must fill a whole level (`a/+/c`, not `a/b+`)
//! - `#` must fill the last level (`a/#`, not `a/#/c`)
//! - An empty level produced by a separator is keyed like `+`, so `/a`
//!   and `+/a` address the same node
//! - Retaining a message with an empty payload deletes the retained message

pub mod routing;
pub mod topic;

pub use routing::{
	identical, qos_from_u8, subscribe_reason_code, subscriber_handle,
	valid_qos, CallbackSubscriber, Identity, MemTopics, ProviderSettings,
	SubscriberHandle, SubscriberToken, TopicsError, TopicsProvider,
	TopicsResult, MEM_PROVIDER_NAME, QOS_FAILURE,
};
pub use topic::{
	next_topic_level, retained_message, topic_levels, Retained, TopicError,
};
