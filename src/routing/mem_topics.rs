use parking_lot::RwLock;
use rumqttc::QoS;
use tracing::{debug, trace, warn};

use super::config::ProviderSettings;
use super::error::{TopicsError, TopicsResult};
use super::identity::SubscriberHandle;
use super::provider::{qos_from_u8, TopicsProvider};
use crate::topic::{
	has_wildcards, RetainNode, Retained, SubscribeNode, TOPIC_SEPARATOR,
};

/// In-memory topics provider.
///
/// Subscriptions and retained messages live in two separate trees, each
/// behind its own reader/writer lock. No call ever holds both locks, so a
/// subscribe racing a retain is unordered, while calls on the same tree are
/// linearizable. Lookups take the shared lock and can run concurrently.
///
/// Nothing is persisted: everything is gone once the provider is closed or
/// dropped.
///
/// # Example
/// ```
/// use mqtt_topic_engine::{subscriber_handle, MemTopics, TopicsProvider};
///
/// let topics = MemTopics::new();
/// topics.subscribe("sensors/+/temp", 1, Some(subscriber_handle(42u32)))?;
///
/// let matched = topics.subscribers_for("sensors/kitchen/temp", 0)?;
/// assert_eq!(matched.len(), 1);
/// # Ok::<(), mqtt_topic_engine::TopicsError>(())
/// ```
#[derive(Debug)]
pub struct MemTopics {
	settings: ProviderSettings,
	subscribe_root: RwLock<Option<SubscribeNode>>,
	retained_root: RwLock<Option<RetainNode>>,
}

impl Default for MemTopics {
	fn default() -> Self {
		Self::new()
	}
}

impl MemTopics {
	pub fn new() -> Self {
		Self::with_settings(ProviderSettings::default())
	}

	pub fn with_settings(settings: ProviderSettings) -> Self {
		Self {
			settings,
			subscribe_root: RwLock::new(Some(SubscribeNode::new())),
			retained_root: RwLock::new(Some(RetainNode::new())),
		}
	}

	pub fn settings(&self) -> &ProviderSettings {
		&self.settings
	}

	/// True once [`TopicsProvider::close`] has been called.
	pub fn is_closed(&self) -> bool {
		let subscriptions_closed = self.subscribe_root.read().is_none();
		subscriptions_closed && self.retained_root.read().is_none()
	}

	/// Allocating variant of [`TopicsProvider::subscribers`].
	pub fn subscribers_for(
		&self,
		topic: &str,
		qos: u8,
	) -> TopicsResult<Vec<(SubscriberHandle, QoS)>> {
		let mut subscribers = Vec::with_capacity(self.settings.result_capacity);
		let mut qos_list = Vec::with_capacity(self.settings.result_capacity);
		self.subscribers(topic, qos, &mut subscribers, &mut qos_list)?;
		Ok(subscribers.into_iter().zip(qos_list).collect())
	}

	/// Allocating variant of [`TopicsProvider::retained`].
	pub fn retained_for(&self, topic: &str) -> TopicsResult<Vec<Retained>> {
		let mut messages = Vec::with_capacity(self.settings.result_capacity);
		self.retained(topic, &mut messages)?;
		Ok(messages)
	}

	fn validate_topic(&self, topic: &str) -> TopicsResult<()> {
		if topic.is_empty() {
			return Err(TopicsError::EmptyTopic);
		}
		if topic.len() > self.settings.max_topic_length {
			return Err(TopicsError::TopicTooLong {
				len: topic.len(),
				max: self.settings.max_topic_length,
			});
		}
		let levels = topic.matches(TOPIC_SEPARATOR).count() + 1;
		if levels > self.settings.max_topic_levels {
			return Err(TopicsError::TooManyLevels {
				levels,
				max: self.settings.max_topic_levels,
			});
		}
		Ok(())
	}
}

fn closed(operation: &'static str) -> TopicsError {
	warn!(operation, "Topics provider used after close");
	TopicsError::Closed
}

impl TopicsProvider for MemTopics {
	fn subscribe(
		&self,
		topic: &str,
		qos: u8,
		subscriber: Option<SubscriberHandle>,
	) -> TopicsResult<QoS> {
		let granted = qos_from_u8(qos).inspect_err(|err| {
			warn!(topic = %topic, error = %err, "Subscription rejected");
		})?;
		let Some(subscriber) = subscriber else {
			warn!(topic = %topic, "Subscription rejected: no subscriber");
			return Err(TopicsError::NilSubscriber);
		};
		self.validate_topic(topic)?;

		let mut root = self.subscribe_root.write();
		let root = root.as_mut().ok_or_else(|| closed("subscribe"))?;
		root.insert(topic, granted, &subscriber)?;

		debug!(topic = %topic, qos = ?granted, subscriber = ?subscriber, "Subscribed");
		Ok(granted)
	}

	fn unsubscribe(
		&self,
		topic: &str,
		subscriber: Option<&SubscriberHandle>,
	) -> TopicsResult<()> {
		self.validate_topic(topic)?;

		let mut root = self.subscribe_root.write();
		let root = root.as_mut().ok_or_else(|| closed("unsubscribe"))?;
		root.remove(topic, subscriber)?;

		match subscriber {
			| Some(subscriber) => {
				debug!(topic = %topic, subscriber = ?subscriber, "Unsubscribed")
			}
			| None => debug!(topic = %topic, "Unsubscribed all subscribers"),
		}
		Ok(())
	}

	fn subscribers(
		&self,
		topic: &str,
		qos: u8,
		subscribers: &mut Vec<SubscriberHandle>,
		qos_list: &mut Vec<QoS>,
	) -> TopicsResult<()> {
		let qos = qos_from_u8(qos)?;
		subscribers.clear();
		qos_list.clear();
		self.validate_topic(topic)?;

		let root = self.subscribe_root.read();
		let root = root.as_ref().ok_or_else(|| closed("subscribers"))?;
		root.matches(topic, qos, subscribers, qos_list)?;

		trace!(topic = %topic, matched = subscribers.len(), "Matched subscribers");
		Ok(())
	}

	fn retain(&self, message: Retained) -> TopicsResult<()> {
		let topic = message.topic.as_str();
		self.validate_topic(topic)?;
		if has_wildcards(topic) {
			return Err(TopicsError::wildcard_in_publish_topic(topic));
		}

		let mut root = self.retained_root.write();
		let root = root.as_mut().ok_or_else(|| closed("retain"))?;

		// A zero-length payload clears the retained message
		if message.payload.is_empty() {
			root.remove(topic)?;
			debug!(topic = %topic, "Retained message cleared");
			return Ok(());
		}

		root.insert(topic, Retained::clone(&message))?;
		debug!(topic = %topic, payload_len = message.payload.len(), "Message retained");
		Ok(())
	}

	fn retained(
		&self,
		topic: &str,
		messages: &mut Vec<Retained>,
	) -> TopicsResult<()> {
		messages.clear();
		self.validate_topic(topic)?;

		let root = self.retained_root.read();
		let root = root.as_ref().ok_or_else(|| closed("retained"))?;
		root.matches(topic, messages)?;

		trace!(topic = %topic, matched = messages.len(), "Matched retained messages");
		Ok(())
	}

	fn close(&self) -> TopicsResult<()> {
		self.subscribe_root.write().take();
		self.retained_root.write().take();
		debug!("Topics provider closed");
		Ok(())
	}
}
