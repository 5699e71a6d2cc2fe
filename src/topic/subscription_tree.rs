use std::collections::HashMap;

use arcstr::ArcStr;
use rumqttc::QoS;
use smallvec::SmallVec;

use super::error::{TopicError, TopicResult};
use super::topic_level::{
	next_topic_level, MULTI_LEVEL_WILDCARD, SINGLE_LEVEL_WILDCARD,
};
use crate::routing::identity::SubscriberHandle;

/// Subscriber stored at a subscription tree node with its granted QoS
#[derive(Debug, Clone)]
pub struct SubscriberEntry {
	pub subscriber: SubscriberHandle,
	pub granted_qos: QoS,
}

/// Node of the subscription tree.
///
/// Subscribers of a topic live at the node reached by walking its levels
/// from the root. Wildcard levels are stored under their literal `+` / `#`
/// keys like any other level.
#[derive(Debug, Default)]
pub struct SubscribeNode {
	subscribers: SmallVec<[SubscriberEntry; 2]>,
	children: HashMap<ArcStr, SubscribeNode>,
}

impl SubscribeNode {
	pub fn new() -> Self {
		Self::default()
	}

	/// True when the node holds no subscribers and has no children.
	pub fn is_empty(&self) -> bool {
		self.subscribers.is_empty() && self.children.is_empty()
	}

	pub fn subscribers(&self) -> &[SubscriberEntry] {
		&self.subscribers
	}

	pub fn child(&self, level: &str) -> Option<&SubscribeNode> {
		self.children.get(level)
	}

	pub fn child_count(&self) -> usize {
		self.children.len()
	}

	/// Adds `subscriber` under `topic`, creating missing nodes.
	///
	/// A subscriber already present at that node keeps its position and only
	/// has its QoS updated.
	///
	/// Nodes created for levels preceding a malformed level are left in place.
	pub fn insert(
		&mut self,
		topic: &str,
		qos: QoS,
		subscriber: &SubscriberHandle,
	) -> TopicResult<()> {
		if topic.is_empty() {
			let existing = self
				.subscribers
				.iter()
				.position(|entry| entry.subscriber.identical(&**subscriber));
			match existing {
				| Some(index) => self.subscribers[index].granted_qos = qos,
				| None => self.subscribers.push(SubscriberEntry {
					subscriber: SubscriberHandle::clone(subscriber),
					granted_qos: qos,
				}),
			}
			return Ok(());
		}

		let (level, rest) = next_topic_level(topic)?;
		self.children
			.entry(ArcStr::from(level))
			.or_default()
			.insert(rest, qos, subscriber)
	}

	/// Removes `subscriber` from the node at `topic`, or every subscriber
	/// there when `subscriber` is `None`.
	///
	/// Children left without subscribers and without children are dropped on
	/// the way back up.
	pub fn remove(
		&mut self,
		topic: &str,
		subscriber: Option<&SubscriberHandle>,
	) -> TopicResult<()> {
		self.remove_at(topic, topic, subscriber)
	}

	fn remove_at(
		&mut self,
		full_topic: &str,
		topic: &str,
		subscriber: Option<&SubscriberHandle>,
	) -> TopicResult<()> {
		if topic.is_empty() {
			let Some(subscriber) = subscriber else {
				self.subscribers.clear();
				return Ok(());
			};
			let position = self
				.subscribers
				.iter()
				.position(|entry| entry.subscriber.identical(&**subscriber))
				.ok_or_else(|| TopicError::subscriber_not_found(full_topic))?;
			self.subscribers.remove(position);
			return Ok(());
		}

		let (level, rest) = next_topic_level(topic)?;
		let child = self
			.children
			.get_mut(level)
			.ok_or_else(|| TopicError::subscriber_not_found(full_topic))?;
		child.remove_at(full_topic, rest, subscriber)?;

		if child.is_empty() {
			self.children.remove(level);
		}
		Ok(())
	}

	/// Collects the subscribers whose topic filter matches the published
	/// `topic`.
	///
	/// Every match is reported with the published `qos`, not the granted one.
	/// The output vectors are appended to, never cleared.
	pub fn matches(
		&self,
		topic: &str,
		qos: QoS,
		subscribers: &mut Vec<SubscriberHandle>,
		qos_list: &mut Vec<QoS>,
	) -> TopicResult<()> {
		if topic.is_empty() {
			self.collect(qos, subscribers, qos_list);
			// `a/#` also covers `a` itself
			if let Some(hash) = self.children.get(MULTI_LEVEL_WILDCARD) {
				hash.collect(qos, subscribers, qos_list);
			}
			return Ok(());
		}

		let (level, rest) = next_topic_level(topic)?;

		// `#` can only be a last level, its node never has children
		if let Some(hash) = self.children.get(MULTI_LEVEL_WILDCARD) {
			hash.collect(qos, subscribers, qos_list);
		}
		if let Some(plus) = self.children.get(SINGLE_LEVEL_WILDCARD) {
			plus.matches(rest, qos, subscribers, qos_list)?;
		}
		if level != SINGLE_LEVEL_WILDCARD && level != MULTI_LEVEL_WILDCARD {
			if let Some(child) = self.children.get(level) {
				child.matches(rest, qos, subscribers, qos_list)?;
			}
		}
		Ok(())
	}

	fn collect(
		&self,
		qos: QoS,
		subscribers: &mut Vec<SubscriberHandle>,
		qos_list: &mut Vec<QoS>,
	) {
		for entry in &self.subscribers {
			subscribers.push(SubscriberHandle::clone(&entry.subscriber));
			qos_list.push(qos);
		}
	}
}
