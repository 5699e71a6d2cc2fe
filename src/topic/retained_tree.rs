use std::collections::HashMap;
use std::sync::Arc;

use arcstr::ArcStr;
use bytes::Bytes;
use rumqttc::{Publish, QoS};

use super::error::{TopicError, TopicResult};
use super::topic_level::{
	next_topic_level, MULTI_LEVEL_WILDCARD, SINGLE_LEVEL_WILDCARD,
};

/// Retained message as stored in the tree
pub type Retained = Arc<Publish>;

/// Builds a retained PUBLISH for `topic`.
pub fn retained_message(
	topic: impl Into<String>,
	qos: QoS,
	payload: impl Into<Bytes>,
) -> Retained {
	let mut publish = Publish::new(topic, qos, Vec::new());
	publish.payload = payload.into();
	publish.retain = true;
	Arc::new(publish)
}

/// Node of the retained message tree.
///
/// Retained topics never contain wildcards, so unlike the subscription tree
/// the wildcards here come from the lookup side.
#[derive(Debug, Default)]
pub struct RetainNode {
	message: Option<Retained>,
	children: HashMap<ArcStr, RetainNode>,
}

impl RetainNode {
	pub fn new() -> Self {
		Self::default()
	}

	/// True when the node holds no message and has no children.
	pub fn is_empty(&self) -> bool {
		self.message.is_none() && self.children.is_empty()
	}

	pub fn message(&self) -> Option<&Retained> {
		self.message.as_ref()
	}

	pub fn child(&self, level: &str) -> Option<&RetainNode> {
		self.children.get(level)
	}

	pub fn child_count(&self) -> usize {
		self.children.len()
	}

	/// Stores `message` under `topic`.
	///
	/// A message already retained at exactly this topic is kept and the new
	/// one is dropped.
	pub fn insert(&mut self, topic: &str, message: Retained) -> TopicResult<()> {
		if topic.is_empty() {
			if self.message.is_none() {
				self.message = Some(message);
			}
			return Ok(());
		}

		let (level, rest) = next_topic_level(topic)?;
		self.children
			.entry(ArcStr::from(level))
			.or_default()
			.insert(rest, message)
	}

	/// Clears the message retained at `topic`, dropping nodes that end up
	/// with neither a message nor children.
	pub fn remove(&mut self, topic: &str) -> TopicResult<()> {
		self.remove_at(topic, topic)
	}

	fn remove_at(&mut self, full_topic: &str, topic: &str) -> TopicResult<()> {
		if topic.is_empty() {
			self.message = None;
			return Ok(());
		}

		let (level, rest) = next_topic_level(topic)?;
		let child = self
			.children
			.get_mut(level)
			.ok_or_else(|| TopicError::topic_not_found(full_topic))?;
		child.remove_at(full_topic, rest)?;

		if child.is_empty() {
			self.children.remove(level);
		}
		Ok(())
	}

	/// Collects retained messages whose topic is matched by the filter
	/// `topic`, which may contain wildcards. Appends to `messages`.
	pub fn matches(
		&self,
		topic: &str,
		messages: &mut Vec<Retained>,
	) -> TopicResult<()> {
		if topic.is_empty() {
			messages.extend(self.message.iter().cloned());
			return Ok(());
		}

		let (level, rest) = next_topic_level(topic)?;
		match level {
			| MULTI_LEVEL_WILDCARD => self.collect_all(messages),
			| SINGLE_LEVEL_WILDCARD => {
				for child in self.children.values() {
					child.matches(rest, messages)?;
				}
			}
			| _ => {
				if let Some(child) = self.children.get(level) {
					child.matches(rest, messages)?;
				}
			}
		}
		Ok(())
	}

	fn collect_all(&self, messages: &mut Vec<Retained>) {
		messages.extend(self.message.iter().cloned());
		for child in self.children.values() {
			child.collect_all(messages);
		}
	}
}
