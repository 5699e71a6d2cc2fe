//! Configuration for the in-memory topics provider

/// Limits and buffer sizing for [`crate::routing::MemTopics`]
#[derive(Debug, Clone)]
pub struct ProviderSettings {
	/// Longest accepted topic in bytes (MQTT caps topics at 65535)
	pub max_topic_length: usize,
	/// Largest accepted number of topic levels
	pub max_topic_levels: usize,
	/// Initial capacity of vectors returned by the allocating lookups
	pub result_capacity: usize,
}

impl Default for ProviderSettings {
	fn default() -> Self {
		Self {
			max_topic_length: 65_535,
			max_topic_levels: 128,
			result_capacity: 16,
		}
	}
}
