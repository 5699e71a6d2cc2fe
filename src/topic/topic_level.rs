//! Topic level tokenizer
//!
//! Splits a raw MQTT topic into its `/`-separated levels one at a time,
//! validating wildcard placement along the way. Both topic trees consume
//! topics through [`next_topic_level`], level by level, as they recurse.

use super::error::TopicError;

/// Topic level separator
pub const TOPIC_SEPARATOR: char = '/';

/// Single-level wildcard marker
pub const SINGLE_LEVEL_WILDCARD: &str = "+";

/// Multi-level wildcard marker
pub const MULTI_LEVEL_WILDCARD: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
	Literal,
	MultiLevel,
	SingleLevel,
}

/// Returns the next topic level and the remaining topic.
///
/// A separator at the very start of `topic` yields an empty level, which is
/// reported as [`SINGLE_LEVEL_WILDCARD`] so that both trees key it the same
/// way as `+`. A trailing separator does not produce an extra level.
///
/// `$` is accepted as an ordinary character.
///
/// # Errors
/// Returns [`TopicError::MalformedTopic`] when `#` or `+` do not occupy a
/// whole level, or when `#` is followed by further levels.
///
/// # Example
/// ```
/// use mqtt_topic_engine::topic::next_topic_level;
///
/// let (level, rest) = next_topic_level("sensors/+/temp").unwrap();
/// assert_eq!(level, "sensors");
/// assert_eq!(rest, "+/temp");
///
/// assert!(next_topic_level("a#").is_err());
/// ```
pub fn next_topic_level(topic: &str) -> Result<(&str, &str), TopicError> {
	let mut state = ScanState::Literal;

	for (i, c) in topic.char_indices() {
		match c {
			| '/' => {
				if state == ScanState::MultiLevel {
					return Err(TopicError::malformed(
						topic,
						"'#' must be the last topic level",
					));
				}
				if i == 0 {
					return Ok((SINGLE_LEVEL_WILDCARD, &topic[1 ..]));
				}
				return Ok((&topic[.. i], &topic[i + 1 ..]));
			}
			| '#' => {
				if i != 0 {
					return Err(TopicError::malformed(
						topic,
						"'#' must occupy an entire topic level",
					));
				}
				state = ScanState::MultiLevel;
			}
			| '+' => {
				if i != 0 {
					return Err(TopicError::malformed(
						topic,
						"'+' must occupy an entire topic level",
					));
				}
				state = ScanState::SingleLevel;
			}
			| _ => {
				if state != ScanState::Literal {
					return Err(TopicError::malformed(
						topic,
						"wildcards must occupy an entire topic level",
					));
				}
			}
		}
	}

	Ok((topic, ""))
}

/// Iterator over the levels of a topic, see [`topic_levels`].
#[derive(Debug, Clone)]
pub struct TopicLevels<'a> {
	remaining: &'a str,
	failed: bool,
}

/// Iterates the levels of `topic` using [`next_topic_level`].
///
/// Stops after the first error.
pub fn topic_levels(topic: &str) -> TopicLevels<'_> {
	TopicLevels {
		remaining: topic,
		failed: false,
	}
}

impl<'a> Iterator for TopicLevels<'a> {
	type Item = Result<&'a str, TopicError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.failed || self.remaining.is_empty() {
			return None;
		}
		match next_topic_level(self.remaining) {
			| Ok((level, rest)) => {
				self.remaining = rest;
				Some(Ok(level))
			}
			| Err(err) => {
				self.failed = true;
				Some(Err(err))
			}
		}
	}
}

/// Returns true if the topic contains a `+` or `#` character.
pub fn has_wildcards(topic: &str) -> bool {
	topic.contains(['+', '#'])
}
