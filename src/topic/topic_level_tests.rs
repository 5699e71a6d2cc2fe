//! Tests for the topic level tokenizer

use super::{
	has_wildcards, next_topic_level, topic_levels, TopicError,
	MULTI_LEVEL_WILDCARD, SINGLE_LEVEL_WILDCARD,
};

fn levels(topic: &str) -> Result<Vec<&str>, TopicError> {
	topic_levels(topic).collect()
}

#[test]
fn test_single_level() {
	assert_eq!(next_topic_level("sensors").unwrap(), ("sensors", ""));
}

#[test]
fn test_level_and_remainder() {
	let (level, rest) = next_topic_level("sensors/kitchen/temp").unwrap();
	assert_eq!(level, "sensors");
	assert_eq!(rest, "kitchen/temp");

	let (level, rest) = next_topic_level(rest).unwrap();
	assert_eq!(level, "kitchen");
	assert_eq!(rest, "temp");
}

#[test]
fn test_literal_topics_round_trip() {
	let topics = [
		"a",
		"a/b",
		"sensors/kitchen/temperature",
		"$SYS/broker/uptime",
		"devices/42/state/on",
		"ünïcödé/levels/ok",
	];

	for topic in topics {
		let parsed = levels(topic).unwrap();
		assert_eq!(parsed.len(), topic.split('/').count(), "topic {topic}");
		assert_eq!(parsed.join("/"), topic);
	}
}

#[test]
fn test_leading_separator_is_keyed_as_single_level_wildcard() {
	let (level, rest) = next_topic_level("/a/b").unwrap();
	assert_eq!(level, SINGLE_LEVEL_WILDCARD);
	assert_eq!(rest, "a/b");

	assert_eq!(levels("/a").unwrap(), vec!["+", "a"]);
}

#[test]
fn test_empty_inner_level_is_keyed_as_single_level_wildcard() {
	assert_eq!(levels("a//b").unwrap(), vec!["a", "+", "b"]);
}

#[test]
fn test_trailing_separator_adds_no_level() {
	assert_eq!(next_topic_level("a/").unwrap(), ("a", ""));
	assert_eq!(levels("a/").unwrap(), vec!["a"]);
}

#[test]
fn test_empty_topic() {
	assert_eq!(next_topic_level("").unwrap(), ("", ""));
	assert!(levels("").unwrap().is_empty());
}

#[test]
fn test_valid_wildcards() {
	assert_eq!(levels("a/#").unwrap(), vec!["a", MULTI_LEVEL_WILDCARD]);
	assert_eq!(levels("+/+").unwrap(), vec!["+", "+"]);
	assert_eq!(levels("#").unwrap(), vec!["#"]);
	assert_eq!(levels("+").unwrap(), vec!["+"]);
	assert_eq!(levels("a/+/c/#").unwrap(), vec!["a", "+", "c", "#"]);
}

#[test]
fn test_hash_must_be_last_level() {
	let result = levels("a/#/b");
	assert!(matches!(result, Err(TopicError::MalformedTopic { .. })));

	assert!(next_topic_level("#/b").is_err());
	assert!(next_topic_level("#/").is_err());
}

#[test]
fn test_hash_must_fill_level() {
	assert!(levels("a/b#").is_err());
	assert!(levels("a/#b").is_err());
	assert!(levels("##").is_err());
}

#[test]
fn test_plus_must_fill_level() {
	assert!(levels("a/+b").is_err());
	assert!(levels("a/b+").is_err());
	assert!(levels("a/++").is_err());
	assert!(levels("+$").is_err());
	assert!(levels("+#").is_err());
}

#[test]
fn test_error_is_reported_at_the_failing_level() {
	let mut iter = topic_levels("a/b/c+/d");
	assert_eq!(iter.next(), Some(Ok("a")));
	assert_eq!(iter.next(), Some(Ok("b")));

	match iter.next() {
		| Some(Err(TopicError::MalformedTopic { topic, .. })) => {
			assert_eq!(topic, "c+/d");
		}
		| other => panic!("Expected MalformedTopic, got {other:?}"),
	}
	assert_eq!(iter.next(), None);
}

#[test]
fn test_dollar_is_a_literal() {
	assert_eq!(levels("$SYS/#").unwrap(), vec!["$SYS", "#"]);
	assert_eq!(levels("a$b").unwrap(), vec!["a$b"]);
}

#[test]
fn test_has_wildcards() {
	assert!(has_wildcards("a/+"));
	assert!(has_wildcards("#"));
	assert!(!has_wildcards("a/b"));
	assert!(!has_wildcards("/a"));
}
