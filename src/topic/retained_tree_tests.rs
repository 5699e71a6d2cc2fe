//! Tests for the retained message tree

use std::collections::HashSet;

use rumqttc::QoS;

use super::{retained_message, RetainNode, Retained, TopicError};

fn message(topic: &str, payload: &'static str) -> Retained {
	retained_message(topic, QoS::AtLeastOnce, payload)
}

fn tree(topics: &[&str]) -> RetainNode {
	let mut root = RetainNode::new();
	for topic in topics {
		root.insert(topic, message(topic, "payload")).unwrap();
	}
	root
}

fn matched_topics(root: &RetainNode, filter: &str) -> HashSet<String> {
	let mut messages = Vec::new();
	root.matches(filter, &mut messages).unwrap();
	messages.iter().map(|m| m.topic.clone()).collect()
}

fn topics(expected: &[&str]) -> HashSet<String> {
	expected.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_exact_lookup() {
	let root = tree(&["a/b", "a/c"]);

	assert_eq!(matched_topics(&root, "a/b"), topics(&["a/b"]));
	assert!(matched_topics(&root, "a/d").is_empty());
	assert!(matched_topics(&root, "a").is_empty());
}

#[test]
fn test_single_level_wildcard_lookup() {
	let root = tree(&["a/b", "a/c", "a/b/c", "x/b"]);

	assert_eq!(matched_topics(&root, "a/+"), topics(&["a/b", "a/c"]));
	assert_eq!(matched_topics(&root, "+/b"), topics(&["a/b", "x/b"]));
	assert_eq!(matched_topics(&root, "+/+/c"), topics(&["a/b/c"]));
}

#[test]
fn test_multi_level_wildcard_lookup() {
	let root = tree(&["a", "a/b", "a/c", "a/b/c", "x/y"]);

	assert_eq!(
		matched_topics(&root, "a/#"),
		topics(&["a", "a/b", "a/c", "a/b/c"])
	);
	assert_eq!(matched_topics(&root, "#").len(), 5);
	assert_eq!(matched_topics(&root, "+/#").len(), 5);
}

#[test]
fn test_existing_message_is_kept_on_insert() {
	let mut root = RetainNode::new();
	root.insert("a/b", message("a/b", "first")).unwrap();
	root.insert("a/b", message("a/b", "second")).unwrap();

	let mut messages = Vec::new();
	root.matches("a/b", &mut messages).unwrap();
	assert_eq!(messages.len(), 1);
	assert_eq!(messages[0].payload, "first");
}

#[test]
fn test_remove_and_prune() {
	let mut root = tree(&["a/b/c", "a/x"]);

	root.remove("a/b/c").unwrap();

	let a = root.child("a").unwrap();
	assert!(a.child("b").is_none());
	assert_eq!(a.child_count(), 1);

	root.remove("a/x").unwrap();
	assert!(root.is_empty());
}

#[test]
fn test_remove_keeps_ancestor_messages() {
	let mut root = tree(&["a", "a/b"]);

	root.remove("a/b").unwrap();

	let a = root.child("a").unwrap();
	assert!(a.message().is_some());
	assert_eq!(a.child_count(), 0);
	assert_eq!(matched_topics(&root, "a"), topics(&["a"]));
}

#[test]
fn test_remove_keeps_intermediate_nodes_with_children() {
	let mut root = tree(&["a/b", "a/b/c"]);

	root.remove("a/b").unwrap();

	let b = root.child("a").and_then(|a| a.child("b")).unwrap();
	assert!(b.message().is_none());
	assert_eq!(matched_topics(&root, "a/b/c"), topics(&["a/b/c"]));
}

#[test]
fn test_remove_missing_topic() {
	let mut root = tree(&["a/b"]);

	assert_eq!(root.remove("a/c"), Err(TopicError::topic_not_found("a/c")));
	assert_eq!(
		root.remove("x/y/z"),
		Err(TopicError::topic_not_found("x/y/z"))
	);
	assert_eq!(matched_topics(&root, "a/b"), topics(&["a/b"]));
}

#[test]
fn test_malformed_filter_is_rejected() {
	let root = tree(&["a/b"]);
	let mut messages = Vec::new();

	let result = root.matches("a/#/b", &mut messages);
	assert!(matches!(result, Err(TopicError::MalformedTopic { .. })));
}
