use rumqttc::{QoS, SubscribeReasonCode};

use super::error::{TopicsError, TopicsResult};
use super::identity::SubscriberHandle;
use crate::topic::Retained;

/// Name the in-memory provider is registered under by the broker
pub const MEM_PROVIDER_NAME: &str = "mem";

/// SUBACK return code for a rejected subscription
pub const QOS_FAILURE: u8 = 0x80;

/// Returns true for QoS 0, 1 and 2.
pub fn valid_qos(qos: u8) -> bool {
	qos_from_u8(qos).is_ok()
}

/// Converts a raw QoS byte.
pub fn qos_from_u8(qos: u8) -> TopicsResult<QoS> {
	match qos {
		| 0 => Ok(QoS::AtMostOnce),
		| 1 => Ok(QoS::AtLeastOnce),
		| 2 => Ok(QoS::ExactlyOnce),
		| other => Err(TopicsError::InvalidQos(other)),
	}
}

/// Maps the outcome of [`TopicsProvider::subscribe`] to the SUBACK code
/// reported to the client.
pub fn subscribe_reason_code(
	result: &TopicsResult<QoS>,
) -> SubscribeReasonCode {
	match result {
		| Ok(qos) => SubscribeReasonCode::Success(*qos),
		| Err(_) => SubscribeReasonCode::Failure,
	}
}

/// Storage for topic subscriptions and retained messages.
///
/// Output buffers passed to the lookup methods are cleared first and only
/// valid until the next call reusing them.
pub trait TopicsProvider: Send + Sync {
	/// Subscribes `subscriber` to the topic filter and returns the granted
	/// QoS. Subscribing again with the same subscriber updates its QoS.
	fn subscribe(
		&self,
		topic: &str,
		qos: u8,
		subscriber: Option<SubscriberHandle>,
	) -> TopicsResult<QoS>;

	/// Removes `subscriber` from the topic filter, or every subscriber of
	/// that exact filter when `subscriber` is `None`.
	fn unsubscribe(
		&self,
		topic: &str,
		subscriber: Option<&SubscriberHandle>,
	) -> TopicsResult<()>;

	/// Fills `subscribers` with everyone whose filter matches the published
	/// `topic`, and `qos_list` with the QoS to deliver at, index for index.
	fn subscribers(
		&self,
		topic: &str,
		qos: u8,
		subscribers: &mut Vec<SubscriberHandle>,
		qos_list: &mut Vec<QoS>,
	) -> TopicsResult<()>;

	/// Retains `message` for its topic. An empty payload deletes the message
	/// retained for that topic instead.
	fn retain(&self, message: Retained) -> TopicsResult<()>;

	/// Fills `messages` with the retained messages matching the filter.
	fn retained(
		&self,
		topic: &str,
		messages: &mut Vec<Retained>,
	) -> TopicsResult<()>;

	/// Releases all subscriptions and retained messages.
	fn close(&self) -> TopicsResult<()>;
}
