//! Subscriber identity
//!
//! Subscriber handles are opaque to the topic trees. The only thing the trees
//! ever ask of a handle is whether it is the same subscriber as another
//! handle, which is what [`Identity`] answers.
//!
//! Scalar kinds (integers, floats, strings) compare by value. Handles of
//! different concrete types are never identical. Callback handles carry a
//! [`SubscriberToken`] assigned when they are created, and compare by that
//! token only.

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use arcstr::ArcStr;
use rumqttc::{Publish, QoS};

/// Equality over subscriber handles of heterogeneous concrete types.
pub trait Identity: Any + Send + Sync + fmt::Debug {
	/// Returns true if `other` identifies the same subscriber as `self`.
	fn identical(&self, other: &dyn Identity) -> bool;

	/// Upcast used for comparing against the concrete type of `other`.
	fn as_any(&self) -> &dyn Any;
}

/// Shared, type-erased subscriber handle stored in the subscription tree
pub type SubscriberHandle = Arc<dyn Identity>;

/// Wraps any [`Identity`] value into a [`SubscriberHandle`].
pub fn subscriber_handle<T: Identity>(subscriber: T) -> SubscriberHandle {
	Arc::new(subscriber)
}

/// Returns true if both handles identify the same subscriber.
pub fn identical(a: &dyn Identity, b: &dyn Identity) -> bool {
	a.identical(b)
}

/// Value comparison against `other`, false when `other` is another type.
pub fn same_value<T>(this: &T, other: &dyn Identity) -> bool
where T: PartialEq + 'static {
	other
		.as_any()
		.downcast_ref::<T>()
		.is_some_and(|other| this == other)
}

macro_rules! value_identity {
	($($ty:ty),* $(,)?) => {
		$(
			impl Identity for $ty {
				fn identical(&self, other: &dyn Identity) -> bool {
					same_value(self, other)
				}

				fn as_any(&self) -> &dyn Any {
					self
				}
			}
		)*
	};
}

value_identity!(
	i8,
	i16,
	i32,
	i64,
	i128,
	isize,
	u8,
	u16,
	u32,
	u64,
	u128,
	usize,
	f32,
	f64,
	String,
	&'static str,
	ArcStr,
);

/// Stable identity assigned to a subscriber at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberToken(u64);

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

impl SubscriberToken {
	/// Allocates a token that no other call in this process has returned.
	pub fn next() -> Self {
		Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
	}

	pub fn get(&self) -> u64 {
		self.0
	}
}

impl fmt::Display for SubscriberToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SubscriberToken({})", self.0)
	}
}

value_identity!(SubscriberToken);

type MessageCallback = Arc<dyn Fn(&Publish, QoS) + Send + Sync>;

/// Subscriber backed by a callback.
///
/// Closures have no meaningful equality, so each `CallbackSubscriber` gets a
/// [`SubscriberToken`] when it is created. Clones share the token and are
/// identical to each other; two subscribers built from the same closure are
/// not.
#[derive(Clone)]
pub struct CallbackSubscriber {
	token: SubscriberToken,
	callback: MessageCallback,
}

impl CallbackSubscriber {
	pub fn new<F>(callback: F) -> Self
	where F: Fn(&Publish, QoS) + Send + Sync + 'static {
		Self {
			token: SubscriberToken::next(),
			callback: Arc::new(callback),
		}
	}

	pub fn token(&self) -> SubscriberToken {
		self.token
	}

	/// Hands a matched message to the callback. Called by the delivery
	/// layer, never by the topic trees.
	pub fn deliver(&self, message: &Publish, qos: QoS) {
		(self.callback)(message, qos)
	}
}

impl fmt::Debug for CallbackSubscriber {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CallbackSubscriber")
			.field("token", &self.token)
			.finish_non_exhaustive()
	}
}

impl Identity for CallbackSubscriber {
	fn identical(&self, other: &dyn Identity) -> bool {
		other
			.as_any()
			.downcast_ref::<CallbackSubscriber>()
			.is_some_and(|other| other.token == self.token)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
