//! Promises that are settled _extrinsically_: instead of resolution happening
//! inside a work function handed to a constructor, anyone holding a
//! [`Promise`] may call [`fulfill`](Promise::fulfill) or
//! [`reject`](Promise::reject) from any call site. The first settlement wins;
//! everything after it is silently discarded. A read-only view for consumers
//! who must not be able to settle is available through
//! [`hide`](Promise::hide).
//!
//! The awaitable machinery underneath is injectable: any [`Engine`] that can
//! build an awaitable from a producer callback may be substituted at
//! construction, including artificially delayed test doubles. The default is
//! a oneshot channel shared across subscribers.

mod combinators;
mod promise;

pub use combinators::*;
pub use promise::*;

/// Anything that can flow through a promise, as the fulfillment value or the
/// rejection reason. Subscribers each receive their own copy of the outcome,
/// hence `Clone`. For types that are not `Clone` (most error types), see
/// [`Ptr`].
pub trait Value: 'static + Send + Sync + Clone {}
impl<T> Value for T where T: 'static + Send + Sync + Clone {}

/// Conversion into a [`Subscription`]. This is what lets the combinators
/// accept a `Promise`, a `&Promise`, a [`Hidden`] view, or an existing
/// `Subscription` interchangeably.
pub trait IntoSubscription {
    type Output: Value;
    type Error: Value;
    fn into_subscription(self) -> Subscription<Self::Output, Self::Error>;
}
