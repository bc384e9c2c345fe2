use super::{Settled, Subscription};
use crate::{IntoSubscription, Value};

/// The read-only face of a promise: exposes continuation registration and
/// nothing else. Holders observe the same outcome as holders of the full
/// [`Promise`](super::Promise) but cannot settle it. No state of its own;
/// this is pure capability attenuation.
pub struct Hidden<T, E> {
    settled: Settled<T, E>,
}

impl<T, E> Hidden<T, E>
where
    T: Value,
    E: Value,
{
    pub(crate) fn new(settled: Settled<T, E>) -> Self {
        Self { settled }
    }

    /// Register a continuation, exactly as on the unhidden promise.
    pub fn subscribe(&self) -> Subscription<T, E> {
        Subscription::new(self.settled.clone())
    }
}

impl<T, E> Clone for Hidden<T, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            settled: self.settled.clone(),
        }
    }
}

impl<T, E> IntoSubscription for Hidden<T, E>
where
    T: Value,
    E: Value,
{
    type Output = T;
    type Error = E;
    #[inline]
    fn into_subscription(self) -> Subscription<T, E> {
        self.subscribe()
    }
}

impl<T, E> IntoSubscription for &'_ Hidden<T, E>
where
    T: Value,
    E: Value,
{
    type Output = T;
    type Error = E;
    #[inline]
    fn into_subscription(self) -> Subscription<T, E> {
        self.subscribe()
    }
}
