use crate::{IntoSubscription, Value};
use futures::{
    future::{BoxFuture, Shared},
    FutureExt,
};
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

/// The shared awaitable every subscriber of a promise polls. Cloning it is
/// how a continuation gets registered; all clones resolve with the identical
/// first-recorded outcome.
pub(crate) type Settled<T, E> = Shared<BoxFuture<'static, Result<T, E>>>;

/// A registered continuation: a future resolving with the promise's outcome,
/// `Ok` for fulfillment and `Err` for rejection. Subscriptions are cheap to
/// clone and may outlive the promise that produced them.
pub struct Subscription<T, E> {
    settled: Settled<T, E>,
}

impl<T, E> Subscription<T, E> {
    pub(crate) fn new(settled: Settled<T, E>) -> Self {
        Self { settled }
    }
}

impl<T, E> Future for Subscription<T, E>
where
    T: Value,
    E: Value,
{
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.settled.poll_unpin(cx)
    }
}

impl<T, E> Clone for Subscription<T, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            settled: self.settled.clone(),
        }
    }
}

impl<T, E> IntoSubscription for Subscription<T, E>
where
    T: Value,
    E: Value,
{
    type Output = T;
    type Error = E;
    #[inline]
    fn into_subscription(self) -> Subscription<T, E> {
        self
    }
}
