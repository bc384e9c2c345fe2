use futures::{
    channel::oneshot,
    future::{self, BoxFuture},
    FutureExt,
};
use std::future::Future;

/// The callback an engine hands back for settling the awaitable it built.
pub type SettleFn<O> = Box<dyn FnOnce(O) + Send>;

/// Contract required of a host awaitable engine.
///
/// The engine invokes `producer` exactly once — synchronously or on a later
/// turn, at its discretion — handing it the callback that settles the
/// awaitable returned from `build`. At most one call to that callback may be
/// observed by the awaitable.
///
/// Both fulfillment and rejection of a [`Promise`](super::Promise) travel
/// through the callback as a single `Result` outcome, so the engine's own
/// failure path (if it has one) is never involved in settlement.
pub trait Engine<O>
where
    O: Send + 'static,
{
    type Awaitable: Future<Output = O> + Send + 'static;

    fn build<P>(&self, producer: P) -> Self::Awaitable
    where
        P: FnOnce(SettleFn<O>) + Send + 'static;
}

/// The default engine: a oneshot channel whose receiver side is the
/// awaitable. The producer is invoked synchronously during `build`.
pub struct Builtin;

impl<O> Engine<O> for Builtin
where
    O: Send + 'static,
{
    type Awaitable = BoxFuture<'static, O>;

    fn build<P>(&self, producer: P) -> Self::Awaitable
    where
        P: FnOnce(SettleFn<O>) + Send + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        producer(Box::new(move |outcome| {
            // Nobody listening is fine; the outcome is simply unobserved.
            let _ = sender.send(outcome);
        }));
        async move {
            match receiver.await {
                Ok(outcome) => outcome,
                // The settle callback was dropped without firing. The
                // promise stays pending for good; dropping the settlement
                // capability is not a settlement.
                Err(oneshot::Canceled) => future::pending().await,
            }
        }
        .boxed()
    }
}
