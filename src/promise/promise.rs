use super::{Builtin, Engine, Hidden, SettleCell, Settled, Subscription};
use crate::{IntoSubscription, Value};
use futures::FutureExt;
use std::{future::Future, sync::Arc};

/// An awaitable that is settled from the outside. There is no work function;
/// in addition to [`subscribe`](Promise::subscribe), the promise exposes
/// [`fulfill`](Promise::fulfill) and [`reject`](Promise::reject), callable
/// from any call site holding a handle, exactly as a work function would call
/// its producer arguments.
///
/// The first settlement wins. Every later call to `fulfill` or `reject`,
/// with any argument, is a silent no-op; this holds whether settlement
/// happens before, during, or after the underlying engine finishes building
/// its awaitable.
///
/// Cloning shares the same settlement state. The clone carries the full
/// settlement capability; hand out [`hide`](Promise::hide) views to consumers
/// who must only observe.
pub struct Promise<T, E> {
    cell: Arc<SettleCell<Result<T, E>>>,
    settled: Settled<T, E>,
}

impl<T, E> Promise<T, E>
where
    T: Value,
    E: Value,
{
    /// Create a pending promise on the builtin oneshot engine.
    pub fn new() -> Self {
        Self::with_engine(&Builtin)
    }

    /// Create a pending promise on a caller-supplied engine. The engine may
    /// invoke its producer synchronously or defer it; settlements that
    /// arrive before it does are parked and delivered once it attaches,
    /// first write still winning.
    pub fn with_engine<Ng>(engine: &Ng) -> Self
    where
        Ng: Engine<Result<T, E>>,
    {
        let cell = Arc::new(SettleCell::new());
        let attach_to = cell.clone();
        let awaitable = engine.build(move |settle| attach_to.attach(settle));
        Promise {
            cell,
            settled: awaitable.boxed().shared(),
        }
    }

    /// Create an already-fulfilled promise. Useful for mocks handed to
    /// consumers.
    pub fn from_value(value: T) -> Self {
        let promise = Self::new();
        promise.fulfill(value);
        promise
    }

    /// Create an already-rejected promise.
    pub fn from_err(reason: E) -> Self {
        let promise = Self::new();
        promise.reject(reason);
        promise
    }

    /// Settle with a fulfillment value. A no-op if the promise is already
    /// settled. Returns `self` for chaining; never fails.
    pub fn fulfill(&self, value: T) -> &Self {
        self.cell.settle(Ok(value));
        self
    }

    /// Settle with a rejection reason. A no-op if the promise is already
    /// settled. Returns `self` for chaining; never fails.
    pub fn reject(&self, reason: E) -> &Self {
        self.cell.settle(Err(reason));
        self
    }

    /// Whether a settlement has been recorded. The outcome itself is only
    /// observable through a subscription.
    pub fn is_settled(&self) -> bool {
        self.cell.is_settled()
    }

    /// Run a producer on a later turn of the runtime, handing it the
    /// settlement capability — the late-bound twin of the work function a
    /// promise constructor would normally take. The producer is never
    /// invoked synchronously within `work`, and the promise is never settled
    /// before `work` returns. A producer returning `Err` rejects the
    /// promise; if the promise was settled by other means first, that
    /// error is discarded like any other late settlement.
    pub fn work<F, Fut>(&self, producer: F) -> &Self
    where
        F: 'static + Send + FnOnce(Promise<T, E>) -> Fut,
        Fut: 'static + Send + Future<Output = Result<(), E>>,
    {
        let this = self.clone();
        tokio::spawn(async move {
            if let Err(reason) = producer(this.clone()).await {
                this.reject(reason);
            }
        });
        self
    }

    /// Forward the eventual outcome of a foreign awaitable into this
    /// promise: fulfillment fulfills, rejection rejects. If this promise is
    /// already settled by the time the foreign awaitable settles, the
    /// forwarded outcome is discarded; that is not an error. `adopt` itself
    /// cannot fail and always hands back the promise.
    pub fn adopt<F>(&self, foreign: F) -> &Self
    where
        F: 'static + Send + Future<Output = Result<T, E>>,
    {
        let this = self.clone();
        tokio::spawn(async move {
            match foreign.await {
                Ok(value) => this.fulfill(value),
                Err(reason) => this.reject(reason),
            };
        });
        self
    }

    /// Register a continuation: a future resolving with this promise's
    /// outcome. Every subscription, whenever registered, observes the same
    /// first-recorded outcome.
    pub fn subscribe(&self) -> Subscription<T, E> {
        Subscription::new(self.settled.clone())
    }

    /// A read-only view of this promise. The returned handle shares the
    /// identical awaitable but exposes no settlement operation, so it is
    /// safe to hand to consumers who must not be able to settle.
    pub fn hide(&self) -> Hidden<T, E> {
        Hidden::new(self.settled.clone())
    }
}

impl<T, E> Default for Promise<T, E>
where
    T: Value,
    E: Value,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for Promise<T, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
            settled: self.settled.clone(),
        }
    }
}

impl<T, E> IntoSubscription for Promise<T, E>
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

impl<T, E> IntoSubscription for &'_ Promise<T, E>
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
