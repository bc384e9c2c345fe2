use crate::*;
use std::future::{ready, Future};

/// Register a pair of continuation handlers and get a chained promise back.
/// At most one handler runs, chosen by the observed outcome; its `Ok`
/// fulfills the chained promise and its `Err` rejects it, so a rejection
/// handler may recover. Handlers run on a spawned task, never within the
/// call to `then`.
pub fn then<P, U, F, G, FutF, FutG>(
    promise: P,
    on_fulfilled: F,
    on_rejected: G,
) -> Promise<U, P::Error>
where
    P: IntoSubscription,
    U: Value,
    F: 'static + Send + FnOnce(P::Output) -> FutF,
    G: 'static + Send + FnOnce(P::Error) -> FutG,
    FutF: 'static + Send + Future<Output = Result<U, P::Error>>,
    FutG: 'static + Send + Future<Output = Result<U, P::Error>>,
{
    let subscription = promise.into_subscription();
    let chained = Promise::new();
    let settle = chained.clone();
    tokio::spawn(async move {
        let outcome = match subscription.await {
            Ok(value) => on_fulfilled(value).await,
            Err(reason) => on_rejected(reason).await,
        };
        match outcome {
            Ok(value) => settle.fulfill(value),
            Err(reason) => settle.reject(reason),
        };
    });
    chained
}

/// The fulfilled-path half of [`then`]: rejection passes through untouched.
pub fn map<P, U, F, Fut>(promise: P, f: F) -> Promise<U, P::Error>
where
    P: IntoSubscription,
    U: Value,
    F: 'static + Send + FnOnce(P::Output) -> Fut,
    Fut: 'static + Send + Future<Output = Result<U, P::Error>>,
{
    then(promise, f, |reason| ready(Err(reason)))
}

/// The rejected-path half of [`then`]: fulfillment passes through untouched.
pub fn rescue<P, F, Fut>(promise: P, f: F) -> Promise<P::Output, P::Error>
where
    P: IntoSubscription,
    F: 'static + Send + FnOnce(P::Error) -> Fut,
    Fut: 'static + Send + Future<Output = Result<P::Output, P::Error>>,
{
    then(promise, |value| ready(Ok(value)), f)
}
