use crate::*;
use std::future::Future;

/// Method forms of the continuation combinators, available on anything that
/// can produce a [`Subscription`]: `Promise`, `&Promise`, [`Hidden`],
/// `&Hidden`, and `Subscription` itself.
pub trait PromiseExt: Sized + IntoSubscription {
    #[inline]
    fn then<U, F, G, FutF, FutG>(self, on_fulfilled: F, on_rejected: G) -> Promise<U, Self::Error>
    where
        U: Value,
        F: 'static + Send + FnOnce(Self::Output) -> FutF,
        G: 'static + Send + FnOnce(Self::Error) -> FutG,
        FutF: 'static + Send + Future<Output = Result<U, Self::Error>>,
        FutG: 'static + Send + Future<Output = Result<U, Self::Error>>,
    {
        then(self, on_fulfilled, on_rejected)
    }

    #[inline]
    fn map<U, F, Fut>(self, f: F) -> Promise<U, Self::Error>
    where
        U: Value,
        F: 'static + Send + FnOnce(Self::Output) -> Fut,
        Fut: 'static + Send + Future<Output = Result<U, Self::Error>>,
    {
        map(self, f)
    }

    #[inline]
    fn rescue<F, Fut>(self, f: F) -> Promise<Self::Output, Self::Error>
    where
        F: 'static + Send + FnOnce(Self::Error) -> Fut,
        Fut: 'static + Send + Future<Output = Result<Self::Output, Self::Error>>,
    {
        rescue(self, f)
    }
}

impl<P> PromiseExt for P where P: IntoSubscription {}
