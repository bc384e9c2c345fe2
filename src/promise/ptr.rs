use by_address::ByAddress;
use std::{error::Error, fmt, hash::Hash, ops::Deref, sync::Arc};

/// A thin wrapper around `T` giving cheap clones and identity comparison.
/// Internally an `Arc` compared by address rather than by the pointed-to
/// value.
///
/// Its main job here is carrying rejection reasons: most error types are not
/// `Clone` and so cannot flow through a promise directly, but wrapped in
/// `Ptr` they can, and `Ptr<T>` forwards `Error` where `T: Error`.
///
/// Because comparison is by address, two separately wrapped but equal values
/// compare unequal. If value comparison matters, use `Arc` directly.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct Ptr<T> {
    inner: ByAddress<Arc<T>>,
}

impl<T> Ptr<T> {
    #[inline]
    pub fn new(wrapped: T) -> Self {
        Self {
            inner: ByAddress(Arc::new(wrapped)),
        }
    }
}

impl<T> Deref for Ptr<T> {
    type Target = T;
    #[inline]
    fn deref(&self) -> &Self::Target {
        self.inner.deref()
    }
}

impl<T> AsRef<T> for Ptr<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        self.inner.as_ref()
    }
}

impl<T> Clone for Ptr<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> PartialEq for Ptr<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq(&other.inner)
    }
}

impl<T> Eq for Ptr<T> {}

impl<T> Hash for Ptr<T> {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state)
    }
}

impl<T> fmt::Display for Ptr<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<T> Error for Ptr<T>
where
    T: Error,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }
}

impl<T> From<T> for Ptr<T> {
    #[inline]
    fn from(t: T) -> Self {
        Self::new(t)
    }
}
