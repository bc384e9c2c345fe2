mod cell;
mod engine;
mod hidden;
mod promise;
mod promise_ext;
mod ptr;
mod subscription;

pub(self) use cell::SettleCell;
pub(self) use subscription::Settled;

pub use {
    engine::{Builtin, Engine, SettleFn},
    hidden::Hidden,
    promise::Promise,
    promise_ext::PromiseExt,
    ptr::Ptr,
    subscription::Subscription,
};
