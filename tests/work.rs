use extrinsic::*;
use futures::FutureExt;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};
use tokio::test;

#[test]
async fn producer_never_runs_synchronously() {
    let promise = Promise::<u32, &str>::new();
    let ran = Arc::new(AtomicBool::new(false));
    let flag = ran.clone();
    promise.work(move |p| {
        flag.store(true, Ordering::SeqCst);
        async move {
            p.fulfill(1);
            Ok(())
        }
    });
    // Still this turn: the producer has not started and nothing is settled.
    assert!(!ran.load(Ordering::SeqCst));
    assert!(!promise.is_settled());

    assert_eq!(promise.subscribe().await, Ok(1));
    assert!(ran.load(Ordering::SeqCst));
}

#[test]
async fn producer_fulfills_through_the_handle() {
    let promise = Promise::<u32, &str>::new();
    promise.work(|p| async move {
        p.fulfill(7);
        Ok(())
    });
    assert_eq!(promise.subscribe().await, Ok(7));
}

#[test]
async fn producer_error_rejects() {
    let promise = Promise::<u32, &str>::new();
    promise.work(|_| async { Err("boom") });
    assert_eq!(promise.subscribe().await, Err("boom"));
}

#[test]
async fn producer_error_loses_to_an_earlier_settlement() {
    let promise = Promise::<u32, &str>::new();
    promise.fulfill(1);
    promise.work(|_| async { Err("late") });
    // Let the producer's turn run before checking.
    tokio::task::yield_now().await;
    assert_eq!(promise.subscribe().await, Ok(1));
}

#[test]
async fn panicking_producer_leaves_the_promise_pending() {
    let promise = Promise::<u32, &str>::new();
    promise.work(|_| async { panic!("producer blew up") });
    tokio::task::yield_now().await;
    // The panic killed the forwarding task; nothing was settled and the
    // promise remains settleable.
    assert!(!promise.is_settled());
    assert!(promise.subscribe().now_or_never().is_none());
    promise.fulfill(1);
    assert_eq!(promise.subscribe().await, Ok(1));
}

#[test]
async fn delayed_producer_settles_only_after_the_delay() {
    let started = Instant::now();
    let promise = Promise::<u32, &str>::new();
    promise.work(|p| async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        p.fulfill(1);
        Ok(())
    });
    assert_eq!(promise.subscribe().await, Ok(1));
    assert!(started.elapsed() >= Duration::from_millis(10));
}

#[test]
async fn work_is_chainable() {
    let promise = Promise::<u32, &str>::new();
    let subscription = promise
        .work(|p| async move {
            p.fulfill(2);
            Ok(())
        })
        .subscribe();
    assert_eq!(subscription.await, Ok(2));
}
