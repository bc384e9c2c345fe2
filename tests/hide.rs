use extrinsic::*;
use futures::FutureExt;
use tokio::test;

#[test]
async fn hidden_view_observes_the_same_outcome() {
    let promise = Promise::<u32, &str>::new();
    let hidden = promise.hide();
    promise.fulfill(5);
    assert_eq!(hidden.subscribe().await, Ok(5));
    assert_eq!(promise.subscribe().await, Ok(5));
}

#[test]
async fn hidden_view_registered_before_settlement() {
    let promise = Promise::<u32, &str>::new();
    let subscription = promise.hide().subscribe();
    assert!(subscription.clone().now_or_never().is_none());
    promise.reject("no");
    assert_eq!(subscription.await, Err("no"));
}

#[test]
async fn hidden_view_is_freely_shareable() {
    let promise = Promise::<u32, &str>::new();
    let hidden = promise.hide();
    let copy = hidden.clone();
    promise.fulfill(8);
    assert_eq!(hidden.subscribe().await, Ok(8));
    assert_eq!(copy.subscribe().await, Ok(8));
}

#[test]
async fn hidden_view_chains_through_combinators() {
    let promise = Promise::<u32, &str>::new();
    let doubled = promise.hide().map(|v| async move { Ok(v * 2) });
    promise.fulfill(21);
    assert_eq!(doubled.subscribe().await, Ok(42));
}
