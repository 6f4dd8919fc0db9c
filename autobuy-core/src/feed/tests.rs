use super::random::RandomTickSource;
use super::*;
use autobuy::traits::execution::ExecutionError;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct CountingListener {
    seen: AtomicUsize,
}

impl CountingListener {
    fn seen(&self) -> usize {
        self.seen.load(Ordering::SeqCst)
    }
}

impl PriceListener for CountingListener {
    fn on_price_update(&self, _update: &PriceUpdate) -> Result<(), ExecutionError> {
        self.seen.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct FailingListener;

impl PriceListener for FailingListener {
    fn on_price_update(&self, _update: &PriceUpdate) -> Result<(), ExecutionError> {
        Err(ExecutionError::Unavailable("venue down".into()))
    }
}

/// Subscribes another listener to the feed from inside its own callback.
struct ReentrantListener {
    feed: Arc<PriceFeed>,
    extra: Arc<CountingListener>,
}

impl PriceListener for ReentrantListener {
    fn on_price_update(&self, _update: &PriceUpdate) -> Result<(), ExecutionError> {
        self.feed.subscribe(self.extra.clone() as Arc<dyn PriceListener>);
        Ok(())
    }
}

fn update(security: &str, price: f64) -> PriceUpdate {
    PriceUpdate::new(security, price)
}

#[test]
fn subscribe_and_unsubscribe_adjust_the_listener_count() {
    let feed = PriceFeed::new();
    let first: Arc<dyn PriceListener> = Arc::new(CountingListener::default());
    let second: Arc<dyn PriceListener> = Arc::new(CountingListener::default());

    feed.subscribe(first.clone());
    assert_eq!(feed.listener_count(), 1);
    feed.subscribe(second.clone());
    assert_eq!(feed.listener_count(), 2);

    feed.unsubscribe(&second);
    assert_eq!(feed.listener_count(), 1);
    feed.unsubscribe(&first);
    assert_eq!(feed.listener_count(), 0);
}

#[test]
fn unsubscribing_a_stranger_is_a_no_op() {
    let feed = PriceFeed::new();
    let subscribed: Arc<dyn PriceListener> = Arc::new(CountingListener::default());
    let stranger: Arc<dyn PriceListener> = Arc::new(CountingListener::default());

    feed.subscribe(subscribed);
    feed.unsubscribe(&stranger);

    assert_eq!(feed.listener_count(), 1);
}

#[test]
fn duplicate_subscriptions_deliver_once_each() {
    let feed = PriceFeed::new();
    let listener = Arc::new(CountingListener::default());

    feed.subscribe(listener.clone());
    feed.subscribe(listener.clone());
    feed.publish(&update("IBM", 25.0));

    assert_eq!(listener.seen(), 2);

    // One unsubscribe removes one subscription, not both.
    let as_listener: Arc<dyn PriceListener> = listener.clone();
    feed.unsubscribe(&as_listener);
    assert_eq!(feed.listener_count(), 1);
}

#[test]
fn failing_listener_does_not_block_others() {
    let feed = PriceFeed::new();
    let counting = Arc::new(CountingListener::default());

    feed.subscribe(Arc::new(FailingListener));
    feed.subscribe(counting.clone());
    feed.publish(&update("IBM", 25.0));

    assert_eq!(counting.seen(), 1);
}

#[test]
fn listeners_may_mutate_the_set_mid_tick() {
    let feed = Arc::new(PriceFeed::new());
    let extra = Arc::new(CountingListener::default());
    feed.subscribe(Arc::new(ReentrantListener {
        feed: feed.clone(),
        extra: extra.clone(),
    }));

    feed.publish(&update("IBM", 25.0));

    // The subscription made mid-tick missed the in-progress snapshot but is
    // active for the next one.
    assert_eq!(extra.seen(), 0);
    assert_eq!(feed.listener_count(), 2);

    feed.publish(&update("IBM", 24.0));
    assert_eq!(extra.seen(), 1);
}

#[test]
fn random_source_is_bounded_and_in_range() {
    let candidates = ["NVDA", "IBM", "HP", "AMD", "GOOGL"];
    let mut source = RandomTickSource::new(10);

    let mut seen = 0;
    while let Some(tick) = source.next_tick() {
        seen += 1;
        assert!(candidates.contains(&tick.get_security()));
        assert!(tick.get_price() > 1.0);
        assert!(tick.get_price() <= 200.0);
    }

    assert_eq!(seen, 10);
    assert!(source.next_tick().is_none());
}

#[tokio::test]
async fn run_distributes_every_tick_and_completes() {
    let feed = Arc::new(PriceFeed::new());
    let listener = Arc::new(CountingListener::default());
    feed.subscribe(listener.clone());

    let handle = Arc::clone(&feed).start(RandomTickSource::new(10));
    handle.join().await.unwrap();

    assert_eq!(listener.seen(), 10);
}

#[tokio::test]
async fn restart_after_completion_runs_again() {
    let feed = Arc::new(PriceFeed::new());
    let listener = Arc::new(CountingListener::default());
    feed.subscribe(listener.clone());

    Arc::clone(&feed)
        .start(RandomTickSource::new(3))
        .join()
        .await
        .unwrap();
    Arc::clone(&feed)
        .start(RandomTickSource::new(2))
        .join()
        .await
        .unwrap();

    assert_eq!(listener.seen(), 5);
}

#[tokio::test]
async fn aborted_run_surfaces_cancellation() {
    let feed = Arc::new(PriceFeed::new().with_tick_interval(Duration::from_secs(60)));
    let handle = feed.start(RandomTickSource::new(10));
    handle.abort();

    match handle.join().await {
        Err(FeedError::Cancelled) => {}
        other => panic!("expected cancellation, got {other:?}"),
    }
}

#[tokio::test]
async fn join_timeout_aborts_a_slow_run() {
    let feed = Arc::new(PriceFeed::new().with_tick_interval(Duration::from_secs(60)));
    let listener = Arc::new(CountingListener::default());
    feed.subscribe(listener.clone());

    let handle = Arc::clone(&feed).start(RandomTickSource::new(10));

    match handle.join_timeout(Duration::from_millis(50)).await {
        Err(FeedError::Timeout(_)) => {}
        other => panic!("expected timeout, got {other:?}"),
    }
}
