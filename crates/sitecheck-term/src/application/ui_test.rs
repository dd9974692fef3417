use async_trait::async_trait;

use super::*;
use crate::domain::models::FetchResult;

struct MockRequestClient {
    fetch_fn: Box<dyn Fn(&str) -> FetchResult + Send + Sync>,
}

#[async_trait]
impl RequestClient for MockRequestClient {
    async fn fetch(&self, query: &str) -> FetchResult {
        return (self.fetch_fn)(query);
    }
}

fn echo_client() -> Arc<dyn RequestClient> {
    return Arc::new(MockRequestClient {
        fetch_fn: Box::new(|query| return FetchResult::Failure(format!("echo {query}"))),
    });
}

#[tokio::test]
async fn it_posts_fetch_results_back_to_the_loop() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let keep_going = run_command(
        Command::Fetch {
            query: "example.com".to_string(),
        },
        &echo_client(),
        &tx,
    );
    assert!(keep_going);

    match rx.recv().await {
        Some(Event::FetchCompleted(FetchResult::Failure(message))) => {
            assert_eq!(message, "echo example.com");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn it_posts_ticks_after_the_delay() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let tick = SpinnerTick { tag: 7 };
    let keep_going = run_command(
        Command::ScheduleTick {
            tick,
            after: Duration::from_millis(5),
        },
        &echo_client(),
        &tx,
    );
    assert!(keep_going);

    match rx.recv().await {
        Some(Event::SpinnerTick(received)) => assert_eq!(received, tick),
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn it_stops_on_quit() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    assert!(!run_command(Command::Quit, &echo_client(), &tx));

    drop(tx);
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn it_survives_results_arriving_after_the_loop_is_gone() {
    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);

    let fetch = spawn_fetch(echo_client(), "example.com".to_string(), tx.clone());
    let tick = spawn_tick(SpinnerTick { tag: 1 }, Duration::from_millis(1), tx);

    assert!(fetch.await.is_ok());
    assert!(tick.await.is_ok());
}
