//! Tests for the known-issue runner and its log output.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::instrument::WithSubscriber;

use crate::common::known_issue;

const REASON: &str = "demo drops writes";

/// Collects everything a fmt subscriber writes.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

async fn run_captured<F>(scenario: F) -> (bool, String)
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let passed = known_issue(REASON, scenario)
        .with_subscriber(subscriber)
        .await;
    (passed, captured.contents())
}

#[tokio::test]
async fn test_failing_scenario_logs_xfail_with_reason() {
    let (passed, logs) = run_captured(async {
        assert_eq!(404, 200, "pet vanished");
    })
    .await;

    assert!(!passed);
    assert!(logs.contains("XFAIL"), "{}", logs);
    assert!(logs.contains(REASON), "{}", logs);
    assert!(logs.contains("pet vanished"), "{}", logs);
}

#[tokio::test]
async fn test_passing_scenario_logs_xpass_warning() {
    let (passed, logs) = run_captured(async {}).await;

    assert!(passed);
    assert!(logs.contains("WARN"), "{}", logs);
    assert!(logs.contains("XPASS"), "{}", logs);
    assert!(logs.contains(REASON), "{}", logs);
}
