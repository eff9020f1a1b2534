// src/discovery/pacing.rs
// Pause between repositories so a run stays under GitHub's hourly ceiling.
// Discovery takes the pacer as a parameter; tests use one that records the
// requested delays and returns immediately.

use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, delay: Duration);
}

/// Sleeps on the tokio timer.
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
