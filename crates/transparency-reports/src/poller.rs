//! Periodic gating-token balance polling
//!
//! Every tick spawns an independent fetch; whichever fetch completes last
//! wins. Failures publish a zero balance until the next successful poll.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

use crate::access::{AccessTier, tier_for};
use crate::indexer::BalanceSource;

/// Last published balance and the tier it grants
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalanceSnapshot {
    pub balance_micro: i64,
    pub tier: AccessTier,
    /// `None` until the first fetch completes
    pub fetched_at: Option<DateTime<Utc>>,
}

impl BalanceSnapshot {
    pub fn new(balance_micro: i64) -> Self {
        Self {
            balance_micro,
            tier: tier_for(balance_micro),
            fetched_at: Some(Utc::now()),
        }
    }

    /// Before any fetch has completed
    pub fn unknown() -> Self {
        Self {
            balance_micro: 0,
            tier: tier_for(0),
            fetched_at: None,
        }
    }
}

/// Fetch once. A failed fetch is logged and treated as a zero balance.
pub async fn poll_once(source: &dyn BalanceSource) -> BalanceSnapshot {
    match source.fetch_balance().await {
        Ok(balance) => BalanceSnapshot::new(balance),
        Err(e) => {
            warn!("Balance fetch failed, falling back to {}: {}", tier_for(0), e);
            BalanceSnapshot::new(0)
        }
    }
}

pub struct BalancePoller {
    handle: JoinHandle<()>,
    rx: watch::Receiver<BalanceSnapshot>,
}

impl BalancePoller {
    /// Start polling immediately, then every `interval`
    pub fn spawn(source: Arc<dyn BalanceSource>, interval: Duration) -> Self {
        let (tx, rx) = watch::channel(BalanceSnapshot::unknown());
        let tx = Arc::new(tx);

        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                debug!("Polling balance");

                let source = Arc::clone(&source);
                let tx = Arc::clone(&tx);
                // Not awaited: a slow fetch may overlap the next tick
                tokio::spawn(async move {
                    let snapshot = poll_once(source.as_ref()).await;
                    tx.send_replace(snapshot);
                });
            }
        });

        Self { handle, rx }
    }

    pub fn subscribe(&self) -> watch::Receiver<BalanceSnapshot> {
        self.rx.clone()
    }

    pub fn latest(&self) -> BalanceSnapshot {
        *self.rx.borrow()
    }

    /// Stop the timer. Fetches already in flight still publish.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for BalancePoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
