//! Per-owner change feed shared by the store adapters.
//!
//! Each owner gets a lazily created broadcast channel. Subscribers that lag
//! behind the channel capacity receive a single `Resync` in place of the
//! dropped events.

use std::collections::HashMap;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::RwLock;

use crate::domain::foundation::UserId;
use crate::domain::submission::SubmissionChange;
use crate::ports::SubmissionFeed;

/// Default number of buffered changes per owner.
pub const DEFAULT_FEED_CAPACITY: usize = 64;

/// Fan-out of submission changes, keyed by owner.
pub struct ChangeFeedHub {
    channels: RwLock<HashMap<UserId, broadcast::Sender<SubmissionChange>>>,
    capacity: usize,
}

impl ChangeFeedHub {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_FEED_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    /// Opens a feed for `owner`. Only changes published afterwards are seen.
    pub async fn subscribe(&self, owner: &UserId) -> SubmissionFeed {
        let receiver = {
            let mut channels = self.channels.write().await;
            channels
                .entry(owner.clone())
                .or_insert_with(|| broadcast::channel(self.capacity).0)
                .subscribe()
        };

        let owner = owner.clone();
        Box::pin(futures::stream::unfold(receiver, move |mut receiver| {
            let owner = owner.clone();
            async move {
                match receiver.recv().await {
                    Ok(change) => Some((change, receiver)),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(owner = %owner, skipped, "Change feed lagged, requesting resync");
                        Some((SubmissionChange::Resync, receiver))
                    }
                    Err(RecvError::Closed) => None,
                }
            }
        }))
    }

    /// Announces a change to every current subscriber of `owner`.
    pub async fn publish(&self, owner: &UserId, change: SubmissionChange) {
        let channels = self.channels.read().await;
        if let Some(sender) = channels.get(owner) {
            let kind = change.kind();
            // No receivers is not an error: nobody is watching.
            if let Ok(receivers) = sender.send(change) {
                tracing::trace!(owner = %owner, kind, receivers, "Published submission change");
            }
        }
    }
}

impl Default for ChangeFeedHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn owner(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn subscriber_receives_changes_for_its_owner_only() {
        let hub = ChangeFeedHub::new();
        let mut alice = hub.subscribe(&owner("alice")).await;
        let _bob = hub.subscribe(&owner("bob")).await;

        hub.publish(&owner("bob"), SubmissionChange::Cleared).await;
        hub.publish(&owner("alice"), SubmissionChange::Resync).await;

        assert_eq!(alice.next().await, Some(SubmissionChange::Resync));
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_a_no_op() {
        let hub = ChangeFeedHub::new();
        hub.publish(&owner("nobody"), SubmissionChange::Cleared).await;
    }

    #[tokio::test]
    async fn lagging_subscriber_gets_resync() {
        let hub = ChangeFeedHub::with_capacity(2);
        let mut feed = hub.subscribe(&owner("alice")).await;

        for _ in 0..5 {
            hub.publish(&owner("alice"), SubmissionChange::Cleared).await;
        }

        assert_eq!(feed.next().await, Some(SubmissionChange::Resync));
        assert_eq!(feed.next().await, Some(SubmissionChange::Cleared));
    }
}
