use crate::core::counter::CartCounter;
use crate::core::{CountDisplay, KeyValueStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

/// Published after every successful write, whatever the key. Filtering is
/// the subscriber's job.
#[derive(Debug, Clone)]
pub struct StoreEvent {
    pub key: String,
}

/// Store wrapper that publishes a `StoreEvent` after each write, replacing
/// the page-global patch of the write primitive with explicit, scoped
/// subscriptions. The inner write always runs first and is never altered;
/// a failed write publishes nothing.
pub struct NotifyingStore<S: KeyValueStore> {
    inner: S,
    events: broadcast::Sender<StoreEvent>,
}

impl<S: KeyValueStore> NotifyingStore<S> {
    pub fn new(inner: S) -> Self {
        let (events, _) = broadcast::channel(64);
        Self { inner, events }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}

#[async_trait]
impl<S: KeyValueStore> KeyValueStore for NotifyingStore<S> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.inner.set(key, value).await?;

        // Send fails only when no subscriber exists, which is fine.
        let _ = self.events.send(StoreEvent {
            key: key.to_string(),
        });
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(key).await
    }
}

/// Couples a store event receiver to a counter: writes to the cart key
/// trigger a recount, writes to any other key are ignored. Dropping the
/// subscription uninstalls it.
pub struct CartCountSubscription<S: KeyValueStore, D: CountDisplay> {
    events: broadcast::Receiver<StoreEvent>,
    counter: CartCounter<S, D>,
}

impl<S: KeyValueStore, D: CountDisplay> CartCountSubscription<S, D> {
    pub fn new(events: broadcast::Receiver<StoreEvent>, counter: CartCounter<S, D>) -> Self {
        Self { events, counter }
    }

    /// Drain buffered events, recounting once per cart write. Returns the
    /// last rendered count, or `None` when no cart write was pending.
    pub async fn process_pending(&mut self) -> Result<Option<u64>> {
        let mut last = None;

        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    if event.key == self.counter.cart_key() {
                        last = Some(self.counter.recompute_and_display().await?);
                    }
                }
                Err(TryRecvError::Lagged(missed)) => {
                    tracing::warn!("Missed {} store events, recounting", missed);
                    last = Some(self.counter.recompute_and_display().await?);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }

        Ok(last)
    }

    /// Long-lived loop for embedding hosts: recount on every cart write
    /// until the store is dropped.
    pub async fn run(mut self) -> Result<()> {
        loop {
            match self.events.recv().await {
                Ok(event) => {
                    if event.key == self.counter.cart_key() {
                        self.counter.recompute_and_display().await?;
                    }
                }
                Err(RecvError::Lagged(missed)) => {
                    tracing::warn!("Missed {} store events, recounting", missed);
                    self.counter.recompute_and_display().await?;
                }
                Err(RecvError::Closed) => break,
            }
        }

        Ok(())
    }
}
