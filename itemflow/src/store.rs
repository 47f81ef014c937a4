use futures::{pin_mut, StreamExt};
use futures_signals::signal::{Mutable, MutableSignalCloned, SignalExt, SignalStream};
use tokio::sync::broadcast;

use crate::{FetchResult, Item, ItemRepository};

const ERROR_CHANNEL_CAPACITY: usize = 16;

/// Durable rendering state: the last-known-good item list, empty until the
/// first successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemListState {
    pub items: Vec<Item>,
}

/// State holder for the item listing.
///
/// Owns two channels toward the UI: durable state in a [`Mutable`] and a
/// broadcast of transient error occurrences. One subscription to the
/// repository's single-shot sequence starts at construction and is the only
/// writer for the store's lifetime, so each result is applied atomically with
/// respect to both channels.
pub struct ItemStore {
    state: Mutable<ItemListState>,
    error_tx: broadcast::Sender<()>,
}

impl ItemStore {
    pub fn new<R>(repository: R) -> Self
    where
        R: ItemRepository + 'static,
    {
        let state = Mutable::new(ItemListState::default());
        let (error_tx, _) = broadcast::channel(ERROR_CHANNEL_CAPACITY);

        let state_writer = state.clone();
        let error_writer = error_tx.clone();
        tokio::spawn(async move {
            let results = repository.fetch_item_list();
            pin_mut!(results);
            while let Some(result) = results.next().await {
                Self::apply(&state_writer, &error_writer, result);
            }
        });

        ItemStore { state, error_tx }
    }

    fn apply(
        state: &Mutable<ItemListState>,
        error_tx: &broadcast::Sender<()>,
        result: FetchResult<Vec<Item>>,
    ) {
        match result {
            // Success without data means "no update", not an empty list.
            FetchResult::Success { data: None } => {}
            FetchResult::Success { data: Some(items) } => {
                state.set(ItemListState { items });
            }
            FetchResult::Failure { .. } => {
                // One occurrence per failure; dropped when nobody listens.
                let _ = error_tx.send(());
            }
        }
    }

    pub fn get_state(&self) -> ItemListState {
        self.state.get_cloned()
    }

    pub fn to_signal(&self) -> MutableSignalCloned<ItemListState> {
        self.state.signal_cloned()
    }

    pub fn to_stream(&self) -> SignalStream<MutableSignalCloned<ItemListState>> {
        self.state.signal_cloned().to_stream()
    }

    /// New receiver on the transient error channel. Each failure is observed
    /// at most once per receiver; occurrences are never replayed to late
    /// subscribers.
    pub fn subscribe_errors(&self) -> broadcast::Receiver<()> {
        self.error_tx.subscribe()
    }
}
