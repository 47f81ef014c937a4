use crate::tracing_setup::tracing_init;
use futures::{pin_mut, StreamExt};
use itemflow::{ApiItemRepository, HttpApi, ItemListState, ItemStore};
use tracing::{info, warn};

mod tracing_setup;

const BASE_URL: &str = "https://biljard.catchmedia.no/api2/";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_init();

    let repository = ApiItemRepository::new(HttpApi::new(BASE_URL));

    match repository.login("demo", "demo").await {
        Ok(response) => info!("login succeeded: {}", response.message),
        Err(err) => warn!("login failed: {err}"),
    }

    let store = ItemStore::new(repository);
    let mut errors = store.subscribe_errors();

    let loaded = async {
        let states = store.to_stream();
        pin_mut!(states);
        loop {
            match states.next().await {
                Some(state) if !state.items.is_empty() => break state,
                Some(_) => continue,
                None => break ItemListState::default(),
            }
        }
    };

    tokio::select! {
        state = loaded => {
            for item in &state.items {
                info!("{}: {} - {}", item.id, item.title, item.description);
            }
        }
        _ = errors.recv() => {
            warn!("Error loading items");
        }
    }

    Ok(())
}
