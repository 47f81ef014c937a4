use futures::stream::{self, Stream};
use tracing::error;

use crate::{Api, Credentials, FetchResult, Item, LoginResponse};

/// Fixed diagnostic attached to every absorbed fetch failure. The raw error
/// never crosses the repository boundary.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading items";

pub trait ItemRepository: Send + Sync {
    /// Lazy single-shot sequence: nothing runs until the stream is polled,
    /// exactly one terminal [`FetchResult`] is emitted, then it completes.
    fn fetch_item_list(&self) -> impl Stream<Item = FetchResult<Vec<Item>>> + Send;
}

/// Endpoint-backed repository. Fetch failures are absorbed here, logged for
/// diagnostics and converted to `Failure` data. Login failures are not.
pub struct ApiItemRepository<A: Api> {
    api: A,
}

impl<A: Api> ApiItemRepository<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Single request/response login. Credentials are built here and dropped
    /// when the call returns; errors propagate to the caller untouched.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, A::Error> {
        self.api.login(Credentials::new(username, password)).await
    }
}

impl<A: Api> ItemRepository for ApiItemRepository<A> {
    fn fetch_item_list(&self) -> impl Stream<Item = FetchResult<Vec<Item>>> + Send {
        stream::once(async move {
            match self.api.fetch_items().await {
                Ok(envelope) => FetchResult::success(Some(envelope.items)),
                Err(err) => {
                    error!(error = %err, "item list fetch failed");
                    FetchResult::failure(LOAD_ERROR_MESSAGE)
                }
            }
        })
    }
}
