use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::stream::{self, Stream};
use itemflow::{Api, Credentials, FetchResult, Item, ItemRepository, Items, LoginResponse};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("{0}")]
pub struct MockError(pub &'static str);

/// Scripted endpoint: serves a fixed listing, a fixed login token, or fails
/// every call with the given cause.
pub enum MockApi {
    Items(Vec<Item>),
    Login(&'static str),
    Fail(&'static str),
}

impl Api for MockApi {
    type Error = MockError;

    fn fetch_items(&self) -> impl Future<Output = Result<Items, MockError>> + Send {
        async move {
            match self {
                MockApi::Items(items) => Ok(Items {
                    items: items.clone(),
                }),
                MockApi::Login(_) => Ok(Items { items: Vec::new() }),
                MockApi::Fail(cause) => Err(MockError(*cause)),
            }
        }
    }

    fn login(
        &self,
        _credentials: Credentials,
    ) -> impl Future<Output = Result<LoginResponse, MockError>> + Send {
        async move {
            match self {
                MockApi::Login(token) => Ok(LoginResponse {
                    message: (*token).to_string(),
                }),
                MockApi::Items(_) => Ok(LoginResponse {
                    message: "ok".to_string(),
                }),
                MockApi::Fail(cause) => Err(MockError(*cause)),
            }
        }
    }
}

/// Endpoint that counts listing calls, for observing laziness.
pub struct CountingApi {
    pub fetch_calls: Arc<AtomicUsize>,
}

impl Api for CountingApi {
    type Error = MockError;

    fn fetch_items(&self) -> impl Future<Output = Result<Items, MockError>> + Send {
        async move {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Items { items: Vec::new() })
        }
    }

    fn login(
        &self,
        _credentials: Credentials,
    ) -> impl Future<Output = Result<LoginResponse, MockError>> + Send {
        async move { Err(MockError("login not scripted")) }
    }
}

/// Repository stub that replays a canned sequence of results.
pub struct ScriptedRepository {
    pub results: Vec<FetchResult<Vec<Item>>>,
}

impl ItemRepository for ScriptedRepository {
    fn fetch_item_list(&self) -> impl Stream<Item = FetchResult<Vec<Item>>> + Send {
        stream::iter(self.results.clone())
    }
}

pub fn sample_items() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            title: "A".to_string(),
            description: "d".to_string(),
        },
        Item {
            id: 2,
            title: "B".to_string(),
            description: "e".to_string(),
        },
    ]
}
