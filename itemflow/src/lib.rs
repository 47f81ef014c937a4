mod api;
mod fetch_result;
mod model;
mod repository;
mod store;

pub use api::*;
pub use fetch_result::*;
pub use model::*;
pub use repository::*;
pub use store::*;
