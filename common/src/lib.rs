//! Recipe Web Common Library
//!
//! Web(WASM)フロントエンドと共有される型とフィルタ状態ロジック

pub mod types;
pub mod error;
pub mod endpoints;
pub mod catalog;
pub mod view_state;

pub use types::{Recipe, RecipeListResponse};
pub use error::{ApiError, Result};
pub use catalog::Catalog;
pub use view_state::{DetailState, FetchAction, ListState};
