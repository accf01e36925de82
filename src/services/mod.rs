pub mod api_client;
pub mod auth;
pub mod error;

pub use api_client::ApiClient;
pub use auth::AuthStore;
pub use error::ApiError;
