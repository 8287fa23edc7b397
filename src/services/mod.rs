pub mod http;
pub mod api_client;
pub mod context;
pub mod auth_service;
pub mod authorized_client;
pub mod vote_service;
pub mod admin_service;

pub use http::{HttpRequest, HttpResponse, HttpTransport, Method};
pub use api_client::ApiClient;
pub use context::*;
pub use auth_service::*;
pub use authorized_client::*;
pub use vote_service::*;
pub use admin_service::*;
