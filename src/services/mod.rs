// ============================================================================
// SERVICES - SOLO comunicación con el exterior (HTTP, storage, navegación)
// ============================================================================

pub mod api_client;
pub mod error;
pub mod http;
pub mod navigator;
pub mod persistence;

pub use api_client::ApiClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use navigator::{MemoryNavigator, Navigator};
pub use persistence::SessionPersistence;

#[cfg(target_arch = "wasm32")]
pub use http::GlooTransport;
#[cfg(target_arch = "wasm32")]
pub use navigator::BrowserNavigator;
