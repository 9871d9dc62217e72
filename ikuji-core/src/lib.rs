// Models are always available
pub mod models;

// Server-only modules
#[cfg(feature = "server")]
pub mod ai;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod http;
#[cfg(feature = "server")]
pub mod openai;

// Re-export commonly used types
pub use models::Mode;

#[cfg(feature = "server")]
pub use config::Config;
