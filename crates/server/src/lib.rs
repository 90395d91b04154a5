//! facegate server - HTTP surface of the face detection proxy
//!
//! Exposes the facegate core over a small JSON API. Each request is
//! validated, forwarded to the cloud face service and the vendor payload is
//! relayed back, with an empty detection turned into
//! `{"face": "No face detected"}`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `POST /detectface` - Face ids and rectangles
//! - `POST /detectfacelandmarks` - Face landmarks
//! - `POST /detectfaceemotions` - Age, gender and head pose
//! - `POST /findsimilar` - Same-person check across two images
//! - `GET /docs` - OpenAPI document
//! - `GET /health` - Liveness probe
//! - `GET /` - Service information

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
