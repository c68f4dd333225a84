//! Typed client for the Shortcut REST API v3
//!
//! Every method on [`ShortcutClient`] maps to one endpoint: it builds the
//! path and body, sends a single blocking request authenticated with the
//! `Shortcut-Token` header, turns non-2xx answers into a [`ShortcutError`]
//! and decodes the body into a record from [`types`].
//!
//! # Example
//!
//! ```rust,no_run
//! use shortcut_api::{ShortcutClient, types::CreateStoryInput};
//!
//! fn main() -> shortcut_api::Result<()> {
//!     // Reads SHORTCUT_API_TOKEN (and optional overrides) from the environment
//!     let client = ShortcutClient::from_env()?;
//!
//!     let workflows = client.list_workflows()?;
//!     let state = workflows[0].states[0].id;
//!
//!     let story = client.create_story(&CreateStoryInput::new("Fix login").with_workflow_state_id(state))?;
//!     println!("created {}", story.id);
//!
//!     for hit in client.search_stories_iter("owner:ada state:started")? {
//!         println!("{}", hit?.name);
//!     }
//!     Ok(())
//! }
//! ```

mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod pagination;
pub mod transport;
pub mod types;

pub use client::ShortcutClient;
pub use config::{ClientConfig, Settings};
pub use error::{Result, ShortcutError};
pub use pagination::Paginated;
pub use transport::{ApiRequest, ApiResponse, FormPart, ReqwestTransport, RequestBody, Transport};
pub use types::{Record, ResourceId, SearchQuery, SearchResults};
