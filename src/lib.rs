//! # GenoFlow SDK
//!
//! > **A client SDK for the GenoFlow bioinformatics data-management platform.**
//!
//! This crate wraps the remote resources of a GenoFlow server (collections,
//! samples, data items, processes) in typed, lazily hydrating client-side
//! objects.
//!
//! ## Core Concepts
//!
//! ### The Client Boundary
//! Wrappers never speak the wire protocol themselves. All remote interaction
//! goes through the [`api::ApiClient`] trait, which any transport can
//! implement. This keeps the resource layer independent of HTTP details and
//! makes every operation testable against the in-memory [`mock::MockApi`].
//!
//! ### Lazy Hydration
//! A collection first carries only the ids of its member data items. The
//! first read of [`resources::BaseCollection::data`] fetches the full items
//! with a single filter query and caches them; repeated reads never touch the
//! server again until the raw ids are reassigned.
//!
//! ### Sessions and Queries
//! A [`session::Session`] hands out one typed [`session::Query`] per
//! endpoint:
//!
//! ```ignore
//! let session = Session::new(client);
//! let mut collection = session.collection().get(42).await?;
//! collection
//!     .download(DownloadOptions::new().file_type("fastq"))
//!     .await?;
//! ```
//!
//! ### Mocking: Testing without a Server
//! [`mock::MockApi`] records every call and serves stubbed filter results, so
//! wrapper logic is tested deterministically and offline. See the [`mock`]
//! module for the full API.

pub mod api;
pub mod error;
pub mod logging;
pub mod mock;
pub mod resources;
pub mod session;
pub mod version;

// Re-export the surface most consumers need.
pub use api::{ApiClient, Filter, Uid};
pub use error::SdkError;
pub use resources::{
    get_collection_id, get_data_id, get_process_id, get_sample_id, Collection, Data,
    DownloadOptions, PrintAnnotation, Process, Sample,
};
pub use session::{Query, RemoteResource, Session};
