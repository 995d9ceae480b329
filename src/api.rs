//! # API Client Boundary
//!
//! This module defines the seam between resource wrappers and the wire.
//!
//! Resource wrappers ([`Collection`](crate::resources::Collection),
//! [`Sample`](crate::resources::Sample), ...) never speak HTTP themselves.
//! They hold an `Arc<dyn ApiClient>` and express every remote interaction as
//! one of four primitives: a filter query, a PATCH, an endpoint action POST,
//! or a bulk file download. Anything implementing [`ApiClient`] can back a
//! session: a real transport, or the recording [`MockApi`](crate::mock::MockApi)
//! used throughout the test suite.

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::SdkError;

/// The opaque client boundary of the SDK.
///
/// Methods take the endpoint name explicitly so a single implementation can
/// serve every resource type. Results are raw model payloads; typed hydration
/// happens in [`Query`](crate::session::Query) and the resource wrappers.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Run a filter query against an endpoint and return the matching
    /// model payloads.
    async fn filter(&self, endpoint: &str, filter: &Filter) -> Result<Vec<Value>, SdkError>;

    /// Patch the resource with the given id on an endpoint.
    async fn patch(&self, endpoint: &str, id: u64, payload: Value) -> Result<Value, SdkError>;

    /// Invoke a named action on a resource (e.g. `add_data` on a collection).
    async fn post(
        &self,
        endpoint: &str,
        id: u64,
        action: &str,
        payload: Value,
    ) -> Result<Value, SdkError>;

    /// Download the given `<data_id>/<file_name>` entries, optionally into
    /// a destination directory instead of the current working directory.
    async fn download_files(
        &self,
        files: &[String],
        destination: Option<&Path>,
    ) -> Result<(), SdkError>;
}

// Resource wrappers derive Debug while holding an `Arc<dyn ApiClient>`.
impl std::fmt::Debug for dyn ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiClient")
    }
}

/// An ordered set of query parameters for [`ApiClient::filter`].
///
/// Parameters keep a stable order (BTreeMap) so recorded calls compare
/// deterministically in tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Filter {
    params: BTreeMap<String, String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match a single resource by id.
    pub fn id(id: u64) -> Self {
        Self::new().param("id", id.to_string())
    }

    /// Match any of the given ids. Renders as `id__in=<comma-joined ids>`,
    /// the form the server's filter endpoint expects.
    pub fn ids(ids: &[u64]) -> Self {
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        Self::new().param("id__in", joined)
    }

    /// Match a single resource by slug.
    pub fn slug(slug: &str) -> Self {
        Self::new().param("slug", slug)
    }

    /// Add an arbitrary parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }
}

/// A resource identifier: numeric id or human-readable slug.
///
/// String conversions follow the server convention that an all-digit string
/// addresses an id, anything else a slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Uid {
    Id(u64),
    Slug(String),
}

impl From<u64> for Uid {
    fn from(id: u64) -> Self {
        Uid::Id(id)
    }
}

impl From<&str> for Uid {
    fn from(value: &str) -> Self {
        match value.parse::<u64>() {
            Ok(id) if value.chars().all(|c| c.is_ascii_digit()) => Uid::Id(id),
            _ => Uid::Slug(value.to_string()),
        }
    }
}

impl From<String> for Uid {
    fn from(value: String) -> Self {
        Uid::from(value.as_str())
    }
}

impl Uid {
    /// The filter that resolves this identifier on any endpoint.
    pub(crate) fn to_filter(&self) -> Filter {
        match self {
            Uid::Id(id) => Filter::id(*id),
            Uid::Slug(slug) => Filter::slug(slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_joins_ids_with_commas() {
        let filter = Filter::ids(&[1, 2, 3]);
        assert_eq!(
            filter.params().get("id__in").map(String::as_str),
            Some("1,2,3")
        );
    }

    #[test]
    fn uid_from_digit_string_is_an_id() {
        assert_eq!(Uid::from("42"), Uid::Id(42));
        assert_eq!(Uid::from("rna-seq"), Uid::Slug("rna-seq".to_string()));
        assert_eq!(Uid::from(7u64), Uid::Id(7));
        // A leading sign is not a digit string.
        assert_eq!(Uid::from("+42"), Uid::Slug("+42".to_string()));
    }
}
