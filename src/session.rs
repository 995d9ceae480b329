//! # Session and Typed Queries
//!
//! A [`Session`] is the entry point of the SDK. It wraps the opaque
//! [`ApiClient`] and hands out typed [`Query`] handles, one per endpoint:
//!
//! ```ignore
//! let session = Session::new(client);
//! let collection = session.collection().get(42).await?;
//! let reads = session.data().filter(Filter::new().param("status", "OK")).await?;
//! ```
//!
//! Presamples reuse the [`Sample`] wrapper on a different endpoint, so
//! [`Session::presample`] returns a `Query<Sample>` bound to `presample`.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::api::{ApiClient, Filter, Uid};
use crate::error::SdkError;
use crate::resources::{Collection, Data, Process, Sample, PRESAMPLE_ENDPOINT};

/// A resource type reachable through a [`Query`].
pub trait RemoteResource: Sized {
    /// Default endpoint for this resource type.
    const ENDPOINT: &'static str;

    /// Build a wrapper from a server model payload.
    ///
    /// `endpoint` is passed through because some types are served from more
    /// than one endpoint (samples vs. presamples).
    fn from_model(
        model: Value,
        endpoint: &'static str,
        client: Arc<dyn ApiClient>,
    ) -> Result<Self, SdkError>;

    fn id(&self) -> u64;
}

/// A connection to a GenoFlow server, shared by all wrappers it creates.
#[derive(Clone)]
pub struct Session {
    client: Arc<dyn ApiClient>,
}

impl Session {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<dyn ApiClient> {
        &self.client
    }

    pub fn data(&self) -> Query<Data> {
        Query::new(self.client.clone(), Data::ENDPOINT)
    }

    pub fn collection(&self) -> Query<Collection> {
        Query::new(self.client.clone(), Collection::ENDPOINT)
    }

    pub fn sample(&self) -> Query<Sample> {
        Query::new(self.client.clone(), Sample::ENDPOINT)
    }

    /// Samples that still await annotation.
    pub fn presample(&self) -> Query<Sample> {
        Query::new(self.client.clone(), PRESAMPLE_ENDPOINT)
    }

    pub fn process(&self) -> Query<Process> {
        Query::new(self.client.clone(), Process::ENDPOINT)
    }
}

/// A typed handle for querying one endpoint.
pub struct Query<R: RemoteResource> {
    client: Arc<dyn ApiClient>,
    endpoint: &'static str,
    _resource: PhantomData<R>,
}

impl<R: RemoteResource> Query<R> {
    fn new(client: Arc<dyn ApiClient>, endpoint: &'static str) -> Self {
        Self {
            client,
            endpoint,
            _resource: PhantomData,
        }
    }

    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    /// Fetch the single resource addressed by an id or slug.
    pub async fn get(&self, uid: impl Into<Uid>) -> Result<R, SdkError> {
        let uid = uid.into();
        debug!(endpoint = self.endpoint, ?uid, "get");
        let mut models = self.client.filter(self.endpoint, &uid.to_filter()).await?;
        match models.len() {
            0 => Err(SdkError::NotFound(format!("{} {:?}", self.endpoint, uid))),
            1 => R::from_model(models.remove(0), self.endpoint, self.client.clone()),
            n => Err(SdkError::Validation(format!(
                "{} resources on `{}` match {:?}, expected one",
                n, self.endpoint, uid
            ))),
        }
    }

    /// Fetch every resource matching the filter.
    pub async fn filter(&self, filter: Filter) -> Result<Vec<R>, SdkError> {
        debug!(endpoint = self.endpoint, params = ?filter.params(), "filter");
        let models = self.client.filter(self.endpoint, &filter).await?;
        models
            .into_iter()
            .map(|model| R::from_model(model, self.endpoint, self.client.clone()))
            .collect()
    }
}

impl<R: RemoteResource> Clone for Query<R> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone(), self.endpoint)
    }
}
