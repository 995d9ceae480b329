//! # Sample Resource
//!
//! A sample is a collection-like resource grouping all data derived from one
//! biological sample. Unannotated samples live on the `presample` endpoint
//! until they are confirmed; annotated ones on `sample`.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::info;

use crate::api::ApiClient;
use crate::error::SdkError;
use crate::resources::collection::BaseCollection;
use crate::resources::PrintAnnotation;
use crate::session::RemoteResource;

/// Endpoint for samples that still await annotation.
pub const PRESAMPLE_ENDPOINT: &str = "presample";

/// Client-side wrapper for a remote sample.
#[derive(Debug)]
pub struct Sample {
    base: BaseCollection,
}

impl Sample {
    /// Wrap the annotated sample with the given id without fetching it.
    pub fn with_id(client: Arc<dyn ApiClient>, id: u64) -> Self {
        Self {
            base: BaseCollection::with_id(client, id, Self::ENDPOINT),
        }
    }

    /// Wrap the unannotated sample with the given id without fetching it.
    pub fn presample_with_id(client: Arc<dyn ApiClient>, id: u64) -> Self {
        Self {
            base: BaseCollection::with_id(client, id, PRESAMPLE_ENDPOINT),
        }
    }

    /// Whether this wrapper addresses the `presample` endpoint.
    pub fn is_presample(&self) -> bool {
        self.base.endpoint() == PRESAMPLE_ENDPOINT
    }

    /// Replace the sample's descriptor on the server and locally.
    pub async fn update_descriptor(&mut self, descriptor: Value) -> Result<(), SdkError> {
        self.base
            .client()
            .patch(
                self.base.endpoint(),
                self.base.id(),
                json!({ "descriptor": descriptor }),
            )
            .await?;
        self.base.descriptor = Some(descriptor);
        Ok(())
    }

    /// Move a presample to the annotated state.
    ///
    /// Only meaningful on the `presample` endpoint; an annotated sample has
    /// nothing to confirm.
    pub async fn confirm_is_annotated(&self) -> Result<(), SdkError> {
        if !self.is_presample() {
            return Err(SdkError::NotImplemented("confirm_is_annotated"));
        }
        self.base
            .client()
            .patch(
                self.base.endpoint(),
                self.base.id(),
                json!({ "presample": false }),
            )
            .await?;
        info!(id = self.base.id(), "sample confirmed as annotated");
        Ok(())
    }
}

impl std::ops::Deref for Sample {
    type Target = BaseCollection;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl std::ops::DerefMut for Sample {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl RemoteResource for Sample {
    const ENDPOINT: &'static str = "sample";

    fn from_model(
        model: Value,
        endpoint: &'static str,
        client: Arc<dyn ApiClient>,
    ) -> Result<Self, SdkError> {
        Ok(Self {
            base: BaseCollection::from_model(model, endpoint, client)?,
        })
    }

    fn id(&self) -> u64 {
        self.base.id()
    }
}

impl PrintAnnotation for Sample {}

/// Argument accepted by [`get_sample_id`]: a wrapper or a raw id.
#[derive(Debug, Clone, Copy)]
pub enum SampleRef<'a> {
    Id(u64),
    Resource(&'a Sample),
}

impl From<u64> for SampleRef<'_> {
    fn from(id: u64) -> Self {
        SampleRef::Id(id)
    }
}

impl<'a> From<&'a Sample> for SampleRef<'a> {
    fn from(sample: &'a Sample) -> Self {
        SampleRef::Resource(sample)
    }
}

/// Return the id of a sample, whether given as a wrapper or a raw id.
pub fn get_sample_id<'a>(sample: impl Into<SampleRef<'a>>) -> u64 {
    match sample.into() {
        SampleRef::Id(id) => id,
        SampleRef::Resource(sample) => sample.id(),
    }
}
