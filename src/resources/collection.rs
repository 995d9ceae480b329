//! # Collection Resources
//!
//! Collections group data items on the server. [`BaseCollection`] carries the
//! behavior shared by plain collections and samples: the lazily hydrated
//! `data` attribute, file aggregation, and filtered downloads. [`Collection`]
//! is the concrete wrapper for the `collection` endpoint.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info, instrument};

use crate::api::{ApiClient, Filter};
use crate::error::SdkError;
use crate::resources::data::{get_data_id, Data, DataRef};
use crate::resources::PrintAnnotation;
use crate::session::RemoteResource;

/// Serialized shape of a collection (or sample) as returned by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionModel {
    pub id: u64,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub settings: Option<Value>,
    #[serde(default)]
    pub descriptor: Option<Value>,
    #[serde(default)]
    pub descriptor_schema: Option<Value>,
    /// Ids of member data items.
    #[serde(default)]
    pub data: Vec<u64>,
}

/// Shared core of collection-like resources.
///
/// The `data` attribute is lazy: [`BaseCollection::set_data`] stores raw ids,
/// and the first [`BaseCollection::data`] read replaces them with hydrated
/// [`Data`] wrappers fetched through a single filter query. Repeated reads
/// return the cache; reassigning the raw ids invalidates it.
#[derive(Debug)]
pub struct BaseCollection {
    id: u64,
    slug: Option<String>,
    endpoint: &'static str,
    client: Arc<dyn ApiClient>,
    pub description: Option<Value>,
    pub settings: Option<Value>,
    pub descriptor: Option<Value>,
    pub descriptor_schema: Option<Value>,
    data_ids: Vec<u64>,
    data_cache: Option<Vec<Data>>,
}

impl BaseCollection {
    pub(crate) fn with_id(client: Arc<dyn ApiClient>, id: u64, endpoint: &'static str) -> Self {
        Self {
            id,
            slug: None,
            endpoint,
            client,
            description: None,
            settings: None,
            descriptor: None,
            descriptor_schema: None,
            data_ids: Vec::new(),
            data_cache: None,
        }
    }

    pub(crate) fn from_model(
        model: Value,
        endpoint: &'static str,
        client: Arc<dyn ApiClient>,
    ) -> Result<Self, SdkError> {
        let model: CollectionModel = serde_json::from_value(model)?;
        let mut base = Self::with_id(client, model.id, endpoint);
        base.apply_model(model);
        Ok(base)
    }

    fn apply_model(&mut self, model: CollectionModel) {
        self.id = model.id;
        self.slug = model.slug;
        self.description = model.description;
        self.settings = model.settings;
        self.descriptor = model.descriptor;
        self.descriptor_schema = model.descriptor_schema;
        self.set_data(model.data);
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    pub(crate) fn client(&self) -> &Arc<dyn ApiClient> {
        &self.client
    }

    /// Store raw member ids and drop any hydrated cache.
    pub fn set_data(&mut self, ids: Vec<u64>) {
        self.data_ids = ids;
        self.data_cache = None;
    }

    /// Raw member ids as last assigned or fetched.
    pub fn data_ids(&self) -> &[u64] {
        &self.data_ids
    }

    /// Whether `data` has been hydrated since the last assignment.
    pub fn is_data_hydrated(&self) -> bool {
        self.data_cache.is_some()
    }

    /// Member data items, hydrated on first read.
    ///
    /// Issues at most one filter query per wrapper until the raw ids are
    /// reassigned, no matter how often it is read.
    pub async fn data(&mut self) -> Result<&[Data], SdkError> {
        self.hydrate().await?;
        Ok(self.data_cache.as_deref().unwrap_or(&[]))
    }

    async fn hydrate(&mut self) -> Result<(), SdkError> {
        if self.data_cache.is_some() {
            return Ok(());
        }
        debug!(endpoint = self.endpoint, id = self.id, "hydrating data");
        let models = self
            .client
            .filter(Data::ENDPOINT, &Filter::ids(&self.data_ids))
            .await?;
        let mut items = Vec::with_capacity(models.len());
        for model in models {
            items.push(Data::from_model(model, Data::ENDPOINT, self.client.clone())?);
        }
        self.data_cache = Some(items);
        Ok(())
    }

    /// All file names reachable through the member data items.
    pub async fn files(
        &mut self,
        file_name: Option<&str>,
        file_type: Option<&str>,
    ) -> Result<Vec<String>, SdkError> {
        self.hydrate().await?;
        let items = self.data_cache.as_deref().unwrap_or(&[]);
        Ok(items
            .iter()
            .flat_map(|data| data.files(file_name, file_type))
            .collect())
    }

    /// Download output files of the member data items.
    ///
    /// Builds `<data_id>/<file_name>` entries in member order and hands them,
    /// together with the optional destination directory, to the client.
    #[instrument(skip(self, options), fields(endpoint = self.endpoint, id = self.id))]
    pub async fn download(&mut self, options: DownloadOptions) -> Result<(), SdkError> {
        let file_type = options.file_type_str()?;

        self.hydrate().await?;
        let items = self.data_cache.as_deref().unwrap_or(&[]);
        let mut files = Vec::new();
        for data in items {
            for name in data.files(options.file_name.as_deref(), file_type) {
                files.push(format!("{}/{}", data.id(), name));
            }
        }

        info!(count = files.len(), "downloading files");
        self.client
            .download_files(&files, options.destination.as_deref())
            .await
    }

    /// Sorted, de-duplicated process types of the member data items.
    pub async fn data_types(&mut self) -> Result<Vec<String>, SdkError> {
        self.hydrate().await?;
        let items = self.data_cache.as_deref().unwrap_or(&[]);
        let types: BTreeSet<String> = items
            .iter()
            .map(|data| data.process_type().to_string())
            .collect();
        Ok(types.into_iter().collect())
    }

    /// Add data items to the collection on the server.
    pub async fn add_data<'a>(
        &self,
        data: impl IntoIterator<Item = DataRef<'a>>,
    ) -> Result<(), SdkError> {
        let ids: Vec<u64> = data.into_iter().map(get_data_id).collect();
        self.client
            .post(self.endpoint, self.id, "add_data", json!({ "ids": ids }))
            .await?;
        Ok(())
    }

    /// Remove data items from the collection on the server.
    pub async fn remove_data<'a>(
        &self,
        data: impl IntoIterator<Item = DataRef<'a>>,
    ) -> Result<(), SdkError> {
        let ids: Vec<u64> = data.into_iter().map(get_data_id).collect();
        self.client
            .post(self.endpoint, self.id, "remove_data", json!({ "ids": ids }))
            .await?;
        Ok(())
    }

    /// Re-fetch the model from the server and re-apply it, dropping any
    /// hydrated state.
    pub async fn refresh(&mut self) -> Result<(), SdkError> {
        let mut models = self
            .client
            .filter(self.endpoint, &Filter::id(self.id))
            .await?;
        if models.is_empty() {
            return Err(SdkError::NotFound(format!("{} {}", self.endpoint, self.id)));
        }
        let model: CollectionModel = serde_json::from_value(models.remove(0))?;
        self.apply_model(model);
        Ok(())
    }
}

impl PrintAnnotation for BaseCollection {}

/// Options for [`BaseCollection::download`].
///
/// `file_type` is kept loosely typed because download requests are routinely
/// assembled from user-supplied JSON; validation happens when the download
/// runs, not when the options are built.
#[derive(Debug, Default, Clone)]
pub struct DownloadOptions {
    file_name: Option<String>,
    file_type: Option<Value>,
    destination: Option<PathBuf>,
}

impl DownloadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the file with this exact name.
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Keep only files matching this type label.
    pub fn file_type(mut self, label: impl Into<String>) -> Self {
        self.file_type = Some(Value::String(label.into()));
        self
    }

    /// Set the type label from an untrusted JSON value. Non-string values
    /// are rejected when the download runs.
    pub fn file_type_value(mut self, value: Value) -> Self {
        self.file_type = Some(value);
        self
    }

    /// Download into this directory instead of the working directory.
    pub fn destination(mut self, dir: impl Into<PathBuf>) -> Self {
        self.destination = Some(dir.into());
        self
    }

    fn file_type_str(&self) -> Result<Option<&str>, SdkError> {
        match &self.file_type {
            None => Ok(None),
            Some(Value::String(label)) => Ok(Some(label.as_str())),
            Some(_) => Err(SdkError::InvalidArgument("file_type")),
        }
    }
}

/// Client-side wrapper for a remote collection.
#[derive(Debug)]
pub struct Collection {
    base: BaseCollection,
}

impl Collection {
    /// Wrap the collection with the given id without fetching it.
    pub fn with_id(client: Arc<dyn ApiClient>, id: u64) -> Self {
        Self {
            base: BaseCollection::with_id(client, id, Self::ENDPOINT),
        }
    }
}

impl std::ops::Deref for Collection {
    type Target = BaseCollection;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl std::ops::DerefMut for Collection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl RemoteResource for Collection {
    const ENDPOINT: &'static str = "collection";

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

impl PrintAnnotation for Collection {}

/// Argument accepted by [`get_collection_id`]: a wrapper or a raw id.
#[derive(Debug, Clone, Copy)]
pub enum CollectionRef<'a> {
    Id(u64),
    Resource(&'a Collection),
}

impl From<u64> for CollectionRef<'_> {
    fn from(id: u64) -> Self {
        CollectionRef::Id(id)
    }
}

impl<'a> From<&'a Collection> for CollectionRef<'a> {
    fn from(collection: &'a Collection) -> Self {
        CollectionRef::Resource(collection)
    }
}

/// Return the id of a collection, whether given as a wrapper or a raw id.
pub fn get_collection_id<'a>(collection: impl Into<CollectionRef<'a>>) -> u64 {
    match collection.into() {
        CollectionRef::Id(id) => id,
        CollectionRef::Resource(collection) => collection.id(),
    }
}
