//! # Data Resource
//!
//! A data item is the unit of processed output on the platform: one run of a
//! process, carrying a `process_type` label and a set of named output files.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{ApiClient, Filter};
use crate::error::SdkError;
use crate::session::RemoteResource;

/// Serialized shape of a data item as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataModel {
    pub id: u64,
    #[serde(default)]
    pub slug: Option<String>,
    /// Colon-separated type path, e.g. `data:reads:fastq:single:`.
    #[serde(default)]
    pub process_type: String,
    #[serde(default)]
    pub outputs: Vec<FileOutput>,
}

/// One file in a data item's output fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutput {
    /// Dotted field path inside the output schema, e.g. `output.exp`.
    pub field: String,
    /// The file name as stored on the server.
    pub name: String,
}

/// Client-side wrapper for a remote data item.
#[derive(Debug, Clone)]
pub struct Data {
    model: DataModel,
    client: Arc<dyn ApiClient>,
}

impl Data {
    pub fn id(&self) -> u64 {
        self.model.id
    }

    pub fn slug(&self) -> Option<&str> {
        self.model.slug.as_deref()
    }

    pub fn process_type(&self) -> &str {
        &self.model.process_type
    }

    pub fn model(&self) -> &DataModel {
        &self.model
    }

    /// File names associated with this data item.
    ///
    /// `file_name` keeps only the exact file, `file_type` keeps files whose
    /// output field path equals the label or whose `process_type` contains
    /// it. A label like `output.exp` therefore addresses one output field,
    /// while `fastq` selects every file of a fastq-typed item.
    pub fn files(&self, file_name: Option<&str>, file_type: Option<&str>) -> Vec<String> {
        self.model
            .outputs
            .iter()
            .filter(|output| match file_name {
                Some(name) => output.name == name,
                None => true,
            })
            .filter(|output| match file_type {
                Some(label) => {
                    output.field == label || self.model.process_type.contains(label)
                }
                None => true,
            })
            .map(|output| output.name.clone())
            .collect()
    }

    /// Re-fetch this item's model from the server.
    pub async fn refresh(&mut self) -> Result<(), SdkError> {
        let mut models = self
            .client
            .filter(Self::ENDPOINT, &Filter::id(self.model.id))
            .await?;
        match models.len() {
            0 => Err(SdkError::NotFound(format!("data {}", self.model.id))),
            _ => {
                self.model = serde_json::from_value(models.remove(0))?;
                Ok(())
            }
        }
    }
}

impl RemoteResource for Data {
    const ENDPOINT: &'static str = "data";

    fn from_model(
        model: Value,
        _endpoint: &'static str,
        client: Arc<dyn ApiClient>,
    ) -> Result<Self, SdkError> {
        Ok(Self {
            model: serde_json::from_value(model)?,
            client,
        })
    }

    fn id(&self) -> u64 {
        self.model.id
    }
}

/// Argument accepted by [`get_data_id`]: a wrapper or a raw id.
#[derive(Debug, Clone, Copy)]
pub enum DataRef<'a> {
    Id(u64),
    Resource(&'a Data),
}

impl From<u64> for DataRef<'_> {
    fn from(id: u64) -> Self {
        DataRef::Id(id)
    }
}

impl<'a> From<&'a Data> for DataRef<'a> {
    fn from(data: &'a Data) -> Self {
        DataRef::Resource(data)
    }
}

/// Return the id of a data item, whether given as a wrapper or a raw id.
pub fn get_data_id<'a>(data: impl Into<DataRef<'a>>) -> u64 {
    match data.into() {
        DataRef::Id(id) => id,
        DataRef::Resource(data) => data.id(),
    }
}
