//! # Process Resource
//!
//! A process is a registered pipeline definition: the recipe that turns
//! inputs into data items. Process versions are stored bit-packed on the
//! server; see [`crate::version`].

use std::fmt::Write as _;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::ApiClient;
use crate::error::SdkError;
use crate::session::RemoteResource;
use crate::version::version_int_to_string;

/// Serialized shape of a process as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessModel {
    pub id: u64,
    #[serde(default)]
    pub slug: Option<String>,
    /// Bit-packed version number.
    #[serde(default)]
    pub version: u32,
    /// Colon-separated type path, e.g. `data:alignment:bam:`.
    #[serde(default, rename = "type")]
    pub process_type: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub persistence: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub input_schema: Vec<Value>,
    #[serde(default)]
    pub output_schema: Vec<Value>,
}

/// Client-side wrapper for a remote process.
#[derive(Debug, Clone)]
pub struct Process {
    model: ProcessModel,
    #[allow(dead_code)]
    client: Arc<dyn ApiClient>,
}

impl Process {
    pub fn id(&self) -> u64 {
        self.model.id
    }

    pub fn slug(&self) -> Option<&str> {
        self.model.slug.as_deref()
    }

    pub fn model(&self) -> &ProcessModel {
        &self.model
    }

    /// Dotted version string of this process, e.g. `1.2.3`.
    pub fn version(&self) -> String {
        version_int_to_string(self.model.version)
    }

    /// Render the input schema as an indented field listing.
    pub fn print_inputs(&self) -> String {
        let mut out = String::new();
        render_fields(&self.model.input_schema, 0, &mut out);
        out
    }
}

fn render_fields(fields: &[Value], depth: usize, out: &mut String) {
    for field in fields {
        let name = field.get("name").and_then(Value::as_str).unwrap_or("?");
        let kind = field.get("type").and_then(Value::as_str).unwrap_or("");
        let label = field.get("label").and_then(Value::as_str).unwrap_or("");
        let _ = writeln!(out, "{}- {} [{}] {}", "  ".repeat(depth), name, kind, label);
        // Group fields nest their members under a `group` key.
        if let Some(group) = field.get("group").and_then(Value::as_array) {
            render_fields(group, depth + 1, out);
        }
    }
}

impl RemoteResource for Process {
    const ENDPOINT: &'static str = "process";

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

/// Argument accepted by [`get_process_id`]: a wrapper or a raw id.
#[derive(Debug, Clone, Copy)]
pub enum ProcessRef<'a> {
    Id(u64),
    Resource(&'a Process),
}

impl From<u64> for ProcessRef<'_> {
    fn from(id: u64) -> Self {
        ProcessRef::Id(id)
    }
}

impl<'a> From<&'a Process> for ProcessRef<'a> {
    fn from(process: &'a Process) -> Self {
        ProcessRef::Resource(process)
    }
}

/// Return the id of a process, whether given as a wrapper or a raw id.
pub fn get_process_id<'a>(process: impl Into<ProcessRef<'a>>) -> u64 {
    match process.into() {
        ProcessRef::Id(id) => id,
        ProcessRef::Resource(process) => process.id(),
    }
}
