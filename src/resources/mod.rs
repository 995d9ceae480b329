//! # Resource Wrappers
//!
//! Client-side wrappers for the remote resource types. Each wrapper holds its
//! id plus a handle to the [`ApiClient`](crate::api::ApiClient) boundary and
//! exposes the operations the server offers for that endpoint.

pub mod collection;
pub mod data;
pub mod process;
pub mod sample;

pub use collection::{
    get_collection_id, BaseCollection, Collection, CollectionModel, CollectionRef, DownloadOptions,
};
pub use data::{get_data_id, Data, DataModel, DataRef, FileOutput};
pub use process::{get_process_id, Process, ProcessModel, ProcessRef};
pub use sample::{get_sample_id, Sample, SampleRef, PRESAMPLE_ENDPOINT};

use crate::error::SdkError;

/// Annotation rendering for collection-like resources.
///
/// No resource implements this yet; the default fails fast so callers get a
/// descriptive error instead of silently missing output. Concrete wrappers
/// override it once the server exposes their annotation schema.
pub trait PrintAnnotation {
    fn print_annotation(&self) -> Result<String, SdkError> {
        Err(SdkError::NotImplemented("print_annotation"))
    }
}
