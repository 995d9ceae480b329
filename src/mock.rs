//! # Mock API Client
//!
//! Utilities for testing wrapper logic in isolation.
//!
//! [`MockApi`] implements the same [`ApiClient`] boundary as a real transport
//! but operates entirely in-memory: filter results are stubbed per endpoint,
//! and every call is recorded so tests can assert on counts, parameters and
//! payloads deterministically.
//!
//! ```ignore
//! let api = MockApi::new();
//! api.stub_filter("data", vec![json!({"id": 1})]);
//!
//! let mut collection = Collection::with_id(api.clone(), 42);
//! collection.set_data(vec![1]);
//! collection.data().await?;
//!
//! assert_eq!(api.filter_count("data"), 1);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::api::{ApiClient, Filter};
use crate::error::SdkError;

/// One recorded call against the mock boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Filter {
        endpoint: String,
        params: BTreeMap<String, String>,
    },
    Patch {
        endpoint: String,
        id: u64,
        payload: Value,
    },
    Post {
        endpoint: String,
        id: u64,
        action: String,
        payload: Value,
    },
    Download {
        files: Vec<String>,
        destination: Option<PathBuf>,
    },
}

#[derive(Default)]
struct MockState {
    filter_results: HashMap<String, Vec<Value>>,
    calls: Vec<ApiCall>,
}

/// A recording, stubbable [`ApiClient`] implementation.
#[derive(Default)]
pub struct MockApi {
    state: Mutex<MockState>,
}

impl MockApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Stub the models every filter call on `endpoint` returns.
    pub fn stub_filter(&self, endpoint: &str, models: Vec<Value>) {
        let mut state = self.state.lock().unwrap();
        state.filter_results.insert(endpoint.to_string(), models);
    }

    /// Every call recorded so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Number of filter calls issued against `endpoint`.
    pub fn filter_count(&self, endpoint: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|call| matches!(call, ApiCall::Filter { endpoint: e, .. } if e == endpoint))
            .count()
    }

    /// Parameter sets of the filter calls issued against `endpoint`.
    pub fn filter_params(&self, endpoint: &str) -> Vec<BTreeMap<String, String>> {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter_map(|call| match call {
                ApiCall::Filter {
                    endpoint: e,
                    params,
                } if e == endpoint => Some(params.clone()),
                _ => None,
            })
            .collect()
    }

    /// The recorded download requests, as `(files, destination)` pairs.
    pub fn downloads(&self) -> Vec<(Vec<String>, Option<PathBuf>)> {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter_map(|call| match call {
                ApiCall::Download { files, destination } => {
                    Some((files.clone(), destination.clone()))
                }
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ApiCall) {
        self.state.lock().unwrap().calls.push(call);
    }
}

#[async_trait]
impl ApiClient for MockApi {
    async fn filter(&self, endpoint: &str, filter: &Filter) -> Result<Vec<Value>, SdkError> {
        self.record(ApiCall::Filter {
            endpoint: endpoint.to_string(),
            params: filter.params().clone(),
        });
        let state = self.state.lock().unwrap();
        Ok(state
            .filter_results
            .get(endpoint)
            .cloned()
            .unwrap_or_default())
    }

    async fn patch(&self, endpoint: &str, id: u64, payload: Value) -> Result<Value, SdkError> {
        self.record(ApiCall::Patch {
            endpoint: endpoint.to_string(),
            id,
            payload,
        });
        Ok(json!({}))
    }

    async fn post(
        &self,
        endpoint: &str,
        id: u64,
        action: &str,
        payload: Value,
    ) -> Result<Value, SdkError> {
        self.record(ApiCall::Post {
            endpoint: endpoint.to_string(),
            id,
            action: action.to_string(),
            payload,
        });
        Ok(json!({}))
    }

    async fn download_files(
        &self,
        files: &[String],
        destination: Option<&Path>,
    ) -> Result<(), SdkError> {
        self.record(ApiCall::Download {
            files: files.to_vec(),
            destination: destination.map(Path::to_path_buf),
        });
        Ok(())
    }
}
