//! Behavior of the sample wrapper: descriptor patches and the
//! presample-to-sample transition.

use serde_json::json;

use genoflow_sdk::mock::{ApiCall, MockApi};
use genoflow_sdk::{get_sample_id, PrintAnnotation, Sample, SdkError};

#[tokio::test]
async fn update_descriptor_patches_the_sample() {
    let api = MockApi::new();
    let mut sample = Sample::with_id(api.clone(), 42);

    sample
        .update_descriptor(json!({"field": "value"}))
        .await
        .unwrap();

    assert_eq!(
        api.calls(),
        vec![ApiCall::Patch {
            endpoint: "sample".to_string(),
            id: 42,
            payload: json!({"descriptor": {"field": "value"}}),
        }]
    );
    // The local field follows the remote state.
    assert_eq!(sample.descriptor, Some(json!({"field": "value"})));
}

#[tokio::test]
async fn confirm_is_annotated_requires_the_presample_endpoint() {
    let api = MockApi::new();
    let sample = Sample::with_id(api.clone(), 42);

    let err = sample.confirm_is_annotated().await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::NotImplemented("confirm_is_annotated")
    ));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn confirm_is_annotated_patches_the_presample() {
    let api = MockApi::new();
    let sample = Sample::presample_with_id(api.clone(), 42);
    assert!(sample.is_presample());

    sample.confirm_is_annotated().await.unwrap();

    assert_eq!(
        api.calls(),
        vec![ApiCall::Patch {
            endpoint: "presample".to_string(),
            id: 42,
            payload: json!({"presample": false}),
        }]
    );
}

#[tokio::test]
async fn samples_share_the_lazy_data_attribute() {
    let api = MockApi::new();
    api.stub_filter("data", vec![json!({"id": 7})]);

    let mut sample = Sample::with_id(api.clone(), 1);
    sample.set_data(vec![7]);

    sample.data().await.unwrap();
    sample.data().await.unwrap();
    assert_eq!(api.filter_count("data"), 1);
}

#[test]
fn print_annotation_is_not_implemented() {
    let api = MockApi::new();
    let sample = Sample::with_id(api, 1);

    let err = sample.print_annotation().unwrap_err();
    assert!(matches!(err, SdkError::NotImplemented("print_annotation")));
}

#[test]
fn get_sample_id_accepts_wrapper_and_raw_id() {
    let api = MockApi::new();
    let sample = Sample::with_id(api, 1);

    assert_eq!(get_sample_id(&sample), 1);
    assert_eq!(get_sample_id(2), 2);
}
