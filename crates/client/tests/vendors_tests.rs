//! Vendor approval endpoint tests.

mod common;

use common::*;
use ticket_client::{VendorStatus, VendorStatusUpdate};
use wiremock::matchers::{body_json, method, path};

#[tokio::test]
async fn test_update_vendor_status() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("vendors/update_vendor_status.json");

    Mock::given(method("PATCH"))
        .and(path("/vendors/66601f00aa"))
        .and(body_json(serde_json::json!({
            "status": "fraud",
            "email": "shady@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let update = VendorStatusUpdate {
        status: VendorStatus::Fraud,
        email: "shady@example.com".to_string(),
    };
    let result = client.update_vendor_status("66601f00aa", &update).await.unwrap();

    assert_eq!(result.matched_count, 1);
    assert!(result.is_modified());
}

#[tokio::test]
async fn test_update_vendor_status_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/vendors/v2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"matchedCount": 1, "modifiedCount": 0})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let update = VendorStatusUpdate {
        status: VendorStatus::Approved,
        email: "vendor@example.com".to_string(),
    };
    let result = client.update_vendor_status("v2", &update).await.unwrap();

    assert!(!result.is_modified());
}

#[tokio::test]
async fn test_update_vendor_status_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/vendors/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let update = VendorStatusUpdate {
        status: VendorStatus::Rejected,
        email: "vendor@example.com".to_string(),
    };
    let err = client.update_vendor_status("missing", &update).await.unwrap_err();

    assert!(matches!(err, ClientError::NotFound(_)), "got {err:?}");
}
