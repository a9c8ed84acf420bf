//! Integration tests for the HTTP admin client against a mock cluster.

use console_admin::{HttpAdminClientFactory, license_from_config, subnet_key_from_config};
use console_core::config::AdminConfig;
use console_core::error::ErrorKind;
use console_core::traits::{AdminClient, AdminClientFactory};
use console_core::types::Principal;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn factory_for(server: &MockServer) -> HttpAdminClientFactory {
    HttpAdminClientFactory::new(&AdminConfig {
        endpoint: server.uri(),
        timeout_seconds: 5,
    })
    .expect("factory")
}

#[tokio::test]
async fn test_get_config_kv_sends_session_and_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/minio/admin/v3/get-config-kv"))
        .and(query_param("key", "subnet"))
        .and(header("authorization", "Bearer session-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("subnet license=L api_key=K proxy=http://p:1"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let admin = factory_for(&server)
        .create(&Principal::new("session-1"))
        .expect("client");

    let key = subnet_key_from_config(admin.as_ref()).await.expect("subnet key");
    assert_eq!(key.license, "L");
    assert_eq!(key.proxy, "http://p:1");
}

#[tokio::test]
async fn test_set_config_kv_reports_restart() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/minio/admin/v3/set-config-kv"))
        .and(body_string("subnet license=L api_key=K proxy="))
        .respond_with(ResponseTemplate::new(200).insert_header("x-minio-config-applied", "true"))
        .expect(1)
        .mount(&server)
        .await;

    let admin = factory_for(&server)
        .create(&Principal::new("session-1"))
        .expect("client");

    let restart = admin
        .set_config_kv("subnet license=L api_key=K proxy=")
        .await
        .expect("set config");
    assert!(!restart);
}

#[tokio::test]
async fn test_server_info_parses_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/minio/admin/v3/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "deploymentID": "dep-1",
            "servers": [{"version": "v1", "poolNumber": 1, "drives": []}]
        })))
        .mount(&server)
        .await;

    let admin = factory_for(&server)
        .create(&Principal::new("session-1"))
        .expect("client");

    let info = admin.server_info().await.expect("info");
    assert_eq!(info.deployment_id, "dep-1");
    assert_eq!(info.servers.len(), 1);
}

#[tokio::test]
async fn test_error_status_maps_to_external_service() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/minio/admin/v3/get-config-kv"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Access Denied"))
        .mount(&server)
        .await;

    let admin = factory_for(&server)
        .create(&Principal::new("session-1"))
        .expect("client");

    let err = license_from_config(admin.as_ref()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExternalService);
    assert!(err.message.contains("Access Denied"));
}

#[tokio::test]
async fn test_factory_rejects_empty_session() {
    let server = MockServer::start().await;
    let err = factory_for(&server)
        .create(&Principal::new(""))
        .err()
        .expect("empty session must be rejected");
    assert_eq!(err.kind, ErrorKind::Authentication);
}
