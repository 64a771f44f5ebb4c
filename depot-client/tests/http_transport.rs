//! End-to-end tests of the client over a real HTTP transport

use depot_client::{
    ClientError, Credentials, DepotClient, HttpTransport, QueryParams, TransportConfig,
};
use depot_core::domain::repository::{LOCAL_REPO_MIME_TYPE, REMOTE_REPO_MIME_TYPE};
use depot_core::{LocalRepoConfig, RemoteRepoConfig, RepositoryConfig, RepositoryKind};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{
    basic_auth, bearer_token, body_json, header, method, path, query_param,
    query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, credentials: Option<Credentials>) -> DepotClient {
    let mut config = TransportConfig::new(format!("{}/artifactory/", server.uri()))
        .with_timeout(Duration::from_secs(5));
    if let Some(credentials) = credentials {
        config = config.with_credentials(credentials);
    }
    DepotClient::new(HttpTransport::new(config).unwrap())
}

#[tokio::test]
async fn test_list_all_sends_no_type_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/artifactory/api/repositories"))
        .and(query_param_is_missing("type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "key": "libs-release-local", "type": "LOCAL" },
            { "key": "libs", "type": "VIRTUAL", "url": "http://localhost/artifactory/libs" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let repos = client_for(&server, None)
        .list_repositories("all")
        .await
        .unwrap();

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].key, "libs-release-local");
    assert_eq!(repos[1].kind, RepositoryKind::Virtual);
    assert_eq!(repos[1].url.as_deref(), Some("http://localhost/artifactory/libs"));
}

#[tokio::test]
async fn test_list_filtered_by_kind() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/artifactory/api/repositories"))
        .and(query_param("type", "remote"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "key": "jcenter", "type": "remote" }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let repos = client_for(&server, None)
        .list_repositories("remote")
        .await
        .unwrap();

    assert_eq!(repos[0].kind, RepositoryKind::Remote);
}

#[tokio::test]
async fn test_get_sends_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/artifactory/api/repositories/jcenter"))
        .and(header("X-JFrog-Art-Api", "AKCp5key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key": "jcenter",
            "rclass": "remote",
            "url": "https://jcenter.bintray.com",
            "socketTimeoutMillis": 15000,
            "hardFail": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = client_for(&server, Some(Credentials::ApiKey("AKCp5key".to_string())))
        .get_repository("jcenter")
        .await
        .unwrap();

    let RepositoryConfig::Remote(remote) = config else {
        panic!("expected a remote configuration");
    };
    assert_eq!(remote.url, "https://jcenter.bintray.com");
    assert_eq!(remote.socket_timeout_millis, Some(15000));
    assert_eq!(remote.hard_fail, Some(false));
}

#[tokio::test]
async fn test_create_sends_typed_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/artifactory/api/repositories/libs-local"))
        .and(basic_auth("admin", "password"))
        .and(header("content-type", LOCAL_REPO_MIME_TYPE))
        .and(query_param("pos", "2"))
        .and(body_json(json!({
            "key": "libs-local",
            "rclass": "local",
            "packageType": "maven",
            "handleSnapshots": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("Successfully created"))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = LocalRepoConfig::new("libs-local");
    config.base.package_type = Some("maven".to_string());
    config.base.handle_snapshots = Some(false);

    let query: QueryParams = [("pos".to_string(), "2".to_string())].into_iter().collect();
    client_for(&server, Some(Credentials::basic("admin", "password")))
        .create_repository("libs-local", &config, &query)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_error_status_carries_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/artifactory/api/repositories/jcenter"))
        .and(bearer_token("eyJtoken"))
        .and(header("content-type", REMOTE_REPO_MIME_TYPE))
        .respond_with(ResponseTemplate::new(400).set_body_string("Invalid url"))
        .expect(1)
        .mount(&server)
        .await;

    let config = RemoteRepoConfig::new("jcenter", "not a url");
    let err = client_for(&server, Some(Credentials::Bearer("eyJtoken".to_string())))
        .update_repository("jcenter", &config, &QueryParams::new())
        .await
        .unwrap_err();

    match err {
        ClientError::ApiError { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid url");
        }
        other => panic!("expected an API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Grab a free port and close it again so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let transport = HttpTransport::new(TransportConfig::new(format!("http://127.0.0.1:{}", port)))
        .unwrap();
    let client = DepotClient::new(transport);

    let err = client.list_repositories("all").await.unwrap_err();
    assert!(matches!(err, ClientError::RequestFailed(_)));
    assert!(err.is_transport_error());
}
