use hdb_forecast::domain::errors::ResourceError;
use hdb_forecast::domain::ports::ArtifactSource;
use hdb_forecast::infrastructure::HttpClientFactory;
use hdb_forecast::infrastructure::hub::HubArtifactSource;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn hub_source(server: &MockServer) -> HubArtifactSource {
    HubArtifactSource::new(
        HttpClientFactory::create_client(Duration::from_secs(5)),
        Url::parse(&server.uri()).unwrap(),
        "jayelleteo/hdb_predict",
        "hdb_price_model.json",
        "main",
    )
}

#[tokio::test]
async fn test_downloads_artifact_from_resolve_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jayelleteo/hdb_predict/resolve/main/hdb_price_model.json"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"{\"trees\":[]}".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let artifact = hub_source(&server).fetch().await.unwrap();

    assert_eq!(artifact.name, "hdb_price_model.json");
    assert_eq!(artifact.bytes, b"{\"trees\":[]}".to_vec());
}

#[tokio::test]
async fn test_missing_artifact_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = hub_source(&server).fetch().await.unwrap_err();

    match err {
        ResourceError::ArtifactFetch { location, reason } => {
            assert!(location.ends_with("/resolve/main/hdb_price_model.json"));
            assert!(reason.contains("404"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_sends_bearer_token_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer hf_secret"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ok".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let source = hub_source(&server).with_token(Some("hf_secret".to_string()));
    let artifact = source.fetch().await.unwrap();

    assert_eq!(artifact.bytes, b"ok".to_vec());
}
