use hdb_forecast::infrastructure::assets::fetch_image;
use reqwest::Client;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[tokio::test]
async fn test_oversized_image_is_rejected() {
    let server = MockServer::start().await;
    let mut body = PNG_HEADER.to_vec();
    body.resize(10 * 1024 * 1024 + 1, 0);
    Mock::given(method("GET"))
        .and(path("/huge.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(body),
        )
        .mount(&server)
        .await;

    let err = fetch_image(&Client::new(), &format!("{}/huge.png", server.uri()))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Image too large"));
}

#[tokio::test]
async fn test_image_without_content_type_is_sniffed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photo"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG_HEADER.to_vec()))
        .mount(&server)
        .await;

    let image = fetch_image(&Client::new(), &format!("{}/photo", server.uri()))
        .await
        .unwrap();

    assert_eq!(image.mime_type, "image/png");
    assert_eq!(&image.bytes[..], PNG_HEADER);
}
