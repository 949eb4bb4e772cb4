use std::time::Duration;

use pretty_assertions::assert_eq;
use roster_engine::{fetch_json, FailureKind, FetchSettings, Fetcher, ReqwestFetcher, UserRecord};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> ReqwestFetcher {
    ReqwestFetcher::new(FetchSettings::default()).expect("build fetcher")
}

fn parse(url: String) -> url::Url {
    url::Url::parse(&url).expect("valid url")
}

#[tokio::test]
async fn get_returns_body_bytes_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .mount(&server)
        .await;

    let url = parse(format!("{}/doc", server.uri()));
    let bytes = fetcher().get(&url).await.expect("fetch ok");
    assert_eq!(bytes, b"hello".to_vec());
}

#[tokio::test]
async fn get_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = parse(format!("{}/missing", server.uri()));
    let err = fetcher().get(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn get_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings).expect("build fetcher");
    let url = parse(format!("{}/slow", server.uri()));

    let err = fetcher.get(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetch_json_decodes_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"id":1,"name":"Leanne","email":"leanne@april.biz"}]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let url = parse(format!("{}/users", server.uri()));
    let fetcher = fetcher();
    let users: Vec<UserRecord> = fetch_json(&fetcher, &url).await.expect("decode ok");
    assert_eq!(
        users,
        vec![UserRecord {
            id: 1,
            name: "Leanne".to_string(),
            email: "leanne@april.biz".to_string(),
        }]
    );
}

#[tokio::test]
async fn fetch_json_maps_shape_mismatch_to_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"not":"a list"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let url = parse(format!("{}/users", server.uri()));
    let fetcher = fetcher();
    let err = fetch_json::<Vec<UserRecord>>(&fetcher, &url)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
    assert!(!err.message.is_empty());
}
