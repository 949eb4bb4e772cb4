use std::sync::Arc;

use pretty_assertions::assert_eq;
use roster_engine::{
    ApiRoutes, FailureKind, FetchSettings, FetchUsersPage, ReqwestFetcher, UserRecord,
    UserRepository,
};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn repository(server: &MockServer) -> UserRepository {
    let base = Url::parse(&server.uri()).expect("server url");
    let fetcher = Arc::new(ReqwestFetcher::new(FetchSettings::default()).expect("build fetcher"));
    UserRepository::new(ApiRoutes::new(base), fetcher)
}

fn record(id: u64, name: &str, email: &str) -> UserRecord {
    UserRecord {
        id,
        name: name.to_string(),
        email: email.to_string(),
    }
}

#[tokio::test]
async fn fetch_users_requests_the_given_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("_page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"id":21,"name":"Ada","email":"ada@example.com"},
                {"id":22,"name":"Grace","email":"grace@example.com"}]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let users = repository(&server).fetch_users(3).await.expect("fetch ok");
    assert_eq!(
        users,
        vec![
            record(21, "Ada", "ada@example.com"),
            record(22, "Grace", "grace@example.com"),
        ]
    );
}

#[tokio::test]
async fn fetch_users_propagates_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = repository(&server).fetch_users(1).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn fetch_users_propagates_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "text/plain"))
        .mount(&server)
        .await;

    let err = repository(&server).fetch_users(1).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn use_case_forwards_to_repository() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("_page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"id":1,"name":"Leanne","email":"leanne@april.biz"}]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let use_case = FetchUsersPage::new(repository(&server));
    let users = use_case.run(1).await.expect("fetch ok");
    assert_eq!(users, vec![record(1, "Leanne", "leanne@april.biz")]);
}
