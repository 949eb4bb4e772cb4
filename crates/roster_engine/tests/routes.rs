use pretty_assertions::assert_eq;
use roster_engine::ApiRoutes;
use url::Url;

fn base(url: &str) -> ApiRoutes {
    ApiRoutes::new(Url::parse(url).expect("valid base url"))
}

#[test]
fn users_page_appends_page_query() {
    let routes = base("https://api.example.com/");
    let url = routes.users_page(1).expect("url");
    assert_eq!(url.as_str(), "https://api.example.com/users?_page=1");

    let url = routes.users_page(7).expect("url");
    assert_eq!(url.as_str(), "https://api.example.com/users?_page=7");
}

#[test]
fn base_without_trailing_slash_keeps_its_path() {
    let routes = base("https://api.example.com/v1");
    let url = routes.users_page(2).expect("url");
    assert_eq!(url.as_str(), "https://api.example.com/v1/users?_page=2");
}
