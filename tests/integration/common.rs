//! Shared fixtures for the integration tests

use news_pulse::config::Config;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing the search endpoint at the mock
/// server, with pacing disabled and artifacts in `data_dir`
pub fn create_test_config(server: &MockServer, data_dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.search.base_url = format!("{}/search", server.uri());
    config.rate_limit.page_delay_ms = 0;
    config.rate_limit.item_delay_ms = 0;
    config.fetcher.timeout_secs = 5;
    config.fetcher.connect_timeout_secs = 5;
    config.output.data_dir = data_dir.path().to_string_lossy().into_owned();
    config
}

/// A search-results page with one structured item per `(title, href)`
pub fn results_page(items: &[(&str, &str)]) -> String {
    let items: String = items
        .iter()
        .map(|(title, href)| {
            format!(
                r#"<div class="c-item-content">
                    <a class="f_link_b" href="{href}">{title}</a>
                    <p class="c-item-text">검색 결과에 표시된 요약문입니다.</p>
                    <span class="c-item-source">테스트일보</span>
                </div>"#
            )
        })
        .collect();
    format!("<html><body><div id=\"news\">{items}</div></body></html>")
}

/// An article page whose body sits in a recognized container
pub fn article_page(body: &str) -> String {
    format!(
        r#"<html><body><header>메뉴</header><div class="article_view"><p>{body}</p></div></body></html>"#
    )
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body)
}

/// Mounts a search-results page for page 1 (`DA=NTB`) or a later page
/// (`DA=PGD` with `p=<page>`)
pub async fn mount_results_page(server: &MockServer, page: u32, body: String, expected: Option<u64>) {
    let mock = if page <= 1 {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("DA", "NTB"))
    } else {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("DA", "PGD"))
            .and(query_param("p", page.to_string()))
    };

    let mock = mock.respond_with(html(body));
    match expected {
        Some(n) => mock.expect(n).mount(server).await,
        None => mock.mount(server).await,
    }
}

/// Mounts an article page at `route`
pub async fn mount_article(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html(body))
        .mount(server)
        .await;
}
