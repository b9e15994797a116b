//! Integration tests for the crawler
//!
//! These tests use wiremock to serve search-result and article pages and
//! exercise pagination, stop conditions and content extraction end-to-end.

use crate::common::{
    article_page, create_test_config, mount_article, mount_results_page, results_page,
};
use news_pulse::crawler::CrawlOrchestrator;
use news_pulse::{ArticleRecord, SearchQuery};
use std::time::{Duration, Instant};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_two_pages_fill_the_cap_in_order() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let base = server.uri();

    let first = format!("{}/article/1", base);
    let second = format!("{}/article/2", base);

    mount_results_page(
        &server,
        1,
        results_page(&[("첫 번째 페이지의 테스트 기사", first.as_str())]),
        Some(1),
    )
    .await;
    mount_results_page(
        &server,
        2,
        results_page(&[("두 번째 페이지의 테스트 기사", second.as_str())]),
        Some(1),
    )
    .await;
    // The cap is reached after page 2
    mount_results_page(&server, 3, results_page(&[]), Some(0)).await;

    let config = create_test_config(&server, &dir);
    let mut crawler = CrawlOrchestrator::new(&config).unwrap();
    let stubs = crawler.crawl(&SearchQuery::new("test", 2)).await;

    assert_eq!(stubs.len(), 2);
    assert_eq!(stubs[0].title, "첫 번째 페이지의 테스트 기사");
    assert_eq!(stubs[0].link, first);
    assert_eq!(stubs[0].source, "테스트일보");
    assert_eq!(stubs[1].title, "두 번째 페이지의 테스트 기사");
    assert_eq!(stubs[1].link, second);
}

#[tokio::test]
async fn test_first_page_request_shape() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("w", "news"))
        .and(query_param("nil_search", "btn"))
        .and(query_param("DA", "NTB"))
        .and(query_param("enc", "utf8"))
        .and(query_param("cluster", "y"))
        .and(query_param("cluster_page", "1"))
        .and(query_param("q", "반도체"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(results_page(&[("반도체 수출 회복 기사 제목", "https://news.example.com/1")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server, &dir);
    let mut crawler = CrawlOrchestrator::new(&config).unwrap();
    let stubs = crawler.crawl(&SearchQuery::new("반도체", 1)).await;

    assert_eq!(stubs.len(), 1);
}

#[tokio::test]
async fn test_empty_page_halts_pagination() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_results_page(
        &server,
        1,
        results_page(&[("유일하게 검색된 테스트 기사", "https://news.example.com/only")]),
        Some(1),
    )
    .await;
    mount_results_page(&server, 2, "<html><body></body></html>".to_string(), Some(1)).await;
    mount_results_page(&server, 3, results_page(&[]), Some(0)).await;

    let config = create_test_config(&server, &dir);
    let mut crawler = CrawlOrchestrator::new(&config).unwrap();
    let stubs = crawler.crawl(&SearchQuery::new("test", 10)).await;

    assert_eq!(stubs.len(), 1);
}

#[tokio::test]
async fn test_page_limit_bounds_the_crawl() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    for page in 1..=2 {
        mount_results_page(
            &server,
            page,
            results_page(&[("페이지마다 하나씩 나오는 기사", "https://news.example.com/a")]),
            Some(1),
        )
        .await;
    }
    mount_results_page(&server, 3, results_page(&[]), Some(0)).await;

    let mut config = create_test_config(&server, &dir);
    config.search.max_pages = 2;

    let mut crawler = CrawlOrchestrator::new(&config).unwrap();
    let stubs = crawler.crawl(&SearchQuery::new("test", 10)).await;

    // Duplicate links across pages are kept
    assert_eq!(stubs.len(), 2);
    assert_eq!(stubs[0].link, stubs[1].link);
}

#[tokio::test]
async fn test_oversized_page_is_truncated() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    let items: Vec<(String, String)> = (1..=5)
        .map(|i| {
            (
                format!("한 페이지에 여러 개 있는 기사 {}", i),
                format!("https://news.example.com/{}", i),
            )
        })
        .collect();
    let items: Vec<(&str, &str)> = items.iter().map(|(t, l)| (t.as_str(), l.as_str())).collect();

    mount_results_page(&server, 1, results_page(&items), Some(1)).await;
    mount_results_page(&server, 2, results_page(&[]), Some(0)).await;

    let config = create_test_config(&server, &dir);
    let mut crawler = CrawlOrchestrator::new(&config).unwrap();
    let stubs = crawler.crawl(&SearchQuery::new("test", 3)).await;

    assert_eq!(stubs.len(), 3);
    assert_eq!(stubs[2].link, "https://news.example.com/3");
}

#[tokio::test]
async fn test_search_failure_yields_nothing() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server, &dir);
    let mut crawler = CrawlOrchestrator::new(&config).unwrap();
    let stubs = crawler.crawl(&SearchQuery::new("test", 5)).await;

    assert!(stubs.is_empty());
}

#[tokio::test]
async fn test_relative_links_resolve_against_search_url() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_results_page(
        &server,
        1,
        results_page(&[("상대 경로로 연결된 기사 제목", "/article/rel")]),
        Some(1),
    )
    .await;

    let config = create_test_config(&server, &dir);
    let mut crawler = CrawlOrchestrator::new(&config).unwrap();
    let stubs = crawler.crawl(&SearchQuery::new("test", 1)).await;

    assert_eq!(stubs[0].link, format!("{}/article/rel", server.uri()));
}

#[tokio::test]
async fn test_content_extraction_and_misses() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let base = server.uri();

    mount_article(&server, "/article/body", article_page("본문 첫 문장입니다. 둘째 문장입니다.")).await;
    mount_article(
        &server,
        "/article/plain",
        "<html><body><div class=\"unknown\">다른 구조의 본문</div></body></html>".to_string(),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/article/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let record = |link: String| {
        ArticleRecord::from(news_pulse::ArticleStub {
            title: "본문 추출 테스트 기사".to_string(),
            link,
            summary: String::new(),
            source: "테스트일보".to_string(),
        })
    };

    let mut records = vec![
        record(format!("{}/article/body", base)),
        record(format!("{}/article/plain", base)),
        record(format!("{}/article/gone", base)),
        record(String::new()),
    ];

    let config = create_test_config(&server, &dir);
    let mut crawler = CrawlOrchestrator::new(&config).unwrap();
    crawler.fetch_contents(&mut records).await;

    assert_eq!(records[0].content, "본문 첫 문장입니다. 둘째 문장입니다.");
    // No body selector matched
    assert_eq!(records[1].content, "");
    // Fetch failed
    assert_eq!(records[2].content, "");
    // No link to fetch
    assert_eq!(records[3].content, "");
}

#[tokio::test]
async fn test_page_delay_follows_slow_responses() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let slow = Duration::from_millis(300);

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("DA", "NTB"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(results_page(&[("느리게 응답하는 첫 페이지 기사", "https://news.example.com/1")]))
                .set_delay(slow),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("DA", "PGD"))
        .and(query_param("p", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(results_page(&[("느리게 응답하는 둘째 페이지 기사", "https://news.example.com/2")]))
                .set_delay(slow),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut config = create_test_config(&server, &dir);
    config.rate_limit.page_delay_ms = 300;

    let mut crawler = CrawlOrchestrator::new(&config).unwrap();
    let start = Instant::now();
    let stubs = crawler.crawl(&SearchQuery::new("test", 2)).await;

    assert_eq!(stubs.len(), 2);
    // Two slow responses plus one full pause between them
    assert!(start.elapsed() >= Duration::from_millis(900), "elapsed {:?}", start.elapsed());
}

#[tokio::test]
async fn test_item_delay_follows_slow_articles() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/article/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(article_page("천천히 내려오는 기사 본문입니다."))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(2)
        .mount(&server)
        .await;

    let record = || {
        ArticleRecord::from(news_pulse::ArticleStub {
            title: "느린 본문 테스트 기사".to_string(),
            link: format!("{}/article/slow", base),
            summary: String::new(),
            source: "테스트일보".to_string(),
        })
    };
    let mut records = vec![record(), record()];

    let mut config = create_test_config(&server, &dir);
    config.rate_limit.item_delay_ms = 200;

    let mut crawler = CrawlOrchestrator::new(&config).unwrap();
    let start = Instant::now();
    crawler.fetch_contents(&mut records).await;

    assert!(records.iter().all(|r| !r.content.is_empty()));
    assert!(start.elapsed() >= Duration::from_millis(600), "elapsed {:?}", start.elapsed());
}
