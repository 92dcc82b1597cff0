//! Integration tests for the crawler and game
//!
//! These tests use wiremock to serve a small fixture quote site and drive
//! the full scrape, backup and play cycle end-to-end.

use quote_guesser::config::SiteConfig;
use quote_guesser::crawler::QuoteSite;
use quote_guesser::game::{GameSession, GameState, Hint, Outcome};
use quote_guesser::storage::{CsvBackup, QuoteStore};
use quote_guesser::{AuthorInfo, Quote, QuoteError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NEXT_TO_2: &str =
    r#"<ul class="pager"><li class="next"><a href="/page/2/">Next <span aria-hidden="true">&rarr;</span></a></li></ul>"#;
const PREVIOUS_ONLY: &str =
    r#"<ul class="pager"><li class="previous"><a href="/page/1/"><span aria-hidden="true">&larr;</span> Previous</a></li></ul>"#;

fn fixture_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "“The world as we have created it is a process of our thinking.”",
            "Albert Einstein",
            "/author/Albert-Einstein",
        ),
        Quote::new(
            "“It is our choices, Harry, that show what we truly are.”",
            "J.K. Rowling",
            "/author/J-K-Rowling",
        ),
        Quote::new(
            "“The person, be it gentleman or lady, who has not pleasure in a good novel, must be intolerably stupid.”",
            "Jane Austen",
            "/author/Jane-Austen",
        ),
        Quote::new(
            "“Get your facts first, then you can distort them as you please.”",
            "Mark Twain",
            "/author/Mark-Twain",
        ),
        Quote::new("“Be yourself; everyone else is already taken.”", "Oscar Wilde", "/author/Oscar-Wilde"),
    ]
}

fn quote_block(quote: &Quote) -> String {
    format!(
        r#"<div class="quote" itemscope itemtype="http://schema.org/CreativeWork">
        <span class="text" itemprop="text">{}</span>
        <span>by <small class="author" itemprop="author">{}</small>
        <a href="{}">(about)</a>
        </span>
        <div class="tags">Tags: <a class="tag" href="/tag/life/page/1/">life</a></div>
    </div>"#,
        quote.text, quote.author, quote.author_href
    )
}

fn listing_page(quotes: &[Quote], pager: &str) -> String {
    let blocks: Vec<String> = quotes.iter().map(quote_block).collect();
    format!(
        r#"<html><head><title>Quotes to Scrape</title></head><body>
        <div class="container"><div class="row"><div class="col-md-8">
        {}
        <nav>{}</nav>
        </div></div></div></body></html>"#,
        blocks.join("\n"),
        pager
    )
}

fn author_page(date: &str, place: &str) -> String {
    format!(
        r#"<html><body><div class="author-details">
        <h3 class="author-title">Mark Twain</h3>
        <p><strong>Born:</strong> <span class="author-born-date">{}</span>
        <span class="author-born-location">{}</span></p>
        </div></body></html>"#,
        date, place
    )
}

async fn mount_page(server: &MockServer, at: &str, body: String, expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(expected_hits)
        .mount(server)
        .await;
}

fn site_for(server: &MockServer) -> QuoteSite {
    QuoteSite::new(SiteConfig {
        base_url: server.uri(),
        ..SiteConfig::default()
    })
    .expect("Failed to create site client")
}

#[tokio::test]
async fn test_two_page_site_count_then_extract() {
    let server = MockServer::start().await;
    let quotes = fixture_quotes();

    // Each page is fetched once while counting and once while extracting
    mount_page(&server, "/page/1/", listing_page(&quotes[..3], NEXT_TO_2), 2).await;
    mount_page(&server, "/page/2/", listing_page(&quotes[3..], PREVIOUS_ONLY), 2).await;

    let site = site_for(&server);

    let pages = site.count_pages().await.expect("count failed");
    assert_eq!(pages, 2);

    let extracted = site.extract_quotes(pages).await.expect("extraction failed");
    assert_eq!(extracted, quotes);

    server.verify().await;
}

#[tokio::test]
async fn test_single_pass_matches_two_pass_with_half_the_requests() {
    let server = MockServer::start().await;
    let quotes = fixture_quotes();

    mount_page(&server, "/page/1/", listing_page(&quotes[..3], NEXT_TO_2), 1).await;
    mount_page(&server, "/page/2/", listing_page(&quotes[3..], PREVIOUS_ONLY), 1).await;

    let crawl = site_for(&server)
        .crawl_single_pass()
        .await
        .expect("crawl failed");

    assert_eq!(crawl.pages, 2);
    assert_eq!(crawl.quotes, quotes);

    server.verify().await;
}

#[tokio::test]
async fn test_extraction_never_looks_past_last_page() {
    let server = MockServer::start().await;
    let quotes = fixture_quotes();

    // The final page has no pager at all; inspecting it would be a parse error
    mount_page(&server, "/page/1/", listing_page(&quotes[..3], NEXT_TO_2), 1).await;
    mount_page(&server, "/page/2/", listing_page(&quotes[3..], ""), 1).await;

    let extracted = site_for(&server)
        .extract_quotes(2)
        .await
        .expect("extraction failed");
    assert_eq!(extracted.len(), 5);

    server.verify().await;
}

#[tokio::test]
async fn test_extracting_one_page_stops_at_page_one() {
    let server = MockServer::start().await;
    let quotes = fixture_quotes();

    mount_page(&server, "/page/1/", listing_page(&quotes[..3], NEXT_TO_2), 1).await;
    mount_page(&server, "/page/2/", listing_page(&quotes[3..], PREVIOUS_ONLY), 0).await;

    let extracted = site_for(&server)
        .extract_quotes(1)
        .await
        .expect("extraction failed");
    assert_eq!(extracted, quotes[..3].to_vec());

    server.verify().await;
}

#[tokio::test]
async fn test_page_count_larger_than_site_is_parse_error() {
    let server = MockServer::start().await;
    let quotes = fixture_quotes();

    mount_page(&server, "/page/1/", listing_page(&quotes[..3], NEXT_TO_2), 1).await;
    mount_page(&server, "/page/2/", listing_page(&quotes[3..], PREVIOUS_ONLY), 1).await;

    let result = site_for(&server).extract_quotes(3).await;
    assert!(matches!(result, Err(QuoteError::Parse { .. })));
}

#[tokio::test]
async fn test_missing_page_aborts_count() {
    let server = MockServer::start().await;
    let quotes = fixture_quotes();

    // Page 2 is linked but not served
    mount_page(&server, "/page/1/", listing_page(&quotes[..3], NEXT_TO_2), 1).await;

    match site_for(&server).count_pages().await {
        Err(QuoteError::Fetch { url, reason }) => {
            assert!(url.ends_with("/page/2/"));
            assert_eq!(reason, "HTTP 404");
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cyclic_next_link_is_parse_error() {
    let server = MockServer::start().await;
    let quotes = fixture_quotes();
    let back_to_1 =
        r#"<ul class="pager"><li class="next"><a href="/page/1/">Next</a></li></ul>"#;

    // Each page is fetched once per crawl; the loop is caught before a refetch
    mount_page(&server, "/page/1/", listing_page(&quotes[..3], NEXT_TO_2), 2).await;
    mount_page(&server, "/page/2/", listing_page(&quotes[3..], back_to_1), 2).await;

    let site = site_for(&server);

    match site.count_pages().await {
        Err(QuoteError::Parse { url, .. }) => assert!(url.ends_with("/page/1/")),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(matches!(
        site.crawl_single_pass().await,
        Err(QuoteError::Parse { .. })
    ));

    server.verify().await;
}

#[tokio::test]
async fn test_incomplete_quote_block_aborts_extraction() {
    let server = MockServer::start().await;

    let broken = format!(
        r#"<html><body>{}<div class="quote"><span class="text">“No author here”</span></div>
        <nav>{}</nav></body></html>"#,
        quote_block(&fixture_quotes()[0]),
        PREVIOUS_ONLY
    );
    mount_page(&server, "/page/1/", broken, 1).await;

    let result = site_for(&server).extract_quotes(1).await;
    assert!(matches!(result, Err(QuoteError::Extraction { .. })));
}

#[tokio::test]
async fn test_author_info_is_fetched_every_time() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/author/Mark-Twain",
        author_page("November 30, 1835", "in Florida, Missouri, The United States"),
        2,
    )
    .await;

    let site = site_for(&server);
    let first = site.resolve_author_info("/author/Mark-Twain").await.unwrap();
    let second = site.resolve_author_info("/author/Mark-Twain").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first,
        AuthorInfo {
            date_of_birth: "November 30, 1835".to_string(),
            place_of_birth: "in Florida, Missouri, The United States".to_string(),
        }
    );

    server.verify().await;
}

#[tokio::test]
async fn test_unknown_author_is_fetch_error() {
    let server = MockServer::start().await;
    let result = site_for(&server).resolve_author_info("/author/Nobody").await;
    assert!(matches!(result, Err(QuoteError::Fetch { .. })));
}

#[tokio::test]
async fn test_scrape_backup_restore_round_trip() {
    let server = MockServer::start().await;
    let quotes = fixture_quotes();

    mount_page(&server, "/page/1/", listing_page(&quotes[..3], NEXT_TO_2), 2).await;
    mount_page(&server, "/page/2/", listing_page(&quotes[3..], PREVIOUS_ONLY), 2).await;

    let crawl = site_for(&server).crawl(false).await.expect("crawl failed");

    let dir = tempfile::TempDir::new().unwrap();
    let backup = CsvBackup::new(dir.path().join("quotes_backup.csv"));
    backup.save(&crawl.quotes).unwrap();

    assert_eq!(backup.load().unwrap(), quotes);
}

#[tokio::test]
async fn test_game_uses_site_for_birth_hint() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/author/Mark-Twain",
        author_page("November 30, 1835", "in Florida, Missouri, The United States"),
        1,
    )
    .await;

    let site = site_for(&server);
    let mut game = GameSession::with_quote(fixture_quotes()[3].clone(), 4);

    let outcomes = [
        game.submit("", &site).await.unwrap(),
        game.submit("Charles Dickens", &site).await.unwrap(),
        game.submit("Mark Twain", &site).await.unwrap(),
    ];

    assert_eq!(
        outcomes,
        [
            Outcome::Wrong {
                hint: None,
                remaining: 3
            },
            Outcome::Wrong {
                hint: Some(Hint::BornOn(AuthorInfo {
                    date_of_birth: "November 30, 1835".to_string(),
                    place_of_birth: "in Florida, Missouri, The United States".to_string(),
                })),
                remaining: 2
            },
            Outcome::Correct {
                author: "Mark Twain".to_string()
            },
        ]
    );
    assert_eq!(game.state(), GameState::Won);

    server.verify().await;
}
