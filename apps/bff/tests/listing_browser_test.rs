//! # ListingBrowser のテスト
//!
//! スタブの取得元で、ページ送り・エコシステム切り替え・遅れて届いた結果の破棄を検証する。

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use ecostarter_bff::client::{FetchError, ListingBrowser, ListingsFetcher, ListingsPage};
use ecostarter_domain::{
    listing::Listing,
    pagination::{Cursor, FetchOutcome, FetchRequest, PageCursors},
};
use pretty_assertions::assert_eq;
use tokio_test::{assert_err, assert_ok};

// --- スタブ ---

type PageKey = (String, Option<String>);

/// `(エコシステム ID, カーソル)` ごとに決めた結果を返す取得元
#[derive(Default)]
struct StubFetcher {
    pages: HashMap<PageKey, Result<ListingsPage, FetchError>>,
    calls: Mutex<Vec<FetchRequest>>,
}

impl StubFetcher {
    fn page(mut self, ecosystem_id: &str, cursor: Option<&str>, page: ListingsPage) -> Self {
        self.pages.insert(key(ecosystem_id, cursor), Ok(page));
        self
    }

    fn error(mut self, ecosystem_id: &str, cursor: Option<&str>, error: FetchError) -> Self {
        self.pages.insert(key(ecosystem_id, cursor), Err(error));
        self
    }

    fn calls(&self) -> Vec<FetchRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListingsFetcher for StubFetcher {
    async fn fetch_listings(&self, request: &FetchRequest) -> Result<ListingsPage, FetchError> {
        self.calls.lock().unwrap().push(request.clone());
        let lookup = (
            request.collection_key.clone(),
            request.cursor.as_ref().map(|c| c.as_str().to_string()),
        );
        self.pages.get(&lookup).cloned().unwrap_or_else(|| {
            Err(FetchError {
                message:     "Failed to fetch listings".to_string(),
                status_code: Some(404),
                detail:      None,
            })
        })
    }
}

// --- ヘルパー ---

fn key(ecosystem_id: &str, cursor: Option<&str>) -> PageKey {
    (ecosystem_id.to_string(), cursor.map(str::to_string))
}

fn listing(id: &str) -> Listing {
    Listing {
        id: id.to_string(),
        name: id.to_uppercase(),
        ..Default::default()
    }
}

fn page(ids: &[&str], next: Option<&str>, previous: Option<&str>) -> ListingsPage {
    ListingsPage {
        listings: ids.iter().map(|id| listing(id)).collect(),
        cursors:  PageCursors::new(next.map(Cursor::new), previous.map(Cursor::new)),
    }
}

fn ids<F: ListingsFetcher>(browser: &ListingBrowser<F>) -> Vec<&str> {
    browser.listings().iter().map(|l| l.id.as_str()).collect()
}

/// eco-1 に 2 ページ、eco-2 に 1 ページ
fn two_pages() -> StubFetcher {
    StubFetcher::default()
        .page("eco-1", None, page(&["a", "b"], Some("c2"), None))
        .page("eco-1", Some("c2"), page(&["c"], None, Some("c1")))
        .page("eco-1", Some("c1"), page(&["a", "b"], Some("c2"), None))
        .page("eco-2", None, page(&["x"], None, None))
}

// --- ページ送り ---

#[tokio::test]
async fn test_loadで先頭ページを表示する() {
    let mut browser = ListingBrowser::new(two_pages(), "eco-1");

    let outcome = browser.load().await;

    assert_eq!(outcome, FetchOutcome::Applied);
    assert_eq!(ids(&browser), vec!["a", "b"]);
    assert!(browser.has_next_page());
    assert!(!browser.has_previous_page());
    assert_eq!(browser.error(), None);
}

#[tokio::test]
async fn test_次のページと前のページを行き来する() {
    let mut browser = ListingBrowser::new(two_pages(), "eco-1");
    browser.load().await;

    assert_eq!(browser.next_page().await, Some(FetchOutcome::Applied));
    assert_eq!(ids(&browser), vec!["c"]);
    assert!(!browser.has_next_page());
    assert!(browser.has_previous_page());

    assert_eq!(browser.previous_page().await, Some(FetchOutcome::Applied));
    assert_eq!(ids(&browser), vec!["a", "b"]);
    assert_eq!(
        browser.pager().current_cursor().map(Cursor::as_str),
        Some("c1")
    );
}

#[tokio::test]
async fn test_次がなければ取得しない() {
    let mut browser = ListingBrowser::new(two_pages(), "eco-2");
    browser.load().await;

    assert_eq!(browser.next_page().await, None);
    assert_eq!(browser.previous_page().await, None);
    assert_eq!(ids(&browser), vec!["x"]);
}

#[tokio::test]
async fn test_refetchは同じページを取り直す() {
    let fetcher = Arc::new(two_pages());
    let mut browser = ListingBrowser::new(Arc::clone(&fetcher), "eco-1");
    browser.load().await;
    browser.next_page().await;

    let outcome = browser.refetch().await;

    assert_eq!(outcome, FetchOutcome::Applied);
    let calls = fetcher.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[1], calls[2]);
    assert_eq!(calls[2].cursor, Some(Cursor::new("c2")));
}

// --- エコシステム切り替え ---

#[tokio::test]
async fn test_別のエコシステムに切り替えると先頭ページから読み直す() {
    let mut browser = ListingBrowser::new(two_pages(), "eco-1");
    browser.load().await;
    browser.next_page().await;

    let outcome = browser.switch_collection("eco-2").await;

    assert_eq!(outcome, Some(FetchOutcome::Applied));
    assert_eq!(ids(&browser), vec!["x"]);
    assert_eq!(browser.pager().collection_key(), "eco-2");
    assert_eq!(browser.pager().current_cursor(), None);
}

#[tokio::test]
async fn test_同じエコシステムへの切り替えは何もしない() {
    let mut browser = ListingBrowser::new(two_pages(), "eco-1");
    browser.load().await;

    assert_eq!(browser.switch_collection("eco-1").await, None);
    assert_eq!(ids(&browser), vec!["a", "b"]);
}

// --- 古い結果の破棄 ---

#[tokio::test]
async fn test_遅れて届いた前のページの結果は捨てる() {
    let mut browser = ListingBrowser::new(two_pages(), "eco-1");
    browser.load().await;

    // 先頭ページの取り直しが遅れている間に次のページへ進む
    let slow = browser.pager().request();
    let slow_result = browser.fetch(&slow).await;
    let fast = browser.request_next().unwrap();
    let fast_result = browser.fetch(&fast).await;

    assert_eq!(browser.apply(&fast, fast_result), FetchOutcome::Applied);
    assert_eq!(browser.apply(&slow, slow_result), FetchOutcome::Stale);
    assert_eq!(ids(&browser), vec!["c"]);
}

#[tokio::test]
async fn test_切り替え前のエコシステムの結果は捨てる() {
    let mut browser = ListingBrowser::new(two_pages(), "eco-1");

    let old = browser.pager().request();
    let old_result = assert_ok!(browser.fetch(&old).await);
    let new = browser.request_collection("eco-2").unwrap();
    let new_result = browser.fetch(&new).await;

    assert_eq!(browser.apply(&old, Ok(old_result)), FetchOutcome::Stale);
    assert!(browser.listings().is_empty());
    assert_eq!(browser.apply(&new, new_result), FetchOutcome::Applied);
    assert_eq!(ids(&browser), vec!["x"]);
}

// --- エラー ---

#[tokio::test]
async fn test_現在のページの失敗はエラーとして保持し表示中の一覧は残す() {
    let fetcher = two_pages().error(
        "eco-1",
        Some("c2"),
        FetchError {
            message:     "Unauthorized".to_string(),
            status_code: Some(401),
            detail:      None,
        },
    );
    let mut browser = ListingBrowser::new(fetcher, "eco-1");
    browser.load().await;

    let outcome = browser.next_page().await;

    assert_eq!(outcome, Some(FetchOutcome::Applied));
    let error = browser.error().unwrap();
    assert_eq!(error.message, "Unauthorized");
    assert_eq!(error.status_code, Some(401));
    assert_eq!(ids(&browser), vec!["a", "b"]);
}

#[tokio::test]
async fn test_次のページの取得に失敗すると前後どちらにも移動できない() {
    let fetcher = Arc::new(two_pages().error(
        "eco-1",
        Some("c2"),
        FetchError {
            message:     "Bad Gateway".to_string(),
            status_code: Some(502),
            detail:      None,
        },
    ));
    let mut browser = ListingBrowser::new(Arc::clone(&fetcher), "eco-1");
    browser.load().await;

    browser.next_page().await;

    assert!(!browser.has_next_page());
    assert!(!browser.has_previous_page());
    assert_eq!(browser.next_page().await, None);
    assert_eq!(browser.previous_page().await, None);
    assert_eq!(fetcher.calls().len(), 2);
    assert_eq!(
        browser.pager().current_cursor().map(Cursor::as_str),
        Some("c2")
    );
}

#[tokio::test]
async fn test_古いリクエストの失敗は報告しない() {
    let fetcher = StubFetcher::default().page("eco-2", None, page(&["x"], None, None));
    let mut browser = ListingBrowser::new(fetcher, "eco-1");

    let old = browser.pager().request();
    let old_result = browser.fetch(&old).await;
    assert_err!(&old_result);
    let new = browser.request_collection("eco-2").unwrap();
    let new_result = browser.fetch(&new).await;

    assert_eq!(browser.apply(&old, old_result), FetchOutcome::Stale);
    assert_eq!(browser.apply(&new, new_result), FetchOutcome::Applied);
    assert_eq!(browser.error(), None);
}

#[tokio::test]
async fn test_成功すると直前のエラーを消す() {
    let fetcher = StubFetcher::default()
        .error(
            "eco-1",
            None,
            FetchError {
                message:     "Network".to_string(),
                status_code: None,
                detail:      None,
            },
        )
        .page("eco-2", None, page(&["x"], None, None));
    let mut browser = ListingBrowser::new(fetcher, "eco-1");
    browser.load().await;
    assert!(browser.error().is_some());

    browser.switch_collection("eco-2").await;

    assert_eq!(browser.error(), None);
    assert_eq!(ids(&browser), vec!["x"]);
}

#[tokio::test]
async fn test_ページがないときは取得元を呼ばない() {
    let fetcher = Arc::new(two_pages());
    let mut browser = ListingBrowser::new(Arc::clone(&fetcher), "eco-2");
    browser.load().await;

    browser.next_page().await;
    browser.previous_page().await;
    browser.switch_collection("eco-2").await;

    assert_eq!(
        fetcher.calls(),
        vec![FetchRequest {
            collection_key: "eco-2".to_string(),
            cursor:         None,
        }]
    );
}
