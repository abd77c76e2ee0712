//! # リスティング一覧のページ送り
//!
//! [`CursorPager`] と [`ListingsFetcher`] をつなぎ、表示中のリスティングと
//! 直近のエラーを保持する。結果は必ずページャの古い結果判定を通してから反映する。
//!
//! 取得を並行させたい呼び出し側は `request_*` でリクエストを発行し、
//! [`ListingBrowser::fetch`] と [`ListingBrowser::apply`] を自分で組み合わせる。

use ecostarter_domain::{
    listing::Listing,
    pagination::{CursorPager, FetchOutcome, FetchRequest},
};

use super::proxy::{FetchError, ListingsFetcher, ListingsPage};

pub struct ListingBrowser<F> {
    fetcher:  F,
    pager:    CursorPager,
    listings: Vec<Listing>,
    error:    Option<FetchError>,
}

impl<F: ListingsFetcher> ListingBrowser<F> {
    /// `ecosystem_id` の先頭ページを指す状態で作る（まだ取得しない）
    pub fn new(fetcher: F, ecosystem_id: impl Into<String>) -> Self {
        Self {
            fetcher,
            pager: CursorPager::new(ecosystem_id),
            listings: Vec::new(),
            error: None,
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn pager(&self) -> &CursorPager {
        &self.pager
    }

    pub fn has_next_page(&self) -> bool {
        self.pager.has_next()
    }

    pub fn has_previous_page(&self) -> bool {
        self.pager.has_previous()
    }

    /// 現在のページを取得する
    pub async fn load(&mut self) -> FetchOutcome {
        let request = self.pager.request();
        self.run(request).await
    }

    /// 現在のページを取り直す
    pub async fn refetch(&mut self) -> FetchOutcome {
        self.load().await
    }

    /// 次のページへ進む。次がなければ `None`
    pub async fn next_page(&mut self) -> Option<FetchOutcome> {
        let request = self.request_next()?;
        Some(self.run(request).await)
    }

    /// 前のページへ戻る。前がなければ `None`
    pub async fn previous_page(&mut self) -> Option<FetchOutcome> {
        let request = self.request_previous()?;
        Some(self.run(request).await)
    }

    /// 別のエコシステムに切り替えて先頭ページを取得する。同じなら `None`
    pub async fn switch_collection(&mut self, ecosystem_id: impl Into<String>) -> Option<FetchOutcome> {
        let request = self.request_collection(ecosystem_id)?;
        Some(self.run(request).await)
    }

    pub fn request_next(&mut self) -> Option<FetchRequest> {
        self.pager.advance()
    }

    pub fn request_previous(&mut self) -> Option<FetchRequest> {
        self.pager.retreat()
    }

    /// 対象を切り替えたリクエストを発行する
    ///
    /// 前のエコシステムのリスティングとエラーはこの時点で消す。
    pub fn request_collection(&mut self, ecosystem_id: impl Into<String>) -> Option<FetchRequest> {
        let request = self.pager.set_collection_key(ecosystem_id)?;
        self.listings.clear();
        self.error = None;
        Some(request)
    }

    /// リクエストを実行する（状態は変えない）
    pub async fn fetch(&self, request: &FetchRequest) -> Result<ListingsPage, FetchError> {
        self.fetcher.fetch_listings(request).await
    }

    /// 取得結果を反映する
    ///
    /// 既に別のページ・別のエコシステムに移っていれば成功でも失敗でも捨てる。
    pub fn apply(
        &mut self,
        request: &FetchRequest,
        result: Result<ListingsPage, FetchError>,
    ) -> FetchOutcome {
        match result {
            Ok(page) => {
                let outcome = self.pager.complete(request, page.cursors);
                if outcome == FetchOutcome::Applied {
                    self.listings = page.listings;
                    self.error = None;
                }
                outcome
            }
            Err(err) => {
                if !self.pager.is_current(request) {
                    tracing::debug!(error = %err, "古いリクエストのエラーを捨てました");
                    return FetchOutcome::Stale;
                }
                tracing::warn!(
                    error.category = "external_service",
                    error.kind = "listings_fetch",
                    status_code = ?err.status_code,
                    "リスティング一覧の取得に失敗しました: {}",
                    err
                );
                self.error = Some(err);
                FetchOutcome::Applied
            }
        }
    }

    async fn run(&mut self, request: FetchRequest) -> FetchOutcome {
        let result = self.fetch(&request).await;
        self.apply(&request, result)
    }
}
