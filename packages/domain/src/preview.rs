//! # プレビュー用エコシステムのカタログ
//!
//! 埋め込み（iframe）デモで切り替えられる公開エコシステムの一覧と、
//! iframe の `src` を組み立てる処理。

use serde::Serialize;

/// プレビュー対象のエコシステム
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreviewEcosystem {
    pub name:         &'static str,
    /// ホスト型エコシステムページの URL
    pub url:          &'static str,
    pub ecosystem_id: &'static str,
}

const fn preview(name: &'static str, url: &'static str, ecosystem_id: &'static str) -> PreviewEcosystem {
    PreviewEcosystem {
        name,
        url,
        ecosystem_id,
    }
}

/// 組み込みのカタログ。先頭が既定
pub const PREVIEW_ECOSYSTEMS: [PreviewEcosystem; 10] = [
    preview("Apideck", "https://requests.apideck.io/", "cjm81i5c9wnbl0931dvhgawzu"),
    preview("Nmbrs", "https://nmbrs.apideck.io/", "cjofmxzsbbkgd0989y8f8g2zw"),
    preview("Aikido Security", "https://aikido-hvnia0jnsv.apideck.io/", "claphoboy5765205576k1vooubu"),
    preview("Perks Novo", "https://perks.novo.co/", "cm9307vyr00begqp4i4o15btr"),
    preview("Personio", "https://personio.apideck.io/", "ck8zpp2jb8j1u0b82q2wnrjx8"),
    preview("SaasBlocks", "https://saasblocks.apideck.io/", "cjo9a5buoc99409141m6y358t"),
    preview("Beekeeper", "https://beekeeper.apideck.io/", "ckw1qqk7v0ozg0b4116nvgyoo"),
    preview("Lighthouse", "https://stardekk.apideck.io/", "ckizrofhah4de0b2001r00rvk"),
    preview("Trengo", "https://trengo-2m85iy505a.apideck.io/", "cl6nq7xq6174312m4d2h2713gf"),
    preview("OneAdvanced", "https://oneadvanced.apideck.io/", "ckuo3npv7h1d90a4592i2c0kx"),
];

impl PreviewEcosystem {
    pub fn default_entry() -> &'static PreviewEcosystem {
        &PREVIEW_ECOSYSTEMS[0]
    }

    pub fn find_by_id(ecosystem_id: &str) -> Option<&'static PreviewEcosystem> {
        PREVIEW_ECOSYSTEMS.iter().find(|e| e.ecosystem_id == ecosystem_id)
    }

    pub fn find_by_url(url: &str) -> Option<&'static PreviewEcosystem> {
        PREVIEW_ECOSYSTEMS.iter().find(|e| e.url == url)
    }
}

/// iframe の `src`（埋め込みモードのクエリを付ける）
///
/// ```rust
/// use ecostarter_domain::preview::embed_src;
///
/// assert_eq!(embed_src("https://a.io/"), "https://a.io/?embed=true");
/// assert_eq!(embed_src("https://a.io/?lang=en"), "https://a.io/?lang=en&embed=true");
/// ```
pub fn embed_src(url: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}embed=true")
}

/// 埋め込み画面の表示対象
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedTarget {
    /// カタログにある場合の表示名
    pub name:         Option<&'static str>,
    pub url:          String,
    pub src:          String,
    /// セッションでエコシステムが固定されている（選択 UI を出さない）
    pub preview_mode: bool,
}

impl EmbedTarget {
    /// セッションのエコシステム ID から表示対象を決める
    ///
    /// カタログにない ID は既定のエコシステムを表示する（プレビューモードのまま）。
    pub fn resolve(session_ecosystem_id: Option<&str>) -> Self {
        let matched = session_ecosystem_id.and_then(PreviewEcosystem::find_by_id);
        let entry = matched.unwrap_or_else(PreviewEcosystem::default_entry);

        Self {
            name:         Some(entry.name),
            url:          entry.url.to_string(),
            src:          embed_src(entry.url),
            preview_mode: session_ecosystem_id.is_some(),
        }
    }

    /// 任意の URL を表示対象にする（カタログにあれば名前を引く）
    pub fn for_url(url: &str) -> Self {
        Self {
            name:         PreviewEcosystem::find_by_url(url).map(|e| e.name),
            url:          url.to_string(),
            src:          embed_src(url),
            preview_mode: false,
        }
    }
}

/// カタログを前後に巡回する選択状態（端では反対側に回り込む）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreviewCarousel {
    index: usize,
}

impl PreviewCarousel {
    /// 指定 ID の位置から始める。カタログにない ID なら先頭
    pub fn starting_at(ecosystem_id: &str) -> Self {
        let index = PREVIEW_ECOSYSTEMS
            .iter()
            .position(|e| e.ecosystem_id == ecosystem_id)
            .unwrap_or_default();
        Self { index }
    }

    pub fn current(&self) -> &'static PreviewEcosystem {
        &PREVIEW_ECOSYSTEMS[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn step_forward(&mut self) -> &'static PreviewEcosystem {
        self.index = (self.index + 1) % PREVIEW_ECOSYSTEMS.len();
        self.current()
    }

    pub fn step_back(&mut self) -> &'static PreviewEcosystem {
        self.index = self
            .index
            .checked_sub(1)
            .unwrap_or(PREVIEW_ECOSYSTEMS.len() - 1);
        self.current()
    }

    /// 範囲外の位置は無視して `None`
    pub fn select(&mut self, index: usize) -> Option<&'static PreviewEcosystem> {
        let entry = PREVIEW_ECOSYSTEMS.get(index)?;
        self.index = index;
        Some(entry)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_カタログは10件でidとurlが重複しない() {
        let ids: HashSet<_> = PREVIEW_ECOSYSTEMS.iter().map(|e| e.ecosystem_id).collect();
        let urls: HashSet<_> = PREVIEW_ECOSYSTEMS.iter().map(|e| e.url).collect();

        assert_eq!(PREVIEW_ECOSYSTEMS.len(), 10);
        assert_eq!(ids.len(), 10);
        assert_eq!(urls.len(), 10);
        assert_eq!(PreviewEcosystem::default_entry().name, "Apideck");
    }

    #[test]
    fn test_idとurlで検索できる() {
        assert_eq!(
            PreviewEcosystem::find_by_id("ck8zpp2jb8j1u0b82q2wnrjx8").map(|e| e.name),
            Some("Personio")
        );
        assert_eq!(
            PreviewEcosystem::find_by_url("https://perks.novo.co/").map(|e| e.name),
            Some("Perks Novo")
        );
        assert_eq!(PreviewEcosystem::find_by_id("unknown"), None);
    }

    #[test]
    fn test_セッションがなければ既定のエコシステムを選択可能な状態で表示する() {
        let target = EmbedTarget::resolve(None);

        assert_eq!(target.name, Some("Apideck"));
        assert_eq!(target.src, "https://requests.apideck.io/?embed=true");
        assert!(!target.preview_mode);
    }

    #[test]
    fn test_セッションのidがカタログにあればそのエコシステムに固定する() {
        let target = EmbedTarget::resolve(Some("cl6nq7xq6174312m4d2h2713gf"));

        assert_eq!(target.name, Some("Trengo"));
        assert_eq!(target.url, "https://trengo-2m85iy505a.apideck.io/");
        assert!(target.preview_mode);
    }

    #[test]
    fn test_カタログにないidは既定を表示しプレビューモードは維持する() {
        let target = EmbedTarget::resolve(Some("unknown"));

        assert_eq!(target.name, Some("Apideck"));
        assert!(target.preview_mode);
    }

    #[test]
    fn test_任意のurlはカタログになければ名前なし() {
        let target = EmbedTarget::for_url("https://custom.example.com/?x=1");

        assert_eq!(target.name, None);
        assert_eq!(target.src, "https://custom.example.com/?x=1&embed=true");
    }

    #[test]
    fn test_カルーセルは両端で回り込む() {
        let mut carousel = PreviewCarousel::default();

        assert_eq!(carousel.step_back().name, "OneAdvanced");
        assert_eq!(carousel.step_forward().name, "Apideck");
        assert_eq!(carousel.step_forward().name, "Nmbrs");
    }

    #[test]
    fn test_カルーセルを一周すると元に戻る() {
        let mut carousel = PreviewCarousel::starting_at("ckw1qqk7v0ozg0b4116nvgyoo");
        let start = carousel.index();

        for _ in 0..PREVIEW_ECOSYSTEMS.len() {
            carousel.step_forward();
        }

        assert_eq!(carousel.index(), start);
        assert_eq!(carousel.current().name, "Beekeeper");
    }

    #[test]
    fn test_範囲外の選択は無視する() {
        let mut carousel = PreviewCarousel::default();

        assert_eq!(carousel.select(3).map(|e| e.name), Some("Perks Novo"));
        assert_eq!(carousel.select(10), None);
        assert_eq!(carousel.index(), 3);
    }
}
