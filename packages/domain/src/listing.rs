//! # リスティング
//!
//! エコシステムに掲載されたアプリ・連携の 1 件。一覧カード用の要約
//! ([`ListingCard`]) と、詳細画面のギャラリー ([`Listing::gallery`]) を組み立てる。

use serde::{Deserialize, Serialize};

use crate::text::strip_markdown;

/// カードに表示するカテゴリの最大数
pub const MAX_CARD_CATEGORIES: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub tag_line: Option<String>,
    pub features: Option<String>,
    pub pricing: Option<String>,
    pub logo: Option<Logo>,
    pub categories: Vec<Category>,
    pub collections: Vec<Category>,
    pub media: Vec<Media>,
    pub screenshots: Vec<Screenshot>,
    pub partner: Option<Partner>,
    pub native_integration_link: Option<String>,
    pub third_party_integration_link: Option<String>,
    pub published: Option<bool>,
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub url: String,
}

/// カテゴリ・コレクション
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id:   String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    #[default]
    Screenshot,
    Video,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    pub id:         String,
    pub url:        String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption:    Option<String>,
    #[serde(rename = "type")]
    pub media_type: MediaType,
}

/// 旧形式のスクリーンショット（`file.url` に実体がある）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Screenshot {
    pub id:      String,
    pub caption: Option<String>,
    pub file:    Option<Logo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Partner {
    pub company: String,
    pub website: Option<String>,
}

impl Listing {
    /// 詳細画面のギャラリー
    ///
    /// スクリーンショットを `SCREENSHOT` のメディアとして先に並べ、その後に
    /// `media` を続ける。URL が空のものは除く。
    pub fn gallery(&self) -> Vec<Media> {
        let screenshots = self.screenshots.iter().map(|s| Media {
            id:         s.id.clone(),
            url:        s.file.as_ref().map(|f| f.url.clone()).unwrap_or_default(),
            caption:    s.caption.clone(),
            media_type: MediaType::Screenshot,
        });

        screenshots
            .chain(self.media.iter().cloned())
            .filter(|m| !m.url.is_empty())
            .collect()
    }

    /// インストール先のリンク（ネイティブ連携を優先）
    pub fn install_link(&self) -> Option<&str> {
        self.native_integration_link
            .as_deref()
            .or(self.third_party_integration_link.as_deref())
            .filter(|link| !link.is_empty())
    }
}

/// 一覧カードの表示内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingCard {
    pub id:               String,
    pub name:             String,
    pub logo_url:         Option<String>,
    /// ロゴがないときに代わりに出す頭文字
    pub initial:          String,
    pub tag_line:         Option<String>,
    /// Markdown を取り除いた説明文
    pub description:      Option<String>,
    pub categories:       Vec<String>,
    /// 表示しきれなかったカテゴリ数（`+N more`）
    pub hidden_categories: usize,
}

impl ListingCard {
    /// 表示しきれなかったカテゴリの表記（なければ `None`）
    pub fn more_label(&self) -> Option<String> {
        (self.hidden_categories > 0).then(|| format!("+{} more", self.hidden_categories))
    }
}

impl From<&Listing> for ListingCard {
    fn from(listing: &Listing) -> Self {
        let initial = listing.name.chars().next().map(String::from).unwrap_or_default();

        Self {
            id: listing.id.clone(),
            name: listing.name.clone(),
            logo_url: listing.logo.as_ref().map(|l| l.url.clone()).filter(|u| !u.is_empty()),
            initial,
            tag_line: listing.tag_line.clone(),
            description: listing
                .description
                .as_deref()
                .map(strip_markdown)
                .filter(|d| !d.is_empty()),
            categories: listing
                .categories
                .iter()
                .take(MAX_CARD_CATEGORIES)
                .map(|c| c.name.clone())
                .collect(),
            hidden_categories: listing.categories.len().saturating_sub(MAX_CARD_CATEGORIES),
        }
    }
}
