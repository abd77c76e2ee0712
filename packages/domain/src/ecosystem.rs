//! # エコシステム
//!
//! Ecosystem API の `GET /ecosystems/{id}` が返すエコシステム設定の型。
//!
//! 表示設定（マストヘッド・カード・リスティング）はどのフィールドも省略されうる。
//! 既定値の補完は描画時に一度だけ `resolve()` で行い、以降は解決済みの型だけを扱う。

use serde::{Deserialize, Serialize};

use crate::listing_naming::ListingNaming;

define_validated_id! {
    /// エコシステム ID
    ///
    /// 上流が発行する cuid / UUID。リスティング一覧は UUID でしか引けない点に注意。
    pub struct EcosystemId {
        label: "エコシステム ID",
        max_length: 255,
    }
}

define_validated_id! {
    /// リスティング ID
    pub struct ListingId {
        label: "リスティング ID",
        max_length: 255,
    }
}

/// エコシステム
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ecosystem {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub about: Option<String>,
    pub is_published: bool,
    pub primary_color: Option<String>,
    pub body_background_color: Option<String>,
    pub navigation_background_color: Option<String>,
    pub navigation_color: Option<String>,
    pub attribution: Option<bool>,
    pub masthead_settings: Option<MastheadSettings>,
    pub card_settings: Option<CardSettings>,
    pub listing_settings: Option<ListingSettings>,
    pub total_published_listings: Option<u64>,
    pub website: Option<String>,
    pub custom_domain: Option<String>,
    pub custom_settings: Option<CustomSettings>,
    pub navigation_sticky: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Ecosystem {
    /// リスティングの呼び名
    ///
    /// 未設定・未知の値は `LISTINGS` として扱う。
    pub fn listing_naming(&self) -> ListingNaming {
        self.resolved_listing_settings().naming
    }

    pub fn resolved_card_settings(&self) -> ResolvedCardSettings {
        self.card_settings
            .as_ref()
            .map(CardSettings::resolve)
            .unwrap_or_default()
    }

    pub fn resolved_listing_settings(&self) -> ResolvedListingSettings {
        self.listing_settings
            .as_ref()
            .map(ListingSettings::resolve)
            .unwrap_or_default()
    }
}

/// マストヘッド（ページ上部のヒーロー領域）の設定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MastheadSettings {
    pub title: Option<String>,
    pub description: Option<String>,
    /// CSS の `background` ショートハンド
    pub background: Option<String>,
    pub background_color: Option<String>,
    pub background_image: Option<BackgroundImage>,
    /// 文字色
    pub color: Option<String>,
    pub columns: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundImage {
    pub url:          String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id:           Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// リスティングカードの設定（未解決）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardSettings {
    pub columns:          Option<u32>,
    pub style:            Option<String>,
    pub show_badges:      Option<bool>,
    pub show_category:    Option<bool>,
    pub show_description: Option<bool>,
}

/// 既定値で補完したカード設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCardSettings {
    pub columns:          u32,
    pub style:            String,
    pub show_badges:      bool,
    pub show_category:    bool,
    pub show_description: bool,
}

impl Default for ResolvedCardSettings {
    fn default() -> Self {
        Self {
            columns:          3,
            style:            "default".to_string(),
            show_badges:      true,
            show_category:    true,
            show_description: true,
        }
    }
}

impl CardSettings {
    pub fn resolve(&self) -> ResolvedCardSettings {
        let defaults = ResolvedCardSettings::default();
        ResolvedCardSettings {
            columns:          self.columns.unwrap_or(defaults.columns),
            style:            self.style.clone().unwrap_or(defaults.style),
            show_badges:      self.show_badges.unwrap_or(defaults.show_badges),
            show_category:    self.show_category.unwrap_or(defaults.show_category),
            show_description: self.show_description.unwrap_or(defaults.show_description),
        }
    }
}

/// リスティング詳細画面の設定（未解決）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSettings {
    /// `INTEGRATIONS` などの呼び名。未知の値もそのまま受け取る
    pub naming:               Option<String>,
    pub install_button_label: Option<String>,
    pub description_title:    Option<String>,
    pub features_title:       Option<String>,
    pub pricing_title:        Option<String>,
}

/// 既定値で補完したリスティング詳細画面の設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedListingSettings {
    pub naming:               ListingNaming,
    pub install_button_label: String,
    pub description_title:    String,
    pub features_title:       String,
    pub pricing_title:        String,
}

impl Default for ResolvedListingSettings {
    fn default() -> Self {
        Self {
            naming:               ListingNaming::default(),
            install_button_label: "Install".to_string(),
            description_title:    "Description".to_string(),
            features_title:       "Features".to_string(),
            pricing_title:        "Pricing".to_string(),
        }
    }
}

impl ListingSettings {
    pub fn resolve(&self) -> ResolvedListingSettings {
        let defaults = ResolvedListingSettings::default();
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        ResolvedListingSettings {
            naming:               self
                .naming
                .as_deref()
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.naming),
            install_button_label: non_empty(&self.install_button_label)
                .unwrap_or(defaults.install_button_label),
            description_title:    non_empty(&self.description_title)
                .unwrap_or(defaults.description_title),
            features_title:       non_empty(&self.features_title).unwrap_or(defaults.features_title),
            pricing_title:        non_empty(&self.pricing_title).unwrap_or(defaults.pricing_title),
        }
    }
}

/// 独自ドメイン・独自 CSS の設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSettings {
    pub css:      Option<String>,
    pub css_link: Option<String>,
    pub domain:   Option<String>,
}
