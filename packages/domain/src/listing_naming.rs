//! # リスティングの呼び名
//!
//! エコシステムごとに、掲載物を "integrations" と呼ぶか "apps" と呼ぶかなどを
//! `listing_settings.naming` で切り替えられる。ここではその種別と表示ラベルを定義する。

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// 呼び名の種別
///
/// 上流では `"INTEGRATIONS"` のような大文字の文字列で届く。
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    strum::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingNaming {
    Integrations,
    Apps,
    Partners,
    #[default]
    Listings,
    Datasources,
    Addons,
    Plugins,
    Connectors,
    Channels,
    Connections,
    Extensions,
}

impl ListingNaming {
    /// 複数形のラベル（小文字）
    pub fn label(self) -> &'static str {
        match self {
            Self::Integrations => "integrations",
            Self::Apps => "apps",
            Self::Partners => "partners",
            Self::Listings => "listings",
            Self::Datasources => "data sources",
            Self::Addons => "add-ons",
            Self::Plugins => "plugins",
            Self::Connectors => "connectors",
            Self::Channels => "channels",
            Self::Connections => "connections",
            Self::Extensions => "extensions",
        }
    }

    /// 単数形のラベル（小文字）
    pub fn singular(self) -> &'static str {
        match self {
            Self::Integrations => "integration",
            Self::Apps => "app",
            Self::Partners => "partner",
            Self::Listings => "listing",
            Self::Datasources => "data source",
            Self::Addons => "add-on",
            Self::Plugins => "plugin",
            Self::Connectors => "connector",
            Self::Channels => "channel",
            Self::Connections => "connection",
            Self::Extensions => "extension",
        }
    }

    /// 件数に応じたラベル（1 件のときだけ単数形）
    pub fn label_for(self, count: u64) -> &'static str {
        if count == 1 {
            self.singular()
        } else {
            self.label()
        }
    }
}
