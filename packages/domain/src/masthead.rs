//! # マストヘッドの表示テーマ
//!
//! エコシステム設定からページ上部のヒーロー領域の見た目を一度に解決する。
//! 描画側は [`MastheadTheme`] の値をそのまま CSS に流し込めばよい。

use serde::Serialize;

use crate::{
    color::Color,
    contrast::resolve_text_color,
    ecosystem::Ecosystem,
    text::{TagContext, capitalize_first, ensure_hex_color, inject_tags, transform_cloudinary_image},
};

/// 背景画像を取得するときの幅（px）
pub const BACKGROUND_IMAGE_WIDTH: u32 = 1920;

/// 解決済みのマストヘッド
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MastheadTheme {
    pub title: String,
    /// 空なら説明文を表示しない
    pub description: String,
    /// 背景色。マストヘッドに何らかの背景指定があるときだけ `Some`
    pub background_color: Option<String>,
    /// CSS の `background`。背景画像があるときは使わない
    pub background: Option<String>,
    pub background_image_url: Option<String>,
    /// 画像や CSS 背景の上に重ねるグラデーション
    pub overlay: Option<String>,
    pub text_color: String,
    /// 例: `12 Integrations`
    pub stats_label: Option<String>,
    pub website: Option<String>,
    /// 画像がないときだけ装飾用の図形を出す
    pub show_decorations: bool,
}

impl MastheadTheme {
    pub fn resolve(ecosystem: &Ecosystem) -> Self {
        let masthead = ecosystem.masthead_settings.clone().unwrap_or_default();

        let has_background = masthead.background.is_some()
            || masthead.background_color.is_some()
            || masthead.background_image.is_some();

        let base_color = non_empty(masthead.background_color.as_deref())
            .or_else(|| non_empty(ecosystem.primary_color.as_deref()));
        let background_color = ensure_hex_color(base_color)
            .unwrap_or_else(|| Color::DEFAULT_BACKGROUND.to_hex());

        let image_url = masthead
            .background_image
            .as_ref()
            .map(|image| image.url.as_str())
            .filter(|url| !url.is_empty());
        let has_background_image = image_url.is_some();
        let background_image_url = transform_cloudinary_image(image_url, Some(BACKGROUND_IMAGE_WIDTH));

        let provided_text_color = ensure_hex_color(masthead.color.as_deref());
        let text_color = resolve_text_color(
            &background_color,
            provided_text_color.as_deref(),
            has_background_image,
        );

        let overlay = (has_background_image || masthead.background.is_some()).then(|| {
            format!("linear-gradient(135deg, {background_color}dd 0%, {background_color}99 100%)")
        });

        let naming = ecosystem.listing_naming();
        let context = TagContext::new(&ecosystem.name, naming);
        let title = inject_tags(
            non_empty(masthead.title.as_deref()).or(Some(ecosystem.name.as_str())),
            &context,
        );
        let description = inject_tags(
            non_empty(masthead.description.as_deref()).or(ecosystem.about.as_deref()),
            &context,
        );

        let stats_label = ecosystem
            .total_published_listings
            .map(|count| format!("{count} {}", capitalize_first(naming.label_for(count))));

        Self {
            title,
            description,
            background_color: has_background.then_some(background_color),
            background: masthead.background.filter(|_| background_image_url.is_none()),
            background_image_url,
            overlay,
            text_color,
            stats_label,
            website: ecosystem.website.clone(),
            show_decorations: !has_background_image,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
