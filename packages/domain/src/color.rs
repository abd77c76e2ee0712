//! # 色（値オブジェクト）
//!
//! 16 進カラーコードのパース・正規化と、明暗判定用の輝度計算を提供する。
//!
//! ## 輝度の計算式
//!
//! `(0.299·R + 0.587·G + 0.114·B) / 255` を輝度として扱う。
//! WCAG の相対輝度（チャネルごとのガンマ補正 + 0.2126/0.7152/0.0722 の加重和）ではなく、
//! ガンマ補正を省いた近似式である。コントラスト比のしきい値（3.0）はこの近似式に
//! 合わせて調整されているため、WCAG 準拠の式に差し替える場合はしきい値も見直すこと。

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// 色（RGB 各チャネル 0〜255）
///
/// # 使用例
///
/// ```rust
/// use ecostarter_domain::color::Color;
///
/// let color = Color::parse("#abc").unwrap();
/// assert_eq!(color.to_hex(), "#aabbcc");
/// assert!(color.is_light());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    /// 明るい背景上で使う濃いグレー（`#1f2937`）
    pub const DARK_GRAY: Color = Color::rgb(0x1f, 0x29, 0x37);
    /// 背景色が指定されていないときの既定値（`#6366f1`）
    pub const DEFAULT_BACKGROUND: Color = Color::rgb(0x63, 0x66, 0xf1);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 16 進カラーコードをパースする
    ///
    /// 先頭の `#` を 1 つ取り除いた残りが、ちょうど 3 桁または 6 桁の 16 進数で
    /// なければ `None`。3 桁は各桁を重ねて 6 桁に展開する（`abc` → `aabbcc`）。
    pub fn parse(input: &str) -> Option<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            3 => {
                let mut digits = hex.chars().filter_map(|c| c.to_digit(16));
                let mut next = || digits.next().map(|d| (d * 17) as u8);
                Some(Self::rgb(next()?, next()?, next()?))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }

    /// 小文字 6 桁の `#rrggbb` 形式に整形する
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// 近似輝度（0.0〜1.0）
    pub fn luminance(&self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }

    /// 輝度が 0.5 を超えるなら明るい色
    pub fn is_light(&self) -> bool {
        self.luminance() > 0.5
    }

    /// 2 色のコントラスト比（1.0〜21.0、引数の順序に依存しない）
    pub fn contrast_ratio(&self, other: &Color) -> f64 {
        let (l1, l2) = (self.luminance(), other.luminance());
        let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .ok_or_else(|| DomainError::Validation(format!("不正なカラーコードです: {s}")))
    }
}

impl TryFrom<String> for Color {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// 文字列のまま明暗を判定する
///
/// パースできない色は「明るくない」として扱う。
pub fn is_color_light(color: &str) -> bool {
    Color::parse(color).is_some_and(|c| c.is_light())
}

/// 文字列のままコントラスト比を求める
///
/// どちらかがパースできない場合は 0.0 を返す（どのしきい値も満たさない）。
pub fn contrast_ratio(color1: &str, color2: &str) -> f64 {
    match (Color::parse(color1), Color::parse(color2)) {
        (Some(a), Some(b)) => a.contrast_ratio(&b),
        _ => 0.0,
    }
}
