//! # 文字色の解決（コントラスト判定）
//!
//! マストヘッドの背景色と、設定で与えられた文字色から、背景に対して読める文字色を決める。
//!
//! ## 判定ルール
//!
//! 1. 背景画像あり: 指定色があればそれ、なければ白（画像の上には暗いオーバーレイが敷かれる）
//! 2. 指定色あり: 背景とのコントラスト比が 3.0 未満なら、背景が明るければ濃いグレー、
//!    暗ければ白で上書きする。3.0 以上なら指定色をそのまま使う
//! 3. 指定色なし: 背景が明るければ濃いグレー、暗ければ白
//!
//! 入力がパースできなくても失敗しない。常に使える色を返す。

use crate::color::{self, Color};

/// 指定色を採用するのに必要な最小コントラスト比
pub const MIN_CONTRAST_RATIO: f64 = 3.0;

/// 背景に対して読める文字色を返す
///
/// - `background_color`: 背景色（パースできなければ `#6366f1` とみなす）
/// - `provided_text_color`: 設定で指定された文字色
/// - `has_background_image`: 背景画像の有無
///
/// 指定色をそのまま返す場合は入力文字列を加工せずに返す。
///
/// ```rust
/// use ecostarter_domain::contrast::resolve_text_color;
///
/// assert_eq!(resolve_text_color("#000000", None, false), "#ffffff");
/// assert_eq!(resolve_text_color("#ffffff", None, false), "#1f2937");
/// assert_eq!(resolve_text_color("#ffffff", Some("#fefefe"), false), "#1f2937");
/// ```
pub fn resolve_text_color(
    background_color: &str,
    provided_text_color: Option<&str>,
    has_background_image: bool,
) -> String {
    let background = Color::parse(background_color)
        .unwrap_or(Color::DEFAULT_BACKGROUND)
        .to_hex();

    if has_background_image {
        return provided_text_color
            .map(str::to_string)
            .unwrap_or_else(|| Color::WHITE.to_hex());
    }

    if let Some(provided) = provided_text_color
        && color::contrast_ratio(&background, provided) >= MIN_CONTRAST_RATIO
    {
        return provided.to_string();
    }

    fallback_for(&background).to_hex()
}

/// 指定色が使えないときの既定の文字色
fn fallback_for(background: &str) -> Color {
    if color::is_color_light(background) {
        Color::DARK_GRAY
    } else {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const WHITE: &str = "#ffffff";
    const DARK: &str = "#1f2937";

    #[test]
    fn test_黒背景で指定色なしなら白() {
        assert_eq!(resolve_text_color("#000000", None, false), WHITE);
    }

    #[test]
    fn test_白背景で指定色なしなら濃いグレー() {
        assert_eq!(resolve_text_color("#ffffff", None, false), DARK);
    }

    #[rstest]
    #[case("#000000")]
    #[case("#ffffff")]
    #[case("#fde68a")]
    #[case("#6366f1")]
    fn test_背景画像ありで指定色なしなら背景に関係なく白(#[case] background: &str) {
        assert_eq!(resolve_text_color(background, None, true), WHITE);
    }

    #[test]
    fn test_背景画像ありなら指定色をコントラストに関係なく採用する() {
        assert_eq!(
            resolve_text_color("#ffffff", Some("#fefefe"), true),
            "#fefefe"
        );
    }

    #[test]
    fn test_コントラスト十分な指定色はそのまま返す() {
        assert_eq!(resolve_text_color("#000000", Some("#ffee00"), false), "#ffee00");
        // 加工せずに返す（# なし・大文字も保持）
        assert_eq!(resolve_text_color("#000000", Some("FFEE00"), false), "FFEE00");
    }

    #[rstest]
    #[case("#ffffff", "#fefefe", DARK)]
    #[case("#000000", "#111111", WHITE)]
    #[case("#6366f1", "#7c3aed", WHITE)]
    #[case("#fde68a", "#ffffff", DARK)]
    fn test_コントラスト不足の指定色は上書きする(
        #[case] background: &str,
        #[case] provided: &str,
        #[case] expected: &str,
    ) {
        assert!(color::contrast_ratio(background, provided) < MIN_CONTRAST_RATIO);

        let resolved = resolve_text_color(background, Some(provided), false);

        assert_eq!(resolved, expected);
        assert_ne!(resolved, provided);
    }

    #[test]
    fn test_パースできない指定色はコントラスト0として上書きする() {
        assert_eq!(resolve_text_color("#000000", Some("white"), false), WHITE);
        assert_eq!(resolve_text_color("#ffffff", Some("black"), false), DARK);
    }

    #[test]
    fn test_パースできない背景色は既定の背景色とみなす() {
        // #6366f1 は暗い側なので白
        assert_eq!(resolve_text_color("transparent", None, false), WHITE);
        assert_eq!(resolve_text_color("", Some("#ffffff"), false), WHITE);
    }

    #[test]
    fn test_指定色がコントラスト不足なら未変更で返さない_全探索() {
        let samples = ["#000", "#333", "#777", "#888", "#bbb", "#fff", "#f00", "#0f0", "#00f"];
        for background in samples {
            for provided in samples {
                let resolved = resolve_text_color(background, Some(provided), false);
                if color::contrast_ratio(background, provided) < MIN_CONTRAST_RATIO {
                    assert_ne!(resolved, provided, "bg={background} fg={provided}");
                } else {
                    assert_eq!(resolved, provided, "bg={background} fg={provided}");
                }
            }
        }
    }
}
