//! # OpenAPI YAML 生成ツール
//!
//! BFF の OpenAPI 仕様を YAML で標準出力に書き出す。
//! utoipa が自動登録したまま参照されないスキーマは取り除く。
//!
//! ```bash
//! cargo run --bin generate-openapi -p ecostarter-bff > openapi/openapi.yaml
//! ```

use std::collections::HashSet;

use ecostarter_bff::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
   let mut openapi = ApiDoc::openapi();
   remove_unused_schemas(&mut openapi)?;
   print!("{}", openapi.to_yaml()?);
   Ok(())
}

/// どこからも `$ref` されていないコンポーネントスキーマを除去する
///
/// `body = ApiResponse<T>` は `T` を inline 展開するが、`T` 単体のスキーマも登録される。
fn remove_unused_schemas(openapi: &mut utoipa::openapi::OpenApi) -> anyhow::Result<()> {
   let json = serde_json::to_string(openapi)?;

   // "$ref":"#/components/schemas/<Name>"
   let prefix = "#/components/schemas/";
   let used: HashSet<&str> = json
      .match_indices(prefix)
      .filter_map(|(start, _)| {
         let rest = &json[start + prefix.len()..];
         rest.find('"').map(|end| &rest[..end])
      })
      .collect();

   if let Some(components) = &mut openapi.components {
      let before = components.schemas.len();
      components
         .schemas
         .retain(|name, _| used.contains(name.as_str()));
      eprintln!(
         "未使用スキーマを {} 件除去しました",
         before - components.schemas.len()
      );
   }
   Ok(())
}
