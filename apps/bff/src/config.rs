//! # BFF 設定
//!
//! 環境変数から BFF サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | 既定値 |
//! |--------|------|--------|
//! | `BFF_HOST` | No | `0.0.0.0` |
//! | `BFF_PORT` | No | `3000` |
//! | `ECOSYSTEM_API_URL` | No | `https://api.apideck.com` |
//! | `LISTINGS_PAGE_LIMIT` | No | `50` |
//! | `UPSTREAM_TIMEOUT_SECS` | No | `30` |

use std::{env, time::Duration};

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ECOSYSTEM_API_URL: &str = "https://api.apideck.com";
pub const DEFAULT_LISTINGS_PAGE_LIMIT: u32 = 50;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// 設定の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   #[error("{name} の値が不正です: {value}")]
   Invalid { name: &'static str, value: String },
}

/// BFF サーバーの設定
#[derive(Debug, Clone)]
pub struct BffConfig {
   /// バインドアドレス
   pub host: String,
   /// ポート番号
   pub port: u16,
   /// Ecosystem API のベース URL（末尾の `/` なし）
   pub ecosystem_api_url: String,
   /// `limit` 未指定時のリスティング取得件数
   pub listings_page_limit: u32,
   /// 上流呼び出しのタイムアウト
   pub upstream_timeout: Duration,
}

impl BffConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// 空文字の値は未設定として扱う。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

      let port = parse_or(get("BFF_PORT"), "BFF_PORT", DEFAULT_PORT)?;
      let listings_page_limit = parse_or(
         get("LISTINGS_PAGE_LIMIT"),
         "LISTINGS_PAGE_LIMIT",
         DEFAULT_LISTINGS_PAGE_LIMIT,
      )?;
      if listings_page_limit == 0 {
         return Err(ConfigError::Invalid {
            name:  "LISTINGS_PAGE_LIMIT",
            value: "0".to_string(),
         });
      }
      let timeout_secs = parse_or(
         get("UPSTREAM_TIMEOUT_SECS"),
         "UPSTREAM_TIMEOUT_SECS",
         DEFAULT_UPSTREAM_TIMEOUT_SECS,
      )?;

      Ok(Self {
         host: get("BFF_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
         port,
         ecosystem_api_url: get("ECOSYSTEM_API_URL")
            .unwrap_or_else(|| DEFAULT_ECOSYSTEM_API_URL.to_string())
            .trim_end_matches('/')
            .to_string(),
         listings_page_limit,
         upstream_timeout: Duration::from_secs(timeout_secs),
      })
   }
}

impl Default for BffConfig {
   fn default() -> Self {
      Self {
         host:                DEFAULT_HOST.to_string(),
         port:                DEFAULT_PORT,
         ecosystem_api_url:   DEFAULT_ECOSYSTEM_API_URL.to_string(),
         listings_page_limit: DEFAULT_LISTINGS_PAGE_LIMIT,
         upstream_timeout:    Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
      }
   }
}

fn parse_or<T: std::str::FromStr>(
   value: Option<String>,
   name: &'static str,
   default: T,
) -> Result<T, ConfigError> {
   match value {
      Some(raw) => raw
         .trim()
         .parse()
         .map_err(|_| ConfigError::Invalid { name, value: raw }),
      None => Ok(default),
   }
}

#[cfg(test)]
mod tests {
   // テスト間で環境変数の競合を避けるため、参照関数を差し替えて検証する

   use std::collections::HashMap;

   use pretty_assertions::assert_eq;

   use super::*;

   fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
      let map: HashMap<String, String> = pairs
         .iter()
         .map(|(k, v)| (k.to_string(), v.to_string()))
         .collect();
      move |name: &str| map.get(name).cloned()
   }

   #[test]
   fn test_未設定なら既定値になる() {
      let config = BffConfig::from_lookup(lookup(&[])).unwrap();

      assert_eq!(config.host, "0.0.0.0");
      assert_eq!(config.port, 3000);
      assert_eq!(config.ecosystem_api_url, "https://api.apideck.com");
      assert_eq!(config.listings_page_limit, 50);
      assert_eq!(config.upstream_timeout, Duration::from_secs(30));
   }

   #[test]
   fn test_環境変数の値で上書きする() {
      let config = BffConfig::from_lookup(lookup(&[
         ("BFF_HOST", "127.0.0.1"),
         ("BFF_PORT", "13000"),
         ("ECOSYSTEM_API_URL", "http://localhost:8080/"),
         ("LISTINGS_PAGE_LIMIT", "20"),
         ("UPSTREAM_TIMEOUT_SECS", "5"),
      ]))
      .unwrap();

      assert_eq!(config.host, "127.0.0.1");
      assert_eq!(config.port, 13000);
      assert_eq!(config.ecosystem_api_url, "http://localhost:8080");
      assert_eq!(config.listings_page_limit, 20);
      assert_eq!(config.upstream_timeout, Duration::from_secs(5));
   }

   #[test]
   fn test_空文字は未設定として扱う() {
      let config = BffConfig::from_lookup(lookup(&[("BFF_PORT", ""), ("BFF_HOST", " ")])).unwrap();

      assert_eq!(config.port, 3000);
      assert_eq!(config.host, "0.0.0.0");
   }

   #[test]
   fn test_数値でないポートはエラー() {
      let result = BffConfig::from_lookup(lookup(&[("BFF_PORT", "abc")]));

      assert_eq!(
         result.unwrap_err(),
         ConfigError::Invalid {
            name:  "BFF_PORT",
            value: "abc".to_string(),
         }
      );
   }

   #[test]
   fn test_取得件数0はエラー() {
      let result = BffConfig::from_lookup(lookup(&[("LISTINGS_PAGE_LIMIT", "0")]));

      assert!(matches!(
         result,
         Err(ConfigError::Invalid {
            name: "LISTINGS_PAGE_LIMIT",
            ..
         })
      ));
   }
}
