//! # Clock（時刻プロバイダ）
//!
//! デバウンスなど時間経過に依存するロジックで `Utc::now()` を直接呼ばず、
//! テストで時刻を手動で進められるようにするための抽象化。

use chrono::{DateTime, Utc};

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
   fn now(&self) -> DateTime<Utc>;
}

/// 実際のシステム時刻を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
   fn now(&self) -> DateTime<Utc> {
      Utc::now()
   }
}

/// 手動で進める時計（テスト用）
///
/// `advance` を呼ぶまで同じ時刻を返し続ける。
#[cfg(any(test, feature = "test-support"))]
pub struct ManualClock {
   now: std::sync::Mutex<DateTime<Utc>>,
}

#[cfg(any(test, feature = "test-support"))]
impl ManualClock {
   pub fn new(now: DateTime<Utc>) -> Self {
      Self {
         now: std::sync::Mutex::new(now),
      }
   }

   /// 時刻を `by` だけ進める
   pub fn advance(&self, by: chrono::Duration) {
      let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
      *now += by;
   }
}

#[cfg(any(test, feature = "test-support"))]
impl Clock for ManualClock {
   fn now(&self) -> DateTime<Utc> {
      *self.now.lock().unwrap_or_else(|e| e.into_inner())
   }
}

#[cfg(test)]
mod tests {
   use chrono::Duration;

   use super::*;

   #[test]
   fn test_system_clock_は現在時刻を返す() {
      let before = Utc::now();
      let result = SystemClock.now();
      let after = Utc::now();

      assert!(result >= before);
      assert!(result <= after);
   }

   #[test]
   fn test_manual_clock_はadvanceするまで同じ時刻を返す() {
      let start = Utc::now();
      let clock = ManualClock::new(start);

      assert_eq!(clock.now(), start);
      assert_eq!(clock.now(), start);
   }

   #[test]
   fn test_manual_clock_はadvanceした分だけ進む() {
      let start = Utc::now();
      let clock = ManualClock::new(start);

      clock.advance(Duration::milliseconds(250));
      clock.advance(Duration::milliseconds(250));

      assert_eq!(clock.now(), start + Duration::milliseconds(500));
   }
}
