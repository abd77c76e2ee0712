//! # 入力のデバウンス
//!
//! エコシステム ID の手入力など、打鍵のたびに取得を走らせたくない値を、
//! 一定時間入力が止まってから確定させる。
//!
//! タイマーは持たない。呼び出し側が [`Debouncer::poll`] を定期的に呼び、
//! 確定した値が返ったときだけ処理する。時刻は [`Clock`] から得る。

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::clock::Clock;

/// 既定の待ち時間
pub const DEFAULT_DEBOUNCE_MILLIS: i64 = 500;

pub struct Debouncer<T> {
    clock:   Arc<dyn Clock>,
    delay:   Duration,
    pending: Option<(T, DateTime<Utc>)>,
}

impl<T> Debouncer<T> {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_delay(clock, Duration::milliseconds(DEFAULT_DEBOUNCE_MILLIS))
    }

    pub fn with_delay(clock: Arc<dyn Clock>, delay: Duration) -> Self {
        Self {
            clock,
            delay,
            pending: None,
        }
    }

    /// 新しい値を受け取り、待ち時間を最初からやり直す
    pub fn push(&mut self, value: T) {
        self.pending = Some((value, self.clock.now()));
    }

    /// 最後の `push` から待ち時間が過ぎていれば、その値を確定して返す
    ///
    /// 同じ値は一度しか返らない。
    pub fn poll(&mut self) -> Option<T> {
        let (_, pushed_at) = self.pending.as_ref()?;
        if self.clock.now() - *pushed_at < self.delay {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// 確定させずに破棄する
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
