//! 単一スレッドのタイマー: 呼び出し側が渡す `Instant` と期限を比較するだけ。

use std::time::{Duration, Instant};

/// 一定間隔の tick ループ。`start` は冪等、`stop` で取り消し。
#[derive(Debug, Clone)]
pub struct TickLoop {
    interval: Duration,
    next_due: Option<Instant>,
}

impl TickLoop {
    pub fn new(interval: Duration) -> Self {
        Self { interval: interval.max(Duration::from_millis(1)), next_due: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// 既に動いている場合は何もしない（再スケジュールしない）
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.interval);
        }
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// 期限を迎えていれば `true` を返し、次の期限を `now + interval` に置く。
    /// 停止していた間の取りこぼしは積み上げない（一度の呼び出しで高々1 tick）。
    pub fn tick_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if due <= now => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

/// 遅延実行を一件だけ保持する。再スケジュールは保留中なら無視。
#[derive(Debug, Clone, Default)]
pub struct Deferred {
    due: Option<Instant>,
}

impl Deferred {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        if self.due.is_none() {
            self.due = Some(now + delay);
        }
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    /// 期限を過ぎていれば消費して `true`
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if due <= now => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
