use std::sync::Mutex;

/// # Summary
/// 轮询停止令牌。
///
/// # Invariants
/// - `stop` 返回之后，`run_if_live` 不会再执行任何闭包。
/// - 检查与执行在同一把锁内完成，停止与应用响应不会交错。
#[derive(Debug, Default)]
pub struct StopToken {
    stopped: Mutex<bool>,
}

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        *self.stopped.lock().unwrap_or_else(|e| e.into_inner()) = true;
    }

    pub fn is_stopped(&self) -> bool {
        *self.stopped.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// 未停止时在锁内执行 `f` 并返回 true，已停止返回 false。
    pub fn run_if_live<F: FnOnce()>(&self, f: F) -> bool {
        let stopped = self.stopped.lock().unwrap_or_else(|e| e.into_inner());
        if *stopped {
            return false;
        }
        f();
        true
    }
}
