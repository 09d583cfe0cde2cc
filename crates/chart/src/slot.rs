use kboard_core::chart::port::ChartInstance;
use tracing::debug;

/// # Summary
/// 单槽位图表句柄，替代页面级的全局图表变量。
///
/// # Invariants
/// - 任意时刻最多持有一个存活实例。
/// - 绑定新实例前必须先销毁旧实例；槽位被丢弃时同样销毁。
#[derive(Default)]
pub struct ChartSlot {
    current: Option<Box<dyn ChartInstance>>,
}

impl ChartSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前是否持有实例。
    pub fn is_bound(&self) -> bool {
        self.current.is_some()
    }

    /// 当前实例所在的容器。
    pub fn surface(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.surface())
    }

    /// 销毁并清空当前实例，空槽位时无操作。
    pub fn dispose(&mut self) {
        if let Some(mut chart) = self.current.take() {
            debug!("Destroying chart on {}", chart.surface());
            chart.destroy();
        }
    }

    /// 先销毁旧实例，再绑定新实例。
    pub fn replace(&mut self, chart: Box<dyn ChartInstance>) {
        self.dispose();
        self.current = Some(chart);
    }
}

impl Drop for ChartSlot {
    fn drop(&mut self) {
        self.dispose();
    }
}
