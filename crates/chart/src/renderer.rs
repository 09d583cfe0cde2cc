use crate::series::build_config;
use crate::slot::ChartSlot;
use kboard_core::chart::error::ChartError;
use kboard_core::chart::port::ChartBackend;
use kboard_core::config::Palette;
use kboard_core::market::entity::Bar;
use std::sync::Arc;
use tracing::info;

/// # Summary
/// K 线渲染器，持有图表后端与自己的单槽位句柄。
///
/// # Invariants
/// - 每次渲染都先释放槽位中的旧实例，再创建新实例。
/// - 渲染器本身不产生错误，后端错误原样返回给调用方。
pub struct KlineRenderer {
    // 图表库驱动
    backend: Arc<dyn ChartBackend>,
    // 涨跌配色
    palette: Palette,
    // 当前实例
    slot: ChartSlot,
}

impl KlineRenderer {
    pub fn new(backend: Arc<dyn ChartBackend>, palette: Palette) -> Self {
        Self {
            backend,
            palette,
            slot: ChartSlot::new(),
        }
    }

    /// # Summary
    /// 渲染一组 K 线到指定容器。
    ///
    /// # Logic
    /// 1. 由 K 线构建图表配置。
    /// 2. 销毁槽位中的旧实例。
    /// 3. 调用后端创建新实例并绑定到槽位。
    ///
    /// # Arguments
    /// * `bars`: 按时间排序的 K 线，允许为空。
    /// * `container_id`: 绘图容器标识。
    ///
    /// # Returns
    /// 后端创建失败时返回 ChartError，此时槽位为空。
    pub fn render(&mut self, bars: &[Bar], container_id: &str) -> Result<(), ChartError> {
        let config = build_config(bars, &self.palette);

        self.slot.dispose();
        let chart = self.backend.create(container_id, &config)?;
        self.slot.replace(chart);

        info!("Rendered {} bars on {}", bars.len(), container_id);
        Ok(())
    }

    /// 销毁当前图表实例。
    pub fn dispose(&mut self) {
        self.slot.dispose();
    }

    pub fn slot(&self) -> &ChartSlot {
        &self.slot
    }
}
