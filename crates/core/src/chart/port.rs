use crate::chart::entity::ChartConfig;
use crate::chart::error::ChartError;

/// # Summary
/// 已经绑定到某个绘图容器上的图表实例。
///
/// # Invariants
/// - `destroy` 之后实例不再占用容器，重复调用必须是无害的。
pub trait ChartInstance: Send {
    /// 实例所在的容器标识。
    fn surface(&self) -> &str;

    /// 释放实例占用的容器资源。
    fn destroy(&mut self);
}

/// # Summary
/// 图表库契约 (黑盒)，只通过配置对象交互。
pub trait ChartBackend: Send + Sync {
    /// # Summary
    /// 在指定容器上根据配置创建一个新的图表实例。
    ///
    /// # Arguments
    /// * `surface`: 绘图容器标识。
    /// * `config`: 图表配置。
    ///
    /// # Returns
    /// 成功返回实例，容器缺失或图表库失败返回 ChartError。
    fn create(
        &self,
        surface: &str,
        config: &ChartConfig,
    ) -> Result<Box<dyn ChartInstance>, ChartError>;
}
