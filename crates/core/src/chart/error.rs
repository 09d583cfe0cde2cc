use thiserror::Error;

/// # Summary
/// 图表构建错误。渲染器自身不产生错误，这里只承载后端失败并原样上抛。
#[derive(Error, Debug)]
pub enum ChartError {
    // 绘图容器不存在或不可用
    #[error("Surface error: {0}")]
    Surface(String),
    // 图表库内部失败
    #[error("Backend error: {0}")]
    Backend(String),
}
