//! # `kboard-chart` - K 线序列渲染
//!
//! 把 OHLCV 序列映射为图表配置 (逐根涨跌色、提示文本、坐标轴选项)，
//! 并通过单槽位 `ChartSlot` 保证同一容器上最多只有一个存活的图表实例。

pub mod json_file;
pub mod renderer;
pub mod series;
pub mod slot;
