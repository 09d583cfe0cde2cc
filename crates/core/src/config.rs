use crate::common::Tone;
use serde::{Deserialize, Serialize};

/// 全局应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub live: LiveConfig,
    pub palette: Palette,
    pub page: PageConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    // 后端根地址，不带末尾斜杠
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveConfig {
    pub poll_interval_secs: u64,
}

/// # Summary
/// 涨跌配色。默认沿用 A 股习惯：红涨绿跌，持平为黑。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub up: String,
    pub down: String,
    pub neutral: String,
}

impl Palette {
    pub fn color(&self, tone: Tone) -> &str {
        match tone {
            Tone::Up => &self.up,
            Tone::Down => &self.down,
            Tone::Neutral => &self.neutral,
        }
    }
}

/// 页面模型配置：哪些标记元素存在、嵌入数据从哪里读。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub current_path: String,
    // 存在时视为实时行情区域存在
    pub stock_code: Option<String>,
    pub frequency: Option<String>,
    // 嵌入的 K 线 JSON 文件
    pub kline_data: Option<String>,
    // 图表配置输出目录，写出的 `<container>.json` 在进程退出后保留
    pub chart_dir: String,
    pub chart_container: String,
    pub refresh_on_start: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String,
    // 设置后额外按天滚动写入日志文件
    pub dir: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 30,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            up: "red".to_string(),
            down: "green".to_string(),
            neutral: "black".to_string(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            current_path: "/".to_string(),
            stock_code: None,
            frequency: None,
            kline_data: None,
            chart_dir: "charts".to_string(),
            chart_container: "kline-chart".to_string(),
            refresh_on_start: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.backend.timeout_secs, 10);
        assert_eq!(config.live.poll_interval_secs, 30);
        assert_eq!(config.page.chart_container, "kline-chart");
        assert!(config.page.stock_code.is_none());
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_palette_colors() {
        let palette = Palette::default();
        assert_eq!(palette.color(Tone::Up), "red");
        assert_eq!(palette.color(Tone::Down), "green");
        assert_eq!(palette.color(Tone::Neutral), "black");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"live":{"poll_interval_secs":5},"page":{"stock_code":"sh600519"}}"#)
                .unwrap();
        assert_eq!(config.live.poll_interval_secs, 5);
        assert_eq!(config.page.stock_code.as_deref(), Some("sh600519"));
        assert_eq!(config.page.current_path, "/");
        assert_eq!(config.backend.timeout_secs, 10);
    }
}
