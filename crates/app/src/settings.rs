use config::{Config, ConfigError, Environment, File};
use kboard_core::config::AppConfig;

/// 默认配置文件名 (不含扩展名)
pub const CONFIG_NAME: &str = "kboard";

/// # Summary
/// 加载应用配置。
///
/// # Logic
/// 1. 以 `AppConfig::default()` 作为最底层。
/// 2. 叠加可选的配置文件 `{name}.toml` (不存在时跳过)。
/// 3. 叠加 `KBOARD__SECTION__KEY` 形式的环境变量。
///
/// # Arguments
/// * `name`: 配置文件路径，不含扩展名。
pub fn load(name: &str) -> Result<AppConfig, ConfigError> {
    Config::builder()
        .add_source(Config::try_from(&AppConfig::default())?)
        .add_source(File::with_name(name).required(false))
        .add_source(
            Environment::with_prefix("KBOARD")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().join("absent");
        let config = load(name.to_str().unwrap()).unwrap();

        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.live.poll_interval_secs, 30);
        assert_eq!(config.palette.up, "red");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("kboard.toml"),
            r#"
[backend]
base_url = "http://10.0.0.2:8080"

[live]
poll_interval_secs = 5

[page]
current_path = "/realtime"
stock_code = "sh600519"
"#,
        )
        .unwrap();

        let name = dir.path().join("kboard");
        let config = load(name.to_str().unwrap()).unwrap();

        assert_eq!(config.backend.base_url, "http://10.0.0.2:8080");
        assert_eq!(config.backend.timeout_secs, 10);
        assert_eq!(config.live.poll_interval_secs, 5);
        assert_eq!(config.page.current_path, "/realtime");
        assert_eq!(config.page.stock_code.as_deref(), Some("sh600519"));
        assert_eq!(config.page.chart_container, "kline-chart");
    }
}
