use kboard_core::chart::entity::ChartConfig;
use kboard_core::chart::error::ChartError;
use kboard_core::chart::port::{ChartBackend, ChartInstance};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// # Summary
/// 把图表配置写成 JSON 文件的后端，供静态页面或外部图表库加载。
///
/// # Invariants
/// - 输出目录必须已存在，不存在视为绘图容器缺失。
/// - 每个容器对应 `<dir>/<container>.json`，实例销毁时删除该文件，
///   除非通过 `keep_files` 要求保留 (同一容器再次绘制时直接覆盖)。
pub struct JsonFileBackend {
    dir: PathBuf,
    keep_files: bool,
}

impl JsonFileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            keep_files: false,
        }
    }

    /// 实例销毁时保留已写出的文件，用于文件本身就是最终产物的场景。
    pub fn keep_files(mut self) -> Self {
        self.keep_files = true;
        self
    }

    /// 容器对应的输出文件路径。
    pub fn path_for(&self, surface: &str) -> PathBuf {
        self.dir.join(format!("{}.json", surface))
    }
}

impl ChartBackend for JsonFileBackend {
    fn create(
        &self,
        surface: &str,
        config: &ChartConfig,
    ) -> Result<Box<dyn ChartInstance>, ChartError> {
        if surface.is_empty() || surface.contains(['/', '\\']) {
            return Err(ChartError::Surface(format!("invalid container: {:?}", surface)));
        }
        if !self.dir.is_dir() {
            return Err(ChartError::Surface(format!(
                "chart directory {} does not exist",
                self.dir.display()
            )));
        }

        let body =
            serde_json::to_string_pretty(config).map_err(|e| ChartError::Backend(e.to_string()))?;
        let path = self.path_for(surface);
        fs::write(&path, body).map_err(|e| ChartError::Backend(e.to_string()))?;
        debug!("Chart config written to {}", path.display());

        Ok(Box::new(JsonFileChart {
            surface: surface.to_string(),
            path,
            keep: self.keep_files,
        }))
    }
}

/// 已写出的图表文件。
struct JsonFileChart {
    surface: String,
    path: PathBuf,
    keep: bool,
}

impl ChartInstance for JsonFileChart {
    fn surface(&self) -> &str {
        &self.surface
    }

    fn destroy(&mut self) {
        if self.keep {
            debug!("Keeping chart file {}", self.path.display());
            return;
        }
        if self.path.exists()
            && let Err(e) = fs::remove_file(&self.path)
        {
            warn!("Failed to remove {}: {}", self.path.display(), e);
        }
    }
}
