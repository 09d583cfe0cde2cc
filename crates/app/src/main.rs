mod console;
mod logging;
mod settings;

use std::sync::Arc;
use std::time::Duration;

use console::{
    ConsoleBrowser, ConsoleButton, ConsoleNavLink, ConsoleQuoteView, ConsoleSelect, SITE_NAV,
};
use kboard_chart::json_file::JsonFileBackend;
use kboard_chart::renderer::KlineRenderer;
use kboard_core::page::port::{FormControl, NavLink, UpdateButton};
use kboard_feed::http::HttpBackend;
use kboard_live::poller::LivePoller;
use kboard_page::controller::{PageController, PageModel};
use kboard_page::update::UpdateAction;
use tracing::{info, warn};

/// # Summary
/// 应用启动入口，纯粹的 DI 容器。
/// 负责实例化各端口的具体实现并通过 Arc<dyn Trait> 注入到 PageController。
///
/// # Logic
/// 1. 加载 .env 与分层配置，初始化全局日志。
/// 2. 实例化基础设施层（HTTP 后端、图表后端、终端视图）。
/// 3. 构造渲染器、轮询器、更新动作与页面控制器。
/// 4. 按配置组装页面模型并执行页面加载。
/// 5. 挂起等待外部信号，退出时停止轮询。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 配置与日志
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("No .env loaded: {}", e);
    }
    let config = settings::load(settings::CONFIG_NAME)?;
    let _log_guard = logging::init(&config.log);
    info!("K-board starting against {}", config.backend.base_url);

    // 2. 基础设施层
    let backend = Arc::new(HttpBackend::from_config(&config.backend)?);
    std::fs::create_dir_all(&config.page.chart_dir)?;
    let charts = Arc::new(JsonFileBackend::new(&config.page.chart_dir).keep_files());
    let view = Arc::new(ConsoleQuoteView::new(config.palette.clone()));
    let browser = Arc::new(ConsoleBrowser::new(&config.page.current_path));

    // 3. 页面组件
    let renderer = KlineRenderer::new(charts, config.palette.clone());
    let poller = LivePoller::new(
        backend.clone(),
        view,
        Duration::from_secs(config.live.poll_interval_secs),
    );
    let update = UpdateAction::new(backend, browser.clone());
    let mut controller = PageController::new(renderer, poller, update, browser);

    // 4. 页面模型
    let kline_payload = match &config.page.kline_data {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => None,
    };
    let update_buttons: Vec<Arc<dyn UpdateButton>> = match &config.page.stock_code {
        Some(code) => vec![
            Arc::new(ConsoleButton::new(Some(code.clone()), "更新数据")) as Arc<dyn UpdateButton>,
        ],
        None => Vec::new(),
    };
    let nav_links: Vec<Arc<dyn NavLink>> = SITE_NAV
        .iter()
        .map(|href| Arc::new(ConsoleNavLink::new(href)) as Arc<dyn NavLink>)
        .collect();
    let stock_select = config
        .page
        .stock_code
        .as_ref()
        .map(|code| Arc::new(ConsoleSelect::new("code", code.as_str())) as Arc<dyn FormControl>);
    let frequency_select = config
        .page
        .frequency
        .as_ref()
        .map(|freq| Arc::new(ConsoleSelect::new("freq", freq.as_str())) as Arc<dyn FormControl>);

    let page = PageModel {
        realtime_container: config.page.stock_code.is_some(),
        stock_code: config.page.stock_code.clone(),
        kline_payload,
        chart_container: config.page.chart_container.clone(),
        stock_select,
        frequency_select,
        update_buttons,
        nav_links,
    };

    let loaded = controller.on_load(page);
    match &loaded.render {
        Some(Err(e)) => warn!("Page {} loaded without chart: {}", config.page.current_path, e),
        _ => info!("Page {} loaded", config.page.current_path),
    }

    if config.page.refresh_on_start {
        match loaded.update_buttons.first() {
            Some(button) => {
                controller.click_update(button.as_ref()).await;
            }
            None => warn!("refresh_on_start set but no stock code configured"),
        }
    }

    // 5. 挂起主线程，等待外部退出信号
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received. Exiting...");
    drop(loaded);

    Ok(())
}
