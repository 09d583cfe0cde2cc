use crate::binding::{AutoSubmit, SelectorKind};
use crate::nav::highlight_active;
use crate::update::{UpdateAction, UpdateOutcome};
use kboard_chart::renderer::KlineRenderer;
use kboard_core::chart::error::ChartError;
use kboard_core::market::entity::Bar;
use kboard_core::page::port::{Browser, FormControl, NavLink, UpdateButton};
use kboard_live::poller::{LivePoller, PollHandle};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// # Summary
/// 页面层的统一错误类型。
#[derive(Error, Debug)]
pub enum PageError {
    // 嵌入的 K 线数据不是合法的 JSON 数组
    #[error("Invalid kline payload: {0}")]
    Payload(String),
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),
}

/// # Summary
/// 页面模型：预先渲染好的页面上存在哪些标记元素与控件。
pub struct PageModel {
    // 实时行情区域是否存在
    pub realtime_container: bool,
    // 股票代码来源元素的值
    pub stock_code: Option<String>,
    // 嵌入的 K 线 JSON
    pub kline_payload: Option<String>,
    // K 线绘图容器
    pub chart_container: String,
    pub stock_select: Option<Arc<dyn FormControl>>,
    pub frequency_select: Option<Arc<dyn FormControl>>,
    pub update_buttons: Vec<Arc<dyn UpdateButton>>,
    pub nav_links: Vec<Arc<dyn NavLink>>,
}

impl Default for PageModel {
    fn default() -> Self {
        Self {
            realtime_container: false,
            stock_code: None,
            kline_payload: None,
            chart_container: "kline-chart".to_string(),
            stock_select: None,
            frequency_select: None,
            update_buttons: Vec::new(),
            nav_links: Vec::new(),
        }
    }
}

/// # Summary
/// 加载完成后的页面状态。丢弃时实时轮询随之停止。
///
/// # Invariants
/// - 绘图失败只记录在 `render` 中，不影响轮询与下拉框绑定。
pub struct LoadedPage {
    pub poll: Option<PollHandle>,
    pub bindings: Vec<AutoSubmit>,
    pub update_buttons: Vec<Arc<dyn UpdateButton>>,
    pub active_links: usize,
    // 没有嵌入 K 线数据时为 None
    pub render: Option<Result<(), PageError>>,
}

/// # Summary
/// 页面控制器，组合渲染器、轮询器与更新动作。
///
/// # Invariants
/// - 各组件之间不共享内部状态，只通过注入的端口协作。
pub struct PageController {
    renderer: KlineRenderer,
    poller: LivePoller,
    update: UpdateAction,
    browser: Arc<dyn Browser>,
}

impl PageController {
    pub fn new(
        renderer: KlineRenderer,
        poller: LivePoller,
        update: UpdateAction,
        browser: Arc<dyn Browser>,
    ) -> Self {
        Self {
            renderer,
            poller,
            update,
            browser,
        }
    }

    /// # Summary
    /// 页面加载入口。
    ///
    /// # Logic
    /// 1. 高亮 href 与当前路径一致的导航链接。
    /// 2. 实时区域与股票代码都存在时启动轮询。
    /// 3. 绑定股票、周期下拉框的自动提交。
    /// 4. 存在嵌入 K 线数据时解析并绘制一次。
    ///
    /// # Returns
    /// 加载后的页面状态。嵌入数据非法或图表创建失败只写入 `LoadedPage::render`，
    /// 已启动的轮询与绑定照常返回。
    pub fn on_load(&mut self, page: PageModel) -> LoadedPage {
        let active_links = highlight_active(&page.nav_links, &self.browser.current_path());

        let poll = match (page.realtime_container, page.stock_code.as_deref()) {
            (true, Some(code)) => Some(self.poller.start(code)),
            (true, None) => {
                warn!("Realtime container present but no stock code");
                None
            }
            (false, _) => None,
        };

        let mut bindings = Vec::new();
        if let Some(control) = page.stock_select {
            bindings.push(AutoSubmit::bind(SelectorKind::Stock, control));
        }
        if let Some(control) = page.frequency_select {
            bindings.push(AutoSubmit::bind(SelectorKind::Frequency, control));
        }

        let render = page
            .kline_payload
            .as_deref()
            .map(|payload| self.render_payload(payload, &page.chart_container));
        if let Some(Err(e)) = &render {
            warn!("Kline chart not rendered: {}", e);
        }

        info!(
            "Page loaded: polling={}, bindings={}, update_buttons={}",
            poll.is_some(),
            bindings.len(),
            page.update_buttons.len()
        );

        LoadedPage {
            poll,
            bindings,
            update_buttons: page.update_buttons,
            active_links,
            render,
        }
    }

    fn render_payload(&mut self, payload: &str, container_id: &str) -> Result<(), PageError> {
        let bars: Vec<Bar> =
            serde_json::from_str(payload).map_err(|e| PageError::Payload(e.to_string()))?;
        self.render(&bars, container_id)
    }

    /// 重新绘制 K 线，沿用同一个图表槽位。
    pub fn render(&mut self, bars: &[Bar], container_id: &str) -> Result<(), PageError> {
        self.renderer.render(bars, container_id)?;
        Ok(())
    }

    /// 处理某个更新按钮的点击。
    pub async fn click_update(&self, button: &dyn UpdateButton) -> UpdateOutcome {
        self.update.on_click(button).await
    }

    pub fn renderer(&self) -> &KlineRenderer {
        &self.renderer
    }
}
