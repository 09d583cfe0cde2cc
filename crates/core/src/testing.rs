//! 测试替身：各端口的内存实现，供下游 crate 的集成测试使用。
//! 仅在 `test-utils` feature 下编译。

use crate::chart::entity::ChartConfig;
use crate::chart::error::ChartError;
use crate::chart::port::{ChartBackend, ChartInstance};
use crate::common::Tone;
use crate::market::entity::{Quote, QuoteReply, UpdateReply};
use crate::market::error::FeedError;
use crate::market::port::MarketBackend;
use crate::page::port::{Browser, FormControl, NavLink, UpdateButton};
use crate::view::port::{QuoteField, QuoteView};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

fn guard<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

/// 构造一条行情快照。
pub fn quote(open: f64, close: f64) -> Quote {
    Quote {
        time: "2024-05-06 15:00:00".to_string(),
        open,
        high: open.max(close) + 0.5,
        low: open.min(close) - 0.5,
        close,
        volume: 1_234_567.0,
    }
}

// ============================================================
//  MarketBackend
// ============================================================

/// # Summary
/// 按脚本依次返回响应的后端。最后一条脚本会被重复返回。
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<QuoteReply, FeedError>>>,
    update_reply: Mutex<Result<UpdateReply, FeedError>>,
    delay: Duration,
    fetched: Mutex<Vec<String>>,
    updated: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new(replies: Vec<Result<QuoteReply, FeedError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            update_reply: Mutex::new(Ok(UpdateReply {
                message: "更新成功".to_string(),
                status: Some("success".to_string()),
            })),
            delay: Duration::ZERO,
            fetched: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
        }
    }

    /// 每次请求先等待一段时间再返回，用于模拟慢响应。
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_update_reply(self, reply: Result<UpdateReply, FeedError>) -> Self {
        *guard(&self.update_reply) = reply;
        self
    }

    pub fn fetch_count(&self) -> usize {
        guard(&self.fetched).len()
    }

    pub fn fetched_codes(&self) -> Vec<String> {
        guard(&self.fetched).clone()
    }

    pub fn update_codes(&self) -> Vec<String> {
        guard(&self.updated).clone()
    }
}

#[async_trait]
impl MarketBackend for ScriptedBackend {
    async fn fetch_realtime(&self, code: &str) -> Result<QuoteReply, FeedError> {
        guard(&self.fetched).push(code.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let mut replies = guard(&self.replies);
        if replies.len() > 1 {
            replies
                .pop_front()
                .unwrap_or_else(|| Err(FeedError::Network("no scripted reply".into())))
        } else {
            replies
                .front()
                .cloned()
                .unwrap_or_else(|| Err(FeedError::Network("no scripted reply".into())))
        }
    }

    async fn request_update(&self, code: &str) -> Result<UpdateReply, FeedError> {
        guard(&self.updated).push(code.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        guard(&self.update_reply).clone()
    }
}

// ============================================================
//  QuoteView
// ============================================================

/// 记录所有写入的行情展示区域。
#[derive(Default)]
pub struct RecordingQuoteView {
    fields: Mutex<HashMap<QuoteField, String>>,
    tone: Mutex<Option<Tone>>,
    error: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl RecordingQuoteView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: QuoteField) -> Option<String> {
        guard(&self.fields).get(&field).cloned()
    }

    pub fn tone(&self) -> Option<Tone> {
        *guard(&self.tone)
    }

    pub fn error(&self) -> Option<String> {
        guard(&self.error).clone()
    }

    /// 字段与颜色的写入次数 (不含错误区域)。
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl QuoteView for RecordingQuoteView {
    fn set_field(&self, field: QuoteField, text: &str) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        guard(&self.fields).insert(field, text.to_string());
    }

    fn set_price_tone(&self, tone: Tone) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        *guard(&self.tone) = Some(tone);
    }

    fn show_error(&self, message: &str) {
        *guard(&self.error) = Some(message.to_string());
    }
}

// ============================================================
//  ChartBackend
// ============================================================

/// 记录 create/destroy 事件顺序的图表后端。
#[derive(Default)]
pub struct RecordingChartBackend {
    events: Arc<Mutex<Vec<String>>>,
    configs: Mutex<Vec<ChartConfig>>,
    missing_surface: Option<String>,
}

impl RecordingChartBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定一个不存在的容器，在其上创建时返回 `ChartError::Surface`。
    pub fn with_missing_surface(mut self, surface: &str) -> Self {
        self.missing_surface = Some(surface.to_string());
        self
    }

    pub fn events(&self) -> Vec<String> {
        guard(&self.events).clone()
    }

    pub fn last_config(&self) -> Option<ChartConfig> {
        guard(&self.configs).last().cloned()
    }
}

impl ChartBackend for RecordingChartBackend {
    fn create(
        &self,
        surface: &str,
        config: &ChartConfig,
    ) -> Result<Box<dyn ChartInstance>, ChartError> {
        if self.missing_surface.as_deref() == Some(surface) {
            return Err(ChartError::Surface(format!("no such container: {}", surface)));
        }
        guard(&self.events).push(format!("create:{}", surface));
        guard(&self.configs).push(config.clone());
        Ok(Box::new(RecordingInstance {
            surface: surface.to_string(),
            events: self.events.clone(),
            destroyed: false,
        }))
    }
}

struct RecordingInstance {
    surface: String,
    events: Arc<Mutex<Vec<String>>>,
    destroyed: bool,
}

impl ChartInstance for RecordingInstance {
    fn surface(&self) -> &str {
        &self.surface
    }

    fn destroy(&mut self) {
        if !self.destroyed {
            self.destroyed = true;
            guard(&self.events).push(format!("destroy:{}", self.surface));
        }
    }
}

// ============================================================
//  Page controls
// ============================================================

/// 记录提交次数的下拉框。
pub struct RecordingSelect {
    value: Mutex<String>,
    submits: AtomicUsize,
}

impl RecordingSelect {
    pub fn new(value: &str) -> Self {
        Self {
            value: Mutex::new(value.to_string()),
            submits: AtomicUsize::new(0),
        }
    }

    pub fn select(&self, value: &str) {
        *guard(&self.value) = value.to_string();
    }

    pub fn submit_count(&self) -> usize {
        self.submits.load(Ordering::SeqCst)
    }
}

impl FormControl for RecordingSelect {
    fn value(&self) -> String {
        guard(&self.value).clone()
    }

    fn submit_form(&self) {
        self.submits.fetch_add(1, Ordering::SeqCst);
    }
}

/// 记录状态变更历史的更新按钮。
pub struct RecordingButton {
    code: Option<String>,
    label: Mutex<String>,
    disabled: AtomicBool,
    default_prevented: AtomicBool,
    history: Mutex<Vec<String>>,
}

impl RecordingButton {
    pub fn new(code: Option<&str>, label: &str) -> Self {
        Self {
            code: code.map(str::to_string),
            label: Mutex::new(label.to_string()),
            disabled: AtomicBool::new(false),
            default_prevented: AtomicBool::new(false),
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.load(Ordering::SeqCst)
    }

    /// 依次记录的 `label:<text>` / `disabled:<bool>` 事件。
    pub fn history(&self) -> Vec<String> {
        guard(&self.history).clone()
    }
}

impl UpdateButton for RecordingButton {
    fn code(&self) -> Option<String> {
        self.code.clone()
    }

    fn label(&self) -> String {
        guard(&self.label).clone()
    }

    fn set_label(&self, label: &str) {
        *guard(&self.label) = label.to_string();
        guard(&self.history).push(format!("label:{}", label));
    }

    fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }

    fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::SeqCst);
        guard(&self.history).push(format!("disabled:{}", disabled));
    }

    fn prevent_default(&self) {
        self.default_prevented.store(true, Ordering::SeqCst);
    }
}

pub struct RecordingNavLink {
    href: String,
    active: AtomicBool,
}

impl RecordingNavLink {
    pub fn new(href: &str) -> Self {
        Self {
            href: href.to_string(),
            active: AtomicBool::new(false),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

impl NavLink for RecordingNavLink {
    fn href(&self) -> String {
        self.href.clone()
    }

    fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::SeqCst);
    }
}

/// 记录提示与刷新请求的浏览器窗口。
pub struct RecordingBrowser {
    path: String,
    alerts: Mutex<Vec<String>>,
    reloads: AtomicUsize,
}

impl RecordingBrowser {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            alerts: Mutex::new(Vec::new()),
            reloads: AtomicUsize::new(0),
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        guard(&self.alerts).clone()
    }

    pub fn reload_count(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

impl Browser for RecordingBrowser {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn alert(&self, message: &str) {
        guard(&self.alerts).push(message.to_string());
    }

    fn reload(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }
}
