//! 终端版的页面端口实现：把行情区域、按钮、导航等渲染为标准输出上的文字。

use kboard_core::common::Tone;
use kboard_core::config::Palette;
use kboard_core::page::port::{Browser, FormControl, NavLink, UpdateButton};
use kboard_core::view::port::{QuoteField, QuoteView};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// 站点导航
pub const SITE_NAV: [&str; 7] = [
    "/",
    "/all-stocks",
    "/favorites",
    "/realtime",
    "/history",
    "/kline",
    "/filter",
];

fn field_label(field: QuoteField) -> &'static str {
    match field {
        QuoteField::Price => "最新价",
        QuoteField::Open => "开盘",
        QuoteField::High => "最高",
        QuoteField::Low => "最低",
        QuoteField::Volume => "成交量",
        QuoteField::Time => "时间",
        QuoteField::Change => "涨跌幅",
    }
}

/// 实时行情区域，逐字段打印到终端。
pub struct ConsoleQuoteView {
    palette: Palette,
}

impl ConsoleQuoteView {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl QuoteView for ConsoleQuoteView {
    fn set_field(&self, field: QuoteField, text: &str) {
        println!("{}: {}", field_label(field), text);
    }

    fn set_price_tone(&self, tone: Tone) {
        println!("价格颜色: {}", self.palette.color(tone));
    }

    fn show_error(&self, message: &str) {
        println!("错误: {}", message);
    }
}

pub struct ConsoleBrowser {
    current_path: String,
}

impl ConsoleBrowser {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
        }
    }
}

impl Browser for ConsoleBrowser {
    fn current_path(&self) -> String {
        self.current_path.clone()
    }

    fn alert(&self, message: &str) {
        println!("[提示] {}", message);
    }

    fn reload(&self) {
        info!("Page reload requested for {}", self.current_path);
    }
}

/// 更新按钮。禁用状态与文字只保存在内存里。
pub struct ConsoleButton {
    code: Option<String>,
    label: Mutex<String>,
    disabled: AtomicBool,
}

impl ConsoleButton {
    pub fn new(code: Option<String>, label: &str) -> Self {
        Self {
            code,
            label: Mutex::new(label.to_string()),
            disabled: AtomicBool::new(false),
        }
    }
}

impl UpdateButton for ConsoleButton {
    fn code(&self) -> Option<String> {
        self.code.clone()
    }

    fn label(&self) -> String {
        self.label.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn set_label(&self, label: &str) {
        let mut guard = self.label.lock().unwrap_or_else(|e| e.into_inner());
        *guard = label.to_string();
        println!("[按钮] {}", label);
    }

    fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }

    fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::SeqCst);
    }

    fn prevent_default(&self) {}
}

/// 下拉框。终端里没有表单，提交只记录日志。
pub struct ConsoleSelect {
    name: &'static str,
    value: String,
}

impl ConsoleSelect {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

impl FormControl for ConsoleSelect {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn submit_form(&self) {
        info!("Form submitted: {}={}", self.name, self.value);
    }
}

pub struct ConsoleNavLink {
    href: String,
}

impl ConsoleNavLink {
    pub fn new(href: &str) -> Self {
        Self {
            href: href.to_string(),
        }
    }
}

impl NavLink for ConsoleNavLink {
    fn href(&self) -> String {
        self.href.clone()
    }

    fn set_active(&self, active: bool) {
        if active {
            debug!("Active nav link: {}", self.href);
        }
    }
}
