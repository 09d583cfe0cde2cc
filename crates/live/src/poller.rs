use crate::token::StopToken;
use kboard_core::common::Tone;
use kboard_core::common::format::{format_change, format_price, format_volume};
use kboard_core::market::entity::{Quote, QuoteReply};
use kboard_core::market::error::FeedError;
use kboard_core::market::port::MarketBackend;
use kboard_core::view::port::{QuoteField, QuoteView};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::AbortHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// 默认轮询周期
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(30);

/// # Summary
/// 单个轮询周期的结果。
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    // 行情已写入展示区域
    Applied(Quote),
    // 后端报告业务错误，已写入错误区域
    DomainError(String),
    // 传输或解析失败，只记录日志
    TransportFailed(FeedError),
    // 已停止，响应被丢弃
    Cancelled,
}

/// # Summary
/// 实时行情轮询器。
///
/// # Invariants
/// - 每个周期独立派生一个请求任务，慢响应不会推迟下一次计时。
/// - 并发的在途请求可能乱序应用 (后应用者生效)，不保证按周期顺序。
/// - 停止令牌在发请求前检查一次，与发请求之间不加锁：与 `stop` 并发时最多还会
///   发出一次请求，但其结果不会被应用。
pub struct LivePoller {
    // 后端驱动
    backend: Arc<dyn MarketBackend>,
    // 实时行情展示区域
    view: Arc<dyn QuoteView>,
    // 轮询周期
    period: Duration,
}

impl LivePoller {
    /// # Summary
    /// 创建轮询器。
    ///
    /// # Arguments
    /// * `backend`: 后端驱动。
    /// * `view`: 展示区域。
    /// * `period`: 轮询周期，为零时退回默认的 30 秒。
    pub fn new(backend: Arc<dyn MarketBackend>, view: Arc<dyn QuoteView>, period: Duration) -> Self {
        let period = if period.is_zero() {
            warn!("Zero poll period configured, using {:?}", DEFAULT_PERIOD);
            DEFAULT_PERIOD
        } else {
            period
        };
        Self {
            backend,
            view,
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// 立即执行一个轮询周期，不受任何停止令牌约束。
    pub async fn poll_once(&self, code: &str) -> PollOutcome {
        run_cycle(
            self.backend.as_ref(),
            self.view.as_ref(),
            code,
            &StopToken::new(),
        )
        .await
    }

    /// # Summary
    /// 开始轮询指定证券。
    ///
    /// # Logic
    /// 1. 创建停止令牌。
    /// 2. 派生计时协程：首个 tick 立即触发，之后每个周期触发一次。
    /// 3. 每次 tick 派生一个请求任务，任务在应用结果前检查令牌。
    ///
    /// # Arguments
    /// * `code`: 证券代码。
    ///
    /// # Returns
    /// 轮询句柄，调用 `stop` 或丢弃句柄即停止。
    pub fn start(&self, code: &str) -> PollHandle {
        let token = Arc::new(StopToken::new());
        let backend = self.backend.clone();
        let view = self.view.clone();
        let period = self.period;
        let owned_code = code.to_string();
        let timer_token = token.clone();

        let timer = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if timer_token.is_stopped() {
                    break;
                }

                let backend = backend.clone();
                let view = view.clone();
                let code = owned_code.clone();
                let token = timer_token.clone();
                tokio::spawn(async move {
                    let outcome =
                        run_cycle(backend.as_ref(), view.as_ref(), &code, &token).await;
                    debug!("Poll cycle for {} finished: {:?}", code, outcome);
                });
            }
        });

        info!("Live polling started for {} every {:?}", code, self.period);
        PollHandle {
            code: code.to_string(),
            token,
            timer: timer.abort_handle(),
        }
    }

    /// 停止轮询，等价于 `handle.stop()`。
    pub fn stop(&self, handle: &PollHandle) {
        handle.stop();
    }
}

/// # Summary
/// 轮询句柄。
///
/// # Invariants
/// - 停止后不再发起新请求，在途响应也不会被应用。
/// - 句柄被丢弃时自动停止 (相当于页面卸载)。
pub struct PollHandle {
    code: String,
    token: Arc<StopToken>,
    timer: AbortHandle,
}

impl PollHandle {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_stopped()
    }

    pub fn stop(&self) {
        if !self.token.is_stopped() {
            info!("Live polling stopped for {}", self.code);
        }
        self.token.stop();
        self.timer.abort();
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// # Summary
/// 执行一个轮询周期。
///
/// # Logic
/// 1. 已停止则直接放弃，不发请求 (检查与发送之间的窗口见 `LivePoller`)。
/// 2. 传输失败只记日志，不动任何展示字段。
/// 3. 业务错误写入错误区域，其余字段保持不变。
/// 4. 正常行情写入全部字段并按开收盘着色。
async fn run_cycle(
    backend: &dyn MarketBackend,
    view: &dyn QuoteView,
    code: &str,
    token: &StopToken,
) -> PollOutcome {
    if token.is_stopped() {
        return PollOutcome::Cancelled;
    }

    match backend.fetch_realtime(code).await {
        Err(e) => {
            warn!("Failed to fetch realtime quote for {}: {}", code, e);
            if token.is_stopped() {
                PollOutcome::Cancelled
            } else {
                PollOutcome::TransportFailed(e)
            }
        }
        Ok(QuoteReply::DomainError { error }) => {
            if token.run_if_live(|| view.show_error(&error)) {
                PollOutcome::DomainError(error)
            } else {
                PollOutcome::Cancelled
            }
        }
        Ok(QuoteReply::Quote(quote)) => {
            if token.run_if_live(|| apply_quote(view, &quote)) {
                PollOutcome::Applied(quote)
            } else {
                PollOutcome::Cancelled
            }
        }
    }
}

/// 把一条行情写入展示区域。
pub fn apply_quote(view: &dyn QuoteView, quote: &Quote) {
    view.set_field(QuoteField::Price, &format_price(quote.close));
    view.set_field(QuoteField::Open, &format_price(quote.open));
    view.set_field(QuoteField::High, &format_price(quote.high));
    view.set_field(QuoteField::Low, &format_price(quote.low));
    view.set_field(QuoteField::Volume, &format_volume(quote.volume));
    view.set_field(QuoteField::Time, &quote.time);
    if let Some(change) = format_change(quote.open, quote.close) {
        view.set_field(QuoteField::Change, &change);
    }
    view.set_price_tone(Tone::of_session(quote.open, quote.close));
}
