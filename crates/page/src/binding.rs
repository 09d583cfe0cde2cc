use kboard_core::common::Frequency;
use kboard_core::page::port::FormControl;
use std::sync::Arc;
use tracing::{debug, warn};

/// 自动提交绑定的下拉框种类。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    // 股票选择
    Stock,
    // 周期选择
    Frequency,
}

/// # Summary
/// 下拉框变更即提交所在表单的绑定。
///
/// # Invariants
/// - 股票选择与周期选择各自独立绑定，互不影响。
pub struct AutoSubmit {
    kind: SelectorKind,
    control: Arc<dyn FormControl>,
}

impl AutoSubmit {
    pub fn bind(kind: SelectorKind, control: Arc<dyn FormControl>) -> Self {
        Self { kind, control }
    }

    pub fn kind(&self) -> SelectorKind {
        self.kind
    }

    /// # Summary
    /// 处理下拉框的 change 事件。
    ///
    /// # Logic
    /// 1. 周期选择的取值不在已知周期中时记录警告，但仍然提交 (校验交给后端)。
    /// 2. 提交所在表单。
    pub fn on_change(&self) {
        let value = self.control.value();
        if self.kind == SelectorKind::Frequency && value.parse::<Frequency>().is_err() {
            warn!("Submitting unknown frequency {:?}", value);
        }
        debug!("{:?} selector changed to {}", self.kind, value);
        self.control.submit_form();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Select {
        value: Mutex<String>,
        submits: AtomicUsize,
    }

    impl FormControl for Select {
        fn value(&self) -> String {
            self.value.lock().unwrap().clone()
        }

        fn submit_form(&self) {
            self.submits.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_change_submits_even_for_unknown_frequency() {
        let select = Arc::new(Select {
            value: Mutex::new("2h".to_string()),
            submits: AtomicUsize::new(0),
        });
        let binding = AutoSubmit::bind(SelectorKind::Frequency, select.clone());
        binding.on_change();
        assert_eq!(select.submits.load(Ordering::SeqCst), 1);
    }
}
