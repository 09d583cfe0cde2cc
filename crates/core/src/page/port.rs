//! 页面控件契约。每个 Trait 对应原先通过元素 ID 或选择器找到的一类节点。

/// # Summary
/// 所属表单的下拉选择框 (股票选择、周期选择)。
pub trait FormControl: Send + Sync {
    /// 当前选中值。
    fn value(&self) -> String;

    /// 提交所在的表单。
    fn submit_form(&self);
}

/// # Summary
/// 带有更新标记的按钮，携带要刷新的证券代码。
///
/// # Invariants
/// - `code` 读取的是按钮自身的属性，缺失时返回 None。
/// - 禁用中的按钮不响应点击。
pub trait UpdateButton: Send + Sync {
    fn code(&self) -> Option<String>;

    fn label(&self) -> String;

    fn set_label(&self, label: &str);

    fn is_disabled(&self) -> bool;

    fn set_disabled(&self, disabled: bool);

    /// 阻止点击的默认导航行为。
    fn prevent_default(&self);
}

/// 导航链接。
pub trait NavLink: Send + Sync {
    fn href(&self) -> String;

    fn set_active(&self, active: bool);
}

/// # Summary
/// 浏览器窗口能力：当前路径、弹出提示、整页刷新。
pub trait Browser: Send + Sync {
    fn current_path(&self) -> String;

    fn alert(&self, message: &str);

    fn reload(&self);
}
