use kboard_core::page::port::NavLink;
use std::sync::Arc;

/// 把 href 与当前路径完全相等的导航链接标记为激活，返回激活数量。
pub fn highlight_active(links: &[Arc<dyn NavLink>], current_path: &str) -> usize {
    let mut active = 0;
    for link in links {
        if link.href() == current_path {
            link.set_active(true);
            active += 1;
        }
    }
    active
}
