//! 行情展示格式化：价格两位小数、成交量千分位分组、涨跌幅百分比。

/// 价格固定保留两位小数，`5` 显示为 `5.00`。
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// # Summary
/// 成交量千分位分组，`1234567` 显示为 `1,234,567`。
///
/// # Logic
/// 1. 最多保留三位小数并去掉末尾的零 (与浏览器的 en-US 本地化一致)。
/// 2. 整数部分每三位插入一个逗号。
pub fn format_volume(volume: f64) -> String {
    if !volume.is_finite() {
        return volume.to_string();
    }

    let text = format!("{:.3}", volume.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac.is_empty();
    let sign = if volume < 0.0 && !is_zero { "-" } else { "" };

    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

/// 相对开盘价的涨跌幅，开盘价为零时无意义返回 None。
pub fn format_change(open: f64, close: f64) -> Option<String> {
    if open == 0.0 {
        return None;
    }
    Some(format!("{:.2}%", (close - open) / open * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(5.0), "5.00");
        assert_eq!(format_price(12.345_6), "12.35");
        assert_eq!(format_price(0.1), "0.10");
    }

    #[test]
    fn test_format_volume_grouping() {
        assert_eq!(format_volume(1_234_567.0), "1,234,567");
        assert_eq!(format_volume(999.0), "999");
        assert_eq!(format_volume(1000.0), "1,000");
        assert_eq!(format_volume(0.0), "0");
        assert_eq!(format_volume(12_345.5), "12,345.5");
        assert_eq!(format_volume(-4_500.0), "-4,500");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(10.0, 11.0).as_deref(), Some("10.00%"));
        assert_eq!(format_change(10.0, 9.5).as_deref(), Some("-5.00%"));
        assert_eq!(format_change(0.0, 9.5), None);
    }
}
