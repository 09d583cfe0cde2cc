pub mod format;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// # Summary
/// K 线周期枚举，对应页面周期选择框中的可选项。
///
/// # Invariants
/// - `1M` 表示月线，分钟周期只有 `5m/15m/30m/60m`，因此解析区分大小写。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Frequency {
    // 5分钟
    Minute5,
    // 15分钟
    Minute15,
    // 30分钟
    Minute30,
    // 60分钟
    Minute60,
    // 日线
    Day1,
    // 周线
    Week1,
    // 月线
    Month1,
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "5m" => Ok(Frequency::Minute5),
            "15m" => Ok(Frequency::Minute15),
            "30m" => Ok(Frequency::Minute30),
            "60m" => Ok(Frequency::Minute60),
            "1d" => Ok(Frequency::Day1),
            "1w" => Ok(Frequency::Week1),
            "1M" => Ok(Frequency::Month1),
            _ => Err(format!("Unknown Frequency: {}", s)),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Minute5 => write!(f, "5m"),
            Frequency::Minute15 => write!(f, "15m"),
            Frequency::Minute30 => write!(f, "30m"),
            Frequency::Minute60 => write!(f, "60m"),
            Frequency::Day1 => write!(f, "1d"),
            Frequency::Week1 => write!(f, "1w"),
            Frequency::Month1 => write!(f, "1M"),
        }
    }
}

/// # Summary
/// 涨跌色调。具体颜色由 `Palette` 决定 (默认红涨绿跌)。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Tone {
    Up,
    Down,
    Neutral,
}

impl Tone {
    /// 按收盘价相对开盘价的方向取色调，相等时为中性。
    pub fn of_session(open: f64, close: f64) -> Self {
        if close > open {
            Tone::Up
        } else if close < open {
            Tone::Down
        } else {
            Tone::Neutral
        }
    }
}
