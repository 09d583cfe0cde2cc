use kboard_core::chart::entity::{
    Axis, AxisTitle, ChartConfig, ChartData, ChartOptions, ColorSpec, Dataset, Grid, OhlcSeries,
    Plugins, Scales, Tooltip,
};
use kboard_core::common::Tone;
use kboard_core::config::Palette;
use kboard_core::market::entity::Bar;

// 叠加均线的标签、取值函数与颜色
const MOVING_AVERAGES: [(&str, fn(&Bar) -> Option<f64>, &str); 4] = [
    ("MA5", |b| b.ma5, "orange"),
    ("MA10", |b| b.ma10, "purple"),
    ("MA20", |b| b.ma20, "teal"),
    ("MA60", |b| b.ma60, "gray"),
];

/// # Summary
/// 计算每根 K 线的涨跌色调 (收盘价动量规则)。
///
/// # Logic
/// 1. 第 0 根：`open >= close` 为跌，否则为涨 (只看自身开收盘)。
/// 2. 第 i 根 (i > 0)：`close[i] >= close[i-1]` 为涨，否则为跌，不看当根开盘价。
///
/// # Returns
/// 与输入等长的色调列表，只含 Up/Down。
pub fn bar_tones(bars: &[Bar]) -> Vec<Tone> {
    bars.iter()
        .enumerate()
        .map(|(i, bar)| match i.checked_sub(1).and_then(|prev| bars.get(prev)) {
            None => {
                if bar.open >= bar.close {
                    Tone::Down
                } else {
                    Tone::Up
                }
            }
            Some(prev) => {
                if bar.close >= prev.close {
                    Tone::Up
                } else {
                    Tone::Down
                }
            }
        })
        .collect()
}

/// 单根 K 线的提示文本，数值不做取整。
pub fn tooltip_lines(bar: &Bar) -> Vec<String> {
    vec![
        format!("时间: {}", bar.time),
        format!("开盘: {}", bar.open),
        format!("最高: {}", bar.high),
        format!("最低: {}", bar.low),
        format!("收盘: {}", bar.close),
        format!("成交量: {}", bar.volume),
    ]
}

/// # Summary
/// 构建完整的图表配置。
///
/// # Logic
/// 1. 标签取 `time`，OHLC 原样透传，成交量只进入提示文本。
/// 2. 开盘价折线 + 按色调着色的收盘价柱状图。
/// 3. 任意一根 K 线带有某条均线时，追加该均线的折线数据集。
///
/// # Arguments
/// * `bars`: 按时间排序的 K 线，允许为空。
/// * `palette`: 涨跌配色。
pub fn build_config(bars: &[Bar], palette: &Palette) -> ChartConfig {
    let labels = bars.iter().map(|b| b.time.clone()).collect();
    let ohlc = OhlcSeries {
        open: bars.iter().map(|b| b.open).collect(),
        high: bars.iter().map(|b| b.high).collect(),
        low: bars.iter().map(|b| b.low).collect(),
        close: bars.iter().map(|b| b.close).collect(),
    };

    let colors: Vec<String> = bar_tones(bars)
        .into_iter()
        .map(|tone| palette.color(tone).to_string())
        .collect();

    let mut datasets = vec![
        line_dataset("开盘价", ohlc.open.iter().copied().map(Some).collect(), "blue"),
        Dataset {
            label: "K线".to_string(),
            data: ohlc.close.iter().copied().map(Some).collect(),
            kind: None,
            background_color: ColorSpec::PerPoint(colors.clone()),
            border_color: ColorSpec::PerPoint(colors),
            border_width: 1,
            y_axis_id: "y".to_string(),
            bar_percentage: Some(0.6),
        },
    ];

    for (label, pick, color) in MOVING_AVERAGES {
        let points: Vec<Option<f64>> = bars.iter().map(pick).collect();
        if points.iter().any(Option::is_some) {
            datasets.push(line_dataset(label, points, color));
        }
    }

    ChartConfig {
        kind: "bar".to_string(),
        data: ChartData { labels, datasets },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            scales: Scales {
                x: Axis {
                    grid: Some(Grid { display: false }),
                    ..Axis::default()
                },
                y: Axis {
                    position: Some("right".to_string()),
                    title: Some(AxisTitle {
                        display: true,
                        text: "价格".to_string(),
                    }),
                    ..Axis::default()
                },
            },
            plugins: Plugins {
                tooltip: Tooltip {
                    lines: bars.iter().map(tooltip_lines).collect(),
                },
            },
        },
        ohlc,
    }
}

fn line_dataset(label: &str, data: Vec<Option<f64>>, color: &str) -> Dataset {
    Dataset {
        label: label.to_string(),
        data,
        kind: Some("line".to_string()),
        background_color: ColorSpec::Single("transparent".to_string()),
        border_color: ColorSpec::Single(color.to_string()),
        border_width: 1,
        y_axis_id: "y".to_string(),
        bar_percentage: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(open: f64, close: f64) -> Bar {
        Bar::ohlcv("t", open, open.max(close), open.min(close), close, 100.0)
    }

    #[test]
    fn test_first_bar_uses_own_open_close() {
        assert_eq!(bar_tones(&[bar(10.0, 9.0)]), vec![Tone::Down]);
        // 平盘也算跌
        assert_eq!(bar_tones(&[bar(10.0, 10.0)]), vec![Tone::Down]);
        assert_eq!(bar_tones(&[bar(10.0, 11.0)]), vec![Tone::Up]);
    }

    #[test]
    fn test_later_bars_ignore_own_open() {
        // 第 1 根自身收阴 (open 12 > close 11)，但收盘高于前一根收盘，所以为涨
        let tones = bar_tones(&[bar(10.0, 10.5), bar(12.0, 11.0)]);
        assert_eq!(tones, vec![Tone::Up, Tone::Up]);

        // 第 1 根自身收阳，但收盘低于前一根收盘，所以为跌
        let tones = bar_tones(&[bar(10.0, 10.5), bar(9.0, 10.0)]);
        assert_eq!(tones, vec![Tone::Up, Tone::Down]);
    }

    #[test]
    fn test_equal_close_counts_as_up() {
        let tones = bar_tones(&[bar(10.0, 9.0), bar(8.0, 9.0)]);
        assert_eq!(tones, vec![Tone::Down, Tone::Up]);
    }

    #[test]
    fn test_strictly_increasing_closes_are_all_up_after_first() {
        let bars: Vec<Bar> = (0..20_i32)
            .map(|i| bar(100.0, 1.0 + f64::from(i)))
            .collect();
        let tones = bar_tones(&bars);
        assert_eq!(tones.len(), 20);
        assert_eq!(tones[0], Tone::Down);
        assert!(tones[1..].iter().all(|t| *t == Tone::Up));
    }

    #[test]
    fn test_tooltip_keeps_raw_numbers() {
        let lines = tooltip_lines(&Bar::ohlcv("2024-05-06", 10.0, 10.456, 9.5, 10.25, 1200.0));
        assert_eq!(
            lines,
            vec![
                "时间: 2024-05-06",
                "开盘: 10",
                "最高: 10.456",
                "最低: 9.5",
                "收盘: 10.25",
                "成交量: 1200",
            ]
        );
    }

    #[test]
    fn test_empty_series_yields_empty_points() {
        let config = build_config(&[], &Palette::default());
        assert!(config.data.labels.is_empty());
        assert_eq!(config.data.datasets.len(), 2);
        assert!(config.data.datasets.iter().all(|d| d.data.is_empty()));
        assert!(config.options.plugins.tooltip.lines.is_empty());
    }
}
