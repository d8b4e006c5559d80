//! Plain-text charts for the terminal.

use risk_engine::domain::TimelinePoint;

const BAR: &str = "█";
const MARKER: &str = "●";
const COLUMN_WIDTH: usize = 6;

/// Horizontal bars scaled so the largest value spans `width` cells.
/// Non-positive values get an empty bar.
pub fn bar_chart(rows: &[(&str, f64)], width: usize) -> String {
    let label_width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    let max = rows.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);

    rows.iter()
        .map(|(label, value)| {
            let len = if max > 0.0 && *value > 0.0 {
                ((value / max) * width as f64).round() as usize
            } else {
                0
            };
            format!(
                "{:<lw$} │{} {:.2}%",
                label,
                BAR.repeat(len),
                value,
                lw = label_width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Risk-over-time plot with one marker per year on a `height`-row grid.
pub fn line_chart(points: &[TimelinePoint], height: usize) -> String {
    if points.is_empty() {
        return String::new();
    }
    let height = height.max(2);

    let (mut lo, mut hi) = points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.risk), hi.max(p.risk))
    });
    if hi - lo < 1e-9 {
        lo -= 0.01;
        hi += 0.01;
    }
    let step = (hi - lo) / (height - 1) as f64;

    let row_of = |risk: f64| ((hi - risk) / step).round() as usize;

    let mut lines = Vec::with_capacity(height + 2);
    for row in 0..height {
        let axis_value = hi - row as f64 * step;
        let cells: String = points
            .iter()
            .map(|p| {
                let mark = if row_of(p.risk) == row { MARKER } else { " " };
                format!("{:^w$}", mark, w = COLUMN_WIDTH)
            })
            .collect();
        lines.push(format!("{:>7.2} │{}", axis_value, cells));
    }

    lines.push(format!("{:>7} └{}", "", "─".repeat(points.len() * COLUMN_WIDTH)));
    let years: String = points
        .iter()
        .map(|p| format!("{:^w$}", p.year, w = COLUMN_WIDTH))
        .collect();
    lines.push(format!("{:>7}  {}", "", years));

    lines.join("\n")
}
