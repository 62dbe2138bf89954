use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;

#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Centers a box of fixed height, clamped to the available area.
#[must_use]
pub fn centered_fixed_height(percent_x: u16, height: u16, r: Rect) -> Rect {
    let height = height.min(r.height);
    let horizontal = centered_rect(percent_x, 100, r);
    Rect {
        x: horizontal.x,
        y: r.y + (r.height - height) / 2,
        width: horizontal.width,
        height,
    }
}

/// Formats an amount with thousands separators, e.g. `1234567` as `1,234,567`.
#[must_use]
pub fn format_amount(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats an optional integer cell, leaving missing values blank.
#[must_use]
pub fn format_optional(value: Option<i64>, format: fn(i64) -> String) -> String {
    value.map(format).unwrap_or_default()
}

/// Parses a configured color name or `#rrggbb` value.
#[must_use]
pub fn parse_color(value: &str, fallback: Color) -> Color {
    value.trim().parse::<Color>().unwrap_or_else(|_| {
        tracing::warn!(color = %value, "Unknown accent color, using default");
        fallback
    })
}
