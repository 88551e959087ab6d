/// Comma-separated thousands: 1234567 -> "1,234,567"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Money with two decimals and thousands separators: "$1,250.00"
pub fn format_money(value: f64, currency_symbol: &str) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = group_thousands(cents / 100);
    format!("{sign}{currency_symbol}{whole}.{:02}", cents % 100)
}

/// Replace the bottom border of a rounded `tabled` table with label/value
/// rows aligned under column `value_col`.
///
/// Columns left of `value_col` merge into one right-aligned label cell and
/// columns right of it are closed off. The table is returned unchanged if
/// it doesn't have the expected shape or a value is wider than its column.
pub fn add_summary_footer(table: &str, value_col: usize, rows: &[(&str, String)]) -> String {
    let lines: Vec<&str> = table.lines().collect();
    if lines.len() < 4 || value_col == 0 || rows.is_empty() {
        return table.to_string();
    }

    // Parse the top border to discover column widths
    let Some(inner) = lines[0]
        .strip_prefix('╭')
        .and_then(|s| s.strip_suffix('╮'))
    else {
        return table.to_string();
    };

    let widths: Vec<usize> = inner.split('┬').map(|p| p.chars().count()).collect();
    if widths.len() <= value_col {
        return table.to_string();
    }

    // One ┴ per merged boundary becomes part of the label cell
    let left_width = widths[..value_col].iter().sum::<usize>() + value_col - 1;
    let value_width = widths[value_col];
    if value_width < 2 || rows.iter().any(|(_, v)| v.chars().count() > value_width - 2) {
        return table.to_string();
    }

    let dashes = |w: &usize| "─".repeat(*w);
    let left: Vec<String> = widths[..value_col].iter().map(dashes).collect();
    let right: Vec<String> = widths[value_col + 1..].iter().map(dashes).collect();

    let mut out = lines[..lines.len() - 1].join("\n");
    out.push('\n');

    out.push_str(&format!("├{}┼{}", left.join("┴"), "─".repeat(value_width)));
    if right.is_empty() {
        out.push_str("┤\n");
    } else {
        out.push_str(&format!("┼{}╯\n", right.join("┴")));
    }

    for (idx, (label, value)) in rows.iter().enumerate() {
        out.push_str(&format!(
            "│ {:>left$} │ {:>value$} │\n",
            label,
            value,
            left = left_width - 2,
            value = value_width - 2
        ));
        if idx < rows.len() - 1 {
            out.push_str(&format!(
                "├{}┼{}┤\n",
                "─".repeat(left_width),
                "─".repeat(value_width)
            ));
        }
    }

    out.push_str(&format!(
        "╰{}┴{}╯",
        "─".repeat(left_width),
        "─".repeat(value_width)
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12345678), "12,345,678");
    }

    #[test]
    fn money_is_grouped_and_rounded() {
        assert_eq!(format_money(0.0, "$"), "$0.00");
        assert_eq!(format_money(1250.0, "$"), "$1,250.00");
        assert_eq!(format_money(3813.336, "$"), "$3,813.34");
        assert_eq!(format_money(1234567.891, "R$ "), "R$ 1,234,567.89");
        assert_eq!(format_money(-42.5, "$"), "-$42.50");
    }

    #[test]
    fn footer_lines_up_with_value_column() {
        let table = "\
╭───┬──────┬─────────╮
│ # │ NAME │ TOTAL   │
├───┼──────┼─────────┤
│ 1 │ a    │ $100.00 │
╰───┴──────┴─────────╯";

        let out = add_summary_footer(table, 2, &[("SUM", "$100.00".to_string())]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[4], "├───┴──────┼─────────┤");
        assert_eq!(lines[5], "│      SUM │ $100.00 │");
        assert_eq!(lines[6], "╰──────────┴─────────╯");
        assert!(lines.iter().all(|l| l.chars().count() == 22));
    }

    #[test]
    fn footer_skipped_when_value_too_wide() {
        let table = "\
╭───┬──────╮
│ # │ SUM  │
├───┼──────┤
│ 1 │ $1   │
╰───┴──────╯";

        let out = add_summary_footer(table, 1, &[("ALL", "$1,000.00".to_string())]);
        assert_eq!(out, table);
    }
}
