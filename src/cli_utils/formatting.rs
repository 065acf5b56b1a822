use colored::Colorize;

/// Printed width of `text`, skipping ANSI colour sequences.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // CSI sequences end at the first byte in '@'..='~'
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(cell));
    format!("{}{}", cell, " ".repeat(fill))
}

/// Lines of a `|` separated table, columns sized to their widest visible cell.
pub fn table_lines(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let col_widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| visible_width(cell))
                .fold(visible_width(header), usize::max)
        })
        .collect();

    let render = |cells: Vec<&str>| {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| pad(cell, col_widths.get(i).copied().unwrap_or(0)))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let header_line = render(headers.to_vec());
    let divider = "-".repeat(visible_width(&header_line));
    let mut lines = vec![header_line, divider];
    lines.extend(rows.iter().map(|row| render(row.iter().map(String::as_str).collect())));
    lines
}

pub fn format_table(headers: Vec<&str>, rows: Vec<Vec<String>>) {
    for (i, line) in table_lines(&headers, &rows).into_iter().enumerate() {
        if i == 0 {
            println!("{}", line.bold());
        } else {
            println!("{}", line);
        }
    }
}

/// Format a single record as key-value pairs
pub fn format_record(data: Vec<(&str, String)>) {
    let max_key_len = data.iter().map(|(k, _)| k.len()).max().unwrap_or(20);

    for (key, value) in data {
        let padded_key = format!("{:width$}", key, width = max_key_len);
        println!("  {}: {}", padded_key.bright_cyan(), value);
    }
}

/// Format a header
pub fn print_header(text: &str) {
    println!();
    println!("{}", text.bold().bright_cyan());
    println!("{}", "=".repeat(text.chars().count()));
    println!();
}

/// Format a section
pub fn print_section(text: &str) {
    println!();
    println!("{}", text.bold().bright_white());
    println!("{}", "-".repeat(text.chars().count()));
}

/// Format UUID as short version
pub fn format_uuid_short(uuid: &uuid::Uuid) -> String {
    let s = uuid.to_string();
    format!("{}...", &s[..8])
}

/// Format BigDecimal as money with 2 decimal places
pub fn format_money(value: &bigdecimal::BigDecimal) -> String {
    let rounded = value.with_scale_round(2, bigdecimal::RoundingMode::HalfUp);
    format!("${}", rounded)
}

/// Horizontal bar scaled so that `max` fills `width` cells
pub fn format_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(&BigDecimal::from_str("12.345").unwrap()), "$12.35");
        assert_eq!(format_money(&BigDecimal::from(7)), "$7.00");
    }

    #[test]
    fn test_table_ignores_colour_codes() {
        let rows = vec![
            vec!["Food".to_string(), "\u{1b}[31mover\u{1b}[0m".to_string()],
            vec!["Entertainment".to_string(), "\u{1b}[32mok\u{1b}[0m".to_string()],
        ];
        let lines = table_lines(&["Category", "Status"], &rows);

        assert_eq!(lines[0], "Category      | Status");
        assert_eq!(lines[1], "-".repeat(22));
        let widths: Vec<usize> = lines.iter().map(|l| visible_width(l)).collect();
        assert!(widths.iter().all(|w| *w == 22), "{:?}", widths);
    }

    #[test]
    fn test_format_bar_scales() {
        assert_eq!(format_bar(50.0, 100.0, 10).chars().count(), 5);
        assert_eq!(format_bar(100.0, 100.0, 10).chars().count(), 10);
        assert_eq!(format_bar(0.1, 100.0, 10).chars().count(), 1);
        assert!(format_bar(0.0, 100.0, 10).is_empty());
    }
}
