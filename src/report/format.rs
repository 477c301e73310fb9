//! Number formatting and boxed text tables

/// Integer with thousands separators: `1234567` -> `1,234,567`
pub fn group_int(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let sign = if value < 0 { "-" } else { "" };
    format!("{}{}", sign, group_digits(&digits))
}

/// Two decimals with thousands separators: `450000.0` -> `450,000.00`
pub fn money(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    // -0.00 prints without a sign
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, group_digits(int_part), frac_part)
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Tables
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub enum Align {
    Left,
    Right,
}

/// Column header with a fixed minimum width
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub const fn left(header: &'static str, width: usize) -> Self {
        Self { header, width, align: Align::Left }
    }

    pub const fn right(header: &'static str, width: usize) -> Self {
        Self { header, width, align: Align::Right }
    }

    fn cell(&self, value: &str) -> String {
        match self.align {
            Align::Left => format!("{:<w$}", value, w = self.width),
            Align::Right => format!("{:>w$}", value, w = self.width),
        }
    }
}

/// Render a titled, boxed table
///
/// Values wider than their column are not cut; they push the row wider.
pub fn render_table(title: &str, columns: &[Column], rows: &[Vec<String>]) -> String {
    let rule = columns.iter().fold(String::from("+"), |mut acc, col| {
        acc.push_str(&"-".repeat(col.width + 2));
        acc.push('+');
        acc
    });

    let headers: Vec<String> = columns.iter().map(|c| c.cell(c.header)).collect();

    let mut out = format!("\n{}\n{}\n{}\n{}", title, rule, render_row(&headers), rule);
    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .zip(row)
            .map(|(col, value)| col.cell(value))
            .collect();
        out.push('\n');
        out.push_str(&render_row(&cells));
    }
    out.push('\n');
    out.push_str(&rule);
    out
}

fn render_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}
