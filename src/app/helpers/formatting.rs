//! Text formatting utilities for UI display

use std::path::Path;

/// Formats a population with thousands separators: `1439323776` -> `"1,439,323,776"`.
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Short population label for card badges: `"1.44B"`, `"331M"`, `"17.0M"`.
#[allow(clippy::cast_precision_loss)]
pub fn compact_population(population: u64) -> String {
    const BILLION: f64 = 1_000_000_000.0;
    const MILLION: f64 = 1_000_000.0;

    let p = population as f64;
    if p >= BILLION {
        format!("{:.2}B", p / BILLION)
    } else if p >= 100.0 * MILLION {
        format!("{:.0}M", p / MILLION)
    } else if p >= MILLION {
        format!("{:.1}M", p / MILLION)
    } else {
        format_population(population)
    }
}

/// Smart truncate a file path for the status line
///
/// Keeps the filename and its parent directory for context.
/// Example: "/very/long/path/to/data/2020/countries.json"
///       -> ".../2020/countries.json"
pub fn truncate_path_smart(path: &str, max_len: usize) -> String {
    if path.len() <= max_len {
        return path.to_string();
    }

    let path_obj = Path::new(path);

    let filename = path_obj
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or("file");

    if let Some(parent) = path_obj.parent()
        && let Some(parent_name) = parent.file_name().and_then(|f| f.to_str())
    {
        let short = format!(".../{parent_name}/{filename}");
        if short.len() <= max_len {
            return short;
        }
    }

    format!(".../{filename}")
}
