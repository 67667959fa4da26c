//! Human-readable byte counts.

const UNIT: u64 = 1024;
const PREFIXES: &[u8; 6] = b"KMGTPE";

/// Format a byte count using binary (1024-based) units.
///
/// Counts below one kibibyte are printed as whole bytes (`"512 B"`), larger
/// counts with two decimals (`"1.50 KB"`, `"4.00 GB"`). Zero is the catalog's
/// encoding for "no file on disk" and is rendered as `"N/A"`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "N/A".to_string();
    }
    if bytes < UNIT {
        return format!("{} B", bytes);
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!(
        "{:.2} {}B",
        bytes as f64 / div as f64,
        PREFIXES[exp] as char
    )
}
