/// Format a byte count as kilobytes with two decimals (`bytes / 1024`).
///
/// Always kilobytes, never scaled to MB: 1536000 bytes is "1500.00 KB".
pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}
