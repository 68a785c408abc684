//! Display formatting for the messaging views

use std::path::Path;

use chrono::{Local, TimeZone};

/// Epoch seconds as local `HH:MM`; empty for an out-of-range timestamp
pub fn format_clock(epoch_secs: i64) -> String {
    match Local.timestamp_opt(epoch_secs, 0).single() {
        Some(time) => time.format("%H:%M").to_string(),
        None => String::new(),
    }
}

/// Epoch seconds as a local calendar date, used for day separators
pub fn format_day(epoch_secs: i64) -> String {
    match Local.timestamp_opt(epoch_secs, 0).single() {
        Some(time) => time.format("%d %b %Y").to_string(),
        None => String::new(),
    }
}

/// Byte count as kilobytes with one decimal
pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

/// Mimetype from a file extension, for documents picked from disk
pub fn guess_mimetype(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("xls") => "application/vnd.ms-excel",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("ppt") => "application/vnd.ms-powerpoint",
        Some("pptx") => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        Some("txt") => "text/plain",
        Some("csv") => "text/csv",
        Some("zip") => "application/zip",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock_shape() {
        let clock = format_clock(1_718_000_000);
        assert_eq!(clock.len(), 5);
        assert_eq!(clock.as_bytes()[2], b':');
    }

    #[test]
    fn test_format_clock_out_of_range() {
        assert_eq!(format_clock(i64::MAX), "");
    }

    #[test]
    fn test_format_size_kb() {
        assert_eq!(format_size_kb(0), "0.0 KB");
        assert_eq!(format_size_kb(1536), "1.5 KB");
        assert_eq!(format_size_kb(12_595), "12.3 KB");
    }

    #[test]
    fn test_guess_mimetype() {
        assert_eq!(guess_mimetype(Path::new("/tmp/Invoice.PDF")), "application/pdf");
        assert_eq!(guess_mimetype(Path::new("notes.txt")), "text/plain");
        assert_eq!(guess_mimetype(Path::new("archive")), "application/octet-stream");
    }
}
