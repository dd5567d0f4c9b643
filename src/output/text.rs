use std::fmt::Write;

use crate::error::Result;
use crate::inspector::FileInfo;

use super::ReportFormatter;

pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, info: &FileInfo) -> Result<String> {
        let language = if info.language.is_empty() {
            "unknown"
        } else {
            &info.language
        };

        let mut out = String::new();
        let _ = writeln!(out, "{} ({language})", info.name);
        let _ = writeln!(out, "  size:    {} bytes", info.size);
        let _ = writeln!(out, "  total:   {}", info.lines.total);
        let _ = writeln!(out, "  code:    {}", info.lines.code);
        let _ = writeln!(out, "  comment: {}", info.lines.comment);

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
