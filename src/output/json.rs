use crate::error::Result;
use crate::inspector::FileInfo;

use super::ReportFormatter;

pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, info: &FileInfo) -> Result<String> {
        Ok(serde_json::to_string_pretty(info)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
