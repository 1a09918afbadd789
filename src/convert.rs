//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{bail, Result};

use lunara_shipping::{default_harbors, Harbor};

use crate::config::HarborToml;

/// Which export artifacts to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Both,
}

impl ExportFormat {
    pub fn writes_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }

    pub fn writes_csv(self) -> bool {
        matches!(self, Self::Csv | Self::Both)
    }
}

/// Parses an export format name into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<ExportFormat> {
    match s.to_lowercase().as_str() {
        "json" => Ok(ExportFormat::Json),
        "csv" => Ok(ExportFormat::Csv),
        "both" => Ok(ExportFormat::Both),
        other => bail!("unknown export format: {other:?} (expected json, csv, or both)"),
    }
}

/// Builds the harbor roster from config, falling back to the built-in
/// roster when none is configured.
pub fn build_harbors(toml_harbors: &[HarborToml]) -> Vec<Harbor> {
    if toml_harbors.is_empty() {
        return default_harbors();
    }
    toml_harbors
        .iter()
        .map(|h| Harbor {
            id: h.id.clone(),
            name: h.name.clone(),
            tide_offset: h.tide_offset,
            note: h.note.clone(),
        })
        .collect()
}

/// Looks up a harbor by id.
pub fn find_harbor<'a>(harbors: &'a [Harbor], id: &str) -> Result<&'a Harbor> {
    harbors.iter().find(|h| h.id == id).ok_or_else(|| {
        let available: Vec<&str> = harbors.iter().map(|h| h.id.as_str()).collect();
        anyhow::anyhow!("unknown harbor {id:?} (available: {available:?})")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_parse_case_insensitively() {
        assert_eq!(parse_format("JSON").unwrap(), ExportFormat::Json);
        assert_eq!(parse_format("csv").unwrap(), ExportFormat::Csv);
        assert_eq!(parse_format("Both").unwrap(), ExportFormat::Both);
        assert!(parse_format("xml").is_err());
    }

    #[test]
    fn empty_config_uses_builtin_roster() {
        let harbors = build_harbors(&[]);
        assert!(find_harbor(&harbors, "strait-city").is_ok());
        assert!(find_harbor(&harbors, "nowhere").is_err());
    }
}
