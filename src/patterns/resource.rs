use std::path::Path;

use regex::Regex;

use crate::errors::{FPrinterError, Result};

pub const DEFAULT_RESOURCE_NAME: &str = "SMARTS_InteLigand.txt";

/// Functional group keys shipped with the crate.
pub const DEFAULT_RESOURCE: &str = include_str!("../../resources/SMARTS_InteLigand.txt");

lazy_static::lazy_static! {
    static ref RESOURCE_LINE_RE: Regex = Regex::new(r"^\S+\s+(?P<smarts>\S.*)$").unwrap();
    pub static ref DEFAULT_SMARTS_KEYS: Vec<String> = parse_resource_text(DEFAULT_RESOURCE);
}

pub fn is_ignored_line(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Returns the SMARTS part of a resource line, dropping the leading label token.
pub fn parse_resource_line(line: &str) -> Option<&str> {
    if is_ignored_line(line) {
        return None;
    }

    RESOURCE_LINE_RE
        .captures(line.trim())
        .and_then(|captures| captures.name("smarts"))
        .map(|smarts| smarts.as_str())
}

pub fn parse_resource_text(text: &str) -> Vec<String> {
    let mut smarts_keys = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        if is_ignored_line(line) {
            continue;
        }

        match parse_resource_line(line) {
            Some(smarts) => smarts_keys.push(smarts.to_string()),
            None => log::warn!(
                "line {} has a label but no SMARTS, skipping: {:?}",
                line_no + 1,
                line
            ),
        }
    }

    smarts_keys
}

pub fn read_resource_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| FPrinterError::ResourceLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let smarts_keys = parse_resource_text(&text);
    log::debug!("read {} SMARTS keys from {:?}", smarts_keys.len(), path);

    Ok(smarts_keys)
}

/// Checks that an untyped key list is a JSON array of strings.
pub fn smarts_keys_from_json(value: &serde_json::Value) -> Result<Vec<String>> {
    let items = value.as_array().ok_or_else(|| {
        FPrinterError::Validation(format!("expected a list of SMARTS strings, found {value}"))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            item.as_str().map(|s| s.to_string()).ok_or_else(|| {
                FPrinterError::Validation(format!("entry {idx} is not a string: {item}"))
            })
        })
        .collect()
}

pub fn read_smarts_json_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| FPrinterError::ResourceLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| FPrinterError::Validation(e.to_string()))?;

    smarts_keys_from_json(&value)
}
