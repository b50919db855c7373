//! Parsing of free-form `KEY=VALUE` provider settings

use crate::error::{ProvisionError, Result};
use std::collections::HashMap;

/// Split a single `KEY=VALUE` entry on its first `=`
///
/// The value may itself contain `=` characters. Either side may be empty.
pub fn split_entry(entry: &str) -> Result<(&str, &str)> {
    entry
        .split_once('=')
        .ok_or_else(|| ProvisionError::invalid_extra(entry))
}

/// Parse a list of `KEY=VALUE` entries into a map
///
/// The first malformed entry aborts parsing. When a key repeats, the last
/// entry wins.
pub fn parse_extra<S: AsRef<str>>(entries: &[S]) -> Result<HashMap<String, String>> {
    let mut configurations = HashMap::with_capacity(entries.len());

    for entry in entries {
        let (key, value) = split_entry(entry.as_ref())?;
        configurations.insert(key.to_string(), value.to_string());
    }

    Ok(configurations)
}
