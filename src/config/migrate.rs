use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every config file is expected to carry, with the value written when
/// a key is missing. `database` has no sensible default here and must be
/// present already.
fn expected_keys() -> Vec<(&'static str, Value)> {
    vec![
        ("output_dir", Value::String(super::default_output_dir())),
        ("lookup", Value::String("any".to_string())),
        ("report_title", Value::String(super::default_report_title())),
        ("report_show_course", Value::Bool(true)),
        ("report_show_date", Value::Bool(true)),
        (
            "token_scale",
            Value::Number(super::default_token_scale().into()),
        ),
    ]
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Return the names of the expected keys missing from the config file.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let map = read_mapping(path)?;

    let mut missing = Vec::new();
    if !map.contains_key("database") {
        missing.push("database".to_string());
    }

    for (key, _) in expected_keys() {
        if !map.contains_key(key) {
            missing.push(key.to_string());
        }
    }

    Ok(missing)
}

/// Add every missing key with its default value and rewrite the file.
/// Returns the keys that were added; an up-to-date file is left untouched.
pub fn migrate_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let mut map = read_mapping(path)?;

    if !map.contains_key("database") {
        return Err(AppError::Config(format!(
            "'database' is missing from {}, run `rattendance init` first",
            path.display()
        )));
    }

    let mut added = Vec::new();
    for (key, default) in expected_keys() {
        if !map.contains_key(key) {
            map.insert(Value::String(key.to_string()), default);
            added.push(key.to_string());
        }
    }

    if added.is_empty() {
        info("Configuration is up to date.");
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(map))?;

    // Document the lookup options right after the `lookup` line
    let mut new_content = String::new();
    for line in serialized.lines() {
        new_content.push_str(line);
        new_content.push('\n');

        if line.starts_with("lookup:") && added.iter().any(|k| k == "lookup") {
            new_content.push_str(
                "# lookup parameter options:\n\
                 #   id      → match the student id only\n\
                 #   pass_id → match the pass id only\n\
                 #   any     → student id first, then pass id\n",
            );
        }
    }

    fs::write(path, new_content)?;

    success(format!(
        "Configuration migrated, added: {}",
        added.join(", ")
    ));

    Ok(added)
}
