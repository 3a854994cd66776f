//! Individual consistency rules over the raw bundles document
//!
//! Every rule is a pure function returning the problems it found, so each
//! one can be exercised on its own.

use std::collections::HashSet;

use serde_yaml::{Mapping, Value};

/// Example template entry that is always available without being declared
pub const CORE_TEMPLATE: &str = "core";

/// Top-level keys every document must carry, in reporting order
pub const REQUIRED_FIELDS: [&str; 2] = ["version", "bundles"];

/// Render a YAML scalar the way it appears in messages
pub fn label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Tagged(tagged) => label(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => serde_yaml::to_string(value)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Names of all declared bundles
pub fn bundle_names(bundles: &Mapping) -> HashSet<String> {
    bundles.keys().map(label).collect()
}

/// Check that the required top-level fields are present
pub fn validate_top_level(document: &Value) -> Vec<String> {
    REQUIRED_FIELDS
        .iter()
        .filter(|field| document.get(**field).is_none())
        .map(|field| format!("Missing required field: {field}"))
        .collect()
}

/// Check one bundle's shape and that its dependencies exist
pub fn validate_bundle(name: &str, config: &Value, known_names: &HashSet<String>) -> Vec<String> {
    let Some(config) = config.as_mapping() else {
        return vec![format!("Bundle '{name}' must be a dictionary")];
    };

    let mut errors = Vec::new();

    if !config.contains_key("description") {
        errors.push(format!("Bundle '{name}' missing 'description'"));
    }

    match config.get("files") {
        None => errors.push(format!("Bundle '{name}' missing 'files'")),
        Some(files) if !files.is_sequence() => {
            errors.push(format!("Bundle '{name}' 'files' must be a list"));
        }
        Some(_) => {}
    }

    errors.extend(validate_references(name, config, "requires", known_names));
    errors.extend(validate_references(name, config, "recommends", known_names));

    errors
}

fn validate_references(
    name: &str,
    config: &Mapping,
    key: &str,
    known_names: &HashSet<String>,
) -> Vec<String> {
    let Some(value) = config.get(key) else {
        return Vec::new();
    };
    let Some(entries) = value.as_sequence() else {
        return vec![format!("Bundle '{name}' '{key}' must be a list")];
    };

    entries
        .iter()
        .map(label)
        .filter(|dependency| !known_names.contains(dependency))
        .map(|dependency| format!("Bundle '{name}' {key} non-existent bundle '{dependency}'"))
        .collect()
}

/// Check that example selections only name declared bundles
pub fn validate_examples(examples: &Value, known_names: &HashSet<String>) -> Vec<String> {
    let Some(examples) = examples.as_mapping() else {
        return vec!["'examples' must be a dictionary".to_string()];
    };

    let mut errors = Vec::new();

    for (example_name, example_config) in examples {
        let example_name = label(example_name);
        let Some(example_config) = example_config.as_mapping() else {
            errors.push(format!("Example '{example_name}' must be a dictionary"));
            continue;
        };
        let Some(templates) = example_config.get("templates") else {
            continue;
        };
        let Some(templates) = templates.as_sequence() else {
            errors.push(format!("Example '{example_name}' 'templates' must be a list"));
            continue;
        };

        errors.extend(
            templates
                .iter()
                .map(label)
                .filter(|template| template != CORE_TEMPLATE && !known_names.contains(template))
                .map(|template| {
                    format!("Example '{example_name}' references non-existent bundle '{template}'")
                }),
        );
    }

    errors
}

/// Check declared counts against the actual bundles
pub fn validate_metadata(metadata: &Value, bundles: &Mapping) -> Vec<String> {
    let Some(metadata) = metadata.as_mapping() else {
        return vec!["'metadata' must be a dictionary".to_string()];
    };

    let Some(declared) = metadata.get("total_bundles") else {
        return Vec::new();
    };

    let actual = bundles.len();
    if equals_count(declared, actual) {
        return Vec::new();
    }

    vec![format!(
        "Metadata 'total_bundles' ({}) doesn't match actual bundle count ({actual})",
        label(declared)
    )]
}

/// Numeric equality with a count; `2` and `2.0` both match 2
fn equals_count(value: &Value, count: usize) -> bool {
    if let Some(number) = value.as_u64() {
        return u64::try_from(count).is_ok_and(|count| count == number);
    }
    value.as_f64().is_some_and(|number| {
        u32::try_from(count).is_ok_and(|count| (number - f64::from(count)).abs() < f64::EPSILON)
    })
}
