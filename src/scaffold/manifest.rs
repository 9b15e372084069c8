//! Mod metadata and manifest placeholder filling

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, ShapezModError};

#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bmod_(id|name|description|version|author|website)\b").expect("valid regex")
});

/// Metadata written into a new mod package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModMetadata {
    pub id: String,
    pub name: String,
    pub description: String,
    pub version: String,
    pub author: String,
    pub website: String,
}

impl Default for ModMetadata {
    fn default() -> Self {
        Self {
            id: "mod".to_string(),
            name: "shapezio-mod".to_string(),
            description: String::new(),
            version: "1.0.0".to_string(),
            author: String::new(),
            website: String::new(),
        }
    }
}

impl ModMetadata {
    /// Check the id can name a directory and a mod
    pub fn validate(&self) -> Result<()> {
        validate_mod_id(&self.id)
    }

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(&self.id),
            "name" => Some(&self.name),
            "description" => Some(&self.description),
            "version" => Some(&self.version),
            "author" => Some(&self.author),
            "website" => Some(&self.website),
            _ => None,
        }
    }
}

pub fn validate_mod_id(id: &str) -> Result<()> {
    let invalid = |reason: String| ShapezModError::InvalidModId {
        id: id.to_string(),
        reason,
    };

    if id.is_empty() {
        return Err(invalid("must not be empty".to_string()));
    }
    if let Some(ch) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(invalid(format!("contains '{ch}'")));
    }

    Ok(())
}

/// Escape `value` for use inside a double-quoted JSON string
fn json_string_body(value: &str) -> String {
    let quoted = serde_json::Value::String(value.to_string()).to_string();
    quoted[1..quoted.len() - 1].to_string()
}

/// Replace every `mod_<field>` placeholder in one pass
///
/// Values are escaped, so one containing a placeholder name or a quote is
/// inserted literally.
pub fn fill_placeholders(text: &str, metadata: &ModMetadata) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let key = caps.get(1).map_or("", |m| m.as_str());
            match metadata.field(key) {
                Some(value) => json_string_body(value),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Fill the placeholders of a file in place
pub fn fill_file(path: &Path, metadata: &ModMetadata) -> Result<()> {
    if !path.is_file() {
        return Err(ShapezModError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let text = fs::read_to_string(path).map_err(|e| ShapezModError::read_failed(path, e))?;
    let filled = fill_placeholders(&text, metadata);
    fs::write(path, filled).map_err(|e| ShapezModError::write_failed(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> ModMetadata {
        ModMetadata {
            id: "flipper".to_string(),
            name: "Flipper".to_string(),
            description: "Adds a \"flipper\" building".to_string(),
            version: "0.2.0".to_string(),
            author: "someone".to_string(),
            website: "https://example.com".to_string(),
        }
    }

    #[test]
    fn test_defaults() {
        let meta = ModMetadata::default();
        assert_eq!(meta.id, "mod");
        assert_eq!(meta.name, "shapezio-mod");
        assert_eq!(meta.version, "1.0.0");
        assert!(meta.validate().is_ok());
    }

    #[test]
    fn test_validate_mod_id() {
        assert!(validate_mod_id("my-mod_2").is_ok());
        assert!(matches!(
            validate_mod_id(""),
            Err(ShapezModError::InvalidModId { .. })
        ));
        let err = validate_mod_id("my mod").unwrap_err();
        assert!(err.to_string().contains("my mod"));
        assert!(validate_mod_id("../escape").is_err());
    }

    #[test]
    fn test_fill_placeholders_produces_valid_json() {
        let template = r#"{ "id": "mod_id", "name": "mod_name", "description": "mod_description" }"#;
        let filled = fill_placeholders(template, &metadata());

        let parsed: serde_json::Value = serde_json::from_str(&filled).unwrap();
        assert_eq!(parsed["id"], "flipper");
        assert_eq!(parsed["description"], "Adds a \"flipper\" building");
    }

    #[test]
    fn test_fill_is_single_pass() {
        let meta = ModMetadata {
            name: "mod_id".to_string(),
            ..metadata()
        };
        let filled = fill_placeholders(r#""mod_name""#, &meta);
        assert_eq!(filled, r#""mod_id""#);
    }

    #[test]
    fn test_fill_leaves_other_words() {
        let filled = fill_placeholders("modLoader shapez/mods/mod mod_idea", &metadata());
        assert_eq!(filled, "modLoader shapez/mods/mod mod_idea");
    }
}
