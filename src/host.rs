//! Patches applied to the checked-out host game build
//!
//! They make the host build without optional native dependencies, load the
//! mod from the local dev server and stop asking git for a revision.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use tracing::debug;

use crate::config::{DEV_SERVER_MOD_URL, to_pretty_json};
use crate::error::{Result, ShapezModError};

#[allow(clippy::expect_used)]
static EXTERNAL_MOD_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?://)?\s*externalModUrl:.*?,").expect("valid regex")
});

#[allow(clippy::expect_used)]
static GET_REVISION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)getRevision.*?\},").expect("valid regex"));

const ELECTRON_PACKAGE: &str = "electron/package.json";
const LOCAL_CONFIG_TEMPLATE: &str = "src/js/core/config.local.template.js";
const LOCAL_CONFIG: &str = "src/js/core/config.local.js";
const BUILD_UTILS: &str = "gulp/buildutils.js";

fn read_required(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(ShapezModError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    fs::read_to_string(path).map_err(|e| ShapezModError::read_failed(path, e))
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| ShapezModError::write_failed(path, e))
}

/// Empty `optionalDependencies` in the electron package manifest
pub fn patch_electron_package(host_dir: &Path) -> Result<PathBuf> {
    let path = host_dir.join(ELECTRON_PACKAGE);
    let content = read_required(&path)?;

    let mut package: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| ShapezModError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    let Some(object) = package.as_object_mut() else {
        return Err(ShapezModError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: "expected a JSON object".to_string(),
        });
    };
    object.insert(
        "optionalDependencies".to_string(),
        serde_json::Value::Object(serde_json::Map::new()),
    );

    write(&path, &to_pretty_json(&package)?)?;
    Ok(path)
}

/// Write `config.local.js` pointing `externalModUrl` at the dev server
pub fn patch_local_config(host_dir: &Path) -> Result<PathBuf> {
    let template = host_dir.join(LOCAL_CONFIG_TEMPLATE);
    let content = read_required(&template)?;

    let replacement = format!("\nexternalModUrl: \"{DEV_SERVER_MOD_URL}\",");
    let patched = EXTERNAL_MOD_URL.replace_all(&content, NoExpand(&replacement));
    debug!(
        count = EXTERNAL_MOD_URL.find_iter(&content).count(),
        "rewrote externalModUrl"
    );

    let path = host_dir.join(LOCAL_CONFIG);
    write(&path, &patched)?;
    Ok(path)
}

/// Replace `getRevision` in the gulp build helpers with a constant
pub fn patch_build_utils(host_dir: &Path) -> Result<PathBuf> {
    let path = host_dir.join(BUILD_UTILS);
    let content = read_required(&path)?;

    let patched = GET_REVISION.replace_all(&content, NoExpand(r#"getRevision: () => "","#));
    write(&path, &patched)?;
    Ok(path)
}

/// Apply every host patch, stopping at the first failure
pub fn patch_host(host_dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(vec![
        patch_electron_package(host_dir)?,
        patch_local_config(host_dir)?,
        patch_build_utils(host_dir)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn host_with(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (path, contents) in files {
            let full = temp.path().join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, contents).unwrap();
        }
        temp
    }

    #[test]
    fn test_electron_package_keeps_other_keys_in_order() {
        let host = host_with(&[(
            ELECTRON_PACKAGE,
            r#"{"name": "electron", "optionalDependencies": {"steamworks": "1.0"}, "main": "index.js"}"#,
        )]);

        patch_electron_package(host.path()).unwrap();

        let patched = fs::read_to_string(host.path().join(ELECTRON_PACKAGE)).unwrap();
        let name = patched.find("\"name\"").unwrap();
        let optional = patched.find("\"optionalDependencies\"").unwrap();
        let main = patched.find("\"main\"").unwrap();
        assert!(name < optional && optional < main);
        assert!(patched.contains("\n    \"name\""));

        let value: serde_json::Value = serde_json::from_str(&patched).unwrap();
        assert_eq!(value["optionalDependencies"], serde_json::json!({}));
    }

    #[test]
    fn test_local_config_points_at_dev_server() {
        let host = host_with(&[(
            LOCAL_CONFIG_TEMPLATE,
            "export default {\n    // externalModUrl: \"http://example.com/mod.js\",\n    fastGameEnter: true,\n};\n",
        )]);

        let path = patch_local_config(host.path()).unwrap();
        assert!(path.ends_with("config.local.js"));

        let patched = fs::read_to_string(path).unwrap();
        assert!(patched.contains("externalModUrl: \"http://localhost:3010/mod/mod.js\","));
        assert!(!patched.contains("// externalModUrl"));
        assert!(!patched.contains("example.com"));
        assert!(patched.contains("fastGameEnter: true"));
    }

    #[test]
    fn test_build_utils_revision_constant() {
        let host = host_with(&[(
            BUILD_UTILS,
            "module.exports = {\n    getRevision: function (useLast = false) {\n        return execSync(\"git rev-parse HEAD\");\n    },\n    getVersion() {},\n};\n",
        )]);

        patch_build_utils(host.path()).unwrap();

        let patched = fs::read_to_string(host.path().join(BUILD_UTILS)).unwrap();
        assert!(patched.contains("getRevision: () => \"\","));
        assert!(!patched.contains("rev-parse"));
        assert!(patched.contains("getVersion() {}"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let host = host_with(&[]);
        let result = patch_host(host.path());
        assert!(matches!(result, Err(ShapezModError::FileNotFound { .. })));
    }
}
