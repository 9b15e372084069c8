//! Module references found in `import(...)` and `import {...} from` expressions

/// A module path as written in the declarations, plus how it resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleReference {
    pub raw: String,
    pub relative: bool,
    pub resolved: String,
}

impl ModuleReference {
    /// Resolve a dynamic import path
    ///
    /// `enclosing` is the name of the nearest preceding `declare module`
    /// header. Relative paths resolve against its directory, without one
    /// against the namespace root. `..` never climbs out of the namespace.
    pub fn resolve(raw: &str, enclosing: Option<&str>, prefix: &str) -> Self {
        let path = strip_js_suffix(raw);
        let relative = path.starts_with('.');

        let resolved = if relative {
            let base = enclosing.map_or("", |m| dirname(strip_namespace(m, prefix)));
            let joined = join_module_path(base, path);
            if joined.is_empty() {
                prefix.to_string()
            } else {
                format!("{prefix}/{joined}")
            }
        } else {
            namespaced(path, prefix)
        };

        Self {
            raw: raw.to_string(),
            relative,
            resolved,
        }
    }

    /// Resolve a static named-import path
    ///
    /// Parent segments are dropped rather than resolved, so
    /// `../core/signal.js` becomes `<prefix>/core/signal`.
    pub fn resolve_static(raw: &str, prefix: &str) -> Self {
        let relative = raw.starts_with('.');
        let mut path = strip_js_suffix(raw).replace("../", "");
        while let Some(rest) = path.strip_prefix("./") {
            path = rest.to_string();
        }

        Self {
            raw: raw.to_string(),
            relative,
            resolved: namespaced(&path, prefix),
        }
    }
}

/// Prefix a module name with the namespace unless it already carries it
pub fn namespaced(module: &str, prefix: &str) -> String {
    if is_namespaced(module, prefix) {
        module.to_string()
    } else {
        format!("{prefix}/{module}")
    }
}

pub fn is_namespaced(module: &str, prefix: &str) -> bool {
    module
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('/'))
}

fn strip_js_suffix(path: &str) -> &str {
    path.strip_suffix(".js").unwrap_or(path)
}

fn strip_namespace<'a>(module: &'a str, prefix: &str) -> &'a str {
    module
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(module)
}

fn dirname(module: &str) -> &str {
    match module.rfind('/') {
        Some(idx) => &module[..idx],
        None => "",
    }
}

/// Join `rel` onto `base` segment-wise, normalising `.` and `..`
///
/// `..` at the root is dropped, so the result never starts with `..`.
fn join_module_path(base: &str, rel: &str) -> String {
    let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();
    let rel = rel.replace('\\', "/");

    for segment in rel.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    segments.join("/")
}
