//! Declaration rewriter
//!
//! Turns the compiler's raw ambient declarations into a type surface mod
//! authors can load. The host's modules are all reachable through a single
//! runtime namespace, so every module path is prefixed with it and relative
//! imports are resolved to absolute ones.
//!
//! Passes run in a fixed order; later passes expect the rewrites of earlier
//! ones. A pass whose pattern does not occur leaves the text unchanged.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use super::abstracts::{AbstractHeuristic, BodyMarker, propagate_abstract};
use super::ambient::{append_ambient, extend_global_config};
use super::module_ref::{ModuleReference, namespaced};
use super::replace_with;
use crate::config::NAMESPACE_PREFIX;

#[allow(clippy::expect_used)]
static MODULE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"declare module "([^"]*)""#).expect("valid regex"));

#[allow(clippy::expect_used)]
static DYNAMIC_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"import\("([^"]*)"\)"#).expect("valid regex"));

#[allow(clippy::expect_used)]
static NAMED_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import \{([^}]*)\} from "([^"]*)";"#).expect("valid regex")
});

/// A textual fix for generated syntax the type-checker rejects
struct Fixup {
    name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

#[allow(clippy::expect_used)]
static FIXUPS: LazyLock<Vec<Fixup>> = LazyLock::new(|| {
    [
        (
            "keycode alias",
            r"(\n\s+)import (keyCode[\d_]*) = (\w+);",
            "${1}const ${2}: typeof KEYCODES.${3};",
        ),
        (
            "untyped array index",
            r"\[x: string\]: Array;",
            "[x: string]: Array<any>;",
        ),
        (
            "bare promise",
            r"(\W)Promise([;,>)\]])",
            "${1}Promise<any>${2}",
        ),
        ("default export binding", r"\bvar _default\b", "let _default"),
        (
            "prototype parameter",
            r#"\b(C_?\d*)\["prototype"\],"#,
            "InstanceType<${1}>,",
        ),
        (
            "method return constraint",
            r"\bO(_?\d*) extends \(.*?ReturnType<.*?>",
            "O${1} extends P${1}[M${1}]",
        ),
    ]
    .into_iter()
    .map(|(name, pattern, replacement)| Fixup {
        name,
        pattern: Regex::new(pattern).expect("valid regex"),
        replacement,
    })
    .collect()
});

/// Counts and names gathered while rewriting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    pub modules_namespaced: usize,
    pub dynamic_imports: usize,
    /// Relative imports with no enclosing `declare module` header
    pub unresolved_imports: Vec<String>,
    pub named_imports: usize,
    pub fixups_applied: usize,
    pub abstract_methods: usize,
    pub abstract_classes: Vec<String>,
    pub wrapped_subclasses: Vec<String>,
    pub ambient_appended: bool,
    pub global_config_members: Vec<String>,
}

/// Rewrites raw declarations for a namespace prefix
pub struct DeclarationRewriter {
    prefix: String,
    heuristic: Box<dyn AbstractHeuristic>,
}

impl Default for DeclarationRewriter {
    fn default() -> Self {
        Self::new(NAMESPACE_PREFIX)
    }
}

impl DeclarationRewriter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_heuristic(prefix, BodyMarker)
    }

    /// Rewriter deciding which classes are abstract with `heuristic`
    pub fn with_heuristic(
        prefix: impl Into<String>,
        heuristic: impl AbstractHeuristic + 'static,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            heuristic: Box::new(heuristic),
        }
    }

    /// Run every rewrite pass over `text`
    pub fn rewrite(&self, text: &str) -> (String, RewriteReport) {
        let mut report = RewriteReport::default();

        let (text, count) = self.namespace_modules(text);
        report.modules_namespaced = count;
        debug!(count, "namespaced module headers");

        let (text, count, unresolved) = self.resolve_dynamic_imports(&text);
        report.dynamic_imports = count;
        for module in &unresolved {
            warn!(module = %module, "relative import outside any module declaration");
        }
        report.unresolved_imports = unresolved;

        let (text, count) = self.namespace_named_imports(&text);
        report.named_imports = count;
        debug!(
            dynamic = report.dynamic_imports,
            named = count,
            "rewrote import paths"
        );

        let (text, count) = apply_fixups(&text);
        report.fixups_applied = count;

        let (mut text, abstracts) = propagate_abstract(&text, self.heuristic.as_ref());
        report.abstract_methods = abstracts.methods_marked;
        report.abstract_classes = abstracts.classes;
        report.wrapped_subclasses = abstracts.wrapped_subclasses;
        debug!(
            classes = report.abstract_classes.len(),
            wrapped = report.wrapped_subclasses.len(),
            "propagated abstract classes"
        );

        report.ambient_appended = append_ambient(&mut text, &self.prefix);

        let (text, injected) = extend_global_config(&text);
        if injected.is_empty() {
            debug!("globalConfig namespace not extended");
        }
        report.global_config_members = injected;

        (text, report)
    }

    /// `declare module "X"` -> `declare module "<prefix>/X"`
    pub fn namespace_modules(&self, text: &str) -> (String, usize) {
        replace_with(&MODULE_HEADER, text, |caps| {
            let module = caps.get(1)?.as_str();
            let renamed = namespaced(module, &self.prefix);
            (renamed != module).then(|| format!("declare module \"{renamed}\""))
        })
    }

    /// Resolve `import("X")` against the nearest preceding module header
    pub fn resolve_dynamic_imports(&self, text: &str) -> (String, usize, Vec<String>) {
        let headers: Vec<(usize, &str)> = MODULE_HEADER
            .captures_iter(text)
            .filter_map(|caps| {
                let m = caps.get(0)?;
                Some((m.start(), caps.get(1)?.as_str()))
            })
            .collect();

        let mut unresolved = Vec::new();
        let (out, count) = replace_with(&DYNAMIC_IMPORT, text, |caps| {
            let offset = caps.get(0)?.start();
            let raw = caps.get(1)?.as_str();

            let idx = headers.partition_point(|(start, _)| *start <= offset);
            let enclosing = idx.checked_sub(1).map(|i| headers[i].1);

            let reference = ModuleReference::resolve(raw, enclosing, &self.prefix);
            if reference.relative && enclosing.is_none() {
                unresolved.push(raw.to_string());
            }

            (reference.resolved != raw).then(|| format!("import(\"{}\")", reference.resolved))
        });

        (out, count, unresolved)
    }

    /// `import { A } from "X";` -> `import { A } from "<prefix>/X";`
    pub fn namespace_named_imports(&self, text: &str) -> (String, usize) {
        replace_with(&NAMED_IMPORT, text, |caps| {
            let imports = caps.get(1)?.as_str();
            let raw = caps.get(2)?.as_str();
            let reference = ModuleReference::resolve_static(raw, &self.prefix);

            (reference.resolved != raw)
                .then(|| format!("import {{{imports}}} from \"{}\";", reference.resolved))
        })
    }
}

/// Patch generated constructs the consuming type-checker would reject
pub fn apply_fixups(text: &str) -> (String, usize) {
    let mut text = text.to_string();
    let mut total = 0;

    for fixup in FIXUPS.iter() {
        let count = fixup.pattern.find_iter(&text).count();
        if count == 0 {
            continue;
        }
        text = fixup
            .pattern
            .replace_all(&text, fixup.replacement)
            .into_owned();
        debug!(fixup = fixup.name, count, "applied fixup");
        total += count;
    }

    (text, total)
}
