//! Abstract class detection and propagation
//!
//! The host game's classes are plain JavaScript, so the compiler never emits
//! `abstract`. Methods documented `@abstract` are marked abstract, classes
//! carrying such members become abstract, and concrete subclasses extend
//! them through the `NonAbstract(...)` helper so they stay constructible at
//! the type level.
//!
//! Matching is by class name only. Two classes with the same name in
//! different modules are not told apart.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::replace_with;

#[allow(clippy::expect_used)]
static ABSTRACT_DOC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\* @abstract\s+\*/\s*").expect("valid regex"));

#[allow(clippy::expect_used)]
static CLASS_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclass (\w+)").expect("valid regex"));

#[allow(clippy::expect_used)]
static CLASS_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclass\b").expect("valid regex"));

#[allow(clippy::expect_used)]
static EXTENDS_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bclass (\w+) extends (\w+)\b").expect("valid regex")
});

const ABSTRACT_KEYWORD: &str = "abstract ";

/// A class declaration as seen by the heuristic
#[derive(Debug, Clone, Copy)]
pub struct ClassDecl<'a> {
    pub name: &'a str,
    /// Byte offset of the `class` keyword
    pub offset: usize,
    /// Text from the class name up to the next `class` keyword or a
    /// newline followed by `}`
    pub body: &'a str,
    /// Whether the declaration already reads `abstract class`
    pub declared_abstract: bool,
}

/// Decides which classes are abstract
pub trait AbstractHeuristic {
    fn is_abstract(&self, class: &ClassDecl<'_>) -> bool;
}

/// Treats a class as abstract when its body mentions `abstract`
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyMarker;

impl AbstractHeuristic for BodyMarker {
    fn is_abstract(&self, class: &ClassDecl<'_>) -> bool {
        class.declared_abstract || class.body.contains("abstract")
    }
}

/// Outcome of abstract propagation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbstractReport {
    /// Methods newly marked abstract from their doc comment
    pub methods_marked: usize,
    /// Detected abstract classes, in declaration order
    pub classes: Vec<String>,
    /// Subclasses rerouted through `NonAbstract(...)`
    pub wrapped_subclasses: Vec<String>,
}

/// Run the full abstract pass over the declarations
pub fn propagate_abstract(text: &str, heuristic: &dyn AbstractHeuristic) -> (String, AbstractReport) {
    let mut report = AbstractReport::default();

    let (text, methods_marked) = mark_abstract_methods(text);
    report.methods_marked = methods_marked;

    let (text, classes) = mark_abstract_classes(&text, heuristic);
    let (text, wrapped) = wrap_subclasses(&text, &classes);
    report.classes = classes;
    report.wrapped_subclasses = wrapped;

    // Statics cannot be abstract in a declaration file
    let text = text.replace("abstract static", "static");

    (text, report)
}

/// Prefix members documented `@abstract` with the `abstract` keyword
pub fn mark_abstract_methods(text: &str) -> (String, usize) {
    replace_with(&ABSTRACT_DOC, text, |caps| {
        let m = caps.get(0)?;
        if text[m.end()..].starts_with(ABSTRACT_KEYWORD) {
            return None;
        }
        Some(format!("{}{ABSTRACT_KEYWORD}", m.as_str()))
    })
}

/// Find every `class Name` header and its body region
pub fn scan_classes(text: &str) -> Vec<ClassDecl<'_>> {
    let mut classes = Vec::new();

    for caps in CLASS_HEADER.captures_iter(text) {
        let (Some(header), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let rest = &text[name.end()..];
        let next_class = CLASS_KEYWORD.find(rest).map_or(rest.len(), |m| m.start());
        let next_close = rest.find("\n}").unwrap_or(rest.len());
        let body = &rest[..next_class.min(next_close)];

        classes.push(ClassDecl {
            name: name.as_str(),
            offset: header.start(),
            body,
            declared_abstract: text[..header.start()].ends_with(ABSTRACT_KEYWORD),
        });
    }

    classes
}

fn mark_abstract_classes(text: &str, heuristic: &dyn AbstractHeuristic) -> (String, Vec<String>) {
    let mut detected: Vec<String> = Vec::new();
    let mut seen = HashSet::new();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for class in scan_classes(text) {
        if !heuristic.is_abstract(&class) {
            continue;
        }

        if seen.insert(class.name.to_string()) {
            detected.push(class.name.to_string());
        }

        if !class.declared_abstract {
            out.push_str(&text[last..class.offset]);
            out.push_str(ABSTRACT_KEYWORD);
            last = class.offset;
        }
    }
    out.push_str(&text[last..]);

    (out, detected)
}

fn wrap_subclasses(text: &str, abstract_classes: &[String]) -> (String, Vec<String>) {
    let names: HashSet<&str> = abstract_classes.iter().map(String::as_str).collect();
    let mut wrapped = Vec::new();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in EXTENDS_CLAUSE.captures_iter(text) {
        let (Some(header), Some(derived), Some(base)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };

        if !names.contains(base.as_str()) || derived.as_str() == base.as_str() {
            continue;
        }
        if text[..header.start()].ends_with(ABSTRACT_KEYWORD) {
            continue;
        }

        out.push_str(&text[last..base.start()]);
        out.push_str("NonAbstract(");
        out.push_str(base.as_str());
        out.push(')');
        last = base.end();
        wrapped.push(derived.as_str().to_string());
    }
    out.push_str(&text[last..]);

    (out, wrapped)
}
