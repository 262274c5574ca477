//! Resolved style values of the active theme.
//!
//! A theme ships its values as CSS-like text:
//!
//! ```text
//! :root {
//!     --editor-background: #040410;
//!     --use-color-formula: true;
//!     --pitch-primary-note-hue-scale: 6.1;
//! }
//! ```
//!
//! [`StyleContext::parse`] keeps the custom properties declared in `:root`
//! blocks. Lookups never fail: an undefined variable reads as an empty string
//! (or `0.0` through [`StyleContext::number`]) so a broken theme still renders.

use crate::ui_color::UiColor;
use std::collections::BTreeMap;

/// Nesting limit when following `var()` chains; deeper chains are treated as cycles.
const MAX_REFERENCE_DEPTH: usize = 16;

const ROOT_SELECTOR: &str = ":root";

/// Name → value table for the currently active theme.
///
/// Built once per theme activation and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleContext {
    variables: BTreeMap<String, String>,
}

impl StyleContext {
    /// Parse theme style text into a context
    pub fn parse(style: &str) -> Self {
        let mut variables = BTreeMap::new();
        let source = strip_comments(style);

        let mut buffer = String::new();
        let mut selector: Option<String> = None;

        for ch in source.chars() {
            match (ch, selector.is_some()) {
                ('{', false) => {
                    selector = Some(buffer.trim().to_string());
                    buffer.clear();
                }
                ('}', true) => {
                    if selector.as_deref().is_some_and(is_root_selector) {
                        collect_declarations(&buffer, &mut variables);
                    }
                    selector = None;
                    buffer.clear();
                }
                // Bare declarations outside any block apply to the root
                (';', false) => {
                    collect_declarations(&buffer, &mut variables);
                    buffer.clear();
                }
                _ => buffer.push(ch),
            }
        }

        match selector {
            Some(open) => {
                log::warn!("Style text ends inside an unterminated '{open}' block");
                if is_root_selector(&open) {
                    collect_declarations(&buffer, &mut variables);
                }
            }
            None => collect_declarations(&buffer, &mut variables),
        }

        Self { variables }
    }

    /// Build a context directly from name/value pairs. Names may carry the `--` prefix.
    pub fn from_variables<I, K, V>(variables: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self {
            variables: variables
                .into_iter()
                .map(|(k, v)| {
                    (
                        normalize_name(k.as_ref()).to_string(),
                        v.as_ref().trim().to_string(),
                    )
                })
                .collect(),
        }
    }

    /// Raw value of a variable, or an empty string when it is not defined
    pub fn variable(&self, name: &str) -> &str {
        self.variables
            .get(normalize_name(name))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(normalize_name(name))
    }

    /// Final value of a color expression.
    ///
    /// `var(--name)` is unwrapped one level and looked up, as is a bare
    /// `--name`. Values that are themselves references are followed until a
    /// literal is reached. Anything else is already final and comes back
    /// unchanged.
    pub fn computed(&self, expr: &str) -> String {
        let expr = expr.trim();
        if let Some(reference) = VarReference::parse(expr) {
            self.resolve_reference(&reference, 0)
        } else if expr.starts_with("--") {
            self.resolve_name(expr, 0)
        } else {
            expr.to_string()
        }
    }

    /// Numeric value of a variable. Missing or unparsable values read as `0.0`.
    pub fn number(&self, name: &str) -> f64 {
        let resolved = self.resolve_name(name, 0);
        let raw = resolved.trim();
        if raw.is_empty() {
            log::debug!("Style variable '{}' is not defined, using 0", normalize_name(name));
            return 0.0;
        }

        match raw.parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                log::warn!(
                    "Style variable '{}' is not numeric ('{raw}'), using 0",
                    normalize_name(name)
                );
                0.0
            }
        }
    }

    /// Computed value of one of the theme's literal UI colors
    pub fn ui_color(&self, color: UiColor) -> String {
        self.resolve_name(color.name(), 0)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Variables in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn resolve_name(&self, name: &str, depth: usize) -> String {
        let value = self.variable(name);
        match VarReference::parse(value) {
            Some(reference) if depth < MAX_REFERENCE_DEPTH => {
                self.resolve_reference(&reference, depth + 1)
            }
            Some(_) => {
                log::warn!(
                    "Style variable '{}' references too deeply, treating as undefined",
                    normalize_name(name)
                );
                String::new()
            }
            None => value.to_string(),
        }
    }

    fn resolve_reference(&self, reference: &VarReference<'_>, depth: usize) -> String {
        if self.contains(reference.name) {
            return self.resolve_name(reference.name, depth);
        }

        match reference.fallback {
            Some(fallback) => match VarReference::parse(fallback) {
                Some(nested) if depth < MAX_REFERENCE_DEPTH => {
                    self.resolve_reference(&nested, depth + 1)
                }
                Some(_) => String::new(),
                None => fallback.to_string(),
            },
            None => String::new(),
        }
    }
}

/// A `var(--name)` or `var(--name, fallback)` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarReference<'a> {
    pub name: &'a str,
    pub fallback: Option<&'a str>,
}

impl<'a> VarReference<'a> {
    /// Parse a whole expression as a single reference.
    ///
    /// Returns `None` for literals and for anything that is not exactly one
    /// well-formed reference.
    pub fn parse(expr: &'a str) -> Option<Self> {
        let inner = expr.trim().strip_prefix("var(")?.strip_suffix(')')?;
        let (name, fallback) = match inner.split_once(',') {
            Some((name, fallback)) => (name.trim(), Some(fallback.trim())),
            None => (inner.trim(), None),
        };

        let ident = name.strip_prefix("--")?;
        if ident.is_empty()
            || !ident
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }

        Some(Self {
            name: ident,
            fallback,
        })
    }
}

fn normalize_name(name: &str) -> &str {
    let name = name.trim();
    name.strip_prefix("--").unwrap_or(name)
}

fn is_root_selector(selector: &str) -> bool {
    selector.split(',').any(|s| s.trim() == ROOT_SELECTOR)
}

fn collect_declarations(block: &str, variables: &mut BTreeMap<String, String>) {
    for declaration in block.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let Some(name) = property.trim().strip_prefix("--") else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        variables.insert(name.to_string(), value.trim().to_string());
    }
}

fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => {
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
