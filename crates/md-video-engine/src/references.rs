use std::collections::HashMap;

use pulldown_cmark::Parser;

/// A link reference definition: `[name]: href "title"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReference {
    pub href: String,
    pub title: Option<String>,
}

/// Read-only lookup of reference names owned by the host document.
pub trait ReferenceRegistry {
    fn resolve(&self, name: &str) -> Option<&LinkReference>;
}

/// Reference definitions keyed by normalized label.
///
/// Labels compare case-insensitively with internal whitespace collapsed,
/// following CommonMark label matching.
#[derive(Debug, Clone, Default)]
pub struct ReferenceMap {
    entries: HashMap<String, LinkReference>,
}

impl ReferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects every reference definition in `markdown`.
    pub fn from_markdown(markdown: &str) -> Self {
        let parser = Parser::new(markdown);
        Self::from_parser(&parser)
    }

    /// Collects the definitions pulldown-cmark found during its first pass.
    pub fn from_parser(parser: &Parser<'_>) -> Self {
        let mut map = Self::new();
        for (label, def) in parser.reference_definitions().iter() {
            map.insert(
                label,
                LinkReference {
                    href: def.dest.to_string(),
                    title: def.title.as_ref().map(|t| t.to_string()),
                },
            );
        }
        map
    }

    pub fn insert(&mut self, label: &str, reference: LinkReference) {
        self.entries.insert(normalize_label(label), reference);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ReferenceRegistry for ReferenceMap {
    fn resolve(&self, name: &str) -> Option<&LinkReference> {
        let key = normalize_label(name);
        if key.is_empty() {
            return None;
        }
        self.entries.get(&key)
    }
}

impl ReferenceRegistry for HashMap<String, LinkReference> {
    fn resolve(&self, name: &str) -> Option<&LinkReference> {
        if name.is_empty() {
            return None;
        }
        self.get(name)
    }
}

fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
