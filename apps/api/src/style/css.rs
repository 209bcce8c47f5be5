//! Ordered inline CSS declarations.

use std::fmt::Write;

/// A list of `property: value` pairs. Setting an existing property replaces
/// its value in place, so declaration order stays stable across merges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    decls: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    /// Sets the property only when `cond` holds.
    pub fn set_if(self, cond: bool, property: &'static str, value: impl Into<String>) -> Self {
        if cond {
            self.set(property, value)
        } else {
            self
        }
    }

    pub fn insert(&mut self, property: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.decls.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.decls.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Applies `other` on top of `self`; `other` wins on conflicts.
    pub fn merge(mut self, other: &Style) -> Self {
        for (property, value) in &other.decls {
            self.insert(property, value.clone());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.decls.iter().map(|(p, v)| (*p, v.as_str()))
    }

    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (i, (property, value)) in self.decls.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{property}: {value};");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let style = Style::new()
            .set("color", "red")
            .set("font-size", "1em")
            .set("color", "blue");
        assert_eq!(style.to_css(), "color: blue; font-size: 1em;");
    }

    #[test]
    fn test_merge_overrides() {
        let base = Style::new().set("color", "red").set("padding", "4px");
        let over = Style::new().set("color", "white");
        let merged = base.merge(&over);
        assert_eq!(merged.get("color"), Some("white"));
        assert_eq!(merged.get("padding"), Some("4px"));
    }
}
