//! Template content and the editable variable map.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Response body of `GET /email-templates/:filename`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateContent {
    /// Template file name.
    pub filename: String,
    /// Subject line, possibly containing `{{placeholders}}`.
    pub subject: String,
    /// Body, possibly HTML and possibly containing `{{placeholders}}`.
    pub message: String,
    /// Placeholder names used by the template.
    #[serde(default)]
    pub variables: Vec<String>,
}

impl TemplateContent {
    /// A fresh variable map with one empty value per placeholder.
    #[must_use]
    pub fn variable_map(&self) -> VariableMap {
        VariableMap::from_names(&self.variables)
    }

    /// Placeholders as they appear in the template text, e.g. `{{first_name}}`.
    pub fn placeholders(&self) -> impl Iterator<Item = String> + '_ {
        self.variables.iter().map(|name| format!("{{{{{name}}}}}"))
    }

    /// Whether the body is HTML rather than plain text.
    #[must_use]
    pub fn is_html(&self) -> bool {
        let name = self.filename.to_ascii_lowercase();
        name.ends_with(".html")
            || name.ends_with(".htm")
            || self.message.trim_start().starts_with('<')
    }
}

/// Placeholder name to value, in template order.
///
/// Only names the template declares can hold a value; a template change
/// replaces the whole map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMap {
    entries: Vec<(String, String)>,
}

impl VariableMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// One empty value per name. Repeated names keep their first position.
    #[must_use]
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut map = Self::new();
        for name in names {
            let name = name.as_ref();
            if map.get(name).is_none() {
                map.entries.push((name.to_string(), String::new()));
            }
        }
        map
    }

    /// Value for `name`, if the template declares it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Updates the value for `name`. Returns false (and does nothing) for unknown names.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Variable names in template order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// `(name, value)` pairs in template order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the template declares no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every variable.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Serialize for VariableMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn content(variables: &[&str]) -> TemplateContent {
        TemplateContent {
            filename: "welcome.html".to_string(),
            subject: "Welcome {{name}}".to_string(),
            message: "<p>Hello {{name}}</p>".to_string(),
            variables: variables.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_variable_map_starts_empty() {
        let map = content(&["name", "company"]).variable_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("name"), Some(""));
        assert_eq!(map.get("company"), Some(""));
        assert_eq!(map.names().collect::<Vec<_>>(), ["name", "company"]);
    }

    #[test]
    fn test_set_ignores_unknown_names() {
        let mut map = VariableMap::from_names(&["name"]);
        assert!(map.set("name", "Ada"));
        assert!(!map.set("company", "ACME"));
        assert_eq!(map.get("name"), Some("Ada"));
        assert_eq!(map.get("company"), None);
    }

    #[test]
    fn test_duplicate_names_collapse() {
        let map = VariableMap::from_names(&["a", "b", "a"]);
        assert_eq!(map.names().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn test_serializes_as_object_in_order() {
        let mut map = VariableMap::from_names(&["zeta", "alpha"]);
        map.set("zeta", "1");
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"zeta":"1","alpha":""}"#);
    }

    #[test]
    fn test_placeholders_and_html_detection() {
        let template = content(&["name"]);
        assert_eq!(template.placeholders().collect::<Vec<_>>(), ["{{name}}"]);
        assert!(template.is_html());

        let plain = TemplateContent {
            filename: "note.txt".to_string(),
            message: "Hi there".to_string(),
            ..template
        };
        assert!(!plain.is_html());
    }

    #[test]
    fn test_missing_variables_default_to_empty() {
        let parsed: TemplateContent =
            serde_json::from_str(r#"{"filename":"a.html","subject":"S","message":"M"}"#).unwrap();
        assert!(parsed.variable_map().is_empty());
    }
}
