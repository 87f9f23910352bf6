//! Label entries ("Etiketten").
//!
//! An [`Etikett`] maps a predicate IRI to the short JSON field name used in
//! the projected document, plus the JSON-LD typing hints that go into the
//! generated `@context`.

use serde::{Deserialize, Serialize};

/// `referenceType` marking an entry that labels a class rather than a property.
pub const REFERENCE_TYPE_CLASS: &str = "class";

/// `referenceType` marking a plain string-valued property.
pub const REFERENCE_TYPE_STRING: &str = "String";

/// A single label entry as it appears in a labels file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Etikett {
    /// Full IRI of the labelled predicate or class.
    pub uri: String,
    /// Short JSON field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Icon reference used by display front-ends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// `"class"`, `"String"`, a datatype IRI, or `"@id"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_type: Option<String>,
    /// JSON-LD `@container` hint (`"@list"`, `"@set"`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
}

impl Etikett {
    /// Creates an entry with only a URI and a field name.
    pub fn new(uri: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Builder-style setter for `referenceType`.
    #[must_use]
    pub fn with_reference_type(mut self, reference_type: impl Into<String>) -> Self {
        self.reference_type = Some(reference_type.into());
        self
    }

    /// Builder-style setter for `container`.
    #[must_use]
    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = Some(container.into());
        self
    }

    /// Builder-style setter for `label`.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the display label, falling back to the URI.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.uri)
    }

    /// Returns true if this entry belongs in the JSON-LD context:
    /// it has a name and a reference type, and does not label a class.
    #[must_use]
    pub fn in_context(&self) -> bool {
        match (&self.name, self.reference_type.as_deref()) {
            (Some(_), Some(reference_type)) => reference_type != REFERENCE_TYPE_CLASS,
            _ => false,
        }
    }
}

/// Returns the local part of an IRI: everything after the first `#`, or
/// after the last `/` if there is no `#`. An IRI with neither is returned whole.
#[must_use]
pub fn last_segment(uri: &str) -> &str {
    if let Some(i) = uri.find('#') {
        &uri[i + 1..]
    } else if let Some(i) = uri.rfind('/') {
        &uri[i + 1..]
    } else {
        uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_segment_prefers_hash() {
        assert_eq!(
            last_segment("http://purl.org/lobid/lv#contributorOrder"),
            "contributorOrder"
        );
        assert_eq!(last_segment("http://purl.org/dc/terms/title"), "title");
        assert_eq!(last_segment("http://ex/a#b/c"), "b/c");
        assert_eq!(last_segment("urn:isbn"), "urn:isbn");
        assert_eq!(last_segment("http://ex/"), "");
    }

    #[test]
    fn deserializes_label_file_entry() {
        let json = r#"{
            "uri": "http://purl.org/dc/terms/title",
            "name": "title",
            "label": "Titel",
            "referenceType": "String",
            "container": "@set",
            "unknownField": 1
        }"#;
        let e: Etikett = serde_json::from_str(json).unwrap();
        assert_eq!(e.name.as_deref(), Some("title"));
        assert_eq!(e.reference_type.as_deref(), Some("String"));
        assert_eq!(e.container.as_deref(), Some("@set"));
        assert_eq!(e.display_label(), "Titel");
    }

    #[test]
    fn minimal_entry_has_no_optional_fields() {
        let e: Etikett = serde_json::from_str(r#"{"uri":"http://ex/p"}"#).unwrap();
        assert_eq!(e.name, None);
        assert_eq!(e.display_label(), "http://ex/p");
        assert!(!e.in_context());
    }

    #[test]
    fn class_entries_stay_out_of_context() {
        let class = Etikett::new("http://ex/Book", "Book").with_reference_type("class");
        let untyped = Etikett::new("http://ex/p", "p");
        let typed = Etikett::new("http://ex/q", "q").with_reference_type("@id");
        assert!(!class.in_context());
        assert!(!untyped.in_context());
        assert!(typed.in_context());
    }
}
