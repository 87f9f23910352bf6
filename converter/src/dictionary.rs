//! The label dictionary.
//!
//! A [`LabelDictionary`] is an immutable snapshot built from a list of
//! [`Etikett`] entries: a table keyed by predicate IRI, a table keyed by short
//! name, and the derived JSON-LD context. A [`DictionaryHandle`] holds the
//! current snapshot and swaps in a fresh one on reload, so projections that
//! are already running keep the snapshot they started with.

use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use crate::context::build_context;
use crate::error::{ConvertError, LabelError, Result};
use crate::etikett::{last_segment, Etikett};

/// Lookup tables and context derived from one list of label entries.
#[derive(Debug, Clone)]
pub struct LabelDictionary {
    labels: Vec<Etikett>,
    by_uri: HashMap<String, Etikett>,
    by_name: HashMap<String, Etikett>,
    context: Value,
}

impl LabelDictionary {
    /// Builds the tables and the context from a list of entries.
    ///
    /// Later entries overwrite earlier ones sharing a URI or a name.
    #[must_use]
    pub fn new(labels: Vec<Etikett>) -> Self {
        let mut by_uri = HashMap::with_capacity(labels.len());
        let mut by_name = HashMap::with_capacity(labels.len());
        for etikett in &labels {
            by_uri.insert(etikett.uri.clone(), etikett.clone());
            if let Some(name) = &etikett.name {
                by_name.insert(name.clone(), etikett.clone());
            }
        }
        let context = build_context(&labels);
        Self {
            labels,
            by_uri,
            by_name,
            context,
        }
    }

    /// Reads a JSON array of label entries and builds a dictionary from it.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError`] if the reader fails or the content is not a
    /// JSON array of label entries.
    pub fn from_reader<R: Read>(reader: R) -> std::result::Result<Self, LabelError> {
        let labels: Vec<Etikett> = serde_json::from_reader(reader)?;
        tracing::info!(entries = labels.len(), "label entries loaded");
        Ok(Self::new(labels))
    }

    /// Parses a JSON array of label entries and builds a dictionary from it.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::Json`] if the text is not a JSON array of label entries.
    pub fn from_json_str(json: &str) -> std::result::Result<Self, LabelError> {
        let labels: Vec<Etikett> = serde_json::from_str(json)?;
        tracing::info!(entries = labels.len(), "label entries loaded");
        Ok(Self::new(labels))
    }

    /// Returns the entry for `uri`.
    ///
    /// An unknown URI yields a transient entry named after the URI's last
    /// segment. Either way the returned label defaults to the URI. Transient
    /// entries are not remembered.
    #[must_use]
    pub fn lookup(&self, uri: &str) -> Etikett {
        let mut etikett = match self.by_uri.get(uri) {
            Some(known) => known.clone(),
            None => Etikett {
                uri: uri.to_owned(),
                name: Some(last_segment(uri).to_owned()),
                ..Etikett::default()
            },
        };
        if etikett.label.is_none() {
            etikett.label = Some(etikett.uri.clone());
        }
        tracing::debug!(uri, name = ?etikett.name, "find etikett");
        etikett
    }

    /// Resolves the JSON field name for a predicate.
    ///
    /// Uses the entry's name if the predicate has a named entry. Otherwise
    /// falls back to the predicate's last segment, provided some entry
    /// carries that name.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnresolvedPredicate`] when neither lookup
    /// produces a name.
    pub fn field_name<'a>(&'a self, predicate: &'a str) -> Result<&'a str> {
        if let Some(name) = self.by_uri.get(predicate).and_then(|e| e.name.as_deref()) {
            tracing::debug!(predicate, name, "field name from entry");
            return Ok(name);
        }
        let derived = last_segment(predicate);
        if self.by_name.contains_key(derived) {
            tracing::debug!(predicate, name = derived, "field name derived from predicate");
            return Ok(derived);
        }
        Err(ConvertError::UnresolvedPredicate {
            predicate: predicate.to_owned(),
        })
    }

    /// Returns the entry registered for `uri`, if any.
    #[must_use]
    pub fn by_uri(&self, uri: &str) -> Option<&Etikett> {
        self.by_uri.get(uri)
    }

    /// Returns the entry registered under the short name `name`, if any.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Etikett> {
        self.by_name.get(name)
    }

    /// Returns the entries this dictionary was built from, in input order.
    #[must_use]
    pub fn labels(&self) -> &[Etikett] {
        &self.labels
    }

    /// Returns the context object, `{"@context": {...}}`.
    #[must_use]
    pub fn context(&self) -> &Value {
        &self.context
    }
}

/// A shared, reloadable reference to the current [`LabelDictionary`].
///
/// Cloning the handle shares the underlying slot.
#[derive(Debug, Clone)]
pub struct DictionaryHandle {
    current: Arc<RwLock<Arc<LabelDictionary>>>,
}

impl DictionaryHandle {
    /// Wraps an initial dictionary.
    #[must_use]
    pub fn new(dictionary: LabelDictionary) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(dictionary))),
        }
    }

    /// Returns the current snapshot. It stays valid after a reload.
    #[must_use]
    pub fn snapshot(&self) -> Arc<LabelDictionary> {
        Arc::clone(&*self.current.read())
    }

    /// Replaces the current snapshot with one built from `labels`.
    pub fn reload(&self, labels: Vec<Etikett>) {
        self.swap(LabelDictionary::new(labels));
    }

    /// Replaces the current snapshot with one read from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError`] if the entries cannot be read; the previous
    /// snapshot then stays in place.
    pub fn reload_from_reader<R: Read>(&self, reader: R) -> std::result::Result<(), LabelError> {
        let dictionary = LabelDictionary::from_reader(reader)?;
        self.swap(dictionary);
        Ok(())
    }

    fn swap(&self, dictionary: LabelDictionary) {
        let entries = dictionary.labels().len();
        *self.current.write() = Arc::new(dictionary);
        tracing::info!(entries, "label dictionary reloaded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> LabelDictionary {
        LabelDictionary::new(vec![
            Etikett::new("http://ex/name", "name").with_reference_type("String"),
            Etikett::new("http://purl.org/lobid/lv#contributorOrder", "contributorOrder")
                .with_label("Beitragende"),
            Etikett::new("http://other/title", "title"),
        ])
    }

    #[test]
    fn lookup_known_uri_defaults_label() {
        let e = dictionary().lookup("http://ex/name");
        assert_eq!(e.name.as_deref(), Some("name"));
        assert_eq!(e.label.as_deref(), Some("http://ex/name"));

        let e = dictionary().lookup("http://purl.org/lobid/lv#contributorOrder");
        assert_eq!(e.label.as_deref(), Some("Beitragende"));
    }

    #[test]
    fn lookup_unknown_uri_synthesizes_entry() {
        let dict = dictionary();
        let e = dict.lookup("http://ex/vocab#unknown");
        assert_eq!(e.uri, "http://ex/vocab#unknown");
        assert_eq!(e.name.as_deref(), Some("unknown"));
        assert_eq!(e.label.as_deref(), Some("http://ex/vocab#unknown"));
        assert!(dict.by_uri("http://ex/vocab#unknown").is_none());
    }

    #[test]
    fn field_name_from_entry() {
        let dict = dictionary();
        assert_eq!(dict.field_name("http://ex/name").unwrap(), "name");
    }

    #[test]
    fn field_name_falls_back_to_named_local_part() {
        let dict = dictionary();
        assert_eq!(dict.field_name("http://purl.org/dc/terms#title").unwrap(), "title");
        assert_eq!(dict.field_name("http://purl.org/dc/terms/title").unwrap(), "title");
    }

    #[test]
    fn field_name_fails_without_any_entry() {
        let err = dictionary().field_name("http://ex/vocab#missing").unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnresolvedPredicate {
                predicate: "http://ex/vocab#missing".to_owned()
            }
        );
    }

    #[test]
    fn entry_without_name_does_not_supply_one() {
        let dict = LabelDictionary::new(vec![Etikett {
            uri: "http://ex/vocab#nameless".to_owned(),
            ..Etikett::default()
        }]);
        assert!(dict.field_name("http://ex/vocab#nameless").is_err());
        assert!(dict.by_name("nameless").is_none());
    }

    #[test]
    fn from_json_str_builds_tables_and_context() {
        let dict = LabelDictionary::from_json_str(
            r#"[{"uri":"http://ex/name","name":"name","referenceType":"String"}]"#,
        )
        .unwrap();
        assert!(dict.by_name("name").is_some());
        assert_eq!(
            dict.context()["@context"]["name"],
            serde_json::json!({ "@id": "http://ex/name" })
        );
    }

    #[test]
    fn malformed_label_file_is_rejected() {
        let err = LabelDictionary::from_json_str(r#"{"uri":"http://ex/name"}"#).unwrap_err();
        assert!(matches!(err, LabelError::Json(_)));
    }

    #[test]
    fn reload_swaps_snapshot_and_keeps_old_one_alive() {
        let handle = DictionaryHandle::new(dictionary());
        let before = handle.snapshot();
        handle.reload(vec![Etikett::new("http://ex/other", "other")]);
        let after = handle.snapshot();

        assert!(before.by_name("name").is_some());
        assert!(after.by_name("name").is_none());
        assert!(after.by_name("other").is_some());
    }

    #[test]
    fn failed_reload_keeps_previous_snapshot() {
        let handle = DictionaryHandle::new(dictionary());
        let result = handle.reload_from_reader("not json".as_bytes());
        assert!(result.is_err());
        assert!(handle.snapshot().by_name("name").is_some());
    }

    #[test]
    fn clones_share_the_slot() {
        let handle = DictionaryHandle::new(dictionary());
        let other = handle.clone();
        other.reload(Vec::new());
        assert!(handle.snapshot().labels().is_empty());
    }
}
