//! Core RDF model types.
//!
//! Triples are plain owned data. A [`WorkingSet`] deduplicates a batch of
//! triples and indexes them by subject so the projector can walk the graph
//! outward from one resource.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// The subject position of a triple: a named resource or a blank node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Subject {
    /// A resource identified by a full IRI.
    Iri(String),
    /// An anonymous resource, identified only within the current triple set.
    BlankNode(String),
}

impl Subject {
    /// Creates an IRI subject.
    pub fn iri(iri: impl Into<String>) -> Self {
        Subject::Iri(iri.into())
    }

    /// Creates a blank-node subject.
    pub fn blank(id: impl Into<String>) -> Self {
        Subject::BlankNode(id.into())
    }

    /// Returns the IRI or blank-node identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Subject::Iri(s) | Subject::BlankNode(s) => s,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Iri(iri) => write!(f, "<{iri}>"),
            Subject::BlankNode(id) => write!(f, "_:{id}"),
        }
    }
}

/// The object position of a triple.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Object {
    /// A reference to a named resource.
    Iri(String),
    /// A reference to a blank node.
    BlankNode(String),
    /// A string-valued literal (datatype and language tag are not kept).
    Literal(String),
}

impl Object {
    /// Creates an IRI object.
    pub fn iri(iri: impl Into<String>) -> Self {
        Object::Iri(iri.into())
    }

    /// Creates a blank-node object.
    pub fn blank(id: impl Into<String>) -> Self {
        Object::BlankNode(id.into())
    }

    /// Creates a literal object.
    pub fn literal(value: impl Into<String>) -> Self {
        Object::Literal(value.into())
    }

    /// Returns the string value: the IRI, the blank-node id, or the lexical form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Object::Iri(s) | Object::BlankNode(s) | Object::Literal(s) => s,
        }
    }

    /// Returns the node this object points at, or `None` for a literal.
    #[must_use]
    pub fn as_subject(&self) -> Option<Subject> {
        match self {
            Object::Iri(iri) => Some(Subject::Iri(iri.clone())),
            Object::BlankNode(id) => Some(Subject::BlankNode(id.clone())),
            Object::Literal(_) => None,
        }
    }
}

/// A single RDF statement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    /// Subject resource.
    pub subject: Subject,
    /// Full IRI of the predicate.
    pub predicate: String,
    /// Object value.
    pub object: Object,
}

impl Triple {
    /// Creates a triple.
    pub fn new(subject: Subject, predicate: impl Into<String>, object: Object) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

/// A deduplicated, subject-indexed set of triples.
///
/// Exact duplicates collapse on construction. The set is immutable once
/// built; traversal state lives with the projector, not here.
#[derive(Debug, Clone, Default)]
pub struct WorkingSet {
    by_subject: BTreeMap<Subject, BTreeSet<(String, Object)>>,
    len: usize,
}

impl WorkingSet {
    /// Builds a working set from any collection of triples.
    pub fn new<I: IntoIterator<Item = Triple>>(triples: I) -> Self {
        let mut set = WorkingSet::default();
        for triple in triples {
            set.insert(triple);
        }
        set
    }

    /// Adds a triple. Returns false if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        let inserted = self
            .by_subject
            .entry(triple.subject)
            .or_default()
            .insert((triple.predicate, triple.object));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Returns the number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the `(predicate, object)` pairs of every triple with
    /// the given subject.
    pub fn statements<'a>(
        &'a self,
        subject: &Subject,
    ) -> impl Iterator<Item = (&'a str, &'a Object)> + 'a {
        self.by_subject
            .get(subject)
            .into_iter()
            .flat_map(|statements| statements.iter().map(|(p, o)| (p.as_str(), o)))
    }

    /// Returns the object of the first triple matching `subject` and `predicate`.
    #[must_use]
    pub fn object_of(&self, subject: &Subject, predicate: &str) -> Option<&Object> {
        self.statements(subject)
            .find(|(p, _)| *p == predicate)
            .map(|(_, o)| o)
    }
}

impl FromIterator<Triple> for WorkingSet {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        WorkingSet::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(value: &str) -> Triple {
        Triple::new(
            Subject::iri("http://ex/1"),
            "http://ex/name",
            Object::literal(value),
        )
    }

    #[test]
    fn duplicates_collapse() {
        let set = WorkingSet::new(vec![name("Alice"), name("Alice"), name("Bob")]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.statements(&Subject::iri("http://ex/1")).count(), 2);
    }

    #[test]
    fn unknown_subject_has_no_statements() {
        let set = WorkingSet::new(vec![name("Alice")]);
        assert_eq!(set.statements(&Subject::blank("b0")).count(), 0);
        assert!(!set.is_empty());
    }

    #[test]
    fn blank_and_iri_subjects_are_distinct() {
        let set = WorkingSet::new(vec![
            Triple::new(Subject::iri("x"), "http://ex/p", Object::literal("iri")),
            Triple::new(Subject::blank("x"), "http://ex/p", Object::literal("blank")),
        ]);
        assert_eq!(
            set.object_of(&Subject::blank("x"), "http://ex/p"),
            Some(&Object::literal("blank"))
        );
    }

    #[test]
    fn object_as_subject() {
        assert_eq!(Object::iri("a").as_subject(), Some(Subject::iri("a")));
        assert_eq!(Object::blank("b").as_subject(), Some(Subject::blank("b")));
        assert_eq!(Object::literal("c").as_subject(), None);
    }

    #[test]
    fn subject_display() {
        assert_eq!(Subject::iri("http://ex/1").to_string(), "<http://ex/1>");
        assert_eq!(Subject::blank("b0").to_string(), "_:b0");
    }
}
