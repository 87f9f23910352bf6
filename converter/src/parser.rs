//! RDF syntax adapter.
//!
//! Turns Turtle or N-Triples text into owned [`Triple`]s using the sophia
//! parsers. Literal datatypes and language tags are dropped; quoted triples
//! and variables are skipped.

use std::fmt;
use std::str::FromStr;

use sophia_api::source::TripleSource;
use sophia_api::term::{Term, TermKind};
use sophia_turtle::parser::{nt, turtle};

use crate::error::{ConvertError, Result};
use crate::model::{Object, Subject, Triple};

/// Supported RDF input syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// Turtle 1.1 (`.ttl`).
    Turtle,
    /// N-Triples (`.nt`).
    NTriples,
}

impl RdfFormat {
    /// Canonical lower-case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            RdfFormat::Turtle => "turtle",
            RdfFormat::NTriples => "ntriples",
        }
    }

    /// Guesses the format from a file extension (without the dot).
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "ttl" => Some(RdfFormat::Turtle),
            "nt" => Some(RdfFormat::NTriples),
            _ => None,
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RdfFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(RdfFormat::Turtle),
            "ntriples" | "n-triples" | "nt" => Ok(RdfFormat::NTriples),
            other => Err(format!(
                "unknown RDF format '{other}', expected 'turtle' or 'ntriples'"
            )),
        }
    }
}

/// Parses `text` into triples.
///
/// # Errors
///
/// Returns [`ConvertError::Parse`] if the text is not valid in `format`.
pub fn parse_triples(text: &str, format: RdfFormat) -> Result<Vec<Triple>> {
    let mut triples = Vec::new();
    let mut skipped = 0_usize;
    let mut push = |converted: Option<Triple>| match converted {
        Some(triple) => triples.push(triple),
        None => skipped += 1,
    };
    let outcome = match format {
        RdfFormat::Turtle => turtle::parse_str(text)
            .for_each_triple(|t| push(to_triple(&t)))
            .map_err(|e| e.to_string()),
        RdfFormat::NTriples => nt::parse_str(text)
            .for_each_triple(|t| push(to_triple(&t)))
            .map_err(|e| e.to_string()),
    };
    outcome.map_err(|message| ConvertError::Parse {
        format: format.name(),
        message,
    })?;
    if skipped > 0 {
        tracing::warn!(skipped, "statements with unsupported terms skipped");
    }
    tracing::debug!(format = format.name(), triples = triples.len(), "rdf parsed");
    Ok(triples)
}

fn to_triple<T: sophia_api::triple::Triple>(t: &T) -> Option<Triple> {
    let subject = match t.s().kind() {
        TermKind::Iri => Subject::Iri(t.s().iri()?.as_str().to_owned()),
        TermKind::BlankNode => Subject::BlankNode(t.s().bnode_id()?.as_str().to_owned()),
        _ => return None,
    };
    let predicate = t.p().iri()?.as_str().to_owned();
    let object = match t.o().kind() {
        TermKind::Iri => Object::Iri(t.o().iri()?.as_str().to_owned()),
        TermKind::BlankNode => Object::BlankNode(t.o().bnode_id()?.as_str().to_owned()),
        TermKind::Literal => Object::Literal(t.o().lexical_form()?.to_string()),
        _ => return None,
    };
    Some(Triple::new(subject, predicate, object))
}
