//! Projects RDF describing one resource into a nested JSON-LD document.
//!
//! The `lobid-rdf-to-json` crate takes the triples around a root resource and
//! folds them into a single JSON object. Predicate IRIs become short field
//! names through a [`LabelDictionary`], RDF collections reached through the
//! lobid order predicates become ordered arrays, and the dictionary's
//! JSON-LD context is attached under `@context`.
//!
//! # Entry Point
//!
//! ```
//! use lobid_rdf_to_json::{project, Etikett, LabelDictionary, Object, Subject, Triple};
//!
//! let dictionary = LabelDictionary::new(vec![
//!     Etikett::new("http://ex/name", "name").with_reference_type("String"),
//! ]);
//! let triples = vec![Triple::new(
//!     Subject::iri("http://ex/1"),
//!     "http://ex/name",
//!     Object::literal("Alice"),
//! )];
//! let json = project(triples, "http://ex/1", &dictionary).unwrap();
//! assert_eq!(json["name"][0], "Alice");
//! ```
//!
//! # Parsing
//!
//! ```
//! # use lobid_rdf_to_json::{convert, LabelDictionary, ProjectionOptions, RdfFormat};
//! let dictionary = LabelDictionary::from_json_str(
//!     r#"[{"uri":"http://ex/name","name":"name","referenceType":"String"}]"#,
//! ).unwrap();
//! let nt = "<http://ex/1> <http://ex/name> \"Alice\" .\n";
//! let json = convert(nt, RdfFormat::NTriples, "http://ex/1", &dictionary, &ProjectionOptions::default()).unwrap();
//! assert_eq!(json["@id"], "http://ex/1");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod context;
pub mod dictionary;
pub mod error;
pub mod etikett;
pub mod model;
#[cfg(feature = "parser")]
pub mod parser;
pub mod projector;
pub mod value;
pub mod vocab;

pub use dictionary::{DictionaryHandle, LabelDictionary};
pub use error::{ConvertError, LabelError};
pub use etikett::Etikett;
pub use model::{Object, Subject, Triple, WorkingSet};
#[cfg(feature = "parser")]
pub use parser::{parse_triples, RdfFormat};
pub use projector::{project, project_node, project_with, ContextEmbedding, ProjectionOptions};
pub use value::{FieldValue, Node};

/// Parses `text` and projects the graph around `root`.
///
/// # Errors
///
/// Returns [`ConvertError::Parse`] for malformed input and any error of
/// [`project`] for the parsed graph.
#[cfg(feature = "parser")]
pub fn convert(
    text: &str,
    format: RdfFormat,
    root: &str,
    dictionary: &LabelDictionary,
    options: &ProjectionOptions,
) -> error::Result<serde_json::Value> {
    let triples = parse_triples(text, format)?;
    project_with(triples, root, dictionary, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlabelled_root_yields_bare_document() {
        let dictionary = LabelDictionary::new(Vec::new());
        let json = project(Vec::new(), "http://ex/1", &dictionary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "@id": "http://ex/1",
                "@context": { "@context": { "id": "@id", "type": "@type" } }
            })
        );
    }

    #[cfg(feature = "parser")]
    #[test]
    fn convert_reports_parse_errors() {
        let dictionary = LabelDictionary::new(Vec::new());
        let result = convert(
            "<http://ex/1> <http://ex/p> .",
            RdfFormat::Turtle,
            "http://ex/1",
            &dictionary,
            &ProjectionOptions::default(),
        );
        assert!(matches!(result, Err(ConvertError::Parse { .. })));
    }
}
