//! JSON-LD context builder.
//!
//! Produces the `{"@context": {...}}` object attached to every projected
//! document. The context is derived from the label entries alone and is
//! built once per dictionary snapshot.

use serde_json::{json, Map, Value};

use crate::etikett::{Etikett, REFERENCE_TYPE_STRING};

/// Builds the context object for a list of label entries.
///
/// Every entry that [`Etikett::in_context`] accepts contributes a term
/// definition under its name. `"String"` entries carry no `@type`. The
/// aliases `id` and `type` for `@id` and `@type` are always present.
/// With duplicate names the later entry wins.
#[must_use]
pub fn build_context(labels: &[Etikett]) -> Value {
    let mut terms = Map::new();
    for etikett in labels.iter().filter(|e| e.in_context()) {
        let (Some(name), Some(reference_type)) = (&etikett.name, &etikett.reference_type) else {
            continue;
        };
        let mut term = Map::new();
        term.insert("@id".to_owned(), json!(etikett.uri));
        if reference_type != REFERENCE_TYPE_STRING {
            term.insert("@type".to_owned(), json!(reference_type));
        }
        if let Some(container) = &etikett.container {
            term.insert("@container".to_owned(), json!(container));
        }
        terms.insert(name.clone(), Value::Object(term));
    }
    terms.insert("id".to_owned(), json!("@id"));
    terms.insert("type".to_owned(), json!("@type"));
    json!({ "@context": terms })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<Etikett> {
        vec![
            Etikett::new("http://ex/name", "name").with_reference_type("String"),
            Etikett::new("http://ex/creator", "creator")
                .with_reference_type("@id")
                .with_container("@list"),
            Etikett::new("http://ex/Book", "Book").with_reference_type("class"),
            Etikett::new("http://ex/untyped", "untyped"),
        ]
    }

    #[test]
    fn string_terms_have_no_type() {
        let ctx = build_context(&labels());
        assert_eq!(ctx["@context"]["name"], json!({ "@id": "http://ex/name" }));
    }

    #[test]
    fn typed_terms_carry_type_and_container() {
        let ctx = build_context(&labels());
        assert_eq!(
            ctx["@context"]["creator"],
            json!({ "@id": "http://ex/creator", "@type": "@id", "@container": "@list" })
        );
    }

    #[test]
    fn classes_and_untyped_entries_are_skipped() {
        let ctx = build_context(&labels());
        let terms = ctx["@context"].as_object().expect("@context must be an object");
        assert!(!terms.contains_key("Book"));
        assert!(!terms.contains_key("untyped"));
        assert_eq!(terms.len(), 4);
    }

    #[test]
    fn aliases_always_present() {
        let ctx = build_context(&[]);
        assert_eq!(ctx, json!({ "@context": { "id": "@id", "type": "@type" } }));
    }

    #[test]
    fn building_twice_is_identical() {
        assert_eq!(build_context(&labels()), build_context(&labels()));
    }

    #[test]
    fn later_duplicate_name_wins() {
        let ctx = build_context(&[
            Etikett::new("http://ex/a", "dup").with_reference_type("String"),
            Etikett::new("http://ex/b", "dup").with_reference_type("String"),
        ]);
        assert_eq!(ctx["@context"]["dup"]["@id"], json!("http://ex/b"));
    }
}
