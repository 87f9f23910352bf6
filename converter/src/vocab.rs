//! Fixed IRIs the projector treats specially.
//!
//! These are protocol constants of the lobid data model, not configuration.

/// `rdf:first`: the value held by one node of an RDF collection.
pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";

/// `rdf:rest`: the link from one collection node to the next.
pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";

/// `rdf:nil`: the end-of-list marker.
pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";

/// `lv:contributorOrder`: points at the ordered list of contributors.
pub const CONTRIBUTOR_ORDER: &str = "http://purl.org/lobid/lv#contributorOrder";

/// `lv:subjectOrder`: points at the ordered list of subjects.
pub const SUBJECT_ORDER: &str = "http://purl.org/lobid/lv#subjectOrder";

/// Predicates whose blank-node object is the head of an RDF collection.
pub const ORDER_PREDICATES: &[&str] = &[CONTRIBUTOR_ORDER, SUBJECT_ORDER];

/// Returns true if `predicate` is one of the [`ORDER_PREDICATES`].
#[must_use]
pub fn is_order_predicate(predicate: &str) -> bool {
    ORDER_PREDICATES.contains(&predicate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_predicates_are_recognised() {
        assert!(is_order_predicate(CONTRIBUTOR_ORDER));
        assert!(is_order_predicate(SUBJECT_ORDER));
        assert!(!is_order_predicate(RDF_FIRST));
        assert!(!is_order_predicate("http://purl.org/lobid/lv#contributor"));
    }
}
