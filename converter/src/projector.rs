//! Graph-to-tree projection.
//!
//! Starting at a root resource, every statement about the current node is
//! folded into a JSON object:
//!
//! - a literal joins the set of strings under the predicate's field name,
//! - a blank node reached through an order predicate is read as an RDF
//!   collection and stored as an ordered list,
//! - any other resource or blank node is expanded recursively into a
//!   nested object.
//!
//! Collection nodes are marked consumed while a list is read and are never
//! expanded again afterwards. A node that is already on the current
//! expansion path, or that lies deeper than the configured depth cap, is
//! emitted as an `@id`-only reference.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dictionary::LabelDictionary;
use crate::error::Result;
use crate::model::{Object, Subject, Triple, WorkingSet};
use crate::value::{Node, CONTEXT_KEY};
use crate::vocab::{is_order_predicate, RDF_FIRST, RDF_NIL, RDF_REST};

/// How the dictionary's context is attached to the projected document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextEmbedding {
    /// `@context` holds the dictionary's context object as-is,
    /// i.e. `{"@context": {"@context": {...}}}`.
    #[default]
    Verbatim,
    /// `@context` holds only the term definitions.
    Inline,
}

/// Knobs for a single projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionOptions {
    /// Maximum nesting depth of expanded objects. Nodes below it are
    /// emitted as references. `None` means unbounded.
    pub max_depth: Option<usize>,
    /// Context attachment mode.
    pub context: ContextEmbedding,
}

/// Projects the graph around `root` into a JSON document with default options.
///
/// # Errors
///
/// Returns [`crate::ConvertError::UnresolvedPredicate`] if a reachable
/// predicate has no usable field name, or
/// [`crate::ConvertError::ShapeConflict`] if one field receives values of
/// different shapes. The latter includes a predicate that carries both
/// literal and resource objects on the same node: the whole projection is
/// rejected rather than one of the values being dropped.
pub fn project<I>(triples: I, root: &str, dictionary: &LabelDictionary) -> Result<Value>
where
    I: IntoIterator<Item = Triple>,
{
    project_with(triples, root, dictionary, &ProjectionOptions::default())
}

/// Projects the graph around `root` into a JSON document.
///
/// The result carries `@id` for the root and the dictionary's context
/// under `@context`.
///
/// # Errors
///
/// See [`project`].
pub fn project_with<I>(
    triples: I,
    root: &str,
    dictionary: &LabelDictionary,
    options: &ProjectionOptions,
) -> Result<Value>
where
    I: IntoIterator<Item = Triple>,
{
    let set = WorkingSet::new(triples);
    let node = project_node(&set, root, dictionary, options)?;

    let context = match options.context {
        ContextEmbedding::Verbatim => dictionary.context().clone(),
        ContextEmbedding::Inline => dictionary
            .context()
            .get(CONTEXT_KEY)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new())),
    };
    let mut document = node.to_json();
    if let Value::Object(map) = &mut document {
        map.insert(CONTEXT_KEY.to_owned(), context);
    }
    Ok(document)
}

/// Projects the graph around `root` into a [`Node`], without a context.
///
/// # Errors
///
/// See [`project`].
pub fn project_node(
    set: &WorkingSet,
    root: &str,
    dictionary: &LabelDictionary,
    options: &ProjectionOptions,
) -> Result<Node> {
    tracing::debug!(root, triples = set.len(), "projecting graph");
    let root = Subject::iri(root);
    let mut projector = Projector {
        set,
        dictionary,
        options,
        consumed: HashSet::new(),
        path: vec![root.clone()],
    };
    let mut node = Node::with_id(root.as_str());
    projector.fill(&mut node, &root)?;
    Ok(node)
}

/// Traversal state of one projection.
struct Projector<'a> {
    set: &'a WorkingSet,
    dictionary: &'a LabelDictionary,
    options: &'a ProjectionOptions,
    /// Collection nodes already read as part of a list.
    consumed: HashSet<Subject>,
    /// Nodes currently being expanded, root first.
    path: Vec<Subject>,
}

impl<'a> Projector<'a> {
    /// Folds every statement about `subject` into `target`.
    fn fill(&mut self, target: &mut Node, subject: &Subject) -> Result<()> {
        let set = self.set;
        for (predicate, object) in set.statements(subject) {
            if self.consumed.contains(subject) {
                break;
            }
            self.contribute(target, predicate, object)?;
        }
        Ok(())
    }

    fn contribute(
        &mut self,
        target: &mut Node,
        predicate: &'a str,
        object: &'a Object,
    ) -> Result<()> {
        let dictionary = self.dictionary;
        let key = dictionary.field_name(predicate)?;
        match object {
            Object::Literal(value) => target.add_literal(key, value.as_str()),
            Object::BlankNode(head) if is_order_predicate(predicate) => {
                tracing::info!(key, head = head.as_str(), "create list");
                let values = self.traverse_list(Subject::blank(head.as_str()));
                target.set_list(key, values)
            }
            Object::Iri(iri) => self.add_nested(target, key, Subject::iri(iri.as_str())),
            Object::BlankNode(id) => self.add_nested(target, key, Subject::blank(id.as_str())),
        }
    }

    fn add_nested(&mut self, target: &mut Node, key: &str, node: Subject) -> Result<()> {
        let nested = self.expand(node)?;
        target.add_object(key, nested)
    }

    /// Reads the RDF collection starting at `head`, marking each node consumed.
    ///
    /// A node without `rdf:first` or `rdf:rest` ends the list early with
    /// whatever was collected so far.
    fn traverse_list(&mut self, head: Subject) -> Vec<String> {
        let set = self.set;
        let mut values = Vec::new();
        let mut node = head;
        loop {
            if self.consumed.contains(&node) {
                tracing::warn!(node = %node, "list node visited twice, list truncated");
                break;
            }
            let Some(first) = set.object_of(&node, RDF_FIRST) else {
                tracing::warn!(node = %node, "list node without rdf:first, list truncated");
                break;
            };
            tracing::debug!(node = %node, value = first.as_str(), "find next data");
            values.push(first.as_str().to_owned());
            let rest = set.object_of(&node, RDF_REST);
            self.consumed.insert(node);

            let next = match rest {
                Some(Object::Iri(iri)) if iri == RDF_NIL => break,
                Some(next) => next.as_subject(),
                None => None,
            };
            match next {
                Some(next) => node = next,
                None => {
                    tracing::warn!("list node without usable rdf:rest, list truncated");
                    break;
                }
            }
        }
        values
    }

    /// Expands `node` into a nested object, or into a reference if it closes
    /// a cycle or exceeds the depth cap.
    ///
    /// Only the current path is checked, so a node shared by several
    /// branches is expanded again under each of them. Output size can grow
    /// exponentially on densely shared graphs; `max_depth` bounds it.
    fn expand(&mut self, node: Subject) -> Result<Node> {
        if self.path.contains(&node) {
            tracing::warn!(node = %node, "cycle detected, emitting reference");
            return Ok(Node::with_id(node.as_str()));
        }
        if self
            .options
            .max_depth
            .is_some_and(|max_depth| self.path.len() > max_depth)
        {
            tracing::warn!(
                node = %node,
                depth = self.path.len(),
                "depth cap reached, emitting reference"
            );
            return Ok(Node::with_id(node.as_str()));
        }

        let mut nested = Node::with_id(node.as_str());
        self.path.push(node.clone());
        let filled = self.fill(&mut nested, &node);
        self.path.pop();
        filled?;
        Ok(nested)
    }
}
