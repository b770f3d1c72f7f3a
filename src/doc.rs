//! Documentation comment structure.
//!
//! A [`DocComment`] is an ordered list of [`DocNode`]s. Elements are separated by explicit
//! [`DocNode::NewLine`] nodes, so the canonical layout for a method reads
//! `Summary NewLine TypeParam NewLine Param NewLine Returns`. Comments are values: every
//! edit returns a new comment and leaves the original untouched.

use serde::{Deserialize, Serialize};

/// Inline content of an element.
///
/// Serialized as a single-key map, `{text: ...}` or `{see: ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "InlineRepr", into = "InlineRepr")]
pub enum Inline {
    /// Plain prose
    Text(String),
    /// A `<see cref="..."/>` cross-reference
    See(String),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum InlineRepr {
    Text { text: String },
    See { see: String },
}

impl From<InlineRepr> for Inline {
    fn from(repr: InlineRepr) -> Self {
        match repr {
            InlineRepr::Text { text } => Inline::Text(text),
            InlineRepr::See { see } => Inline::See(see),
        }
    }
}

impl From<Inline> for InlineRepr {
    fn from(inline: Inline) -> Self {
        match inline {
            Inline::Text(text) => InlineRepr::Text { text },
            Inline::See(see) => InlineRepr::See { see },
        }
    }
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }
}

/// Kind tag of a [`DocNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocNodeKind {
    NewLine,
    Summary,
    TypeParam,
    Param,
    Returns,
    Exception,
    Other,
}

/// One element of a documentation comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocNode {
    /// A line break between elements
    NewLine,
    Summary {
        content: Vec<Inline>,
    },
    TypeParam {
        #[serde(default)]
        name: Option<String>,
        content: Vec<Inline>,
    },
    Param {
        /// The `name` attribute; hand-written comments may omit it
        #[serde(default)]
        name: Option<String>,
        content: Vec<Inline>,
    },
    Returns {
        content: Vec<Inline>,
    },
    Exception {
        cref: String,
        #[serde(default)]
        content: Vec<Inline>,
    },
    /// Any other element or text, kept verbatim
    Other {
        raw: String,
    },
}

impl DocNode {
    pub fn summary(text: impl Into<String>) -> Self {
        DocNode::Summary {
            content: vec![Inline::text(text)],
        }
    }

    pub fn type_param(name: impl Into<String>, text: impl Into<String>) -> Self {
        DocNode::TypeParam {
            name: Some(name.into()),
            content: vec![Inline::text(text)],
        }
    }

    pub fn param(name: impl Into<String>, text: impl Into<String>) -> Self {
        DocNode::Param {
            name: Some(name.into()),
            content: vec![Inline::text(text)],
        }
    }

    pub fn returns(text: impl Into<String>) -> Self {
        DocNode::Returns {
            content: vec![Inline::text(text)],
        }
    }

    pub fn exception(cref: impl Into<String>) -> Self {
        DocNode::Exception {
            cref: cref.into(),
            content: Vec::new(),
        }
    }

    pub fn kind(&self) -> DocNodeKind {
        match self {
            DocNode::NewLine => DocNodeKind::NewLine,
            DocNode::Summary { .. } => DocNodeKind::Summary,
            DocNode::TypeParam { .. } => DocNodeKind::TypeParam,
            DocNode::Param { .. } => DocNodeKind::Param,
            DocNode::Returns { .. } => DocNodeKind::Returns,
            DocNode::Exception { .. } => DocNodeKind::Exception,
            DocNode::Other { .. } => DocNodeKind::Other,
        }
    }

    /// The `name` attribute of a param or type-param element.
    pub fn name(&self) -> Option<&str> {
        match self {
            DocNode::Param { name, .. } | DocNode::TypeParam { name, .. } => name.as_deref(),
            _ => None,
        }
    }

    /// Everything except line breaks.
    pub fn is_content(&self) -> bool {
        !matches!(self, DocNode::NewLine)
    }
}

/// The documentation comment of one declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocComment {
    nodes: Vec<DocNode>,
}

impl DocComment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: Vec<DocNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[DocNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends an element, preceded by a line break unless it is the first node.
    pub fn push_element(&mut self, node: DocNode) {
        if !self.nodes.is_empty() {
            self.nodes.push(DocNode::NewLine);
        }
        self.nodes.push(node);
    }

    /// Indices of all nodes of the given kind, in document order.
    pub fn positions(&self, kind: DocNodeKind) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| node.kind() == kind)
            .map(|(i, _)| i)
    }

    /// Whether a param element with this name exists.
    pub fn documents_parameter(&self, name: &str) -> bool {
        self.nodes
            .iter()
            .any(|node| node.kind() == DocNodeKind::Param && node.name() == Some(name))
    }

    /// Returns a new comment with `inserted` placed at `index`.
    ///
    /// Nodes before `index` keep their positions; the rest shift right.
    pub fn with_inserted(&self, index: usize, inserted: impl IntoIterator<Item = DocNode>) -> Self {
        let index = index.min(self.nodes.len());
        let mut nodes = Vec::with_capacity(self.nodes.len() + 2);
        nodes.extend_from_slice(&self.nodes[..index]);
        nodes.extend(inserted);
        nodes.extend_from_slice(&self.nodes[index..]);
        Self { nodes }
    }
}

impl From<Vec<DocNode>> for DocComment {
    fn from(nodes: Vec<DocNode>) -> Self {
        Self::from_nodes(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_element_interleaves_line_breaks() {
        let mut comment = DocComment::new();
        comment.push_element(DocNode::summary("Runs."));
        comment.push_element(DocNode::param("count", "The count."));

        let kinds: Vec<DocNodeKind> = comment.nodes().iter().map(DocNode::kind).collect();
        assert_eq!(kinds, vec![DocNodeKind::Summary, DocNodeKind::NewLine, DocNodeKind::Param]);
    }

    #[test]
    fn test_with_inserted_leaves_original_untouched() {
        let comment = DocComment::from_nodes(vec![DocNode::summary("Runs.")]);
        let edited = comment.with_inserted(1, [DocNode::NewLine, DocNode::param("a", "The a.")]);

        assert_eq!(comment.len(), 1);
        assert_eq!(edited.len(), 3);
        assert_eq!(edited.nodes()[0], comment.nodes()[0]);
        assert!(edited.documents_parameter("a"));
    }

    #[test]
    fn test_positions_by_kind() {
        let comment = DocComment::from_nodes(vec![
            DocNode::summary("Runs."),
            DocNode::NewLine,
            DocNode::param("a", "The a."),
            DocNode::NewLine,
            DocNode::param("b", "The b."),
        ]);
        assert_eq!(comment.positions(DocNodeKind::Param).collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(comment.positions(DocNodeKind::NewLine).count(), 2);
    }

    #[test]
    fn test_unnamed_param_does_not_document_anything() {
        let comment = DocComment::from_nodes(vec![DocNode::Param {
            name: None,
            content: vec![Inline::text("Orphan.")],
        }]);
        assert!(!comment.documents_parameter(""));
        assert_eq!(comment.nodes()[0].name(), None);
    }

    #[test]
    fn test_serde_shape() {
        let json = r#"[
            {"kind": "summary", "content": [{"text": "Runs."}]},
            {"kind": "new_line"},
            {"kind": "returns", "content": [{"text": "A "}, {"see": "Task"}, {"text": "."}]}
        ]"#;
        let comment: DocComment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.len(), 3);
        assert_eq!(comment.nodes()[1], DocNode::NewLine);
        assert_eq!(
            comment.nodes()[2],
            DocNode::Returns {
                content: vec![
                    Inline::text("A "),
                    Inline::See("Task".to_string()),
                    Inline::text("."),
                ],
            }
        );
    }
}
