use tree_sitter::Node;

/// Tag carried by method and constructor captures.
pub const METHOD_TAG: &str = "method";
/// Tag carried by return statement captures.
pub const RETURN_TAG: &str = "return";

/// An owned snapshot of one `(node, tag)` pair produced by a structural query.
///
/// Holding positions instead of a `Node` keeps consumers free of the tree
/// lifetime, so they can be driven by hand-built captures as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// Name of the query pattern capture, e.g. `method`.
    pub tag: String,
    pub start_byte: usize,
    pub end_byte: usize,
    /// Row of the first byte (0-based).
    pub start_line: usize,
    /// See [`structural_child_count`].
    pub structural_children: usize,
}

impl Capture {
    pub fn new(tag: &str, start_byte: usize, end_byte: usize, start_line: usize) -> Self {
        Self {
            tag: tag.to_string(),
            start_byte,
            end_byte,
            start_line,
            structural_children: 0,
        }
    }

    /// Snapshots `node`. Method captures start at their declaration proper,
    /// see [`declaration_start`].
    pub fn from_node(node: Node, tag: &str) -> Self {
        let start = if tag == METHOD_TAG {
            declaration_start(node)
        } else {
            node
        };
        Self {
            tag: tag.to_string(),
            start_byte: start.start_byte(),
            end_byte: node.end_byte(),
            start_line: start.start_position().row,
            structural_children: structural_child_count(node),
        }
    }

    pub fn is_method(&self) -> bool {
        self.tag == METHOD_TAG
    }
}

/// Counts the children of `node` that carry structure.
///
/// Extras (comments) and the `;` terminator are left out, so `return;` has a
/// single structural child while `return x;` has two.
pub fn structural_child_count(node: Node) -> usize {
    let mut cursor = node.walk();
    let count = node
        .children(&mut cursor)
        .filter(|child| !child.is_extra() && child.kind() != ";")
        .count();
    count
}

/// Returns the first child of a declaration that is neither an attribute list
/// nor a comment, falling back to the node itself.
///
/// The C# grammar folds leading `[Attribute]` lists, and any comments between
/// them, into the declaration node.
pub fn declaration_start(node: Node) -> Node {
    let mut cursor = node.walk();
    let first = node
        .children(&mut cursor)
        .find(|child| !child.is_extra() && child.kind() != "attribute_list");
    first.unwrap_or(node)
}
