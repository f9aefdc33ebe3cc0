//! The loaded diagram document.

/// Ordered class-node labels extracted from a diagram document.
///
/// The document is immutable once loaded; each entry is the free-text label
/// of one class node, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramDocument {
    nodes: Vec<String>,
}

impl DiagramDocument {
    /// Create a document from the labels of its class nodes.
    pub fn new(nodes: Vec<String>) -> Self {
        Self { nodes }
    }

    /// Borrow the class-node labels in document order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Returns the number of class nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the document contains no class nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the class-node labels.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for DiagramDocument {
    fn from(nodes: Vec<String>) -> Self {
        Self::new(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_preserves_order() {
        let doc = DiagramDocument::new(vec!["a.b.First".to_string(), "a.b.Second".to_string()]);

        assert_eq!(doc.len(), 2);
        assert!(!doc.is_empty());
        assert_eq!(doc.iter().collect::<Vec<_>>(), vec!["a.b.First", "a.b.Second"]);
    }

    #[test]
    fn test_default_document_is_empty() {
        let doc = DiagramDocument::default();
        assert!(doc.is_empty());
        assert_eq!(doc.nodes().len(), 0);
    }
}
