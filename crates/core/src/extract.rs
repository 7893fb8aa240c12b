//! Title text extraction from post content nodes.

use crate::types::TitleNode;

/// Concatenate the text of content nodes into one string.
///
/// Each node contributes its visible text followed by its alt text, so
/// emoji images keep their position in the sentence. Empty nodes are kept
/// and nothing is trimmed.
pub fn extract_text(nodes: &[TitleNode]) -> String {
    nodes
        .iter()
        .map(|n| format!("{}{}", n.text, n.alt_text))
        .collect()
}
