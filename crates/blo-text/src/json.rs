//! JSON projection with the same sparsity as the XML one.

use blo_core::PaneTree;
use tracing::debug;

use crate::error::Result;
use crate::sparse::SparsePane;

/// Project the whole tree to pretty-printed JSON.
pub fn to_string(tree: &PaneTree) -> Result<String> {
    let value = to_value(tree)?;
    let text = serde_json::to_string_pretty(&value)?;
    debug!(panes = tree.len(), bytes = text.len(), "projected tree to json");
    Ok(text)
}

pub fn to_value(tree: &PaneTree) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(SparsePane::from_tree(tree, tree.root()))?)
}
