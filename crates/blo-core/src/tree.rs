//! Pane hierarchy assembled from decoded records.
//!
//! Nodes live in an arena; a child's parent link is a [`NodeId`] into the same
//! arena, and each parent owns the ordered list of its children. A record is
//! decoded completely before it is linked, so a failed decode never leaves a
//! half-initialized pane reachable from the tree.

use ego_tree::{NodeId, NodeRef, Tree};
use tracing::debug;

use crate::codec::{self, BloFormat, BloReader, BloWriter};
use crate::error::{BloError, Result};
use crate::pane::Pane;
use crate::tag::Tag;

/// Layout tree with a single owner. The root always exists.
#[derive(Debug, Clone)]
pub struct PaneTree {
    tree: Tree<Pane>,
}

#[allow(clippy::len_without_is_empty)]
impl PaneTree {
    /// Start a tree from an already-built root pane.
    pub fn new(root: Pane) -> Self {
        Self {
            tree: Tree::new(root),
        }
    }

    /// Decode the root record.
    pub fn load_root(reader: &mut BloReader<'_>, format: BloFormat) -> Result<Self> {
        let root = codec::decode_pane(reader, format)?;
        debug!(name = %root.name(), %format, "loaded root pane");
        Ok(Self::new(root))
    }

    /// Decode one record and append it as the last child of `parent`.
    pub fn load_child(
        &mut self,
        parent: NodeId,
        reader: &mut BloReader<'_>,
        format: BloFormat,
    ) -> Result<NodeId> {
        self.ensure_node(parent)?;
        let pane = codec::decode_pane(reader, format)?;
        self.append(parent, pane)
    }

    /// Append an already-built pane as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, pane: Pane) -> Result<NodeId> {
        let name = pane.name();
        let mut node = self.tree.get_mut(parent).ok_or_else(|| unknown_node(parent))?;
        let id = node.append(pane).id();
        debug!(%name, ?parent, ?id, "linked pane");
        Ok(id)
    }

    fn ensure_node(&self, id: NodeId) -> Result<()> {
        self.tree.get(id).map(|_| ()).ok_or_else(|| unknown_node(id))
    }

    pub fn root(&self) -> NodeId {
        self.tree.root().id()
    }

    pub fn root_pane(&self) -> &Pane {
        self.tree.root().value()
    }

    pub fn pane(&self, id: NodeId) -> Option<&Pane> {
        self.tree.get(id).map(|node| node.value())
    }

    /// Run `f` against the pane at `id`, returning `None` for unknown ids.
    pub fn with_pane_mut<R>(&mut self, id: NodeId, f: impl FnOnce(&mut Pane) -> R) -> Option<R> {
        let mut node = self.tree.get_mut(id)?;
        Some(f(node.value()))
    }

    /// Non-owning link to the parent, `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.get(id)?.parent().map(|node| node.id())
    }

    /// Children of `id` in insertion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.tree
            .get(id)
            .into_iter()
            .flat_map(|node| node.children().map(|child| child.id()))
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }

    pub fn child(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.children(id).nth(index)
    }

    /// Number of panes in the tree.
    pub fn len(&self) -> usize {
        self.tree.root().descendants().count()
    }

    /// Every node id in depth-first pre-order, starting at the root.
    pub fn preorder(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.tree.root().descendants().map(|node| node.id())
    }

    /// First pane named `name` in depth-first pre-order.
    pub fn search(&self, name: Tag) -> Option<NodeId> {
        self.search_node(self.tree.root(), name)
    }

    /// Like [`PaneTree::search`], limited to the subtree rooted at `from`.
    pub fn search_from(&self, from: NodeId, name: Tag) -> Option<NodeId> {
        self.search_node(self.tree.get(from)?, name)
    }

    fn search_node(&self, start: NodeRef<'_, Pane>, name: Tag) -> Option<NodeId> {
        let found = start
            .descendants()
            .find(|node| node.value().name() == name)
            .map(|node| node.id());
        if found.is_none() {
            debug!(%name, "pane not found");
        }
        found
    }

    /// Encode a single node's `blo1` record.
    pub fn encode_blo1(&self, id: NodeId, writer: &mut BloWriter) -> Result<()> {
        let pane = self.pane(id).ok_or_else(|| unknown_node(id))?;
        codec::encode_blo1(pane, writer);
        Ok(())
    }

    /// Encode every record in pre-order. Framing between records is the caller's job.
    pub fn encode_preorder_blo1(&self, writer: &mut BloWriter) {
        for node in self.tree.root().descendants() {
            codec::encode_blo1(node.value(), writer);
        }
    }

    /// Log one line per pane, indented by depth.
    pub fn log_tree(&self) {
        for node in self.tree.root().descendants() {
            let pad = "  ".repeat(node.ancestors().count());
            let pane = node.value();
            debug!(
                "{}{} {:?} alpha={} visible={}",
                pad,
                pane.name(),
                pane.rect(),
                pane.alpha(),
                pane.visible()
            );
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<NodeRef<'_, Pane>> {
        self.tree.get(id)
    }
}

fn unknown_node(id: NodeId) -> BloError {
    BloError::InvalidArgument(format!("node {id:?} is not part of this tree"))
}
