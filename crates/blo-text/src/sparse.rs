use blo_core::{Anchor, NodeId, Pane, PaneTree};
use serde::Serialize;

/// Rectangle as origin and size, matching the binary record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SparseRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SparseAlpha {
    pub value: u8,
    pub inherit: bool,
}

/// Attributes of one pane that differ from their defaults, plus its children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SparsePane {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    pub rectangle: SparseRect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<SparseAlpha>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SparsePane>,
}

impl SparsePane {
    /// Project a single pane without its children.
    pub fn from_pane(pane: &Pane) -> Self {
        let rect = pane.rect();
        Self {
            id: (!pane.name().is_none()).then(|| pane.name().unpack()),
            connect: pane.connect_parent().then_some(true),
            visible: (!pane.visible()).then_some(false),
            rectangle: SparseRect {
                left: rect.left,
                top: rect.top,
                width: rect.width(),
                height: rect.height(),
            },
            angle: (pane.angle() != 0.0).then(|| pane.angle() as u16),
            anchor: (pane.anchor() != Anchor::TOP_LEFT).then(|| pane.anchor().to_string()),
            alpha: (pane.alpha() != 255 || !pane.inherit_alpha()).then(|| SparseAlpha {
                value: pane.alpha(),
                inherit: pane.inherit_alpha(),
            }),
            children: Vec::new(),
        }
    }

    /// Project the subtree rooted at `id`, children in tree order.
    pub fn from_tree(tree: &PaneTree, id: NodeId) -> Option<Self> {
        let mut sparse = Self::from_pane(tree.pane(id)?);
        sparse.children = tree
            .children(id)
            .filter_map(|child| Self::from_tree(tree, child))
            .collect();
        Some(sparse)
    }
}
