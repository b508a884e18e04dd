//! Per-frame traversal that feeds computed attributes to a render façade.
//!
//! The pass walks the tree in pre-order and, for every pane that is drawn,
//! computes its cumulative alpha and transforms into a [`PaneFrame`]. Those
//! values exist only for the duration of the pass; nothing is written back
//! into the tree.

use std::collections::HashMap;

use bitflags::bitflags;
use ego_tree::{NodeId, NodeRef};
use tracing::debug;

use crate::geometry::Rectangle;
use crate::inherit::{cumulative_alpha, local_transform};
use crate::pane::{Pane, PaneKind};
use crate::transform::Transform2D;
use crate::tree::PaneTree;

bitflags! {
    /// Switches that change how a pass treats panes.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct RenderFlags: u32 {
        /// Draw panes whose `visible` flag is cleared (diagnostic preview).
        const SHOW_INVISIBLE = 1 << 0;
        /// Outline every plain pane's rectangle.
        const PANE_WIREFRAME = 1 << 1;
    }
}

/// Settings threaded explicitly through a render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub flags: RenderFlags,
}

impl RenderContext {
    pub fn new(flags: RenderFlags) -> Self {
        Self { flags }
    }

    pub fn show_invisible(&self) -> bool {
        self.flags.contains(RenderFlags::SHOW_INVISIBLE)
    }

    pub fn pane_wireframe(&self) -> bool {
        self.flags.contains(RenderFlags::PANE_WIREFRAME)
    }
}

/// Values computed for one pane during a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneFrame {
    /// Transform relative to the parent's space.
    pub local: Transform2D,
    /// Parent world transform composed with `local`.
    pub world: Transform2D,
    pub cumulative_alpha: u8,
    pub rect: Rectangle,
}

/// Drawing backend driven by a render pass. Receives panes read-only.
pub trait RenderFacade {
    /// Enter a pane; its children follow before the matching `pop_pane`.
    fn push_pane(&mut self, id: NodeId, pane: &Pane, frame: &PaneFrame);

    /// Outline `rect` in white using the frame's transform and alpha.
    fn stroke_wireframe(&mut self, rect: Rectangle, frame: &PaneFrame);

    fn pop_pane(&mut self);
}

/// Whether `pane` and its subtree take part in a pass.
pub fn should_draw(pane: &Pane, ctx: &RenderContext) -> bool {
    (pane.visible() || ctx.show_invisible()) && !pane.rect().is_empty()
}

/// Run one pass over `tree`, driving `facade`. Returns the number of panes drawn.
pub fn render(tree: &PaneTree, ctx: &RenderContext, facade: &mut dyn RenderFacade) -> usize {
    let mut drawn = 0;
    if let Some(root) = tree.node(tree.root()) {
        walk(root, None, ctx, &mut |node, frame, event| match event {
            Visit::Enter => {
                drawn += 1;
                let pane = node.value();
                facade.push_pane(node.id(), pane, frame);
                draw_self(pane, frame, ctx, facade);
            }
            Visit::Leave => facade.pop_pane(),
        });
    }
    debug!(drawn, flags = ?ctx.flags, "render pass complete");
    drawn
}

/// Run a pass without a façade and collect every drawn pane's frame.
pub fn compute_frames(tree: &PaneTree, ctx: &RenderContext) -> HashMap<NodeId, PaneFrame> {
    let mut frames = HashMap::new();
    if let Some(root) = tree.node(tree.root()) {
        walk(root, None, ctx, &mut |node, frame, event| {
            if let Visit::Enter = event {
                frames.insert(node.id(), *frame);
            }
        });
    }
    frames
}

fn draw_self(pane: &Pane, frame: &PaneFrame, ctx: &RenderContext, facade: &mut dyn RenderFacade) {
    match pane.kind() {
        PaneKind::Pane => {
            if ctx.pane_wireframe() {
                facade.stroke_wireframe(pane.rect(), frame);
            }
        }
    }
}

enum Visit {
    Enter,
    Leave,
}

fn walk<'a, F>(node: NodeRef<'a, Pane>, parent: Option<&PaneFrame>, ctx: &RenderContext, visit: &mut F)
where
    F: FnMut(NodeRef<'a, Pane>, &PaneFrame, Visit),
{
    let pane = node.value();
    if !should_draw(pane, ctx) {
        return;
    }

    let local = local_transform(pane);
    let frame = PaneFrame {
        local,
        world: parent.map_or(local, |parent| parent.world.then(&local)),
        cumulative_alpha: cumulative_alpha(
            pane.alpha(),
            pane.inherit_alpha(),
            parent.map(|parent| parent.cumulative_alpha),
        ),
        rect: pane.rect(),
    };

    visit(node, &frame, Visit::Enter);
    for child in node.children() {
        walk(child, Some(&frame), ctx, visit);
    }
    visit(node, &frame, Visit::Leave);
}

/// Commands recorded by [`DisplayList`].
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    PushPane {
        id: NodeId,
        transform: Transform2D,
        alpha: u8,
        rect: Rectangle,
    },
    StrokeRect {
        rect: Rectangle,
        transform: Transform2D,
        alpha: u8,
    },
    PopPane,
}

/// Façade that records the pass instead of drawing it.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    pub commands: Vec<Command>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of pushed panes in draw order.
    pub fn drawn(&self) -> Vec<NodeId> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                Command::PushPane { id, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }
}

impl RenderFacade for DisplayList {
    fn push_pane(&mut self, id: NodeId, _pane: &Pane, frame: &PaneFrame) {
        self.commands.push(Command::PushPane {
            id,
            transform: frame.world,
            alpha: frame.cumulative_alpha,
            rect: frame.rect,
        });
    }

    fn stroke_wireframe(&mut self, rect: Rectangle, frame: &PaneFrame) {
        self.commands.push(Command::StrokeRect {
            rect,
            transform: frame.world,
            alpha: frame.cumulative_alpha,
        });
    }

    fn pop_pane(&mut self) {
        self.commands.push(Command::PopPane);
    }
}
