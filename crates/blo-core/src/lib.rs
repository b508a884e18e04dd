//! blo-core: pane records, the pane tree, and the attributes a render pass
//! derives from it.
//!
//! Records are decoded one at a time by [`codec`] and linked into a
//! [`PaneTree`]. The tree can be re-encoded, searched by name, or walked by a
//! [`render`] pass that hands transforms and cumulative alpha to a
//! [`RenderFacade`].

pub mod codec;
mod error;
pub mod geometry;
pub mod inherit;
mod pane;
pub mod render;
pub mod tag;
mod transform;
mod tree;

pub use codec::{BloFormat, BloReader, BloWriter, decode_pane, encode_pane};
pub use ego_tree::NodeId;
pub use error::{BloError, Result};
pub use geometry::{Anchor, CullMode, Point, Rectangle};
pub use pane::{Pane, PaneInfo, PaneKind};
pub use render::{
    Command, DisplayList, PaneFrame, RenderContext, RenderFacade, RenderFlags, compute_frames,
};
pub use tag::Tag;
pub use transform::Transform2D;
pub use tree::PaneTree;
