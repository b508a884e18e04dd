//! Pane records: the persistent attributes of one layout node.

use std::fmt;

use crate::geometry::{Anchor, CullMode, Rectangle};
use crate::tag::Tag;

/// Kind tag for pane records. Specialized kinds extend the base record and
/// add their own render contribution; dispatch happens by matching on this tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PaneKind {
    /// Plain positioned rectangle with no content of its own.
    #[default]
    Pane,
}

impl PaneKind {
    /// Whether panes of this kind may be linked to their parent's layout.
    pub fn supports_connect_parent(self) -> bool {
        match self {
            PaneKind::Pane => false,
        }
    }
}

/// Persistent state of one node in the layout tree.
///
/// Parent and child links are owned by [`crate::PaneTree`]; per-frame values
/// such as cumulative alpha live in [`crate::PaneFrame`] and are never stored
/// here.
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    kind: PaneKind,
    name: Tag,
    visible: bool,
    rect: Rectangle,
    cull_mode: CullMode,
    anchor: Anchor,
    angle: f64,
    alpha: u8,
    inherit_alpha: bool,
    connect_parent: bool,
}

impl Default for Pane {
    fn default() -> Self {
        Self {
            kind: PaneKind::Pane,
            name: Tag::NONE,
            visible: true,
            rect: Rectangle::default(),
            cull_mode: CullMode::None,
            anchor: Anchor::TOP_LEFT,
            angle: 0.0,
            alpha: 255,
            inherit_alpha: true,
            connect_parent: false,
        }
    }
}

impl Pane {
    pub fn new(name: Tag, rect: Rectangle) -> Self {
        Self {
            name,
            rect,
            ..Self::default()
        }
    }

    pub fn kind(&self) -> PaneKind {
        self.kind
    }
    pub fn name(&self) -> Tag {
        self.name
    }
    pub fn visible(&self) -> bool {
        self.visible
    }
    pub fn rect(&self) -> Rectangle {
        self.rect
    }
    pub fn cull_mode(&self) -> CullMode {
        self.cull_mode
    }
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }
    pub fn angle(&self) -> f64 {
        self.angle
    }
    pub fn alpha(&self) -> u8 {
        self.alpha
    }
    pub fn inherit_alpha(&self) -> bool {
        self.inherit_alpha
    }
    pub fn connect_parent(&self) -> bool {
        self.connect_parent
    }

    // Setters hand back the previous value.

    pub fn set_name(&mut self, name: Tag) -> Tag {
        std::mem::replace(&mut self.name, name)
    }
    pub fn set_visible(&mut self, visible: bool) -> bool {
        std::mem::replace(&mut self.visible, visible)
    }
    pub fn set_rect(&mut self, rect: Rectangle) -> Rectangle {
        std::mem::replace(&mut self.rect, rect)
    }
    pub fn set_cull_mode(&mut self, cull_mode: CullMode) {
        self.cull_mode = cull_mode;
    }
    pub fn set_anchor(&mut self, anchor: Anchor) {
        self.anchor = anchor;
    }
    pub fn set_angle(&mut self, angle: f64) -> f64 {
        std::mem::replace(&mut self.angle, angle)
    }
    pub fn set_alpha(&mut self, alpha: u8) -> u8 {
        std::mem::replace(&mut self.alpha, alpha)
    }
    pub fn set_inherit_alpha(&mut self, inherit: bool) -> bool {
        std::mem::replace(&mut self.inherit_alpha, inherit)
    }

    /// Request a layout link to the parent. Kinds that do not support it keep
    /// the flag cleared; the returned value is the flag now in effect.
    pub fn set_connect_parent(&mut self, connect: bool) -> bool {
        self.connect_parent = connect && self.kind.supports_connect_parent();
        self.connect_parent
    }

    /// Move the rectangle's origin, keeping its size.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.rect.move_to(x, y);
    }
    /// Translate the rectangle.
    pub fn offset(&mut self, dx: i32, dy: i32) {
        self.rect.offset(dx, dy);
    }
    pub fn resize(&mut self, width: i32, height: i32) {
        self.rect.resize(width, height);
    }
    pub fn reform(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        self.rect.reform(left, top, right, bottom);
    }

    /// Human-readable multi-line dump of every attribute.
    pub fn info(&self) -> PaneInfo<'_> {
        PaneInfo(self)
    }
}

/// Display adapter returned by [`Pane::info`].
pub struct PaneInfo<'a>(&'a Pane);

impl fmt::Display for PaneInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pane = self.0;
        let rect = pane.rect;
        let raw: String = pane.name.raw_chars().iter().collect();
        writeln!(f, "Name : 0x{:08X} '{}'", pane.name.value(), raw)?;
        writeln!(
            f,
            "Rectangle : {}, {}, {}, {} ({}, {}) : ({}x{})",
            rect.left,
            rect.top,
            rect.right,
            rect.bottom,
            rect.left,
            rect.top,
            rect.width(),
            rect.height()
        )?;
        if pane.angle != 0.0 {
            writeln!(f, "Angle : {:.2}°", pane.angle)?;
        }
        writeln!(f, "Anchor : {}", pane.anchor)?;
        writeln!(f, "Cull Mode : {}", pane.cull_mode)?;
        writeln!(f, "Alpha : {:.1}%", pane.alpha as f64 / 255.0 * 100.0)?;
        writeln!(f, "Visible : {}", pane.visible)?;
        write!(f, "Flags :")?;
        if pane.inherit_alpha {
            write!(f, " (inherit alpha)")?;
        }
        if pane.connect_parent {
            write!(f, " (connect parent)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let pane = Pane::default();
        assert_eq!(pane.kind(), PaneKind::Pane);
        assert!(pane.name().is_none());
        assert!(pane.visible());
        assert_eq!(pane.cull_mode(), CullMode::None);
        assert_eq!(pane.anchor(), Anchor::TOP_LEFT);
        assert_eq!(pane.angle(), 0.0);
        assert_eq!(pane.alpha(), 255);
        assert!(pane.inherit_alpha());
        assert!(!pane.connect_parent());
    }

    #[test]
    fn test_setters_return_previous_value() {
        let mut pane = Pane::new(Tag::pack("ROOT"), Rectangle::new(0, 0, 10, 10));
        assert_eq!(pane.set_name(Tag::pack("MAIN")), Tag::pack("ROOT"));
        assert!(pane.set_visible(false));
        assert_eq!(pane.set_alpha(128), 255);
        assert_eq!(pane.set_alpha(64), 128);
        assert_eq!(pane.set_angle(90.0), 0.0);
        assert!(pane.set_inherit_alpha(false));
        assert_eq!(
            pane.set_rect(Rectangle::new(1, 1, 2, 2)),
            Rectangle::new(0, 0, 10, 10)
        );
    }

    #[test]
    fn test_plain_pane_refuses_connect_parent() {
        let mut pane = Pane::default();
        assert!(!pane.set_connect_parent(true));
        assert!(!pane.connect_parent());
    }

    #[test]
    fn test_geometry_forwarding() {
        let mut pane = Pane::new(Tag::NONE, Rectangle::new(0, 0, 100, 50));
        pane.move_to(10, 10);
        assert_eq!(pane.rect(), Rectangle::new(10, 10, 110, 60));
        pane.offset(5, -5);
        assert_eq!(pane.rect(), Rectangle::new(15, 5, 115, 55));
        pane.resize(20, 20);
        assert_eq!(pane.rect(), Rectangle::new(15, 5, 35, 25));
        pane.reform(0, 0, 1, 1);
        assert_eq!(pane.rect(), Rectangle::new(0, 0, 1, 1));
    }

    #[test]
    fn test_info_dump() {
        let mut pane = Pane::new(Tag(0x0000_4243), Rectangle::new(0, 0, 100, 50));
        pane.set_angle(45.0);
        pane.set_anchor(Anchor::CENTER);
        let text = pane.info().to_string();
        assert!(text.starts_with("Name : 0x00004243 '\0\0BC'"));
        assert!(text.contains("Rectangle : 0, 0, 100, 50 (0, 0) : (100x50)"));
        assert!(text.contains("Angle : 45.00°"));
        assert!(text.contains("Anchor : Center"));
        assert!(text.contains("Alpha : 100.0%"));
        assert!(text.ends_with("Flags : (inherit alpha)"));
    }
}
