//! XML projection: one `<pane>` element per node, nested in tree order.
//!
//! ```xml
//! <blo>
//!   <pane id="ROOT" visible="false">
//!     <rectangle left="0" top="0" width="640" height="480"/>
//!     <angle>90</angle>
//!     <anchor>Center</anchor>
//!     <alpha inherit="false">128</alpha>
//!     <pane>...</pane>
//!   </pane>
//! </blo>
//! ```

use std::io::Write;

use blo_core::PaneTree;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

use crate::error::Result;
use crate::sparse::SparsePane;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlOptions {
    /// Spaces per nesting level; 0 writes everything on one line.
    pub indent: usize,
    /// Element wrapping the root pane, if any.
    pub root_element: Option<String>,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            root_element: Some("blo".to_string()),
        }
    }
}

/// Project the whole tree to an XML document.
pub fn to_string(tree: &PaneTree, options: &XmlOptions) -> Result<String> {
    let mut writer = if options.indent > 0 {
        Writer::new_with_indent(Vec::new(), b' ', options.indent)
    } else {
        Writer::new(Vec::new())
    };

    if let Some(root) = &options.root_element {
        writer.write_event(Event::Start(BytesStart::new(root.as_str())))?;
    }
    if let Some(sparse) = SparsePane::from_tree(tree, tree.root()) {
        write_pane(&mut writer, &sparse)?;
    }
    if let Some(root) = &options.root_element {
        writer.write_event(Event::End(BytesEnd::new(root.as_str())))?;
    }

    let text = String::from_utf8(writer.into_inner())?;
    debug!(panes = tree.len(), bytes = text.len(), "projected tree to xml");
    Ok(text)
}

/// Write one pane element and, recursively, its children.
pub fn write_pane<W: Write>(writer: &mut Writer<W>, pane: &SparsePane) -> Result<()> {
    let mut start = BytesStart::new("pane");
    if let Some(id) = &pane.id {
        start.push_attribute(("id", id.as_str()));
    }
    if let Some(connect) = pane.connect {
        start.push_attribute(("connect", bool_text(connect)));
    }
    if let Some(visible) = pane.visible {
        start.push_attribute(("visible", bool_text(visible)));
    }
    writer.write_event(Event::Start(start))?;

    let rect = pane.rectangle;
    let (left, top, width, height) = (
        rect.left.to_string(),
        rect.top.to_string(),
        rect.width.to_string(),
        rect.height.to_string(),
    );
    let rectangle = BytesStart::new("rectangle").with_attributes([
        ("left", left.as_str()),
        ("top", top.as_str()),
        ("width", width.as_str()),
        ("height", height.as_str()),
    ]);
    writer.write_event(Event::Empty(rectangle))?;

    if let Some(angle) = pane.angle {
        write_text_element(writer, BytesStart::new("angle"), &angle.to_string())?;
    }
    if let Some(anchor) = &pane.anchor {
        write_text_element(writer, BytesStart::new("anchor"), anchor)?;
    }
    if let Some(alpha) = pane.alpha {
        let start = BytesStart::new("alpha").with_attributes([("inherit", bool_text(alpha.inherit))]);
        write_text_element(writer, start, &alpha.value.to_string())?;
    }

    for child in &pane.children {
        write_pane(writer, child)?;
    }

    writer.write_event(Event::End(BytesEnd::new("pane")))?;
    Ok(())
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, start: BytesStart<'_>, text: &str) -> Result<()> {
    let end = start.to_end().into_owned();
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(end))?;
    Ok(())
}

fn bool_text(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
