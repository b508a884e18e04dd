//! blo: decode, re-encode, and project pane layout records.
//!
//! Re-exports the workspace crates and adds the glue that ties configuration
//! to the codec, the render pass, and the text projector.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub use blo_config::{BloConfig, ConfigError};
pub use blo_core::*;
pub use blo_text::{self as text, XmlOptions};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "BLO_LOG";

/// Install a fmt subscriber filtered by `BLO_LOG` (default `info`).
/// Calling it again once a subscriber is set does nothing.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// XML options taken from the `[text]` table.
pub fn xml_options(config: &BloConfig) -> XmlOptions {
    let root = &config.text.root_element;
    XmlOptions {
        indent: config.text.indent,
        root_element: (!root.is_empty()).then(|| root.clone()),
    }
}

/// Decode one record from `bytes` in the configured format.
pub fn decode_record(bytes: &[u8], config: &BloConfig) -> Result<Pane> {
    let format = config.codec_format().context("codec format")?;
    let mut reader = BloReader::new(bytes);
    decode_pane(&mut reader, format).with_context(|| format!("failed to decode {format} record"))
}

/// Re-encode every pane of `tree` as consecutive `blo1` records.
pub fn encode_tree(tree: &PaneTree) -> Vec<u8> {
    let mut writer = BloWriter::new();
    tree.encode_preorder_blo1(&mut writer);
    writer.into_bytes()
}

/// Project `tree` to XML using the configured layout.
pub fn project_xml(tree: &PaneTree, config: &BloConfig) -> Result<String> {
    text::xml::to_string(tree, &xml_options(config)).context("failed to project tree to XML")
}

/// Run a render pass with the configured flags.
pub fn render_with(tree: &PaneTree, config: &BloConfig, facade: &mut dyn RenderFacade) -> usize {
    render::render(tree, &config.render_context(), facade)
}
