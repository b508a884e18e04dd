//! Binary pane records.
//!
//! Two big-endian layouts describe a single pane:
//!
//! ```text
//! compact  u8 visible | pad 1 | u32 name | i16 left, top, width, height
//! blo1     u8 param_count | u8 visible | pad 2 | u32 name | i16 left, top, width, height
//!          [u16 angle] [u8 anchor] [u8 alpha] [u8 inherit_alpha] | reserved 4
//! ```
//!
//! In `blo1` the first six parameters are always present. Whatever remains of
//! `param_count` selects how many optional fields follow, always as a prefix
//! of the order above. The encoder picks the smallest count that still covers
//! every non-default trailing field.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::{BloError, Result};
use crate::geometry::{Anchor, Rectangle};
use crate::pane::Pane;
use crate::tag::Tag;

/// Parameters every `blo1` record carries before the optional ones.
pub const BLO1_FIXED_PARAMS: u8 = 6;
/// Highest parameter count the encoder emits (all optional fields present).
pub const BLO1_MAX_PARAMS: u8 = 10;
/// Size of a compact record in bytes.
pub const COMPACT_RECORD_LEN: usize = 14;
/// Reserved bytes closing every `blo1` record.
const BLO1_TRAILER_LEN: usize = 4;

/// Wire layout of a pane record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BloFormat {
    Compact,
    Blo1,
}

impl BloFormat {
    /// Resolve a numeric selector: 0 is compact, 1 is `blo1`.
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            0 => Ok(BloFormat::Compact),
            1 => Ok(BloFormat::Blo1),
            other => Err(BloError::UnsupportedFormat(format!("format code {other}"))),
        }
    }

    pub fn code(self) -> u32 {
        match self {
            BloFormat::Compact => 0,
            BloFormat::Blo1 => 1,
        }
    }
}

impl FromStr for BloFormat {
    type Err = BloError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(BloFormat::Compact),
            "blo1" => Ok(BloFormat::Blo1),
            _ => Err(BloError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for BloFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BloFormat::Compact => f.write_str("compact"),
            BloFormat::Blo1 => f.write_str("blo1"),
        }
    }
}

/// Big-endian cursor over a borrowed byte buffer.
#[derive(Debug, Clone)]
pub struct BloReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BloReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let available = self.remaining();
        if available < N {
            return Err(BloError::UnexpectedEof {
                offset: self.pos,
                needed: N,
                available,
            });
        }
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_be_bytes(self.take()?))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_be_bytes(self.take()?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.take()?))
    }

    /// Advance past `count` bytes without interpreting them.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        let available = self.remaining();
        if available < count {
            return Err(BloError::UnexpectedEof {
                offset: self.pos,
                needed: count,
                available,
            });
        }
        self.pos += count;
        Ok(())
    }
}

/// Big-endian byte sink.
#[derive(Debug, Clone, Default)]
pub struct BloWriter {
    buf: Vec<u8>,
}

impl BloWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_i16(&mut self, value: i16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Append `count` zero bytes.
    pub fn pad(&mut self, count: usize) {
        self.buf.resize(self.buf.len() + count, 0);
    }
}

/// Decode one pane record in `format`.
///
/// An exhausted reader is rejected before anything is read, so callers can
/// rely on the reader position being untouched on that error.
pub fn decode_pane(reader: &mut BloReader<'_>, format: BloFormat) -> Result<Pane> {
    if reader.is_exhausted() {
        return Err(BloError::InvalidArgument(format!(
            "no {format} record at offset {}",
            reader.position()
        )));
    }
    match format {
        BloFormat::Compact => decode_compact(reader),
        BloFormat::Blo1 => decode_blo1(reader),
    }
}

fn read_rect(reader: &mut BloReader<'_>) -> Result<Rectangle> {
    let left = reader.read_i16()? as i32;
    let top = reader.read_i16()? as i32;
    let width = reader.read_i16()? as i32;
    let height = reader.read_i16()? as i32;
    Ok(Rectangle::from_origin_size(left, top, width, height))
}

fn decode_compact(reader: &mut BloReader<'_>) -> Result<Pane> {
    let visible = reader.read_u8()? != 0;
    reader.skip(1)?;
    let name = Tag(reader.read_u32()?);
    let rect = read_rect(reader)?;

    let mut pane = Pane::new(name, rect);
    pane.set_visible(visible);
    trace!(%name, ?rect, "decoded compact pane");
    Ok(pane)
}

fn decode_blo1(reader: &mut BloReader<'_>) -> Result<Pane> {
    let param_count = reader.read_u8()?;
    let visible = reader.read_u8()? != 0;
    reader.skip(2)?;
    let name = Tag(reader.read_u32()?);
    let rect = read_rect(reader)?;

    let mut pane = Pane::new(name, rect);
    pane.set_visible(visible);

    let mut budget = param_count.saturating_sub(BLO1_FIXED_PARAMS);
    if budget > 0 {
        pane.set_angle(reader.read_u16()? as f64);
        budget -= 1;
    }
    if budget > 0 {
        pane.set_anchor(Anchor(reader.read_u8()?));
        budget -= 1;
    }
    if budget > 0 {
        pane.set_alpha(reader.read_u8()?);
        budget -= 1;
    }
    if budget > 0 {
        pane.set_inherit_alpha(reader.read_u8()? != 0);
    }

    reader.skip(BLO1_TRAILER_LEN)?;
    trace!(%name, param_count, ?rect, "decoded blo1 pane");
    Ok(pane)
}

/// Smallest `blo1` parameter count that represents every non-default
/// trailing field of `pane`.
pub fn blo1_param_count(pane: &Pane) -> u8 {
    if !pane.inherit_alpha() {
        BLO1_MAX_PARAMS
    } else if pane.alpha() != 255 {
        9
    } else if pane.anchor() != Anchor::TOP_LEFT {
        8
    } else if pane.angle() != 0.0 {
        7
    } else {
        BLO1_FIXED_PARAMS
    }
}

/// Encode `pane` in `format`. Only `blo1` has an encoder.
pub fn encode_pane(pane: &Pane, writer: &mut BloWriter, format: BloFormat) -> Result<()> {
    match format {
        BloFormat::Blo1 => {
            encode_blo1(pane, writer);
            Ok(())
        }
        BloFormat::Compact => Err(BloError::UnsupportedFormat(
            "compact records cannot be encoded".to_string(),
        )),
    }
}

/// Encode `pane` as a `blo1` record.
pub fn encode_blo1(pane: &Pane, writer: &mut BloWriter) {
    let param_count = blo1_param_count(pane);
    let rect = pane.rect();

    writer.write_u8(param_count);
    writer.write_u8(pane.visible() as u8);
    writer.pad(2);
    writer.write_u32(pane.name().value());
    writer.write_i16(rect.left as i16);
    writer.write_i16(rect.top as i16);
    writer.write_i16(rect.width() as i16);
    writer.write_i16(rect.height() as i16);

    let optional = param_count - BLO1_FIXED_PARAMS;
    if optional > 0 {
        writer.write_u16(pane.angle() as u16);
    }
    if optional > 1 {
        writer.write_u8(pane.anchor().value());
    }
    if optional > 2 {
        writer.write_u8(pane.alpha());
    }
    if optional > 3 {
        writer.write_u8(pane.inherit_alpha() as u8);
    }

    writer.pad(BLO1_TRAILER_LEN);
    trace!(name = %pane.name(), param_count, "encoded blo1 pane");
}
