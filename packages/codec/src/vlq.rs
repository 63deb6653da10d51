//! Base64 VLQ
//!
//! The variable-length quantity encoding used by the `mappings` field.

use crate::error::{Result, SourceMapError};
use smallvec::SmallVec;

const B64_DIGITS: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const VLQ_BASE_SHIFT: u32 = 5;
const VLQ_BASE_MASK: i64 = (1 << VLQ_BASE_SHIFT) - 1;
const VLQ_CONTINUATION_BIT: i64 = 1 << VLQ_BASE_SHIFT;

/// Decoded values of one segment. Segments carry 1, 4 or 5 fields.
pub type SegmentValues = SmallVec<[i64; 5]>;

fn to_base64_digit(value: i64) -> char {
    B64_DIGITS[value as usize] as char
}

fn from_base64_digit(c: u8) -> Option<i64> {
    let value = match c {
        b'A'..=b'Z' => c - b'A',
        b'a'..=b'z' => c - b'a' + 26,
        b'0'..=b'9' => c - b'0' + 52,
        b'+' => 62,
        b'/' => 63,
        _ => return None,
    };
    Some(value as i64)
}

/// Append the VLQ encoding of `value` to `out`.
pub fn encode_vlq_into(value: i64, out: &mut String) {
    let mut vlq = if value < 0 {
        ((-value) << 1) + 1
    } else {
        value << 1
    };

    loop {
        let mut digit = vlq & VLQ_BASE_MASK;
        vlq >>= VLQ_BASE_SHIFT;
        if vlq > 0 {
            digit |= VLQ_CONTINUATION_BIT;
        }
        out.push(to_base64_digit(digit));
        if vlq == 0 {
            break;
        }
    }
}

pub fn encode_vlq(value: i64) -> String {
    let mut out = String::new();
    encode_vlq_into(value, &mut out);
    out
}

/// Decode every VLQ in a single comma-free segment.
pub fn decode_segment(segment: &str) -> Result<SegmentValues> {
    let mut values = SegmentValues::new();
    let mut value: i64 = 0;
    let mut shift: u32 = 0;
    let mut pending = false;

    for byte in segment.bytes() {
        let digit =
            from_base64_digit(byte).ok_or(SourceMapError::InvalidBase64(byte as char))?;
        if shift > 60 {
            return Err(SourceMapError::UnterminatedVlq(segment.to_string()));
        }
        value += (digit & VLQ_BASE_MASK) << shift;
        if digit & VLQ_CONTINUATION_BIT != 0 {
            shift += VLQ_BASE_SHIFT;
            pending = true;
        } else {
            let negate = value & 1 == 1;
            value >>= 1;
            values.push(if negate { -value } else { value });
            value = 0;
            shift = 0;
            pending = false;
        }
    }

    if pending {
        return Err(SourceMapError::UnterminatedVlq(segment.to_string()));
    }
    Ok(values)
}
