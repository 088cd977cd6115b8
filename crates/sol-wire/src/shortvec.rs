//! Compact-u16 ("shortvec") length encoding.
//!
//! Every variable-length section of the wire format is prefixed with its
//! element count in this little-endian base-128 varint:
//!
//! - 0..=0x7f        -> 1 byte
//! - 0x80..=0x3fff   -> 2 bytes
//! - 0x4000..=0xffff -> 3 bytes

use crate::error::WireError;

/// Append `value` to `buf` in compact-u16 form.
pub fn append_u16(buf: &mut Vec<u8>, value: u16) {
    let mut rest = value as u32;
    loop {
        let mut byte = (rest & 0x7f) as u8;
        rest >>= 7;
        if rest > 0 {
            byte |= 0x80;
        }
        buf.push(byte);
        if rest == 0 {
            break;
        }
    }
}

/// Read a compact-u16 from the front of `data`.
///
/// Returns `(value, bytes_consumed)`, or an error on truncated input or a
/// value that does not fit in a u16.
pub fn read_u16(data: &[u8]) -> Result<(u16, usize), WireError> {
    let mut value: u32 = 0;
    let mut consumed = 0usize;

    loop {
        let byte = *data.get(consumed).ok_or_else(|| {
            WireError::SerializationError("truncated compact-u16".into())
        })?;
        value |= ((byte & 0x7f) as u32) << (7 * consumed as u32);
        consumed += 1;

        if byte & 0x80 == 0 {
            break;
        }
        // A u16 never needs more than three bytes.
        if consumed == 3 {
            return Err(WireError::SerializationError(
                "compact-u16 continuation past third byte".into(),
            ));
        }
    }

    if value > u16::MAX as u32 {
        return Err(WireError::SerializationError("compact-u16 overflow".into()));
    }

    Ok((value as u16, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_zero_as_single_byte() {
        let mut buf = Vec::new();
        append_u16(&mut buf, 0);
        assert_eq!(buf, vec![0x00]);
    }

    #[test]
    fn one_byte_boundary() {
        let mut buf = Vec::new();
        append_u16(&mut buf, 0x7f);
        assert_eq!(buf, vec![0x7f]);
    }

    #[test]
    fn two_byte_boundary() {
        // 128 -> (0x00 | 0x80), 0x01
        let mut buf = Vec::new();
        append_u16(&mut buf, 128);
        assert_eq!(buf, vec![0x80, 0x01]);
    }

    #[test]
    fn three_byte_boundary() {
        // 16384 -> 0x80, 0x80, 0x01
        let mut buf = Vec::new();
        append_u16(&mut buf, 16384);
        assert_eq!(buf, vec![0x80, 0x80, 0x01]);
    }

    #[test]
    fn max_value_takes_three_bytes() {
        let mut buf = Vec::new();
        append_u16(&mut buf, u16::MAX);
        assert_eq!(buf, vec![0xff, 0xff, 0x03]);
    }

    #[test]
    fn roundtrip_across_boundaries() {
        for value in [0u16, 1, 127, 128, 255, 256, 16383, 16384, 65535] {
            let mut buf = Vec::new();
            append_u16(&mut buf, value);
            let (decoded, len) = read_u16(&buf).unwrap();
            assert_eq!(decoded, value, "roundtrip failed for {value}");
            assert_eq!(len, buf.len());
        }
    }

    #[test]
    fn read_ignores_trailing_bytes() {
        let (value, len) = read_u16(&[0x05, 0xAA, 0xBB]).unwrap();
        assert_eq!(value, 5);
        assert_eq!(len, 1);
    }

    #[test]
    fn read_empty_input_fails() {
        assert!(read_u16(&[]).is_err());
    }

    #[test]
    fn read_truncated_continuation_fails() {
        // Continuation bit set, but no next byte.
        assert!(read_u16(&[0x80]).is_err());
    }

    #[test]
    fn read_overlong_encoding_fails() {
        // Third byte keeps the continuation bit set.
        assert!(read_u16(&[0x80, 0x80, 0x80, 0x01]).is_err());
    }

    #[test]
    fn read_overflow_fails() {
        // 0x04 << 14 = 65536, one past u16::MAX.
        assert!(read_u16(&[0x80, 0x80, 0x04]).is_err());
    }
}
