//! Raw bit-span access into a byte buffer.
//!
//! The two functions here are the only place the crate does bit arithmetic
//! across byte boundaries; everything above them works in whole fields.
//! Bit 0 is the lowest-order bit of a byte, and a multi-byte span packs its
//! first bit into bit 0 of the resulting integer.

const fn low_mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

const fn low_mask8(width: u32) -> u8 {
    ((1u16 << width) - 1) as u8
}

fn check_span(len: usize, byte_offset: usize, bit_offset: u32, width: u32) {
    assert!(bit_offset < 8, "bit offset {bit_offset} out of range");
    assert!((1..=64).contains(&width), "width {width} out of range");
    let last = byte_offset + ((bit_offset + width) as usize).div_ceil(8);
    assert!(last <= len, "bit span ends at byte {last}, buffer is {len}");
}

/// Read `width` bits starting at `bit_offset` of `byte_offset`.
pub(crate) fn get_bits(buf: &[u8], byte_offset: usize, bit_offset: u32, width: u32) -> u64 {
    check_span(buf.len(), byte_offset, bit_offset, width);

    let head = 8 - bit_offset;
    if width <= head {
        return ((buf[byte_offset] >> bit_offset) as u64) & low_mask(width);
    }

    let mut out = (buf[byte_offset] >> bit_offset) as u64;
    let mut filled = head;
    let mut index = byte_offset + 1;

    while filled + 8 <= width {
        out |= (buf[index] as u64) << filled;
        filled += 8;
        index += 1;
    }

    if filled < width {
        let tail = width - filled;
        out |= ((buf[index] & low_mask8(tail)) as u64) << filled;
    }

    out
}

/// Write the low `width` bits of `value` starting at `bit_offset` of
/// `byte_offset`. Bits outside the span are left untouched.
pub(crate) fn set_bits(buf: &mut [u8], byte_offset: usize, bit_offset: u32, width: u32, value: u64) {
    check_span(buf.len(), byte_offset, bit_offset, width);

    let value = value & low_mask(width);
    let head = 8 - bit_offset;

    if width <= head {
        let mask = low_mask8(width) << bit_offset;
        buf[byte_offset] = (buf[byte_offset] & !mask) | ((value as u8) << bit_offset);
        return;
    }

    // First partial byte: keep the low `bit_offset` bits as they were.
    buf[byte_offset] = (buf[byte_offset] & low_mask8(bit_offset)) | ((value as u8) << bit_offset);

    let mut scratch = value >> head;
    let mut remaining = width - head;
    let mut index = byte_offset + 1;

    while remaining >= 8 {
        buf[index] = scratch as u8;
        scratch >>= 8;
        remaining -= 8;
        index += 1;
    }

    if remaining > 0 {
        let mask = low_mask8(remaining);
        buf[index] = (buf[index] & !mask) | (scratch as u8 & mask);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_round_trip() {
        let mut buf = [0u8; 4];
        set_bits(&mut buf, 1, 2, 4, 0b1011);
        assert_eq!(buf, [0, 0b0010_1100, 0, 0]);
        assert_eq!(get_bits(&buf, 1, 2, 4), 0b1011);
    }

    #[test]
    fn spans_cross_byte_boundaries() {
        let mut buf = [0u8; 4];
        // 10 bits at byte 1 bit 6: two head bits, then all of byte 2.
        set_bits(&mut buf, 1, 6, 10, 0b10_1100_1101);
        assert_eq!(get_bits(&buf, 1, 6, 10), 0b10_1100_1101);
        assert_eq!(buf[0], 0);
        assert_eq!(buf[1] & 0b0011_1111, 0);
    }

    #[test]
    fn writes_do_not_disturb_neighbors() {
        let mut buf = [0xFFu8; 6];
        set_bits(&mut buf, 1, 3, 17, 0);
        assert_eq!(get_bits(&buf, 1, 3, 17), 0);
        // Everything outside the span is still set.
        assert_eq!(buf[0], 0xFF);
        assert_eq!(buf[1] & 0b0000_0111, 0b0000_0111);
        assert_eq!(buf[3] & 0b1111_0000, 0b1111_0000);
        assert_eq!(buf[4], 0xFF);
    }

    #[test]
    fn full_width_field() {
        let mut buf = [0u8; 9];
        set_bits(&mut buf, 0, 0, 64, u64::MAX);
        assert_eq!(get_bits(&buf, 0, 0, 64), u64::MAX);
        assert_eq!(buf[8], 0);

        let mut buf = [0u8; 10];
        set_bits(&mut buf, 1, 4, 64, 0xDEAD_BEEF_CAFE_F00D);
        assert_eq!(get_bits(&buf, 1, 4, 64), 0xDEAD_BEEF_CAFE_F00D);
        assert_eq!(buf[1] & 0x0F, 0);
    }

    #[test]
    fn value_is_truncated_to_width() {
        let mut buf = [0u8; 2];
        set_bits(&mut buf, 0, 0, 3, 0xFF);
        assert_eq!(get_bits(&buf, 0, 0, 3), 0b111);
        assert_eq!(buf[0], 0b0000_0111);
    }

    #[test]
    #[should_panic(expected = "bit span")]
    fn out_of_range_span_panics() {
        let buf = [0u8; 4];
        let _ = get_bits(&buf, 3, 4, 8);
    }
}
