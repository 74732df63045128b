//! Deterministic bit source for procedural generation.

/// A circular bit reader over a byte buffer.
///
/// Bits come out lowest-order-first within each byte, and the first bit read
/// becomes bit 0 of the returned value, matching the field codec's packing.
/// Reading past the end of the buffer wraps back to the start; the source is
/// cyclic, not linear. Identical buffers and read-width sequences always
/// produce identical output.
#[derive(Debug)]
pub struct BitCycle<'a> {
    bits: &'a [u8],
    total_bits: u64,
    position: u64,
}

impl<'a> BitCycle<'a> {
    /// Wrap a byte buffer. Panics on an empty buffer.
    pub fn new(bits: &'a [u8]) -> Self {
        assert!(!bits.is_empty(), "a bit cycle needs at least one byte");
        BitCycle {
            bits,
            total_bits: bits.len() as u64 * 8,
            position: 0,
        }
    }

    /// Consume `count` bits (1..=64), packed low-order-first.
    pub fn read(&mut self, count: u32) -> u64 {
        assert!((1..=64).contains(&count), "count {count} out of range");

        let mut out = 0u64;
        for i in 0..count {
            let byte = (self.position / 8) as usize;
            let bit = (self.position % 8) as u32;
            out |= (((self.bits[byte] >> bit) & 1) as u64) << i;

            self.position += 1;
            if self.position >= self.total_bits {
                self.position = 0;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::BitCycle;

    #[test]
    fn packs_low_order_first() {
        // 0xB4 = 0b1011_0100: bits from bit 0 up are 0,0,1,0,1,1,0,1.
        let mut cycle = BitCycle::new(&[0xB4]);
        assert_eq!(cycle.read(4), 0b0100);
        assert_eq!(cycle.read(4), 0b1011);
    }

    #[test]
    fn wraps_around() {
        let buf = [0xA5, 0x3C];
        let mut a = BitCycle::new(&buf);
        let first = a.read(12);

        // A full 16-bit period lands back at the start, so the same 12 bits
        // come out again.
        let mut b = BitCycle::new(&buf);
        let _ = b.read(16);
        assert_eq!(b.read(12), first);
    }

    #[test]
    fn reads_longer_than_the_buffer_are_legal() {
        let mut cycle = BitCycle::new(&[0xFF]);
        assert_eq!(cycle.read(64), u64::MAX);
        let mut cycle = BitCycle::new(&[0b0000_0001]);
        // The single set bit recurs every 8 positions.
        assert_eq!(cycle.read(16), 0x0101);
    }

    #[test]
    fn deterministic_across_instances() {
        let buf = [0x12, 0x34, 0x56, 0x78];
        let mut a = BitCycle::new(&buf);
        let mut b = BitCycle::new(&buf);
        for width in [3, 7, 11, 64, 1, 5] {
            assert_eq!(a.read(width), b.read(width));
        }
    }
}
