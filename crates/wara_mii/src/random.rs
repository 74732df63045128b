//! Deterministic record synthesis.

use crate::cycle::BitCycle;
use crate::error::MiiError;
use crate::mii::Mii;
use crate::scale::scale;
use crate::schema::{BirthPlatform, MiiField};
use xxhash_rust::xxh64::xxh64;

/// MAC identifier stamped on every generated record.
const GENERATED_MAC: u64 = 0x40F4_07A3_85D6;

/// Creation date sentinel stamped on every generated record.
const GENERATED_DATE: u64 = 0x0100_0000;

const DIGEST_LEN: usize = 32;

/// Stretch a seed string into the byte buffer the bit cycle runs over.
/// Four xxh64 lanes, little-endian, so equal seeds always give equal
/// buffers and the cycle has a 256-bit period.
fn seed_digest(seed: &str) -> [u8; DIGEST_LEN] {
    let mut digest = [0u8; DIGEST_LEN];
    for (lane, chunk) in digest.chunks_exact_mut(8).enumerate() {
        chunk.copy_from_slice(&xxh64(seed.as_bytes(), lane as u64).to_le_bytes());
    }
    digest
}

impl Mii {
    /// Synthesize a plausible record from a seed.
    ///
    /// Every schema field except the structural ones is filled by reading
    /// its width from a bit cycle over the seed digest and rescaling the raw
    /// bits into the field's declared range, walking fields in schema order.
    /// The structural fields are then pinned to canonical values: a version-0,
    /// copy-allowed, valid, normal record born on Cafe, shareable, with the
    /// given names, a sentinel creation date and a fixed MAC. The same seed
    /// always yields a byte-identical record.
    pub fn create_random(seed: &str, name: &str, creator_name: &str) -> Result<Mii, MiiError> {
        let digest = seed_digest(seed);
        let mut cycle = BitCycle::new(&digest);
        let mut mii = Mii::new();

        for field in MiiField::ALL {
            if !field.randomized() {
                continue;
            }
            let d = field.descriptor();
            let raw = cycle.read(d.width_bits);
            let raw_max = if d.width_bits == 64 {
                u64::MAX
            } else {
                (1u64 << d.width_bits) - 1
            };
            mii.set(field, scale(raw, 0, raw_max, d.min, d.max))?;
        }

        mii.set_version(0)?;
        mii.set_flag(MiiField::Copyable, true);
        mii.set_flag(MiiField::NgWord, false);
        mii.set(MiiField::RegionMove, 0)?;
        mii.set_birth_platform(BirthPlatform::Cafe)?;
        mii.set(MiiField::FontRegion, 0)?;
        mii.set_flag(MiiField::Normal, true);
        mii.set_flag(MiiField::NonUser, false);
        mii.set_flag(MiiField::Valid, true);
        mii.set_name(name)?;
        mii.set_create_date(GENERATED_DATE)?;
        mii.set_flag(MiiField::LocalOnly, false);
        mii.set_creator_name(creator_name)?;
        mii.set_flag(MiiField::NtrOrigin, true);
        mii.set_system_mac(GENERATED_MAC)?;

        Ok(mii)
    }
}
