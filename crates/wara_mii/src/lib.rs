//! Codec for the packed 96-byte Mii record carried by the WaraWara Plaza
//! feed, plus a deterministic generator for plausible random records.
//!
//! The record is a fixed bit-level layout: a shared schema table describes
//! every field's byte offset, starting bit, width and accepted range, and a
//! small bit codec reads and writes spans that freely cross byte boundaries.
//! The last two bytes are a checksum over the first 94, re-established after
//! every mutation, in the exact bit-serial variant the console computes.
//!
//! ```
//! use wara_mii::{Mii, MiiField};
//!
//! let mut mii = Mii::create_random("a seed", "wuhu", "plaza").unwrap();
//! assert_eq!(mii.name(), "wuhu");
//!
//! mii.set(MiiField::Height, 90).unwrap();
//! let encoded = mii.encode();
//! assert_eq!(Mii::from_encoded(&encoded).unwrap(), mii);
//! ```

mod bits;
mod crc;
mod cycle;
mod error;
mod mii;
mod random;
mod scale;
mod schema;

pub use cycle::BitCycle;
pub use error::MiiError;
pub use mii::{Mii, NAME_UNITS, RECORD_LEN};
pub use schema::{BirthPlatform, FavoriteColor, FieldDescriptor, Gender, MiiField};
