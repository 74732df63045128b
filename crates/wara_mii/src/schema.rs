//! The fixed layout of the 96-byte record.
//!
//! Every bit of the record belongs to exactly one field. Reserved bits are
//! covered by the `Blank*`/`Unknown*` fields, which carry `min == max == 0`.
//! The trailing two bytes are the [`MiiField::Checksum`] field, maintained by
//! the checksum engine rather than written directly.

/// One bit range of the packed record.
///
/// `bit_offset` counts from bit 0 (lowest order) of the byte at
/// `byte_offset`; a field may spill into as many following bytes as
/// `width_bits` needs. `min..=max` is the logical domain accepted by
/// [`crate::Mii::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Byte the field starts in.
    pub byte_offset: usize,
    /// First bit within that byte, 0..=7, lowest order first.
    pub bit_offset: u32,
    /// Total width in bits.
    pub width_bits: u32,
    /// Smallest accepted logical value.
    pub min: u64,
    /// Largest accepted logical value.
    pub max: u64,
}

const fn field(
    byte_offset: usize,
    bit_offset: u32,
    width_bits: u32,
    min: u64,
    max: u64,
) -> FieldDescriptor {
    FieldDescriptor {
        byte_offset,
        bit_offset,
        width_bits,
        min,
        max,
    }
}

/// Number of fields in the schema.
pub const FIELD_COUNT: usize = 83;

/// Identifier for every field of the record, in schema order.
///
/// Generation walks these in declaration order, so the order is part of the
/// deterministic contract of [`crate::Mii::create_random`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum MiiField {
    Version,
    Copyable,
    NgWord,
    RegionMove,
    FontRegion,
    Blank1,
    RoomIndex,
    PositionInRoom,
    Unknown1,
    BirthPlatform,
    Blank2,
    SystemMac,
    CreateDate,
    Valid,
    NonUser,
    NtrOrigin,
    Normal,
    DeviceId,
    Blank3,
    Gender,
    BirthMonth,
    BirthDay,
    FavoriteColor,
    Favorite,
    Blank4,
    Name,
    Height,
    Build,
    LocalOnly,
    FacelineType,
    FacelineColor,
    FacelineWrinkle,
    FacelineMake,
    HairType,
    HairColor,
    HairFlip,
    Blank5,
    EyeType,
    EyeColor,
    EyeScale,
    EyeAspect,
    EyeRotate,
    EyeX,
    EyeY,
    Blank6,
    EyebrowType,
    EyebrowColor,
    EyebrowScale,
    EyebrowAspect,
    Blank7,
    EyebrowRotate,
    Blank8,
    EyebrowX,
    EyebrowY,
    Blank9,
    NoseType,
    NoseScale,
    NoseY,
    Blank10,
    MouthType,
    MouthColor,
    MouthScale,
    MouthAspect,
    MouthY,
    MustacheType,
    Unknown2,
    BeardType,
    BeardColor,
    MustacheScale,
    MustacheY,
    Blank11,
    GlassType,
    GlassColor,
    GlassScale,
    GlassY,
    MoleType,
    MoleScale,
    MoleX,
    MoleY,
    Blank12,
    CreatorName,
    Blank13,
    Checksum,
}

/// Descriptor table, indexed by [`MiiField`] discriminant.
static SCHEMA: [FieldDescriptor; FIELD_COUNT] = [
    field(0, 0, 8, 0x03, 0x03),          // Version
    field(1, 0, 1, 1, 1),                // Copyable
    field(1, 1, 1, 0, 0),                // NgWord
    field(1, 2, 2, 0, 3),                // RegionMove
    field(1, 4, 2, 0, 3),                // FontRegion
    field(1, 6, 2, 0, 0),                // Blank1
    field(2, 0, 4, 0, 9),                // RoomIndex
    field(2, 4, 4, 0, 9),                // PositionInRoom
    field(3, 0, 4, 0, 0),                // Unknown1
    field(3, 4, 3, 1, 4),                // BirthPlatform
    field(3, 7, 1, 0, 0),                // Blank2
    field(4, 0, 64, 0, 0xFFFF_FFFF_FFFF), // SystemMac
    field(12, 0, 28, 0, 0xFFF_FFFF),     // CreateDate
    field(15, 4, 1, 0, 1),               // Valid
    field(15, 5, 1, 0, 1),               // NonUser
    field(15, 6, 1, 0, 1),               // NtrOrigin
    field(15, 7, 1, 0, 1),               // Normal
    field(16, 0, 48, 0, 0xFFFF_FFFF_FFFF), // DeviceId
    field(22, 0, 16, 0, 0),              // Blank3
    field(24, 0, 1, 0, 1),               // Gender
    field(24, 1, 4, 1, 12),              // BirthMonth
    field(24, 5, 5, 1, 31),              // BirthDay
    field(25, 2, 4, 0, 11),              // FavoriteColor
    field(25, 6, 1, 0, 1),               // Favorite
    field(25, 7, 1, 0, 0),               // Blank4
    field(26, 0, 160, 0, 0),             // Name
    field(46, 0, 8, 0, 127),             // Height
    field(47, 0, 8, 0, 127),             // Build
    field(48, 0, 1, 0, 1),               // LocalOnly
    field(48, 1, 4, 0, 11),              // FacelineType
    field(48, 5, 3, 0, 6),               // FacelineColor
    field(49, 0, 4, 0, 11),              // FacelineWrinkle
    field(49, 4, 4, 0, 11),              // FacelineMake
    field(50, 0, 8, 0, 131),             // HairType
    field(51, 0, 3, 0, 7),               // HairColor
    field(51, 3, 1, 0, 1),               // HairFlip
    field(51, 4, 4, 0, 0),               // Blank5
    field(52, 0, 6, 0, 59),              // EyeType
    field(52, 6, 3, 0, 5),               // EyeColor
    field(53, 1, 4, 0, 7),               // EyeScale
    field(53, 5, 3, 0, 6),               // EyeAspect
    field(54, 0, 5, 0, 7),               // EyeRotate
    field(54, 5, 4, 0, 12),              // EyeX
    field(55, 1, 5, 0, 18),              // EyeY
    field(55, 6, 2, 0, 0),               // Blank6
    field(56, 0, 5, 0, 24),              // EyebrowType
    field(56, 5, 3, 0, 7),               // EyebrowColor
    field(57, 0, 4, 0, 8),               // EyebrowScale
    field(57, 4, 3, 0, 6),               // EyebrowAspect
    field(57, 7, 1, 0, 0),               // Blank7
    field(58, 0, 4, 0, 11),              // EyebrowRotate
    field(58, 4, 1, 0, 0),               // Blank8
    field(58, 5, 4, 0, 12),              // EyebrowX
    field(59, 1, 5, 3, 18),              // EyebrowY
    field(59, 6, 2, 0, 0),               // Blank9
    field(60, 0, 5, 0, 17),              // NoseType
    field(60, 5, 4, 0, 8),               // NoseScale
    field(61, 1, 5, 0, 18),              // NoseY
    field(61, 6, 2, 0, 0),               // Blank10
    field(62, 0, 6, 0, 35),              // MouthType
    field(62, 6, 3, 0, 4),               // MouthColor
    field(63, 1, 4, 0, 8),               // MouthScale
    field(63, 5, 3, 0, 6),               // MouthAspect
    field(64, 0, 5, 0, 18),              // MouthY
    field(64, 5, 3, 0, 5),               // MustacheType
    field(65, 0, 8, 0, 0),               // Unknown2
    field(66, 0, 3, 0, 6),               // BeardType
    field(66, 3, 3, 0, 7),               // BeardColor
    field(66, 6, 4, 0, 8),               // MustacheScale
    field(67, 2, 5, 0, 16),              // MustacheY
    field(67, 7, 1, 0, 0),               // Blank11
    field(68, 0, 4, 0, 8),               // GlassType
    field(68, 4, 3, 0, 5),               // GlassColor
    field(68, 7, 4, 0, 7),               // GlassScale
    field(69, 3, 5, 0, 20),              // GlassY
    field(70, 0, 1, 0, 1),               // MoleType
    field(70, 1, 4, 0, 8),               // MoleScale
    field(70, 5, 5, 0, 16),              // MoleX
    field(71, 2, 5, 0, 30),              // MoleY
    field(71, 7, 1, 0, 0),               // Blank12
    field(72, 0, 160, 0, 0),             // CreatorName
    field(92, 0, 16, 0, 0),              // Blank13
    field(94, 0, 16, 0, 0),              // Checksum
];

impl MiiField {
    /// All fields, in schema order.
    pub const ALL: [MiiField; FIELD_COUNT] = [
        MiiField::Version,
        MiiField::Copyable,
        MiiField::NgWord,
        MiiField::RegionMove,
        MiiField::FontRegion,
        MiiField::Blank1,
        MiiField::RoomIndex,
        MiiField::PositionInRoom,
        MiiField::Unknown1,
        MiiField::BirthPlatform,
        MiiField::Blank2,
        MiiField::SystemMac,
        MiiField::CreateDate,
        MiiField::Valid,
        MiiField::NonUser,
        MiiField::NtrOrigin,
        MiiField::Normal,
        MiiField::DeviceId,
        MiiField::Blank3,
        MiiField::Gender,
        MiiField::BirthMonth,
        MiiField::BirthDay,
        MiiField::FavoriteColor,
        MiiField::Favorite,
        MiiField::Blank4,
        MiiField::Name,
        MiiField::Height,
        MiiField::Build,
        MiiField::LocalOnly,
        MiiField::FacelineType,
        MiiField::FacelineColor,
        MiiField::FacelineWrinkle,
        MiiField::FacelineMake,
        MiiField::HairType,
        MiiField::HairColor,
        MiiField::HairFlip,
        MiiField::Blank5,
        MiiField::EyeType,
        MiiField::EyeColor,
        MiiField::EyeScale,
        MiiField::EyeAspect,
        MiiField::EyeRotate,
        MiiField::EyeX,
        MiiField::EyeY,
        MiiField::Blank6,
        MiiField::EyebrowType,
        MiiField::EyebrowColor,
        MiiField::EyebrowScale,
        MiiField::EyebrowAspect,
        MiiField::Blank7,
        MiiField::EyebrowRotate,
        MiiField::Blank8,
        MiiField::EyebrowX,
        MiiField::EyebrowY,
        MiiField::Blank9,
        MiiField::NoseType,
        MiiField::NoseScale,
        MiiField::NoseY,
        MiiField::Blank10,
        MiiField::MouthType,
        MiiField::MouthColor,
        MiiField::MouthScale,
        MiiField::MouthAspect,
        MiiField::MouthY,
        MiiField::MustacheType,
        MiiField::Unknown2,
        MiiField::BeardType,
        MiiField::BeardColor,
        MiiField::MustacheScale,
        MiiField::MustacheY,
        MiiField::Blank11,
        MiiField::GlassType,
        MiiField::GlassColor,
        MiiField::GlassScale,
        MiiField::GlassY,
        MiiField::MoleType,
        MiiField::MoleScale,
        MiiField::MoleX,
        MiiField::MoleY,
        MiiField::Blank12,
        MiiField::CreatorName,
        MiiField::Blank13,
        MiiField::Checksum,
    ];

    /// The layout entry for this field.
    pub fn descriptor(self) -> &'static FieldDescriptor {
        &SCHEMA[self as usize]
    }

    /// Whether [`crate::Mii::create_random`] fills this field from the bit
    /// cycle. Structural, reserved and identity fields are pinned to fixed
    /// values after the generation loop instead.
    pub(crate) fn randomized(self) -> bool {
        !matches!(
            self,
            MiiField::Version
                | MiiField::Copyable
                | MiiField::NgWord
                | MiiField::RegionMove
                | MiiField::FontRegion
                | MiiField::Blank1
                | MiiField::Unknown1
                | MiiField::BirthPlatform
                | MiiField::Blank2
                | MiiField::CreateDate
                | MiiField::Valid
                | MiiField::NonUser
                | MiiField::NtrOrigin
                | MiiField::Normal
                | MiiField::Blank3
                | MiiField::Blank4
                | MiiField::Name
                | MiiField::LocalOnly
                | MiiField::Blank5
                | MiiField::Blank6
                | MiiField::Blank7
                | MiiField::Blank8
                | MiiField::Blank9
                | MiiField::Blank10
                | MiiField::Unknown2
                | MiiField::Blank11
                | MiiField::Blank12
                | MiiField::CreatorName
                | MiiField::Blank13
                | MiiField::Checksum
        )
    }
}

/// Favorite color indices, identical on every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum FavoriteColor {
    Red = 0,
    Orange = 1,
    Yellow = 2,
    YellowGreen = 3,
    Green = 4,
    Blue = 5,
    SkyBlue = 6,
    Pink = 7,
    Purple = 8,
    Brown = 9,
    White = 10,
    Black = 11,
}

/// Platform the record was first created on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum BirthPlatform {
    Rvl = 1,
    Ntr = 2,
    Ctr = 3,
    Cafe = 4,
}

/// Originally named "sex".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Gender {
    Male = 0,
    Female = 1,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_partitions_every_bit() {
        let mut spans: Vec<(usize, usize)> = MiiField::ALL
            .iter()
            .map(|f| {
                let d = f.descriptor();
                let start = d.byte_offset * 8 + d.bit_offset as usize;
                (start, start + d.width_bits as usize)
            })
            .collect();
        spans.sort_unstable();

        let mut cursor = 0;
        for (start, end) in spans {
            assert_eq!(start, cursor, "gap or overlap before bit {start}");
            cursor = end;
        }
        assert_eq!(cursor, 96 * 8);
    }

    #[test]
    fn table_order_matches_enum_order() {
        assert_eq!(MiiField::ALL.len(), FIELD_COUNT);
        for (i, f) in MiiField::ALL.iter().enumerate() {
            assert_eq!(*f as usize, i);
        }

        // Spot checks against the reference layout.
        assert_eq!(MiiField::Version.descriptor(), &field(0, 0, 8, 3, 3));
        assert_eq!(
            MiiField::SystemMac.descriptor(),
            &field(4, 0, 64, 0, 0xFFFF_FFFF_FFFF)
        );
        assert_eq!(MiiField::HairType.descriptor(), &field(50, 0, 8, 0, 131));
        assert_eq!(MiiField::Checksum.descriptor(), &field(94, 0, 16, 0, 0));
    }

    #[test]
    fn descriptors_are_well_formed() {
        for f in MiiField::ALL {
            let d = f.descriptor();
            assert!(d.bit_offset < 8);
            assert!(d.width_bits > 0);
            assert!(d.min <= d.max, "{f:?}");
            if d.width_bits < 64 {
                assert!(d.max <= (1 << d.width_bits) - 1, "{f:?}");
            }
        }
    }
}
