//! One-byte tile encoding.
//!
//! ```text
//!   bit 7     bits 4-6    bits 0-3
//! [updated] [reserved]  [type id]
//! ```
//!
//! The updated bit holds the parity of the lifetime at which the tile was
//! last processed. A tile counts as updated for a pass when that bit equals
//! the parity of the pass's lifetime, so flags never need clearing.

use std::fmt;

use crate::error::SandboxError;

/// Low nibble: the tile type id.
pub const TYPE_MASK: u8 = 0x0f;

/// High bit: the updated flag.
pub const UPDATED_BIT: u8 = 0x80;

/// Discriminant values are the on-grid type ids; do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum TileType {
    #[default]
    Air = 0,
    Sand = 1,
    Water = 2,
    Wood = 3,
    Steam = 4,
    Fire = 5,
    Fuel = 6,
}

impl TileType {
    pub const COUNT: usize = 7;

    pub const ALL: [TileType; Self::COUNT] = [
        Self::Air,
        Self::Sand,
        Self::Water,
        Self::Wood,
        Self::Steam,
        Self::Fire,
        Self::Fuel,
    ];

    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Air),
            1 => Some(Self::Sand),
            2 => Some(Self::Water),
            3 => Some(Self::Wood),
            4 => Some(Self::Steam),
            5 => Some(Self::Fire),
            6 => Some(Self::Fuel),
            _ => None,
        }
    }

    /// Single-character glyph used by the text renderer.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Air => '-',
            Self::Sand => 'O',
            Self::Water => '_',
            Self::Wood => '#',
            Self::Steam => '~',
            Self::Fire => '^',
            Self::Fuel => '%',
        }
    }

    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.glyph() == glyph)
    }
}

impl TryFrom<u8> for TileType {
    type Error = SandboxError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or(SandboxError::UnknownTileType(id))
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Air => write!(f, "Air"),
            Self::Sand => write!(f, "Sand"),
            Self::Water => write!(f, "Water"),
            Self::Wood => write!(f, "Wood"),
            Self::Steam => write!(f, "Steam"),
            Self::Fire => write!(f, "Fire"),
            Self::Fuel => write!(f, "Fuel"),
        }
    }
}

/// Parity of a lifetime: 0 on even frames, 1 on odd frames.
#[must_use]
pub const fn time_parity(lifetime: u64) -> u8 {
    (lifetime & 1) as u8
}

/// A single encoded grid cell. `repr(transparent)` so the grid buffer can be
/// handed to a renderer as plain bytes.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Tile(u8);

impl Tile {
    /// Empty tile. Byte 0 is also a valid "updated" tile for even lifetimes.
    pub const AIR: Tile = Tile(0);

    /// A tile of `ty` already marked as updated for `lifetime`, so a pass
    /// running at that lifetime skips it.
    #[must_use]
    pub fn create(ty: TileType, lifetime: u64) -> Self {
        let mut tile = Tile(ty.id());
        tile.set_updated(lifetime);
        tile
    }

    /// A tile of `ty` that the pass running at `lifetime` will still process.
    #[must_use]
    pub fn pending(ty: TileType, lifetime: u64) -> Self {
        Self::create(ty, lifetime.wrapping_add(1))
    }

    /// Decode a raw byte, rejecting unknown type ids. Reserved bits are kept.
    pub fn from_raw(byte: u8) -> Result<Self, SandboxError> {
        TileType::try_from(byte & TYPE_MASK)?;
        Ok(Tile(byte))
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn tile_type(self) -> TileType {
        // Construction only admits known ids.
        TileType::from_id(self.0 & TYPE_MASK).unwrap_or_default()
    }

    #[must_use]
    pub const fn updated_flag(self) -> u8 {
        self.0 >> 7
    }

    #[must_use]
    pub const fn is_updated(self, lifetime: u64) -> bool {
        self.updated_flag() == time_parity(lifetime)
    }

    pub fn set_updated(&mut self, lifetime: u64) {
        if time_parity(lifetime) == 0 {
            self.0 &= !UPDATED_BIT;
        } else {
            self.0 |= UPDATED_BIT;
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 & TYPE_MASK == TileType::Air as u8
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tile_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_tile_type() -> impl Strategy<Value = TileType> {
        proptest::sample::select(TileType::ALL.to_vec())
    }

    #[test]
    fn tile_is_1_byte() {
        assert_eq!(std::mem::size_of::<Tile>(), 1);
    }

    #[test]
    fn type_id_values() {
        assert_eq!(TileType::Air as u8, 0);
        assert_eq!(TileType::Sand as u8, 1);
        assert_eq!(TileType::Water as u8, 2);
        assert_eq!(TileType::Wood as u8, 3);
        assert_eq!(TileType::Steam as u8, 4);
        assert_eq!(TileType::Fire as u8, 5);
        assert_eq!(TileType::Fuel as u8, 6);
    }

    #[test]
    fn from_id_covers_exactly_the_known_types() {
        for ty in TileType::ALL {
            assert_eq!(TileType::from_id(ty.id()), Some(ty));
        }
        for id in 7..=u8::MAX {
            assert_eq!(TileType::from_id(id), None);
        }
        assert_eq!(TileType::try_from(9), Err(SandboxError::UnknownTileType(9)));
    }

    #[test]
    fn air_is_zero_and_empty() {
        assert_eq!(Tile::AIR.raw(), 0);
        assert!(Tile::AIR.is_empty());
        assert!(Tile::AIR.is_updated(0));
        assert!(!Tile::AIR.is_updated(1));
        assert_eq!(Tile::default(), Tile::AIR);
    }

    #[test]
    fn set_updated_only_touches_the_top_bit() {
        let mut tile = Tile::from_raw(0b0111_0011).unwrap();
        tile.set_updated(1);
        assert_eq!(tile.raw(), 0b1111_0011);
        tile.set_updated(2);
        assert_eq!(tile.raw(), 0b0111_0011);
    }

    #[test]
    fn from_raw_rejects_unknown_ids() {
        assert_eq!(Tile::from_raw(0x0f), Err(SandboxError::UnknownTileType(15)));
        assert_eq!(Tile::from_raw(0x87).unwrap_err(), SandboxError::UnknownTileType(7));
        assert_eq!(Tile::from_raw(0x82).unwrap().tile_type(), TileType::Water);
    }

    #[test]
    fn pending_tiles_are_processed_by_the_current_pass() {
        let tile = Tile::pending(TileType::Sand, 4);
        assert!(!tile.is_updated(4));
        assert!(tile.is_updated(5));
    }

    #[test]
    fn glyphs_round_trip() {
        for ty in TileType::ALL {
            assert_eq!(TileType::from_glyph(ty.glyph()), Some(ty));
        }
        assert_eq!(TileType::from_glyph('?'), None);
    }

    #[test]
    fn time_parity_alternates() {
        assert_eq!(time_parity(0), 0);
        assert_eq!(time_parity(1), 1);
        assert_eq!(time_parity(u64::MAX), 1);
    }

    proptest! {
        #[test]
        fn prop_create_preserves_type(ty in arb_tile_type(), lifetime in any::<u64>()) {
            let tile = Tile::create(ty, lifetime);
            prop_assert_eq!(tile.tile_type(), ty);
            prop_assert_eq!(tile.is_empty(), ty == TileType::Air);
            prop_assert_eq!(tile.raw() & 0x70, 0);
        }
    }

    proptest! {
        #[test]
        fn prop_created_tile_is_updated_only_for_its_frame(
            ty in arb_tile_type(),
            lifetime in 0u64..u64::MAX,
        ) {
            let tile = Tile::create(ty, lifetime);
            prop_assert!(tile.is_updated(lifetime));
            prop_assert!(!tile.is_updated(lifetime + 1));
            prop_assert_eq!(tile.updated_flag(), time_parity(lifetime));
        }
    }
}
