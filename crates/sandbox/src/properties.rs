//! Physical classification of each tile type.
//!
//! Movement and reaction code asks these predicates instead of comparing
//! types directly, so adding a type means adding one row to
//! [`TileType::properties`].

use crate::tile::TileType;

pub const WOOD_FLAMMABILITY: f32 = 0.6;
pub const FUEL_FLAMMABILITY: f32 = 0.75;
pub const STEAM_SURVIVAL_CHANCE: f32 = 0.95;
pub const FIRE_SURVIVAL_CHANCE: f32 = 0.87;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Properties {
    /// Falls and sinks.
    pub gravity: bool,
    /// Acts as a floor or wall for neighbors.
    pub solid: bool,
    pub liquid: bool,
    pub gas: bool,
    /// May be overtaken by a denser liquid instead of sinking through it.
    pub dissolves: bool,
    /// Ignites flammable neighbors.
    pub incendiary: bool,
    /// Chance per frame of igniting next to an incendiary tile.
    pub flammability: f32,
    /// Chance per frame of not decaying to air.
    pub survival_chance: f32,
}

impl Properties {
    const INERT: Self = Self {
        gravity: false,
        solid: false,
        liquid: false,
        gas: false,
        dissolves: false,
        incendiary: false,
        flammability: 0.0,
        survival_chance: 1.0,
    };
}

impl TileType {
    #[must_use]
    pub const fn properties(self) -> Properties {
        match self {
            Self::Air => Properties::INERT,
            Self::Sand => Properties {
                gravity: true,
                solid: true,
                ..Properties::INERT
            },
            Self::Water => Properties {
                gravity: true,
                liquid: true,
                ..Properties::INERT
            },
            Self::Wood => Properties {
                solid: true,
                flammability: WOOD_FLAMMABILITY,
                ..Properties::INERT
            },
            Self::Steam => Properties {
                gas: true,
                survival_chance: STEAM_SURVIVAL_CHANCE,
                ..Properties::INERT
            },
            Self::Fire => Properties {
                gas: true,
                incendiary: true,
                survival_chance: FIRE_SURVIVAL_CHANCE,
                ..Properties::INERT
            },
            Self::Fuel => Properties {
                gravity: true,
                liquid: true,
                flammability: FUEL_FLAMMABILITY,
                ..Properties::INERT
            },
        }
    }

    #[must_use]
    pub const fn has_gravity(self) -> bool {
        self.properties().gravity
    }

    #[must_use]
    pub const fn is_solid(self) -> bool {
        self.properties().solid
    }

    #[must_use]
    pub const fn is_liquid(self) -> bool {
        self.properties().liquid
    }

    #[must_use]
    pub const fn is_gas(self) -> bool {
        self.properties().gas
    }

    #[must_use]
    pub const fn dissolves(self) -> bool {
        self.properties().dissolves
    }

    #[must_use]
    pub const fn is_incendiary(self) -> bool {
        self.properties().incendiary
    }

    #[must_use]
    pub const fn flammability(self) -> f32 {
        self.properties().flammability
    }

    #[must_use]
    pub const fn survival_chance(self) -> f32 {
        self.properties().survival_chance
    }

    /// Liquids spread sideways once resting.
    #[must_use]
    pub const fn has_flow(self) -> bool {
        self.is_liquid()
    }

    /// Gases rise.
    #[must_use]
    pub const fn has_lift(self) -> bool {
        self.is_gas()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(clippy::float_cmp)]
    #[test]
    fn table_matches_the_reference_rows() {
        // (type, gravity, solid, liquid, gas, incendiary, flammability, survival)
        let rows = [
            (TileType::Air, false, false, false, false, false, 0.0, 1.0),
            (TileType::Sand, true, true, false, false, false, 0.0, 1.0),
            (TileType::Water, true, false, true, false, false, 0.0, 1.0),
            (TileType::Wood, false, true, false, false, false, WOOD_FLAMMABILITY, 1.0),
            (TileType::Steam, false, false, false, true, false, 0.0, STEAM_SURVIVAL_CHANCE),
            (TileType::Fire, false, false, false, true, true, 0.0, FIRE_SURVIVAL_CHANCE),
            (TileType::Fuel, true, false, true, false, false, FUEL_FLAMMABILITY, 1.0),
        ];
        assert_eq!(rows.len(), TileType::COUNT);

        for (ty, gravity, solid, liquid, gas, incendiary, flammability, survival) in rows {
            assert_eq!(ty.has_gravity(), gravity, "{ty} gravity");
            assert_eq!(ty.is_solid(), solid, "{ty} solid");
            assert_eq!(ty.is_liquid(), liquid, "{ty} liquid");
            assert_eq!(ty.is_gas(), gas, "{ty} gas");
            assert_eq!(ty.is_incendiary(), incendiary, "{ty} incendiary");
            assert_eq!(ty.flammability(), flammability, "{ty} flammability");
            assert_eq!(ty.survival_chance(), survival, "{ty} survival");
            assert!(!ty.dissolves(), "{ty} dissolves");
        }
    }

    #[test]
    fn flammability_stays_in_the_documented_band() {
        assert!((0.5..=0.75).contains(&WOOD_FLAMMABILITY));
        assert!((FUEL_FLAMMABILITY - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn phases_are_mutually_exclusive() {
        for ty in TileType::ALL {
            let props = ty.properties();
            let phases = [props.solid, props.liquid, props.gas];
            assert!(phases.iter().filter(|&&p| p).count() <= 1, "{ty} has several phases");
            assert!((0.0..=1.0).contains(&props.flammability));
            assert!((0.0..=1.0).contains(&props.survival_chance));
        }
    }

    #[test]
    fn flow_and_lift_follow_phase() {
        for ty in TileType::ALL {
            assert_eq!(ty.has_flow(), ty.is_liquid());
            assert_eq!(ty.has_lift(), ty.is_gas());
        }
    }
}
