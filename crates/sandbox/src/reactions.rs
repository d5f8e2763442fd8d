//! Decay, combustion and extinguishing.
//!
//! Dice are only rolled when the outcome is actually uncertain, so a run's
//! random stream depends on nothing but the tiles that can react.

use crate::point::SandboxPoint;
use crate::rng::SimRng;
use crate::sandbox::Sandbox;
use crate::tile::TileType;

/// Survival roll for a tile of `ty`. Types that never decay consume no
/// randomness.
pub fn survives(sandbox: &mut Sandbox, ty: TileType) -> bool {
    let chance = ty.survival_chance();
    if chance >= 1.0 {
        return true;
    }
    sandbox.rng.roll(chance)
}

/// Burn roll for the tile at `src`: only flammable tiles touching an
/// incendiary one roll at all.
pub fn catches_fire(sandbox: &mut Sandbox, src: SandboxPoint) -> bool {
    let Some(ty) = sandbox.tile_type_at(src) else {
        return false;
    };
    let flammability = ty.flammability();
    if flammability <= 0.0 {
        return false;
    }
    let exposed = src
        .cardinal_neighbors()
        .any(|n| sandbox.tile_type_at(n).is_some_and(TileType::is_incendiary));
    if !exposed {
        return false;
    }
    sandbox.rng.roll(flammability)
}

/// Turn the tile at `src` into steam if water touches it on any side.
pub fn do_extinguish(sandbox: &mut Sandbox, src: SandboxPoint) -> bool {
    let doused = src
        .cardinal_neighbors()
        .any(|n| sandbox.tile_type_at(n) == Some(TileType::Water));
    if !doused {
        return false;
    }
    sandbox.transform_tile(src, TileType::Steam);
    true
}
