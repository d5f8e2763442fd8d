//! Gravity, liquid flow and gas lift.
//!
//! Each routine looks at the tile at `src`, collects the legal destinations,
//! and performs at most one swap. The return value says whether a swap
//! happened.

use crate::point::SandboxPoint;
use crate::rng::SimRng;
use crate::sandbox::Sandbox;
use crate::tile::TileType;

/// Up, up-left, up-right, left, right.
const LIFT_OFFSETS: [(i32, i32); 5] = [(-1, 0), (-1, -1), (-1, 1), (0, -1), (0, 1)];

/// Whether `ty` may pass vertically through a tile of type `into`.
fn can_sink(ty: TileType, into: TileType) -> bool {
    into.is_liquid() && into != ty && !ty.dissolves()
}

/// Move to whichever of two destinations is available, flipping a coin when
/// both are.
fn move_to_either(
    sandbox: &mut Sandbox,
    src: SandboxPoint,
    first: Option<SandboxPoint>,
    second: Option<SandboxPoint>,
) -> bool {
    let dest = match (first, second) {
        (Some(a), Some(b)) => {
            if sandbox.rng.coin_flip() {
                a
            } else {
                b
            }
        }
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => return false,
    };
    sandbox.move_tile(src, dest);
    true
}

/// Diagonal fall target on side `d_col`, if the pile does not wall it off.
fn slide_target(
    sandbox: &Sandbox,
    ty: TileType,
    src: SandboxPoint,
    d_col: i32,
) -> Option<SandboxPoint> {
    let side = sandbox.tile_type_at(src.offset(0, d_col))?;
    if side.is_solid() {
        return None;
    }
    let dest = src.offset(1, d_col);
    let below = sandbox.tile_type_at(dest)?;
    (below == TileType::Air || can_sink(ty, below)).then_some(dest)
}

/// Fall straight down, sink through a different liquid, or slide off a pile
/// diagonally.
pub fn do_gravity(sandbox: &mut Sandbox, src: SandboxPoint) -> bool {
    let Some(ty) = sandbox.tile_type_at(src) else {
        return false;
    };
    let down = src.offset(1, 0);
    let Some(below) = sandbox.tile_type_at(down) else {
        return false;
    };

    if below == TileType::Air || can_sink(ty, below) {
        sandbox.move_tile(src, down);
        return true;
    }

    let left = slide_target(sandbox, ty, src, -1);
    let right = slide_target(sandbox, ty, src, 1);
    move_to_either(sandbox, src, left, right)
}

fn flow_target(sandbox: &Sandbox, ty: TileType, dest: SandboxPoint) -> Option<SandboxPoint> {
    let there = sandbox.tile_type_at(dest)?;
    (there == TileType::Air || (there.is_liquid() && there != ty)).then_some(dest)
}

/// Spread sideways while resting on a solid, a liquid, or the bottom edge.
pub fn do_flow(sandbox: &mut Sandbox, src: SandboxPoint) -> bool {
    let Some(ty) = sandbox.tile_type_at(src) else {
        return false;
    };
    let resting = match sandbox.tile_type_at(src.offset(1, 0)) {
        None => true,
        Some(below) => below.is_solid() || below.is_liquid(),
    };
    if !resting {
        return false;
    }

    let left = flow_target(sandbox, ty, src.offset(0, -1));
    let right = flow_target(sandbox, ty, src.offset(0, 1));
    move_to_either(sandbox, src, left, right)
}

/// Rise into air, up through a liquid, or past a different gas; otherwise
/// drift sideways. All legal destinations are equally likely.
pub fn do_lift(sandbox: &mut Sandbox, src: SandboxPoint) -> bool {
    let Some(ty) = sandbox.tile_type_at(src) else {
        return false;
    };

    let mut candidates = [src; LIFT_OFFSETS.len()];
    let mut count = 0;
    for (d_row, d_col) in LIFT_OFFSETS {
        let dest = src.offset(d_row, d_col);
        let Some(there) = sandbox.tile_type_at(dest) else {
            continue;
        };
        let straight_up = d_row < 0 && d_col == 0;
        let legal = there == TileType::Air
            || (straight_up && there.is_liquid())
            || (there.is_gas() && there != ty);
        if legal {
            candidates[count] = dest;
            count += 1;
        }
    }

    if count == 0 {
        return false;
    }
    let dest = candidates[sandbox.rng.pick(count)];
    sandbox.move_tile(src, dest);
    true
}
