//! The per-frame pass.

use log::trace;

use crate::point::SandboxPoint;
use crate::sandbox::Sandbox;
use crate::tile::TileType;
use crate::{movement, reactions};

impl Sandbox {
    /// Advance the simulation by one frame.
    ///
    /// Scans top-to-bottom, left-to-right. Skips air and tiles already
    /// updated this pass (their flag equals the lifetime's parity). Every
    /// other tile gets exactly one outcome: decay, ignition, extinguishing,
    /// or a single move.
    pub fn process(&mut self) {
        let lifetime = self.lifetime;
        let (width, height) = (self.width(), self.height());

        for row in 0..height {
            for col in 0..width {
                let tile = self.tiles()[row * width + col];
                if tile.is_empty() || tile.is_updated(lifetime) {
                    continue;
                }
                let point = SandboxPoint::new(row as i32, col as i32);
                self.update_tile(point, tile.tile_type());
            }
        }

        self.lifetime = self.lifetime.wrapping_add(1);
        trace!("pass complete, lifetime now {}", self.lifetime);
    }

    fn update_tile(&mut self, point: SandboxPoint, ty: TileType) {
        if !reactions::survives(self, ty) {
            self.delete_tile(point);
            return;
        }
        if reactions::catches_fire(self, point) {
            self.transform_tile(point, TileType::Fire);
            return;
        }

        self.mark_updated(point);

        if ty.is_incendiary() && reactions::do_extinguish(self, point) {
            return;
        }

        let moved = (ty.has_gravity() && movement::do_gravity(self, point))
            || (ty.has_flow() && movement::do_flow(self, point))
            || (ty.has_lift() && movement::do_lift(self, point));

        if moved {
            // Whatever was displaced into `point` counts as handled too.
            self.mark_updated(point);
        }
    }
}
