//! `wasm-bindgen` surface for a browser renderer.
//!
//! The renderer owns input handling and drawing; it drives the simulation
//! through raw type ids and reads the tile buffer straight out of linear
//! memory.

use log::warn;
use wasm_bindgen::prelude::*;

use crate::point::SandboxPoint;
use crate::sandbox::Sandbox;
use crate::tile::{Tile, TileType};

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    sandbox: Sandbox,
}

fn decode_type(type_id: u8) -> Option<TileType> {
    let ty = TileType::from_id(type_id);
    if ty.is_none() {
        warn!("ignoring unknown tile type id {type_id}");
    }
    ty
}

#[wasm_bindgen]
impl Universe {
    /// The page supplies the seed, so no OS entropy is needed inside wasm.
    ///
    /// # Panics
    ///
    /// Panics on zero dimensions or when the tile buffer cannot be allocated.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(width: usize, height: usize, seed: u64) -> Universe {
        let sandbox = Sandbox::with_seed(width, height, seed).unwrap_or_else(|err| panic!("{err}"));
        Self { sandbox }
    }

    pub fn tick(&mut self) {
        self.sandbox.process();
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.sandbox.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.sandbox.height()
    }

    #[must_use]
    pub fn lifetime(&self) -> u64 {
        self.sandbox.lifetime()
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.sandbox.seed()
    }

    pub fn reseed(&mut self, seed: u64) {
        self.sandbox.reseed(seed);
    }

    pub fn place_tile(&mut self, row: i32, col: i32, type_id: u8) {
        if let Some(ty) = decode_type(type_id) {
            self.sandbox.place_tile(SandboxPoint::new(row, col), ty);
        }
    }

    pub fn delete_tile(&mut self, row: i32, col: i32) {
        self.sandbox.delete_tile(SandboxPoint::new(row, col));
    }

    pub fn replace_tile(&mut self, row: i32, col: i32, type_id: u8) {
        if let Some(ty) = decode_type(type_id) {
            self.sandbox.replace_tile(SandboxPoint::new(row, col), ty);
        }
    }

    /// Type id at a cell; off-grid cells read as air.
    #[must_use]
    pub fn tile_type(&self, row: i32, col: i32) -> u8 {
        self.sandbox
            .tile_type_at(SandboxPoint::new(row, col))
            .unwrap_or_default()
            .id()
    }

    #[must_use]
    pub fn is_coord_oob(&self, row: i32, col: i32) -> bool {
        self.sandbox.is_coord_oob(SandboxPoint::new(row, col))
    }

    /// Pointer to `width * height` encoded tile bytes, row-major.
    #[must_use]
    pub fn tiles_ptr(&self) -> *const u8 {
        self.sandbox.tiles().as_ptr().cast::<u8>()
    }
}

impl Universe {
    #[must_use]
    pub fn sandbox(&self) -> &Sandbox {
        &self.sandbox
    }

    #[must_use]
    pub fn tile(&self, row: i32, col: i32) -> Option<Tile> {
        self.sandbox.tile(SandboxPoint::new(row, col))
    }
}
