//! The grid: a flat row-major buffer of [`Tile`]s plus the frame counter and
//! random source that drive it.

use std::fmt;

use log::debug;

use crate::config::SandboxConfig;
use crate::error::SandboxError;
use crate::point::SandboxPoint;
use crate::rng::{self, SandboxRng};
use crate::tile::{Tile, TileType};

/// 2D grid of tiles. Out-of-bounds reads return `None`, writes are no-ops.
#[derive(Debug)]
pub struct Sandbox {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    /// Completed passes. Its parity is the updated-flag value of the pass in
    /// progress.
    pub(crate) lifetime: u64,
    pub(crate) rng: SandboxRng,
    seed: u64,
}

impl Sandbox {
    /// Build an all-air sandbox, reporting allocation failure as an error.
    pub fn from_config(config: &SandboxConfig) -> Result<Self, SandboxError> {
        let SandboxConfig { width, height, seed } = *config;
        if width == 0 || height == 0 {
            return Err(SandboxError::ZeroDimension { width, height });
        }
        // Points are i32, so every index must be representable.
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(SandboxError::TooLarge { width, height });
        }
        let cells = width
            .checked_mul(height)
            .ok_or(SandboxError::TooLarge { width, height })?;

        let mut tiles = Vec::new();
        tiles
            .try_reserve_exact(cells)
            .map_err(|_| SandboxError::Allocation { cells })?;
        tiles.resize(cells, Tile::AIR);

        let seed = seed.unwrap_or_else(rng::entropy_seed);
        debug!("created {width}x{height} sandbox (seed {seed})");

        Ok(Self {
            width,
            height,
            tiles,
            lifetime: 0,
            rng: rng::seeded(seed),
            seed,
        })
    }

    pub fn try_new(width: usize, height: usize) -> Result<Self, SandboxError> {
        Self::from_config(&SandboxConfig::new(width, height))
    }

    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self, SandboxError> {
        Self::from_config(&SandboxConfig::new(width, height).with_seed(seed))
    }

    /// Build an all-air sandbox.
    ///
    /// # Panics
    ///
    /// A simulation cannot run without its buffer, so invalid dimensions and
    /// allocation failure are fatal here. Use [`Sandbox::try_new`] to recover.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::try_new(width, height).unwrap_or_else(|err| panic!("{err}"))
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Frames simulated so far.
    #[must_use]
    pub fn lifetime(&self) -> u64 {
        self.lifetime
    }

    /// Seed the random source was last initialised with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the random source from `seed`. Grid contents are untouched.
    pub fn reseed(&mut self, seed: u64) {
        debug!("reseeding sandbox rng with {seed}");
        self.rng = rng::seeded(seed);
        self.seed = seed;
    }

    /// Row-major view of the whole grid.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn is_coord_oob(&self, point: SandboxPoint) -> bool {
        self.index(point).is_none()
    }

    pub(crate) fn index(&self, point: SandboxPoint) -> Option<usize> {
        let row = usize::try_from(point.row).ok()?;
        let col = usize::try_from(point.col).ok()?;
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    #[must_use]
    pub fn tile(&self, point: SandboxPoint) -> Option<Tile> {
        self.index(point).map(|i| self.tiles[i])
    }

    #[must_use]
    pub fn tile_type_at(&self, point: SandboxPoint) -> Option<TileType> {
        self.tile(point).map(Tile::tile_type)
    }

    /// Write a new `ty` tile into an empty cell. Occupied or off-grid cells
    /// are left alone.
    pub fn place_tile(&mut self, point: SandboxPoint, ty: TileType) {
        if let Some(i) = self.index(point) {
            if self.tiles[i].is_empty() {
                self.tiles[i] = Tile::pending(ty, self.lifetime);
            }
        }
    }

    /// Clear a cell back to air.
    pub fn delete_tile(&mut self, point: SandboxPoint) {
        if let Some(i) = self.index(point) {
            if !self.tiles[i].is_empty() {
                self.tiles[i] = Tile::AIR;
            }
        }
    }

    /// Overwrite a cell with a new `ty` tile unless it already holds `ty`.
    pub fn replace_tile(&mut self, point: SandboxPoint, ty: TileType) {
        if let Some(i) = self.index(point) {
            if self.tiles[i].tile_type() != ty {
                self.tiles[i] = match ty {
                    TileType::Air => Tile::AIR,
                    _ => Tile::pending(ty, self.lifetime),
                };
            }
        }
    }

    /// Turn a cell into `ty` mid-pass. The new tile sits out the rest of the
    /// current pass.
    pub(crate) fn transform_tile(&mut self, point: SandboxPoint, ty: TileType) {
        if let Some(i) = self.index(point) {
            self.tiles[i] = Tile::create(ty, self.lifetime);
        }
    }

    /// Stamp the tile at `point` as handled this pass. Air stays the zero
    /// byte.
    pub(crate) fn mark_updated(&mut self, point: SandboxPoint) {
        if let Some(i) = self.index(point) {
            if !self.tiles[i].is_empty() {
                self.tiles[i].set_updated(self.lifetime);
            }
        }
    }

    /// Swap two cells and stamp the tile now at `to` as handled, so the scan
    /// skips it if it reaches `to` later in the same pass.
    pub(crate) fn move_tile(&mut self, from: SandboxPoint, to: SandboxPoint) {
        if let (Some(a), Some(b)) = (self.index(from), self.index(to)) {
            self.tiles.swap(a, b);
            self.tiles[b].set_updated(self.lifetime);
        }
    }

    /// Number of tiles of each type, indexed by type id.
    #[must_use]
    pub fn census(&self) -> [usize; TileType::COUNT] {
        let mut counts = [0usize; TileType::COUNT];
        for tile in &self.tiles {
            counts[tile.tile_type() as usize] += 1;
        }
        counts
    }
}

impl fmt::Display for Sandbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.width) {
            let line: String = row.iter().map(|t| t.tile_type().glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl Sandbox {
    /// Build a seeded sandbox from glyph rows. Every tile is left eligible
    /// for the first pass.
    pub(crate) fn from_rows(rows: &[&str], seed: u64) -> Self {
        let width = rows[0].chars().count();
        let mut sandbox = Self::with_seed(width, rows.len(), seed).unwrap();
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), width, "ragged row {row}");
            for (col, glyph) in line.chars().enumerate() {
                let ty = TileType::from_glyph(glyph).unwrap();
                let point = SandboxPoint::new(row as i32, col as i32);
                sandbox.replace_tile(point, ty);
            }
        }
        sandbox
    }

    pub(crate) fn rows(&self) -> Vec<String> {
        self.to_string().lines().map(str::to_owned).collect()
    }
}
