use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use crate::config::Validate;

/// Host-side session configuration: surface geometry, tick rate, starting
/// snake length, and the per-food score multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub surface_width: u32,
    pub surface_height: u32,
    pub cell_size: u32,
    pub tick_interval_ms: u64,
    pub start_length: u32,
    pub level: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            surface_width: 600,
            surface_height: 400,
            cell_size: 20,
            tick_interval_ms: 150,
            start_length: 3,
            level: 1,
        }
    }
}

impl GameSettings {
    pub fn grid(&self) -> Result<Grid, String> {
        Grid::from_surface(self.surface_width, self.surface_height, self.cell_size)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        let grid = self.grid()?;

        if grid.width_cells() < 5 || grid.height_cells() < 5 {
            return Err("Grid must be at least 5x5 cells".to_string());
        }
        if grid.width_cells() > 100 || grid.height_cells() > 100 {
            return Err("Grid must not exceed 100x100 cells".to_string());
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        if self.start_length < 1 {
            return Err("Starting snake length must be at least 1".to_string());
        }
        if self.start_length as i32 > grid.width_cells() / 2 + 1 {
            return Err("Starting snake does not fit the grid".to_string());
        }
        if grid.capacity() <= self.start_length as usize + 1 {
            return Err("Grid is too small to ever place food".to_string());
        }
        if self.level < 1 {
            return Err("Level must be at least 1".to_string());
        }
        Ok(())
    }
}
