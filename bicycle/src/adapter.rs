/*
 * Copyright (c):
 * 2026 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of gear-inches.
 *
 * gear-inches is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * gear-inches is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with gear-inches. If not, see <https://www.gnu.org/licenses/>.
 */

use itertools::Itertools;
use tracing::{debug, warn};
use crate::error::{Error, Result};
use crate::traits::{rim_and_tire_diameter, DiameterProvider};

/// Lightweight wheel-like value produced from raw `(rim, tire)` data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptedWheel {
    pub rim: f64,
    pub tire: f64
}

impl DiameterProvider for AdaptedWheel {
    fn diameter(&self) -> f64 {
        rim_and_tire_diameter(self.rim, self.tire)
    }
}

/// Normalises loosely structured wheel data into [`AdaptedWheel`]s.
///
/// The layout of the incoming data (`[0]` is the rim, `[1]` is the tire) is
/// only known by `wheelify`. Everything else works with named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelAdapter {
    wheels: Vec<AdaptedWheel>
}

impl WheelAdapter {
    pub fn new(data: &[(f64, f64)]) -> WheelAdapter {
        let wheels = data.iter().map(|&(rim, tire)| wheelify([rim, tire])).collect_vec();
        debug!("Normalised {} wheels", wheels.len());
        WheelAdapter { wheels }
    }

    /// Build from untyped cells where each cell should hold `[rim, tire]`
    pub fn from_cells(cells: &[Vec<f64>]) -> Result<WheelAdapter> {
        let wheels = cells.iter().map(|cell| {
            let pair = <[f64; 2]>::try_from(cell.as_slice()).map_err(|_| {
                Error::ConstructionArity { target: "AdaptedWheel", expected: 2, given: cell.len() }
            })?;
            Ok(wheelify(pair))
        }).collect::<Result<Vec<_>>>().map_err(|e| {
            warn!("Failed to normalise wheel data. {}", e);
            e
        })?;
        debug!("Normalised {} wheels", wheels.len());
        Ok(WheelAdapter { wheels })
    }

    pub fn wheels(&self) -> &[AdaptedWheel] {
        &self.wheels
    }

    pub fn diameters(&self) -> Vec<f64> {
        self.wheels.iter().map(|wheel| self.diameter(wheel)).collect_vec()
    }

    pub fn diameter(&self, wheel: &dyn DiameterProvider) -> f64 {
        wheel.diameter()
    }
}

fn wheelify(cell: [f64; 2]) -> AdaptedWheel {
    AdaptedWheel { rim: cell[0], tire: cell[1] }
}
