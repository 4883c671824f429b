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

use tracing::warn;
use crate::error::{Error, Result};
use crate::traits::DiameterProvider;

/// A chainring/cog pairing, optionally fitted to a wheel.
///
/// The gear borrows its wheel rather than owning it so the same wheel can be
/// shared between several gears. Only the ratio is the gear's concern; the
/// wheel is asked for nothing but its diameter.
#[derive(Debug, Clone, Copy)]
pub struct Gear<'a> {
    chainring: u32,
    cog: u32,
    wheel: Option<&'a dyn DiameterProvider>
}

impl<'a> Gear<'a> {
    pub fn new(chainring: u32, cog: u32) -> Gear<'a> {
        Gear { chainring, cog, wheel: None }
    }

    pub fn with_wheel(chainring: u32, cog: u32, wheel: &'a dyn DiameterProvider) -> Gear<'a> {
        Gear { chainring, cog, wheel: Some(wheel) }
    }

    /// Build a gear from an untyped argument list of `[chainring, cog]`
    pub fn from_values(values: &[u32], wheel: Option<&'a dyn DiameterProvider>) -> Result<Gear<'a>> {
        Error::check_arity("Gear", 2, values.len()).map_err(|e| {
            warn!("Rejected gear construction. {}", e);
            e
        })?;
        Ok(Gear { chainring: values[0], cog: values[1], wheel })
    }

    pub fn chainring(&self) -> u32 {
        self.chainring
    }

    pub fn cog(&self) -> u32 {
        self.cog
    }

    pub fn wheel(&self) -> Option<&'a dyn DiameterProvider> {
        self.wheel
    }

    pub fn ratio(&self) -> f64 {
        self.chainring as f64 / self.cog as f64
    }

    pub fn gear_inches(&self) -> Result<f64> {
        match self.wheel {
            Some(wheel) => Ok(self.ratio() * wheel.diameter()),
            None => {
                warn!("Gear {}x{} has no wheel to calculate gear inches with", self.chainring, self.cog);
                Err(Error::MissingCollaborator { operation: "gear_inches" })
            }
        }
    }
}
