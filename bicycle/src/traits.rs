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

use std::fmt::Debug;

/// Anything that can play the part of a wheel when working out gear inches.
///
/// A [`Gear`](crate::Gear) only ever asks its wheel for a diameter, so rim and
/// tire details stay with whoever implements this.
pub trait DiameterProvider: Debug {
    fn diameter(&self) -> f64;
}

/// Diameter of a wheel made of a rim and a tire. The tire wraps the rim so
/// it counts twice.
pub fn rim_and_tire_diameter(rim: f64, tire: f64) -> f64 {
    rim + (tire * 2.0)
}
