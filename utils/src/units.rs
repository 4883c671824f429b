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

pub const MM_PER_INCH: f64 = 25.4;

pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

pub fn inches_to_metres(inches: f64) -> f64 {
    inches_to_mm(inches) / 1000.0
}

/// Distance covered by one turn of the cranks, in metres, for the given
/// gear inches value
pub fn development_metres(gear_inches: f64) -> f64 {
    inches_to_metres(gear_inches * std::f64::consts::PI)
}

#[cfg(test)]
mod tests {
    use crate::numeric::round_float_to;
    use crate::units::{development_metres, inches_to_metres, inches_to_mm};

    #[test]
    fn conversions() {
        assert_eq!(inches_to_mm(1.0), 25.4);
        assert_eq!(round_float_to(inches_to_metres(29.0), 4), 0.7366);
        assert_eq!(round_float_to(development_metres(137.0909090909091), 3), 10.939);
    }
}
