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

use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::error::{Error, Result};
use crate::traits::{rim_and_tire_diameter, DiameterProvider};

/// Geometry of a bicycle wheel. Both measurements are in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wheel {
    rim: f64,
    tire: f64
}

impl Wheel {
    pub fn new(rim: f64, tire: f64) -> Wheel {
        Wheel { rim, tire }
    }

    /// Build a wheel from an untyped argument list of `[rim, tire]`
    pub fn from_values(values: &[f64]) -> Result<Wheel> {
        Error::check_arity("Wheel", 2, values.len()).map_err(|e| {
            warn!("Rejected wheel construction. {}", e);
            e
        })?;
        Ok(Wheel::new(values[0], values[1]))
    }

    pub fn rim(&self) -> f64 {
        self.rim
    }

    pub fn tire(&self) -> f64 {
        self.tire
    }

    pub fn diameter(&self) -> f64 {
        rim_and_tire_diameter(self.rim, self.tire)
    }

    pub fn circumference(&self) -> f64 {
        self.diameter() * std::f64::consts::PI
    }
}

impl DiameterProvider for Wheel {
    fn diameter(&self) -> f64 {
        Wheel::diameter(self)
    }
}

#[cfg(test)]
mod tests {
    use utils::numeric::round_float_to;
    use crate::error::Error;
    use crate::wheel::Wheel;

    #[test]
    fn wheel_geometry() {
        let wheel = Wheel::new(26.0, 1.5);
        assert_eq!(wheel.rim(), 26.0);
        assert_eq!(wheel.tire(), 1.5);
        assert_eq!(wheel.diameter(), 29.0);
        assert_eq!(round_float_to(wheel.circumference(), 9), 91.106186954);
        assert_eq!(Wheel::new(24.0, 1.25).diameter(), 26.5);
        assert_eq!(Wheel::new(0.0, 0.0).circumference(), 0.0);
    }

    #[test]
    fn negative_measurements_are_not_validated() {
        assert_eq!(Wheel::new(26.0, -1.0).diameter(), 24.0);
    }

    #[test]
    fn repeated_calls_are_stable() {
        let wheel = Wheel::new(26.0, 1.5);
        let first = wheel.circumference();
        for _ in 0..5 {
            assert_eq!(wheel.circumference(), first);
            assert_eq!(wheel.diameter(), 29.0);
        }
    }

    #[test]
    fn from_values() {
        assert_eq!(Wheel::from_values(&[26.0, 1.5]), Ok(Wheel::new(26.0, 1.5)));
        assert_eq!(Wheel::from_values(&[26.0]),
                   Err(Error::ConstructionArity { target: "Wheel", expected: 2, given: 1 }));
        assert_eq!(Wheel::from_values(&[26.0, 1.5, 3.0]),
                   Err(Error::ConstructionArity { target: "Wheel", expected: 2, given: 3 }));
    }

    #[test]
    fn json_round_trip() {
        let wheel: Wheel = serde_json::from_str(r#"{"rim": 26.0, "tire": 1.25}"#).unwrap();
        assert_eq!(wheel.diameter(), 28.5);
        let encoded = serde_json::to_string(&wheel).unwrap();
        assert_eq!(encoded, r#"{"rim":26.0,"tire":1.25}"#);
    }
}
