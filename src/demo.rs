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

use std::io::Write;
use tracing::info;
use bicycle::{Gear, Wheel, WheelAdapter};
use utils::numeric::round_float_to;
use utils::units::development_metres;

const SEPARATOR: &str = "########################################";

/// Walks through the gear and wheel calculations, writing each result to `out`
pub fn run(out: &mut impl Write, decimal_places: u32) -> Result<(), Box<dyn std::error::Error>> {
    let round = |val: f64| round_float_to(val, decimal_places);

    for (chainring, cog) in [(52, 11), (30, 27)] {
        let gear = Gear::new(chainring, cog);
        writeln!(out, "Gear {}x{} ratio: {}", chainring, cog, round(gear.ratio()))?;
    }
    writeln!(out, "{}", SEPARATOR)?;

    for tire in [1.5, 1.25] {
        let wheel = Wheel::new(26.0, tire);
        let gear = Gear::with_wheel(52, 11, &wheel);
        writeln!(out, "Gear 52x11 on {}x{} wheel: {} gear inches", wheel.rim(), wheel.tire(), round(gear.gear_inches()?))?;
    }
    writeln!(out, "{}", SEPARATOR)?;

    let wheel = Wheel::new(26.0, 1.5);
    writeln!(out, "Wheel 26x1.5 circumference: {}", round(wheel.circumference()))?;
    let gear_inches = Gear::with_wheel(52, 11, &wheel).gear_inches()?;
    writeln!(out, "Gear 52x11 development: {} m", round(development_metres(gear_inches)))?;
    writeln!(out, "{}", SEPARATOR)?;

    match Gear::new(52, 11).gear_inches() {
        Ok(val) => writeln!(out, "Gear 52x11 without a wheel: {}", round(val))?,
        Err(e) => writeln!(out, "Gear 52x11 without a wheel: {}", e)?
    }
    writeln!(out, "{}", SEPARATOR)?;

    let adapter = WheelAdapter::new(&[(26.0, 1.5), (24.0, 1.25)]);
    let diameters: Vec<String> = adapter.diameters().into_iter().map(|d| round(d).to_string()).collect();
    writeln!(out, "Diameters: [{}]", diameters.join(", "))?;
    info!("Demo complete");
    Ok(())
}
