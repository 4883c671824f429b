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

use std::result;
use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An operation needed a collaborator (e.g. a wheel) that was never supplied
    #[error("`{operation}` is unsupported without a wheel")]
    MissingCollaborator {
        operation: &'static str
    },
    #[error("wrong number of arguments for {target} (given {given}, expected {expected})")]
    ConstructionArity {
        target: &'static str,
        expected: usize,
        given: usize
    }
}

impl Error {
    pub(crate) fn check_arity(target: &'static str, expected: usize, given: usize) -> Result<()> {
        if given != expected {
            return Err(Error::ConstructionArity { target, expected, given });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;

    #[test]
    fn arity_check() {
        assert_eq!(Error::check_arity("Wheel", 2, 2), Ok(()));
        assert_eq!(Error::check_arity("Wheel", 2, 3),
                   Err(Error::ConstructionArity { target: "Wheel", expected: 2, given: 3 }));
    }

    #[test]
    fn error_messages() {
        let missing = Error::MissingCollaborator { operation: "gear_inches" };
        assert_eq!(missing.to_string(), "`gear_inches` is unsupported without a wheel");
        let arity = Error::ConstructionArity { target: "Gear", expected: 2, given: 4 };
        assert_eq!(arity.to_string(), "wrong number of arguments for Gear (given 4, expected 2)");
    }
}
