//! Lengths in em or mu units

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::ops::{Div, Mul, Neg};

/// Number of mu in one em
pub const MU_PER_EM: f32 = 18.0;

/// A length, either in math units (1/18 em) or in ems
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Space {
    length: f32,
    is_mu: bool,
}

impl Space {
    /// `\,` thin space
    pub const SHORT: Space = Space::mu(3.0);
    /// `\:` medium space
    pub const MEDIUM: Space = Space::mu(4.0);
    /// `\;` thick space
    pub const LONG: Space = Space::mu(5.0);
    /// `\quad`
    pub const EM_WIDTH: Space = Space::mu(MU_PER_EM);

    pub const fn new(length: f32, is_mu: bool) -> Self {
        Self { length, is_mu }
    }

    /// A length in math units
    pub const fn mu(length: f32) -> Self {
        Self::new(length, true)
    }

    /// A length in ems
    pub const fn em(length: f32) -> Self {
        Self::new(length, false)
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn is_mu(&self) -> bool {
        self.is_mu
    }

    /// Length in points for a font of the given point size
    pub fn actual_length(&self, point_size: f32) -> f32 {
        if self.is_mu {
            self.length * point_size / MU_PER_EM
        } else {
            self.length * point_size
        }
    }
}

// Bitwise float comparison keeps Eq reflexive and Hash consistent with it
impl PartialEq for Space {
    fn eq(&self, other: &Self) -> bool {
        self.length.to_bits() == other.length.to_bits() && self.is_mu == other.is_mu
    }
}

impl Eq for Space {}

impl Hash for Space {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.to_bits().hash(state);
        self.is_mu.hash(state);
    }
}

impl Neg for Space {
    type Output = Space;

    fn neg(self) -> Space {
        Space::new(-self.length, self.is_mu)
    }
}

impl Mul<f32> for Space {
    type Output = Space;

    fn mul(self, factor: f32) -> Space {
        Space::new(self.length * factor, self.is_mu)
    }
}

impl Div<f32> for Space {
    type Output = Space;

    fn div(self, divisor: f32) -> Space {
        Space::new(self.length / divisor, self.is_mu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actual_length() {
        assert_eq!(Space::EM_WIDTH.actual_length(12.0), 12.0);
        assert_eq!(Space::SHORT.actual_length(18.0), 3.0);
        assert_eq!(Space::em(2.0).actual_length(10.0), 20.0);
    }

    #[test]
    fn test_space_arithmetic() {
        assert_eq!(-Space::SHORT, Space::mu(-3.0));
        assert_eq!(Space::EM_WIDTH / 2.0, Space::mu(9.0));
        assert_eq!(Space::EM_WIDTH * 2.0, Space::mu(36.0));
    }

    #[test]
    fn test_units_distinguish_equality() {
        assert_ne!(Space::mu(1.0), Space::em(1.0));
        assert_eq!(Space::mu(f32::NAN), Space::mu(f32::NAN));
    }
}
