use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign};
use std::iter::Sum;
use std::ops::Div;

/// A length in device pixels. Fractional values come out of font metrics; anything
/// that lands on the canvas is floored to whole pixels first.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign, Display, From, Into,
)]
#[display("{_0}px")]
pub struct Px(pub f32);

impl Px {
    /// Round down to a whole pixel coordinate
    pub fn floor(self) -> i64 {
        self.0.floor() as i64
    }

    /// Round up to a whole pixel extent, never below zero
    pub fn ceil_u32(self) -> u32 {
        self.0.max(0.0).ceil() as u32
    }
}

impl From<u32> for Px {
    fn from(value: u32) -> Self {
        Px(value as f32)
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}

impl Sum for Px {
    fn sum<I: Iterator<Item = Px>>(iter: I) -> Px {
        iter.fold(Px(0.0), |acc, px| acc + px)
    }
}
