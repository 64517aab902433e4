use std::iter::Sum;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;

use serde::Deserialize;
use serde::Serialize;

/// An amount across the three payment dimensions: currency and the two stamp kinds.
///
/// Every dimension is always present. "Nothing in this dimension" is `0`.
/// On the wire a missing field deserializes to `0`.
#[derive(Debug, Default, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize, parse_display::Display)]
#[display("cent={cent} coffee_stamp={coffee_stamp} bottle_stamp={bottle_stamp}")]
#[serde(default, rename_all = "PascalCase")]
pub struct CoinAmount {
    pub cent: i64,
    pub coffee_stamp: i64,
    pub bottle_stamp: i64,
}

impl CoinAmount {
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Largest magnitude a single dimension may take when read from a basket file or a balance flag.
    pub const MAX_INPUT: i64 = 1_000_000_000;

    pub const fn new(cent: i64, coffee_stamp: i64, bottle_stamp: i64) -> Self {
        Self {
            cent,
            coffee_stamp,
            bottle_stamp,
        }
    }

    pub const fn cent(cent: i64) -> Self {
        Self::new(cent, 0, 0)
    }

    pub const fn coffee_stamps(coffee_stamp: i64) -> Self {
        Self::new(0, coffee_stamp, 0)
    }

    pub const fn bottle_stamps(bottle_stamp: i64) -> Self {
        Self::new(0, 0, bottle_stamp)
    }

    pub const fn is_empty(&self) -> bool {
        self.cent == 0 && self.coffee_stamp == 0 && self.bottle_stamp == 0
    }

    /// Combined number of stamps, both kinds counted alike.
    pub const fn stamp_total(&self) -> i64 {
        self.coffee_stamp + self.bottle_stamp
    }
}

impl Add for CoinAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            cent: self.cent + rhs.cent,
            coffee_stamp: self.coffee_stamp + rhs.coffee_stamp,
            bottle_stamp: self.bottle_stamp + rhs.bottle_stamp,
        }
    }
}

impl Sub for CoinAmount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            cent: self.cent - rhs.cent,
            coffee_stamp: self.coffee_stamp - rhs.coffee_stamp,
            bottle_stamp: self.bottle_stamp - rhs.bottle_stamp,
        }
    }
}

impl Neg for CoinAmount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::ZERO - self
    }
}

impl AddAssign for CoinAmount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for CoinAmount {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Sum for CoinAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for CoinAmount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
