// SPDX-License-Identifier: AGPL-3.0-or-later

//! Sub-second precision selector.
//!
//! Integer and string encodings of a [`Timestamp`](crate::Timestamp) carry a
//! configurable number of decimal digits after the seconds place: `0` encodes
//! whole seconds, `3` milliseconds, and so on up to `7`, the 100-nanosecond
//! tick resolution of the encoding. [`SubsecondDigits`] is that parameter as
//! a checked newtype, so an out-of-range digit count is unrepresentable
//! rather than a runtime contract violation.

/// Number of decimal sub-second digits in an integer/string encoding.
///
/// Valid range is `0..=7`.  Construct via [`SubsecondDigits::new`] or one of
/// the named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubsecondDigits(u8);

impl SubsecondDigits {
    /// Whole seconds (no sub-second digits).
    pub const SECONDS: Self = Self(0);

    /// Millisecond precision (three sub-second digits).
    pub const MILLISECONDS: Self = Self(3);

    /// Microsecond precision (six sub-second digits).
    pub const MICROSECONDS: Self = Self(6);

    /// Full 100-nanosecond tick precision (seven sub-second digits).
    pub const TICKS: Self = Self(7);

    /// Largest accepted digit count.
    pub const MAX: u8 = 7;

    /// Create a digit count, rejecting values above [`Self::MAX`].
    #[inline]
    pub const fn new(digits: u8) -> Option<Self> {
        if digits <= Self::MAX {
            Some(Self(digits))
        } else {
            None
        }
    }

    /// The raw digit count.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Number of 100-nanosecond ticks in one encoded unit: `10^(7 − digits)`.
    #[inline]
    pub(crate) const fn ticks_per_unit(self) -> i64 {
        // 10^0 ..= 10^7, indexed by 7 − digits.
        const POW10: [i64; 8] = [
            1,
            10,
            100,
            1_000,
            10_000,
            100_000,
            1_000_000,
            10_000_000,
        ];
        POW10[(Self::MAX - self.0) as usize]
    }
}

impl Default for SubsecondDigits {
    /// Whole-second precision, matching the digits-defaulted encodings.
    #[inline]
    fn default() -> Self {
        Self::SECONDS
    }
}

impl TryFrom<u8> for SubsecondDigits {
    type Error = u8;

    /// Fails with the rejected value if `digits > 7`.
    #[inline]
    fn try_from(digits: u8) -> Result<Self, Self::Error> {
        Self::new(digits).ok_or(digits)
    }
}
