//! Checked narrowing from wide signed integers to the unsigned widths used
//! for positions, counts, and tickets.
//!
//! Every integer read from an input source passes through [`narrow`] (or one
//! of its width-specific shorthands) before it is stored anywhere, so this is
//! the only place a value can lose width.

use crate::error::{Location, SetupError};

/// A value that does not fit the requested unsigned width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{value} does not fit in {target} (0..={max})")]
pub struct NarrowError {
    pub value: i64,
    pub target: &'static str,
    pub max: u64,
}

impl NarrowError {
    /// Attaches the record location, producing the crate-level error.
    pub fn at(self, at: Location) -> SetupError {
        SetupError::OutOfRange {
            at,
            value: self.value,
            range: format!("0..={}", self.max),
        }
    }
}

/// Unsigned target widths accepted by [`narrow`].
pub trait Unsigned: TryFrom<i64> + Copy {
    const NAME: &'static str;
    const MAX: u64;
}

macro_rules! unsigned {
    ($($t:ty),*) => {
        $(
            impl Unsigned for $t {
                const NAME: &'static str = stringify!($t);
                const MAX: u64 = <$t>::MAX as u64;
            }
        )*
    };
}

unsigned!(u8, u16, u32);

/// Returns `value` as `T` iff it is non-negative and at most `T::MAX`.
pub fn narrow<T: Unsigned>(value: i64) -> Result<T, NarrowError> {
    T::try_from(value).map_err(|_| NarrowError {
        value,
        target: T::NAME,
        max: T::MAX,
    })
}

pub fn to_u8(value: i64) -> Result<u8, NarrowError> {
    narrow(value)
}

pub fn to_u16(value: i64) -> Result<u16, NarrowError> {
    narrow(value)
}

pub fn to_u32(value: i64) -> Result<u32, NarrowError> {
    narrow(value)
}

/// Narrows `value`, attributing a failure to `at`.
pub fn narrow_at<T: Unsigned>(value: i64, at: impl FnOnce() -> Location) -> Result<T, SetupError> {
    narrow(value).map_err(|e: NarrowError| e.at(at()))
}
