#![allow(
    clippy::excessive_precision,
    clippy::unreadable_literal,
    reason = "we don't really want to read the physical constants in this crate."
)]

//! Standard atmosphere and dry air thermodynamics.
//!
//! All quantities are SI and carried as `f64` newtypes,
//! so pressures in pascals and hectopascals cannot be mixed up.

use std::{cmp, fmt, iter, ops};

mod units;
pub use units::*;

mod constants;
pub use constants::*;

mod error;
pub use error::{Error, ErrorKind};

mod validate;

mod standard;
pub use standard::*;

mod adiabatic;
pub use adiabatic::*;

mod atmosphere;
pub use atmosphere::*;

#[cfg(test)]
mod tests;

/// Returns `start`, `start+interval`, `start+interval+interval`, ... until `end`.
/// The second last item is between `end - interval` and `end`, and is not equal to `end`.
///
/// # Panics
/// Panics if `interval` is not a finite positive or negative value.
pub fn range_steps<T, U>(mut start: T, end: T, interval: U) -> impl Iterator<Item = T> + Clone
where
    T: Copy + PartialOrd + ops::AddAssign<U>,
    U: fmt::Debug + Copy + Default + PartialOrd,
{
    let more_extreme = match interval.partial_cmp(&U::default()) {
        Some(cmp::Ordering::Less) => |a: T, b: T| a <= b,
        Some(cmp::Ordering::Greater) => |a, b| a >= b,
        _ => panic!("interval {interval:?} must be a finite positive or negative"),
    };

    let mut fuse = Some(end).filter(|_| more_extreme(end, start));

    iter::from_fn(move || {
        let output = start;
        if more_extreme(output, end) {
            fuse.take()
        } else {
            start += interval;
            Some(output)
        }
    })
}
