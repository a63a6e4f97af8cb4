/// Numeric conversion helpers.
///
/// This module provides the conversions between `f64` and the integer types
/// that integer division and factorial need. Every conversion that could lose
/// information reports it through `Option` instead of silently saturating.
pub mod num;
