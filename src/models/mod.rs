//! Domain models for employee promotions.
//!
//! - [`Employee`]: Named employee with a salary, a performance tier, and the
//!   observers to notify after each promotion.
//! - [`PerformanceTier`]: Promotion policy per tier. `Satisfactory` moves to
//!   `Exemplary`, which is terminal.

mod employee;
mod tier;

pub use employee::*;
pub use tier::*;
