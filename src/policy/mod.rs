//! Policy module deciding where a push goes
//!
//! Pure function of the push options, the modifier flag and the config;
//! no platform access.

mod decision;

pub use decision::{decide, Decision, PushOptions, Reason};
