//! # op-instruments
//!
//! The vanilla option contract: call/put payoff, European/American exercise,
//! the validated [`ContractTerms`] every pricer consumes, and the
//! [`PricingEngine`] interface the pricers implement.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod exercise;
pub mod instrument;
pub mod payoff;
pub mod terms;

pub use exercise::ExerciseType;
pub use instrument::{PricingEngine, PricingResults};
pub use payoff::{OptionType, Payoff, PlainVanillaPayoff};
pub use terms::{ContractTerms, ContractTermsBuilder};
