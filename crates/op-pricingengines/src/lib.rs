//! # op-pricingengines
//!
//! Pricing engines for vanilla options and the method dispatcher.
//!
//! ## Engines
//!
//! - [`AnalyticEuropeanEngine`]: Black-Scholes-Merton closed form
//! - [`MonteCarloEuropeanEngine`]: exact terminal-value Monte Carlo with error estimate
//! - [`BinomialEngine`]: Cox-Ross-Rubinstein tree, European and American exercise
//!
//! ## Dispatch
//!
//! [`price`] and [`price_with`] select an engine from a [`PricingMethod`]
//! and a [`PricingConfig`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_european_engine;
pub mod binomial_engine;
pub mod mc_european_engine;
pub mod pricer;

pub use analytic_european_engine::{black_scholes_merton, AnalyticEuropeanEngine};
pub use binomial_engine::BinomialEngine;
pub use mc_european_engine::MonteCarloEuropeanEngine;
pub use pricer::{
    price, price_with, ContractPricing, PricingConfig, PricingMethod, DEFAULT_LATTICE_STEPS,
    DEFAULT_MC_SAMPLES,
};
