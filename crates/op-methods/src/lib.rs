//! # op-methods
//!
//! Numerical methods behind the lattice and Monte Carlo pricers.
//!
//! # Modules
//!
//! * [`lattice`]: recombining Cox-Ross-Rubinstein tree and backward induction
//! * [`monte_carlo`]: exact terminal-value sampling of geometric Brownian
//!   motion and the discounted-payoff estimator

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Lattice methods: binomial tree, backward induction.
pub mod lattice;

/// Monte Carlo simulation: terminal-value generation, pricing, statistics.
pub mod monte_carlo;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use lattice::{roll_back, BinomialTree};
pub use monte_carlo::{mc_european_price, MonteCarloModel, TerminalValueGenerator};
