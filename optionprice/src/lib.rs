//! # optionprice
//!
//! Vanilla option valuation under three methods: the Black-Scholes-Merton
//! closed form, Monte Carlo simulation, and a Cox-Ross-Rubinstein binomial
//! tree.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `op-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! optionprice = "0.1"
//! ```
//!
//! A European put, 45 days to expiry, priced three ways:
//!
//! ```rust
//! use optionprice::instruments::{ContractTerms, ExerciseType, OptionType};
//! use optionprice::pricingengines::{price, price_with, PricingConfig, PricingMethod};
//! use optionprice::time::Date;
//!
//! let terms = ContractTerms::builder()
//!     .exercise(ExerciseType::European)
//!     .option_type(OptionType::Put)
//!     .spot(100.0)
//!     .strike(120.0)
//!     .volatility(0.01)
//!     .risk_free_rate(0.05)
//!     .start(Date::from_ymd(2008, 2, 14)?)
//!     .days(45)
//!     .build()?;
//!
//! let bsm = price(&terms, PricingMethod::Analytic, None)?;
//! let bt = price(&terms, "BT".parse()?, Some(1000))?;
//! let mc = price_with(
//!     &terms,
//!     PricingMethod::MonteCarlo,
//!     &PricingConfig::default().with_iterations(500_000).with_seed(42),
//! )?;
//!
//! assert!((bsm - bt).abs() < 1e-2);
//! assert!((bsm - mc.npv).abs() < 1e-1);
//! println!("{terms}\nBSM {bsm:.4}  BT {bt:.4}  MC {:.4} ± {:.4}", mc.npv, mc.error_estimate.unwrap_or(0.0));
//! # Ok::<(), optionprice::core::Error>(())
//! ```
//!
//! Early exercise is valued only by the tree:
//!
//! ```rust
//! use optionprice::instruments::{ContractTerms, ExerciseType, OptionType};
//! use optionprice::pricingengines::{ContractPricing, PricingMethod};
//!
//! let american_put = ContractTerms::new(
//!     ExerciseType::American, OptionType::Put, 100.0, 100.0, 0.2, 0.05, 0.0, 1.0,
//! )?;
//! assert!(american_put.price(PricingMethod::Analytic, None).unwrap_err().is_unsupported_contract());
//! assert!(american_put.price(PricingMethod::Lattice, None)? > 6.0);
//! # Ok::<(), optionprice::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions, and settings.
pub use op_core as core;

/// Dates, the Actual/365 (Fixed) day counter, and expiry resolution.
pub use op_time as time;

/// Normal distribution, random number generators, statistics.
pub use op_math as math;

/// Contract terms, payoffs, exercise styles, and the engine interface.
pub use op_instruments as instruments;

/// Numerical methods (binomial lattice, Monte Carlo).
pub use op_methods as methods;

/// Pricing engines and method dispatch.
pub use op_pricingengines as pricingengines;

pub use op_core::{Error, Result};
pub use op_instruments::{ContractTerms, ExerciseType, OptionType};
pub use op_pricingengines::{price, price_with, ContractPricing, PricingConfig, PricingMethod};
