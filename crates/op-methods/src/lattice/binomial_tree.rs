//! Recombining Cox-Ross-Rubinstein binomial tree.
//!
//! | Quantity | Value |
//! |---|---|
//! | step | `Δt = T / n` |
//! | up / down | `u = exp(σ√Δt)`, `d = 1/u` |
//! | up probability | `p = (exp((r − q)Δt) − d) / (u − d)` |
//!
//! Node `(i, j)` is the state after `j` up-moves and `i − j` down-moves, and
//! its underlying value is computed from those counts alone, never by
//! walking a path, so all paths reaching a node agree bit for bit.

use op_core::{domain_error, ensure_param, Rate, Real, Time, Volatility};
use op_core::errors::Result;

/// A recombining binomial tree over `steps` equal time steps.
///
/// The tree has `steps + 1` time layers, with layer `i` having `i + 1` nodes.
#[derive(Debug, Clone)]
pub struct BinomialTree {
    x0: Real,
    dt: Time,
    steps: usize,
    up: Real,
    down: Real,
    pu: Real,
    pd: Real,
}

impl BinomialTree {
    /// Cox-Ross-Rubinstein tree (equal and opposite log-jumps).
    ///
    /// # Errors
    /// * [`InvalidParameter`](op_core::Error::InvalidParameter) if
    ///   `steps == 0`.
    /// * [`NumericDomainError`](op_core::Error::NumericDomainError) if the
    ///   volatility or maturity is not positive (the jumps collapse to
    ///   `u = d = 1`), or if the step is too coarse for the drift and the
    ///   up-probability leaves `[0, 1]`.
    pub fn cox_ross_rubinstein(
        spot: Real,
        volatility: Volatility,
        risk_free_rate: Rate,
        dividend_yield: Rate,
        end: Time,
        steps: usize,
    ) -> Result<Self> {
        ensure_param!(steps > 0, "number of lattice steps must be positive, got {steps}");
        domain_error!(
            spot > 0.0 && end > 0.0,
            "lattice needs positive spot and maturity, got spot {spot}, maturity {end}"
        );
        domain_error!(
            volatility > 0.0,
            "lattice jumps are degenerate for volatility {volatility}"
        );

        let dt = end / steps as Real;
        let up = (volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        domain_error!(
            up > down,
            "lattice jumps are degenerate: σ√Δt = {} underflows",
            volatility * dt.sqrt()
        );
        let growth = ((risk_free_rate - dividend_yield) * dt).exp();
        let pu = (growth - down) / (up - down);
        let valid = pu.is_finite() && (0.0..=1.0).contains(&pu);
        // p ∈ [0, 1] iff |r − q|·Δt ≤ σ√Δt, i.e. steps ≥ T(r − q)²/σ²
        let carry = risk_free_rate - dividend_yield;
        let min_steps = (end * carry * carry / (volatility * volatility)).ceil().max(1.0);
        if !valid {
            tracing::warn!(pu, steps, min_steps, dt, "CRR up-probability outside [0, 1]");
        }
        domain_error!(
            valid,
            "CRR: invalid probability {pu} with {steps} steps, need at least {min_steps} steps"
        );

        Ok(Self {
            x0: spot,
            dt,
            steps,
            up,
            down,
            pu,
            pd: 1.0 - pu,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Number of time steps.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Time increment per step.
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// Initial underlying value (spot price).
    pub fn x0(&self) -> Real {
        self.x0
    }

    /// Up multiplier `u`.
    pub fn up(&self) -> Real {
        self.up
    }

    /// Down multiplier `d = 1/u`.
    pub fn down(&self) -> Real {
        self.down
    }

    /// Number of nodes at time step `i` (always `i + 1` for a binomial tree).
    pub fn size(&self, i: usize) -> usize {
        i + 1
    }

    /// Index of the descendant node at step `i+1` for a given `branch`.
    ///
    /// `branch = 0` → down, `branch = 1` → up.
    pub fn descendant(&self, _i: usize, index: usize, branch: usize) -> usize {
        index + branch
    }

    /// Underlying value at node `(i, index)`: `x0 · u^index · d^(i − index)`.
    pub fn underlying(&self, i: usize, index: usize) -> Real {
        debug_assert!(index <= i, "node ({i}, {index}) outside the tree");
        self.x0 * self.up.powi(index as i32) * self.down.powi((i - index) as i32)
    }

    /// Transition probability for `branch` (0 = down, 1 = up).
    pub fn probability(&self, branch: usize) -> Real {
        if branch == 1 {
            self.pu
        } else {
            self.pd
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
