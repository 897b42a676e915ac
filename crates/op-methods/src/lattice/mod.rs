//! Lattice methods for option pricing.
//!
//! # Overview
//!
//! * [`BinomialTree`]: recombining Cox-Ross-Rubinstein tree
//! * [`roll_back`]: backward induction with optional early exercise

pub mod binomial_tree;

pub use binomial_tree::BinomialTree;

use op_core::{DiscountFactor, Real};

// ─── Backward-induction pricing ───────────────────────────────────────────────

/// Value a contract by backward induction on a binomial tree.
///
/// Terminal values are `payoff(S)` at every node of the last layer. Each
/// earlier layer is built fresh from the one after it: a node's hold value is
/// the discounted expectation of its down and up children, and when
/// `early_exercise` is set it is replaced by the intrinsic value whenever
/// that is larger. Returns the root value.
///
/// # Arguments
/// * `tree`: the binomial tree (already constructed)
/// * `payoff`: payoff function `S → value` (e.g. `|s| (s - K).max(0.0)`)
/// * `discount`: per-step discount factor, typically `exp(−r · Δt)`
/// * `early_exercise`: compare against intrinsic value at every node
pub fn roll_back(
    tree: &BinomialTree,
    payoff: &dyn Fn(Real) -> Real,
    discount: DiscountFactor,
    early_exercise: bool,
) -> Real {
    let n = tree.steps();
    let pu = tree.probability(1);
    let pd = tree.probability(0);

    let mut values: Vec<Real> = (0..tree.size(n))
        .map(|j| payoff(tree.underlying(n, j)))
        .collect();

    for i in (0..n).rev() {
        values = values
            .windows(2)
            .enumerate()
            .map(|(j, children)| {
                let hold = discount * (pd * children[0] + pu * children[1]);
                if early_exercise {
                    hold.max(payoff(tree.underlying(i, j)))
                } else {
                    hold
                }
            })
            .collect();
        debug_assert_eq!(values.len(), tree.size(i));
    }

    values[0]
}

// ─── Tests ────────────────────────────────────────────────────────────────────
