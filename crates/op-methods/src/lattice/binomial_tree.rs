//! Recombining Cox-Ross-Rubinstein binomial tree.
//!
//! | Quantity | Value |
//! |---|---|
//! | step | `Δt = T / n` |
//! | up factor | `u = exp(σ √Δt)` |
//! | down factor | `d = 1 / u` |
//! | risk-neutral probability | `p = (exp(r Δt) − d) / (u − d)` |
//! | per-step discount | `exp(−r Δt)` |
//!
//! Node `(i, j)` sits after `j` down-moves out of `i` steps, so its price is
//! `S · u^(i−j) · d^j`; index 0 is the highest node of every layer.

use op_core::{OptionParameters, Real, Time};

/// A CRR binomial tree for one option's market data.
///
/// The tree stores only its per-step factors; node prices are produced on
/// demand and the pricing state lives in [`LatticeState`](super::LatticeState).
#[derive(Debug, Clone, PartialEq)]
pub struct BinomialTree {
    spot: Real,
    steps: usize,
    dt: Time,
    up: Real,
    down: Real,
    probability: Real,
    discount: Real,
}

impl BinomialTree {
    /// Build the CRR tree for `params` with `steps` time steps.
    ///
    /// No validation is performed: degenerate inputs give non-finite
    /// factors, and `p` is not clamped to `[0, 1]`. Check
    /// [`probability_in_range`](Self::probability_in_range) before trusting
    /// the result.
    pub fn cox_ross_rubinstein(params: &OptionParameters, steps: usize) -> Self {
        let dt = params.maturity / steps as Real;
        let up = (params.volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        let probability = ((params.rate * dt).exp() - down) / (up - down);
        let discount = (-params.rate * dt).exp();
        Self {
            spot: params.spot,
            steps,
            dt,
            up,
            down,
            probability,
            discount,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Number of time steps `n`.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Time increment per step.
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// Spot price at the root.
    pub fn spot(&self) -> Real {
        self.spot
    }

    /// Up factor `u`.
    pub fn up(&self) -> Real {
        self.up
    }

    /// Down factor `d = 1/u`.
    pub fn down(&self) -> Real {
        self.down
    }

    /// Risk-neutral up probability `p`.
    pub fn probability(&self) -> Real {
        self.probability
    }

    /// Per-step discount factor `exp(−r Δt)`.
    pub fn discount(&self) -> Real {
        self.discount
    }

    /// Whether `p` is a genuine probability.
    ///
    /// Fails when `exp(r Δt)` falls outside `[d, u]`, i.e. for large
    /// `|r| √Δt / σ`; the rollback then weights branches with a negative
    /// or super-unit coefficient.
    pub fn probability_in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.probability)
    }

    /// Number of nodes at time step `i` (always `i + 1`).
    pub fn size(&self, i: usize) -> usize {
        i + 1
    }

    /// Underlying price at node `(i, j)`: `S · u^(i−j) · d^j`.
    pub fn underlying(&self, i: usize, j: usize) -> Real {
        debug_assert!(j <= i && i <= self.steps);
        self.spot * self.up.powi((i - j) as i32) * self.down.powi(j as i32)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
