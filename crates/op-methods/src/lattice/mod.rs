//! Lattice methods for option pricing.
//!
//! * [`BinomialTree`] — recombining Cox-Ross-Rubinstein tree
//! * [`LatticeState`] — the O(n) node buffers rolled back in place
//! * [`price_american`] / [`price_european`] — backward induction

pub mod binomial_tree;

pub use binomial_tree::BinomialTree;

use op_core::Real;

// ─── LatticeState ─────────────────────────────────────────────────────────────

/// Node prices and option values for one layer of a [`BinomialTree`].
///
/// Both vectors have `n + 1` slots. While rolling back from layer `i + 1`
/// to layer `i`, slots `0..=i` are overwritten and the tail is left stale.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeState {
    prices: Vec<Real>,
    values: Vec<Real>,
}

impl LatticeState {
    /// Fill the maturity layer: prices `S·u^(n−i)·d^i` and their payoffs.
    pub fn at_maturity(tree: &BinomialTree, payoff: impl Fn(Real) -> Real) -> Self {
        let n = tree.steps();
        let prices: Vec<Real> = (0..tree.size(n)).map(|i| tree.underlying(n, i)).collect();
        let values = prices.iter().map(|&s| payoff(s)).collect();
        Self { prices, values }
    }

    /// Node prices (the first `step + 1` entries are live).
    pub fn prices(&self) -> &[Real] {
        &self.prices
    }

    /// Node option values (the first `step + 1` entries are live).
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Value at the root once the rollback has reached step 0.
    pub fn root_value(&self) -> Real {
        self.values[0]
    }

    /// Roll layer `step + 1` back onto layer `step`.
    ///
    /// Each node's price is recovered by dividing the price one layer later
    /// by `u`: slot `i` at step `step + 1` holds the up-child of `(step, i)`,
    /// which carries exactly one extra up-move. Prices must follow this
    /// update; recomputing `S·u^(step−i)·d^i` from scratch is equal in exact
    /// arithmetic but rounds differently.
    ///
    /// When `early_exercise` is set the node keeps `max(continuation,
    /// exercise)`.
    #[allow(clippy::needless_range_loop)]
    fn roll_back(
        &mut self,
        tree: &BinomialTree,
        step: usize,
        payoff: &impl Fn(Real) -> Real,
        early_exercise: bool,
    ) {
        let (u, p, disc) = (tree.up(), tree.probability(), tree.discount());
        let (prices, values) = (&mut self.prices[..=step + 1], &mut self.values[..=step + 1]);
        for i in 0..=step {
            prices[i] /= u;
            let continuation = disc * (p * values[i] + (1.0 - p) * values[i + 1]);
            values[i] = if early_exercise {
                let exercise = payoff(prices[i]);
                if continuation < exercise {
                    exercise
                } else {
                    continuation
                }
            } else {
                continuation
            };
        }
    }
}

// ─── Backward-induction pricing ───────────────────────────────────────────────

/// Price an American option by backward induction on a CRR tree.
///
/// Exercise is tested at every node, including the root: the node value is
/// `max(disc·(p·V_up + (1−p)·V_down), payoff(S_node))`. Only the root value
/// is returned; no exercise boundary is kept.
///
/// # Arguments
/// * `tree` — the CRR tree (already constructed)
/// * `payoff` — payoff function `S → value` (e.g. `|s| (s - K).max(0.0)`)
pub fn price_american(tree: &BinomialTree, payoff: impl Fn(Real) -> Real) -> Real {
    roll_back_to_root(tree, payoff, true)
}

/// Price a European option on the same tree (no early exercise).
pub fn price_european(tree: &BinomialTree, payoff: impl Fn(Real) -> Real) -> Real {
    roll_back_to_root(tree, payoff, false)
}

fn roll_back_to_root(
    tree: &BinomialTree,
    payoff: impl Fn(Real) -> Real,
    early_exercise: bool,
) -> Real {
    let mut state = LatticeState::at_maturity(tree, &payoff);
    for step in (0..tree.steps()).rev() {
        state.roll_back(tree, step, &payoff, early_exercise);
    }
    state.root_value()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
