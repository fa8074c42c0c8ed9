//! Classical (precise) statistical decision theory on finite spaces.
//!
//! A [`DecisionProblem`] has decisions `d`, parameter values `x` and data
//! values `y`, with:
//! - Utility: `u(d, x)`
//! - Likelihood: `p(y | x)`
//! - Prior: `p(x)`
//!
//! A strategy maps each data value to a decision. Its Wald (frequentist)
//! expected utility at `x` is `Σ_y p(y | x) · u(s(y), x)`; the Bayesian
//! view instead fixes `y` and scores decisions by posterior expected
//! utility.

use serde::{Deserialize, Serialize};

use super::criteria::is_within_tolerance_of_max;
use super::dominance::{is_maximal, pointwise_dominates};
use super::expectation::expectation;

/// Tolerance for PMF rows summing to one.
const PMF_SUM_TOL: f64 = 1e-9;

/// Finite decision problem with precise prior and likelihood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionProblem {
    /// `utility[d][x]`
    utility: Vec<Vec<f64>>,
    /// `likelihood[x][y] = p(y | x)`
    likelihood: Vec<Vec<f64>>,
    /// `prior[x]`
    prior: Vec<f64>,
}

fn is_pmf(values: &[f64]) -> bool {
    !values.is_empty()
        && values.iter().all(|p| p.is_finite() && *p >= 0.0)
        && (values.iter().sum::<f64>() - 1.0).abs() <= PMF_SUM_TOL
}

impl DecisionProblem {
    /// Create a decision problem with validation.
    ///
    /// Returns None unless every utility row has one entry per parameter,
    /// the prior is a PMF, and every likelihood row is a PMF over the same
    /// data space.
    pub fn new(utility: Vec<Vec<f64>>, likelihood: Vec<Vec<f64>>, prior: Vec<f64>) -> Option<Self> {
        if utility.is_empty() || !is_pmf(&prior) || likelihood.len() != prior.len() {
            return None;
        }
        let num_params = prior.len();
        if utility
            .iter()
            .any(|row| row.len() != num_params || row.iter().any(|u| !u.is_finite()))
        {
            return None;
        }
        let num_data = likelihood[0].len();
        if likelihood
            .iter()
            .any(|row| row.len() != num_data || !is_pmf(row))
        {
            return None;
        }
        Some(Self {
            utility,
            likelihood,
            prior,
        })
    }

    pub fn num_decisions(&self) -> usize {
        self.utility.len()
    }

    pub fn num_params(&self) -> usize {
        self.prior.len()
    }

    pub fn num_data(&self) -> usize {
        self.likelihood[0].len()
    }

    /// Wald expected utility of `strategy` at parameter `x`.
    ///
    /// `strategy[y]` is the decision taken on observing `y`. Returns NAN for
    /// a malformed strategy or out-of-range `x`.
    pub fn wald_expected_utility(&self, strategy: &[usize], x: usize) -> f64 {
        if x >= self.num_params()
            || strategy.len() != self.num_data()
            || strategy.iter().any(|&d| d >= self.num_decisions())
        {
            return f64::NAN;
        }
        let gamble: Vec<f64> = strategy.iter().map(|&d| self.utility[d][x]).collect();
        expectation(&self.likelihood[x], &gamble)
    }

    /// Wald expected utility of `strategy` at every parameter value.
    pub fn wald_profile(&self, strategy: &[usize]) -> Vec<f64> {
        (0..self.num_params())
            .map(|x| self.wald_expected_utility(strategy, x))
            .collect()
    }

    /// Every strategy, in lexicographic order of `(s(0), s(1), ...)`.
    pub fn strategies(&self) -> Vec<Vec<usize>> {
        let mut all: Vec<Vec<usize>> = vec![Vec::new()];
        for _ in 0..self.num_data() {
            all = all
                .into_iter()
                .flat_map(|prefix| {
                    (0..self.num_decisions()).map(move |d| {
                        let mut next = prefix.clone();
                        next.push(d);
                        next
                    })
                })
                .collect();
        }
        all
    }

    /// Flags strategies whose Wald profile no other profile pointwise dominates.
    pub fn admissible_strategies(&self, strategies: &[Vec<usize>]) -> Vec<bool> {
        let profiles: Vec<Vec<f64>> = strategies.iter().map(|s| self.wald_profile(s)).collect();
        is_maximal(&profiles, |a, b| pointwise_dominates(a, b))
    }

    /// Posterior `p(x | y)` by Bayes' rule.
    ///
    /// Returns NAN for out-of-range indices or zero evidence `p(y)`.
    pub fn posterior(&self, x: usize, y: usize) -> f64 {
        if x >= self.num_params() || y >= self.num_data() {
            return f64::NAN;
        }
        let evidence: f64 = (0..self.num_params())
            .map(|x2| self.likelihood[x2][y] * self.prior[x2])
            .sum();
        if evidence <= 0.0 {
            return f64::NAN;
        }
        self.likelihood[x][y] * self.prior[x] / evidence
    }

    /// Posterior expected utility of decision `d` after observing `y`.
    pub fn posterior_expected_utility(&self, d: usize, y: usize) -> f64 {
        if d >= self.num_decisions() {
            return f64::NAN;
        }
        let pmf: Vec<f64> = (0..self.num_params()).map(|x| self.posterior(x, y)).collect();
        expectation(&pmf, &self.utility[d])
    }

    /// Bayes decisions after observing `y`: every decision within tolerance
    /// of the best posterior expected utility.
    pub fn bayes_decisions(&self, y: usize) -> Vec<bool> {
        let values: Vec<f64> = (0..self.num_decisions())
            .map(|d| self.posterior_expected_utility(d, y))
            .collect();
        is_within_tolerance_of_max(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Boat example: decide whether to send a boat given last hour's wave
    // height (data) about next hour's wave height (parameter).
    const BOAT: usize = 0;
    const NO_BOAT: usize = 1;
    const LOW: usize = 0;
    const HIGH: usize = 1;

    fn boat_problem() -> DecisionProblem {
        DecisionProblem::new(
            vec![vec![3.0, -1.0], vec![0.0, 0.0]],
            vec![vec![0.9, 0.1], vec![0.3, 0.7]],
            vec![0.4, 0.6],
        )
        .unwrap()
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12
    }

    fn vec_approx_eq(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| approx_eq(*x, *y))
    }

    #[test]
    fn wald_profiles() {
        let p = boat_problem();
        assert!(vec_approx_eq(&p.wald_profile(&[BOAT, BOAT]), &[3.0, -1.0]));
        assert!(vec_approx_eq(&p.wald_profile(&[NO_BOAT, NO_BOAT]), &[0.0, 0.0]));
        // boat only if the last hour was low
        assert!(vec_approx_eq(&p.wald_profile(&[BOAT, NO_BOAT]), &[2.7, -0.3]));
        // boat only if the last hour was high
        assert!(vec_approx_eq(&p.wald_profile(&[NO_BOAT, BOAT]), &[0.3, -0.7]));
    }

    #[test]
    fn strategies_enumerates_all_maps() {
        let p = boat_problem();
        assert_eq!(
            p.strategies(),
            vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]
        );
    }

    #[test]
    fn boat_if_high_is_inadmissible() {
        let p = boat_problem();
        let strategies = p.strategies();
        // [0,0]=always, [0,1]=if low, [1,0]=if high, [1,1]=never
        assert_eq!(
            p.admissible_strategies(&strategies),
            vec![true, true, false, true]
        );
    }

    #[test]
    fn posterior_expected_utilities() {
        let p = boat_problem();
        assert!(approx_eq(p.posterior_expected_utility(BOAT, LOW), 5.0 / 3.0));
        assert!(approx_eq(p.posterior_expected_utility(NO_BOAT, LOW), 0.0));
        assert!(approx_eq(
            p.posterior_expected_utility(BOAT, HIGH),
            -15.0 / 23.0
        ));
        assert!(approx_eq(p.posterior_expected_utility(NO_BOAT, HIGH), 0.0));
    }

    #[test]
    fn posterior_sums_to_one() {
        let p = boat_problem();
        for y in [LOW, HIGH] {
            let total: f64 = (0..p.num_params()).map(|x| p.posterior(x, y)).sum();
            assert!(approx_eq(total, 1.0));
        }
    }

    #[test]
    fn bayes_decisions_follow_data() {
        let p = boat_problem();
        assert_eq!(p.bayes_decisions(LOW), vec![true, false]);
        assert_eq!(p.bayes_decisions(HIGH), vec![false, true]);
    }

    #[test]
    fn invalid_problems_rejected() {
        // prior does not sum to one
        assert!(DecisionProblem::new(
            vec![vec![1.0, 0.0]],
            vec![vec![1.0], vec![1.0]],
            vec![0.5, 0.6]
        )
        .is_none());
        // utility row too short
        assert!(DecisionProblem::new(
            vec![vec![1.0]],
            vec![vec![1.0], vec![1.0]],
            vec![0.5, 0.5]
        )
        .is_none());
        // likelihood row not a pmf
        assert!(DecisionProblem::new(
            vec![vec![1.0, 0.0]],
            vec![vec![0.5, 0.4], vec![0.5, 0.5]],
            vec![0.5, 0.5]
        )
        .is_none());
    }

    #[test]
    fn out_of_range_is_nan() {
        let p = boat_problem();
        assert!(p.wald_expected_utility(&[BOAT], LOW).is_nan());
        assert!(p.wald_expected_utility(&[BOAT, 7], LOW).is_nan());
        assert!(p.posterior(5, LOW).is_nan());
        assert!(p.posterior_expected_utility(9, LOW).is_nan());
    }
}
