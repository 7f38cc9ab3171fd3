use argmin::core::{CostFunction, Error, Executor, State};
use argmin::solver::goldensectionsearch::GoldenSectionSearch;

use super::equilibrium::ThrustDragBalance;
use crate::components::SolverConfig;

impl CostFunction for ThrustDragBalance<'_> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, airspeed: &Self::Param) -> Result<Self::Output, Error> {
        Ok(self.imbalance(*airspeed))
    }
}

/// Grid points per coarse bracket.
const BRACKET_STRIDE: f64 = 10.0;

/// Golden-section minimisation of the thrust/drag imbalance, snapped to the
/// scan grid so results agree with the linear scan.
///
/// `|thrust - drag|` can dip to zero twice inside the band (a slow and a fast
/// balance), so it is not unimodal there. A coarse pass brackets every local
/// minimum first; each bracket is refined on its own and the best snapped
/// point wins, the lower speed on a tie.
pub fn golden_section_speed(
    balance: &ThrustDragBalance,
    config: &SolverConfig,
    tolerance: f64,
    max_iters: u64,
) -> Result<f64, Error> {
    let (low, high) = config.speed_range;
    let step = config.scan_step();
    let coarse_step = step * BRACKET_STRIDE;

    let mut best: Option<(f64, f64)> = None;
    for centre in coarse_minima(balance, config.speed_range, coarse_step) {
        let lower = (centre - coarse_step).max(low);
        let upper = (centre + coarse_step).min(high);
        let estimate = if upper > lower {
            refine(balance, lower, upper, tolerance, max_iters)?
        } else {
            centre
        };

        let speed = snap_to_grid(balance, estimate, config.speed_range, step);
        let imbalance = balance.imbalance(speed);
        let better = match best {
            None => true,
            Some((best_speed, best_imbalance)) => {
                imbalance < best_imbalance || (imbalance == best_imbalance && speed < best_speed)
            }
        };
        if better {
            best = Some((speed, imbalance));
        }
    }

    best.map(|(speed, _)| speed)
        .ok_or_else(|| Error::msg("coarse bracket scan found no minimum"))
}

fn refine(
    balance: &ThrustDragBalance,
    lower: f64,
    upper: f64,
    tolerance: f64,
    max_iters: u64,
) -> Result<f64, Error> {
    let solver = GoldenSectionSearch::new(lower, upper)?.with_tolerance(tolerance)?;
    let result = Executor::new(*balance, solver)
        .configure(|state| state.param(0.5 * (lower + upper)).max_iters(max_iters))
        .run()?;

    result
        .state()
        .get_best_param()
        .copied()
        .ok_or_else(|| Error::msg("golden-section search produced no estimate"))
}

/// Coarse grid points whose imbalance is below the previous point and not above
/// the next one. The first global minimum of the coarse grid is always included.
fn coarse_minima(balance: &ThrustDragBalance, range: (f64, f64), coarse_step: f64) -> Vec<f64> {
    let (low, high) = range;
    let count = ((high - low) / coarse_step + 1e-9).floor().max(0.0) as usize;
    let mut speeds: Vec<f64> = (0..=count).map(|i| low + i as f64 * coarse_step).collect();
    if speeds.last().is_some_and(|&last| last < high) {
        speeds.push(high);
    }

    let imbalances: Vec<f64> = speeds.iter().map(|&v| balance.imbalance(v)).collect();
    (0..speeds.len())
        .filter(|&i| {
            let falling = i == 0 || imbalances[i] < imbalances[i - 1];
            let not_rising = i + 1 == speeds.len() || imbalances[i] <= imbalances[i + 1];
            falling && not_rising
        })
        .map(|i| speeds[i])
        .collect()
}

/// Picks the better of the two grid points around `estimate`; the lower one on a tie.
fn snap_to_grid(balance: &ThrustDragBalance, estimate: f64, range: (f64, f64), step: f64) -> f64 {
    let (low, high) = range;
    let index = ((estimate - low) / step).floor().max(0.0);
    let below = (low + index * step).min(high);
    let above = (below + step).min(high);

    if balance.imbalance(above) < balance.imbalance(below) {
        above
    } else {
        below
    }
}
