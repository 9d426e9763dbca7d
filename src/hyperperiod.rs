//! Hyperperiod & Job-Count Calculator.
//!
//! The hyperperiod is the LCM of all task periods. Periods are real-valued,
//! so they're rounded to the nearest integer before folding `num::integer::lcm`
//! over them, with a warning logged when the rounding isn't exact.

use crate::model::{Task, EPSILON};

const NUMERIC_WARNING_TOLERANCE: f64 = 1e-9;

/// Rounds each task's period to the nearest positive integer, computes the
/// hyperperiod as their LCM, and sets each task's `job_count` for arrivals
/// strictly inside `[0, H)`.
///
/// Returns `(hyperperiod, tasks)`; the tasks carry updated `job_count`s.
pub fn compute_hyperperiod(tasks: Vec<Task>) -> (f64, Vec<Task>) {
    let rounded_periods: Vec<u64> = tasks
        .iter()
        .map(|task| {
            let rounded = task.period.round();
            if (rounded - task.period).abs() > NUMERIC_WARNING_TOLERANCE {
                log::warn!(
                    "period for task '{}' ({}) is not an integer; rounding to {rounded}",
                    task.name, task.period
                );
            }

            if rounded <= 0.0 { 1 } else { rounded as u64 }
        })
        .collect();

    let hyperperiod_units = rounded_periods.iter().copied().fold(1u64, num::integer::lcm);
    let hyperperiod = hyperperiod_units as f64;

    let tasks = tasks
        .into_iter()
        .zip(rounded_periods)
        .map(|(task, rounded_period)| {
            let job_count = job_count_within(task.phase, rounded_period as f64, hyperperiod);
            task.with_job_count(job_count)
        })
        .collect();

    (hyperperiod, tasks)
}

/// Counts arrivals `phase + k * period` for `k = 0, 1, ...` that fall
/// strictly inside `[0, hyperperiod)`.
///
/// A plain `floor((H - phase) / period)` undercounts by one whenever `phase`
/// is nonzero and `period` doesn't evenly divide `H - phase`, since the
/// in-range arrival at `phase + floor(...) * period` gets truncated away
/// along with the genuinely out-of-range one above it. Checking that
/// boundary arrival directly corrects for it.
fn job_count_within(phase: f64, period: f64, hyperperiod: f64) -> usize {
    if phase >= hyperperiod {
        return 0;
    }

    let mut count = ((hyperperiod - phase) / period).floor() as i64;
    if count < 0 {
        count = 0;
    }

    if phase + (count as f64) * period < hyperperiod - EPSILON {
        count += 1;
    }

    count as usize
}
