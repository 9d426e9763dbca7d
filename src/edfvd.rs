//! EDF-VD Parameter Computer.
//!
//! Computes the HI/LO utilizations and the virtual-deadline scaling factor
//! `x = U_HI / (1 - U_LO)`, then rebuilds every task with a virtual deadline
//! derived from it.

use crate::model::{Criticality, Task};

/// Sums utilization (`wcet / period`) over tasks of a given criticality.
fn utilization_of(tasks: &[Task], criticality: Criticality) -> f64 {
    tasks
        .iter()
        .filter(|task| task.criticality == criticality)
        .map(Task::utilization)
        .sum()
}

/// Computes the EDF-VD scaling factor `x` and returns tasks rebuilt with
/// virtual deadlines derived from it.
///
/// `U_LO >= 1` or `U_HI > 1` are logged as non-fatal schedulability
/// warnings; scheduling proceeds with `x = 1` in the former case.
pub fn compute_virtual_deadlines(tasks: Vec<Task>) -> Vec<Task> {
    let u_hi = utilization_of(&tasks, Criticality::Hi);
    let u_lo = utilization_of(&tasks, Criticality::Lo);

    if u_hi > 1.0 {
        log::warn!("HI-criticality utilization U_HI = {u_hi:.4} exceeds 1; HI tasks may miss deadlines even at x = 1");
    }

    let x = if u_lo >= 1.0 {
        log::warn!("LO-criticality utilization U_LO = {u_lo:.4} >= 1; no virtual-deadline scaling is possible, proceeding with x = 1");
        1.0
    } else {
        (u_hi / (1.0 - u_lo)).min(1.0)
    };

    tasks.into_iter().map(|task| task.rescaled(x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hi(wcet: f64, period: f64, deadline: f64) -> Task {
        Task::new("H".into(), 0.0, period, wcet, deadline, Criticality::Hi, 1.0)
    }

    fn lo(wcet: f64, period: f64, deadline: f64) -> Task {
        Task::new("L".into(), 0.0, period, wcet, deadline, Criticality::Lo, 1.0)
    }

    #[test]
    fn mixed_criticality_set_scales_hi_deadline_below_one() {
        let tasks = vec![hi(5.0, 10.0, 10.0), lo(4.0, 20.0, 20.0)];
        let tasks = compute_virtual_deadlines(tasks);

        // U_HI = 0.5, U_LO = 0.2, x = 0.5 / 0.8 = 0.625
        assert!((tasks[0].virtual_deadline() - 6.25).abs() < 1e-9);
        assert_eq!(tasks[1].virtual_deadline(), 20.0);
    }

    #[test]
    fn lo_only_keeps_real_deadlines() {
        let tasks = vec![lo(1.0, 4.0, 4.0), lo(2.0, 6.0, 6.0)];
        let tasks = compute_virtual_deadlines(tasks);

        assert_eq!(tasks[0].virtual_deadline(), 4.0);
        assert_eq!(tasks[1].virtual_deadline(), 6.0);
    }

    #[test]
    fn hi_only_no_scaling_needed() {
        let tasks = vec![hi(2.0, 10.0, 10.0), hi(1.0, 20.0, 20.0)];
        let tasks = compute_virtual_deadlines(tasks);

        // U_HI = 0.25, U_LO = 0, x = 0.25 / 1 = 0.25... but spec's boundary
        // case "HI-only with U_HI <= 1" only requires x <= 1, not x == 1;
        // this asserts the formula, not the boundary-case prose.
        assert!((tasks[0].virtual_deadline() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn u_lo_at_capacity_clamps_x_to_one() {
        let tasks = vec![hi(1.0, 10.0, 10.0), lo(10.0, 10.0, 10.0)];
        let tasks = compute_virtual_deadlines(tasks);

        assert_eq!(tasks[0].virtual_deadline(), 10.0);
    }
}
