//! Schedule Writer & Analyzer.
//!
//! Writers take `impl std::io::Write` rather than a hardcoded path, which
//! keeps the formatting logic testable against an in-memory buffer.

use std::io::Write;

use crate::model::{Job, RunSlice, Task};

/// Writes the schedule header and one line per run-slice.
pub fn write_schedule(mut out: impl Write, tasks: &[Task], slices: &[RunSlice]) -> std::io::Result<()> {
    writeln!(out, "EDF-VD Schedule from 0 to each event:")?;

    for slice in slices {
        writeln!(
            out,
            "[{:6.2} -> {:6.2}]: Task={:<8} Job={}",
            slice.start,
            slice.end,
            tasks[slice.task_index].name,
            slice.job_id
        )?;
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    pub preemptions: usize,
    pub avg_wait: f64,
    pub avg_response: f64,
}

/// Computes aggregate statistics over finished jobs and the slice stream.
///
/// Preemption count is the number of identity transitions between adjacent
/// slices, since the writer already merges consecutive same-identity
/// slices — every remaining transition is a genuine context switch.
pub fn analyze(jobs: &[Job], slices: &[RunSlice]) -> Analysis {
    let preemptions = slices
        .windows(2)
        .filter(|pair| pair[0].identity() != pair[1].identity())
        .count();

    let finished: Vec<&Job> = jobs.iter().filter(|job| job.finished).collect();

    if finished.is_empty() {
        return Analysis { preemptions, avg_wait: 0.0, avg_response: 0.0 };
    }

    let count = finished.len() as f64;
    let total_wait: f64 = finished
        .iter()
        .map(|job| job.start_time.expect("finished job has a start time") - job.arrival)
        .sum();
    let total_response: f64 = finished
        .iter()
        .map(|job| job.finish_time.expect("finished job has a finish time") - job.arrival)
        .sum();

    Analysis { preemptions, avg_wait: total_wait / count, avg_response: total_response / count }
}

/// Writes the analysis header and scalars.
pub fn write_analysis(mut out: impl Write, analysis: &Analysis) -> std::io::Result<()> {
    writeln!(out, "EDF-VD Schedule Analysis")?;
    writeln!(out, "========================")?;
    writeln!(out, "Number of Preemptions: {}", analysis.preemptions)?;
    writeln!(out, "Average Waiting Time:  {:.2}", analysis.avg_wait)?;
    writeln!(out, "Average Response Time: {:.2}", analysis.avg_response)?;

    Ok(())
}
