//! Job Expander.
//!
//! For each task in input order, the next `task.job_count` tokens of the
//! execution-time trace are that task's actual execution times, one job per
//! token, arrivals spaced by the task's period starting at its phase.

use crate::error::Error;
use crate::model::{Job, Task};

/// Reads the execution-trace file and expands `tasks` into concrete jobs,
/// ordered by `(task_index, job_id)`.
pub fn load_jobs(path: &std::path::Path, tasks: &[Task], hyperperiod: f64) -> Result<Vec<Job>, Error> {
    let data = std::fs::read_to_string(path)?;
    expand_jobs(&data, tasks, hyperperiod)
}

pub fn expand_jobs(trace: &str, tasks: &[Task], hyperperiod: f64) -> Result<Vec<Job>, Error> {
    let mut tokens = trace.split_ascii_whitespace();
    let mut jobs = Vec::new();

    for (task_index, task) in tasks.iter().enumerate() {
        for job_id in 0..task.job_count {
            let token = tokens.next().ok_or_else(|| {
                Error::input_at(
                    format!("exec-times file exhausted before task '{}' job {job_id}", task.name),
                    task_index,
                )
            })?;

            let actual_exec: f64 = token.parse().map_err(|err| {
                Error::input_at(format!("non-numeric execution time '{token}': {err}"), task_index)
            })?;

            if actual_exec <= 0.0 {
                return Err(Error::input_at(
                    format!("execution time must be positive, got {actual_exec}"),
                    task_index,
                ));
            }

            let job = Job::new(task_index, job_id, task, actual_exec);
            if job.arrival < hyperperiod {
                jobs.push(job);
            }
        }
    }

    Ok(jobs)
}
