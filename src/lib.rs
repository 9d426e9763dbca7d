pub mod prelude {
    pub use super::edfvd::compute_virtual_deadlines;
    pub use super::error::Error;
    pub use super::hyperperiod::compute_hyperperiod;
    pub use super::jobs::{expand_jobs, load_jobs};
    pub use super::loader::{load_tasks, parse_tasks, TaskFileFormat};
    pub use super::model::{Criticality, Deadline, Job, RunSlice, Task, EPSILON};
    pub use super::scheduler;
    pub use super::simulate;
    pub use super::writer::{analyze, write_analysis, write_schedule, Analysis};
}

pub mod edfvd;
pub mod error;
pub mod hyperperiod;
pub mod jobs;
pub mod loader;
pub mod model;
pub mod scheduler;
pub mod writer;

use crate::prelude::*;

/// Runs the full offline pipeline: load tasks, derive the hyperperiod and
/// EDF-VD parameters, expand jobs, simulate, and return the slices plus
/// jobs (for the writer/analyzer) together with the hyperperiod and final
/// task list.
pub fn simulate(tasks_path: &std::path::Path, exec_times_path: &std::path::Path, format: TaskFileFormat)
    -> Result<(Vec<Task>, f64, Vec<Job>, Vec<RunSlice>), Error>
{
    let tasks = load_tasks(tasks_path, format)?;
    let (hyperperiod, tasks) = compute_hyperperiod(tasks);
    let tasks = compute_virtual_deadlines(tasks);
    let jobs = load_jobs(exec_times_path, &tasks, hyperperiod)?;
    let slices = scheduler::run(jobs.clone(), hyperperiod);

    Ok((tasks, hyperperiod, jobs, slices))
}
