//! Core data model: tasks, jobs, and run-slices.
//!
//! These structures are built once in a forward pass, handed by mutable
//! borrow to the scheduler for the duration of the simulation, then released
//! to the writer/analyzer by shared borrow.

use ordered_float::OrderedFloat;

/// Tolerance below which a job's remaining execution time is considered zero.
pub const EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Criticality {
    Lo,
    Hi,
}

impl Criticality {
    /// Parses the task-file criticality character: `H`/`h` is HI, anything else LO.
    pub fn from_char(c: char) -> Self {
        match c {
            'H' | 'h' => Self::Hi,
            _ => Self::Lo,
        }
    }
}

impl std::fmt::Display for Criticality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lo => write!(f, "L"),
            Self::Hi => write!(f, "H"),
        }
    }
}

/// A sort key wrapping `f64` so it can live in a `BinaryHeap`/`BTreeMap`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Deadline(pub OrderedFloat<f64>);

impl Deadline {
    pub fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    pub fn value(self) -> f64 {
        self.0.into_inner()
    }
}

impl Eq for Deadline {}

impl Ord for Deadline {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

/// An immutable task description, post-loading.
///
/// `virtual_deadline` is a constructor-derived field: `deadline` for LO
/// tasks, `deadline * x` for HI tasks. It is never mutated in place.
#[derive(Clone, Debug)]
pub struct Task {
    pub name: String,
    pub phase: f64,
    pub period: f64,
    pub wcet: f64,
    pub deadline: f64,
    pub criticality: Criticality,
    virtual_deadline: f64,
    pub job_count: usize,
}

impl Task {
    /// Builds a task with a derived virtual deadline and zero job count;
    /// `job_count` is filled in later by the hyperperiod calculator.
    pub fn new(
        name: String,
        phase: f64,
        period: f64,
        wcet: f64,
        deadline: f64,
        criticality: Criticality,
        x: f64,
    ) -> Self {
        let virtual_deadline = match criticality {
            Criticality::Lo => deadline,
            Criticality::Hi => deadline * x,
        };

        Self { name, phase, period, wcet, deadline, criticality, virtual_deadline, job_count: 0 }
    }

    pub fn virtual_deadline(&self) -> f64 {
        self.virtual_deadline
    }

    pub fn utilization(&self) -> f64 {
        self.wcet / self.period
    }

    pub fn with_job_count(mut self, job_count: usize) -> Self {
        self.job_count = job_count;
        self
    }

    /// Returns a copy of this task with `virtual_deadline` recomputed from
    /// the given scaling factor. Used once, by the EDF-VD parameter
    /// computer, instead of mutating `virtual_deadline` in place.
    pub fn rescaled(&self, x: f64) -> Self {
        Self::new(
            self.name.clone(),
            self.phase,
            self.period,
            self.wcet,
            self.deadline,
            self.criticality,
            x,
        )
        .with_job_count(self.job_count)
    }
}

/// One concrete instance of a `Task`.
#[derive(Clone, Debug)]
pub struct Job {
    pub task_index: usize,
    pub job_id: usize,
    pub arrival: f64,
    pub wcet: f64,
    pub actual_exec: f64,
    pub absolute_deadline: f64,
    pub virtual_absolute_deadline: f64,
    pub remaining: f64,
    pub start_time: Option<f64>,
    pub finish_time: Option<f64>,
    pub finished: bool,
}

impl Job {
    pub fn new(task_index: usize, job_id: usize, task: &Task, actual_exec: f64) -> Self {
        let arrival = task.phase + (job_id as f64) * task.period;

        Self {
            task_index,
            job_id,
            arrival,
            wcet: task.wcet,
            actual_exec,
            absolute_deadline: arrival + task.deadline,
            virtual_absolute_deadline: arrival + task.virtual_deadline(),
            remaining: actual_exec,
            start_time: None,
            finish_time: None,
            finished: false,
        }
    }

    pub fn identity(&self) -> (usize, usize) {
        (self.task_index, self.job_id)
    }

    /// Runs the job for `delta` time units, marking it finished if its
    /// remaining time drops to (near) zero.
    pub fn run_for(&mut self, now: f64, delta: f64) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }

        self.remaining -= delta;
        let end = now + delta;

        if self.remaining <= EPSILON {
            self.finished = true;
            self.finish_time = Some(end);
        }
    }
}

/// A maximal contiguous interval during which a single job is dispatched.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSlice {
    pub start: f64,
    pub end: f64,
    pub task_index: usize,
    pub job_id: usize,
}

impl RunSlice {
    pub fn identity(&self) -> (usize, usize) {
        (self.task_index, self.job_id)
    }
}
