//! Scheduler Engine: the discrete-event EDF-VD simulation loop.
//!
//! Rather than re-sorting a fresh copy of the active set at every decision
//! point, active jobs live in a binary heap keyed on
//! `(virtual_absolute_deadline, task_index, job_id)` — the tie-break is
//! baked directly into the sort key, so there is no separate "find the job
//! matching this deadline" scan once the minimum is popped.
//!
//! A job is popped to run and, unless it finishes within the slice, pushed
//! back once the slice ends — the heap therefore only ever holds
//! not-yet-finished jobs, so no lazy-deletion bookkeeping is required.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::model::{Deadline, Job, RunSlice, EPSILON};

type HeapKey = (Deadline, usize, usize, usize);

/// Runs the EDF-VD schedule for `jobs` over `[0, hyperperiod)` and returns
/// the ordered, identity-merged list of run-slices.
pub fn run(mut jobs: Vec<Job>, hyperperiod: f64) -> Vec<RunSlice> {
    let mut arrival_order: Vec<usize> = (0..jobs.len()).collect();
    arrival_order.sort_by(|&a, &b| {
        jobs[a]
            .arrival
            .partial_cmp(&jobs[b].arrival)
            .unwrap()
            .then(jobs[a].task_index.cmp(&jobs[b].task_index))
            .then(jobs[a].job_id.cmp(&jobs[b].job_id))
    });

    let mut cursor = 0usize;
    let mut heap: BinaryHeap<Reverse<HeapKey>> = BinaryHeap::new();
    let mut slices: Vec<RunSlice> = Vec::new();
    let mut now = 0.0f64;

    loop {
        release_arrivals(&jobs, &arrival_order, &mut cursor, now, &mut heap);

        let Reverse((_deadline, task_index, job_id, idx)) = match heap.pop() {
            Some(entry) => entry,
            None => match next_arrival(&jobs, &arrival_order, cursor) {
                Some(next) if next < hyperperiod - EPSILON => {
                    now = next;
                    continue;
                }
                _ => break,
            },
        };

        let t_arrival = next_arrival(&jobs, &arrival_order, cursor).unwrap_or(hyperperiod);
        let t_finish = now + jobs[idx].remaining;
        let t_next = t_arrival.min(t_finish).min(hyperperiod);

        push_or_extend_slice(&mut slices, now, t_next, task_index, job_id);

        let delta = t_next - now;
        jobs[idx].run_for(now, delta);
        now = t_next;

        if !jobs[idx].finished {
            heap.push(Reverse((Deadline::new(jobs[idx].virtual_absolute_deadline), task_index, job_id, idx)));
        }

        if now >= hyperperiod - EPSILON {
            break;
        }
    }

    slices
}

fn release_arrivals(
    jobs: &[Job],
    arrival_order: &[usize],
    cursor: &mut usize,
    now: f64,
    heap: &mut BinaryHeap<Reverse<HeapKey>>,
) {
    while *cursor < arrival_order.len() && jobs[arrival_order[*cursor]].arrival <= now + EPSILON {
        let idx = arrival_order[*cursor];
        let job = &jobs[idx];
        heap.push(Reverse((Deadline::new(job.virtual_absolute_deadline), job.task_index, job.job_id, idx)));
        *cursor += 1;
    }
}

fn next_arrival(jobs: &[Job], arrival_order: &[usize], cursor: usize) -> Option<f64> {
    arrival_order.get(cursor).map(|&idx| jobs[idx].arrival)
}

fn push_or_extend_slice(slices: &mut Vec<RunSlice>, start: f64, end: f64, task_index: usize, job_id: usize) {
    match slices.last_mut() {
        Some(slice) if slice.task_index == task_index && slice.job_id == job_id => {
            slice.end = end;
        }
        _ => slices.push(RunSlice { start, end, task_index, job_id }),
    }
}
