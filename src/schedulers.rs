//! Disk scheduling policies.
//!
//! Every policy is a pure function of the request queue, the starting head
//! position and (for the sweep family) the initial direction. All of them
//! report cost through [`head_movement`], so totals are comparable.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, enabled, trace, Level};

use crate::disk::{Cylinder, Direction, Disk, RequestQueue, ServiceResult};
use crate::error::ConfigError;

/// Total head travel for visiting `sequence` in order, starting at `start`.
pub fn head_movement(sequence: &[Cylinder], start: Cylinder) -> usize {
    sequence
        .iter()
        .scan(start, |head, &next| {
            let distance = head.abs_diff(next);
            *head = next;
            Some(distance)
        })
        .sum()
}

/// Index of the first sorted request at or above `start`, or `sorted.len()`.
pub fn split_index(sorted: &[Cylinder], start: Cylinder) -> usize {
    sorted.partition_point(|&track| track < start)
}

pub trait DiskScheduler {
    fn name(&self) -> &'static str;
    fn schedule(&self, queue: &RequestQueue, start: Cylinder, direction: Direction)
        -> ServiceResult;
}

fn finish(policy: &'static str, sequence: Vec<Cylinder>, start: Cylinder) -> ServiceResult {
    if enabled!(Level::DEBUG) {
        let mut head = start;
        for &next in &sequence {
            debug!(policy, head, next, distance = head.abs_diff(next), "seek");
            head = next;
        }
    }
    let movement = head_movement(&sequence, start);
    ServiceResult { sequence, movement }
}

pub struct FCFS;

impl DiskScheduler for FCFS {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, queue: &RequestQueue, start: Cylinder, _: Direction) -> ServiceResult {
        finish(self.name(), queue.arrival().to_vec(), start)
    }
}

pub struct SSTF;

impl DiskScheduler for SSTF {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn schedule(&self, queue: &RequestQueue, start: Cylinder, _: Direction) -> ServiceResult {
        let requests = queue.arrival();
        let mut serviced = vec![false; requests.len()];
        let mut sequence = Vec::with_capacity(requests.len());
        let mut head = start;

        while sequence.len() < requests.len() {
            // strict `<` keeps the earliest arrival among equidistant requests
            let mut closest: Option<(usize, usize)> = None;
            for (i, &track) in requests.iter().enumerate() {
                if serviced[i] {
                    continue;
                }
                let distance = head.abs_diff(track);
                if closest.map_or(true, |(_, best)| distance < best) {
                    closest = Some((i, distance));
                }
            }
            let Some((index, _)) = closest else {
                break;
            };

            if enabled!(Level::TRACE) {
                let pending: Vec<String> = requests
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !serviced[*i])
                    .map(|(i, &track)| format!("{}:{}", i, head.abs_diff(track)))
                    .collect();
                trace!("Get: ({}) --> {}", pending.join(" "), index);
            }

            serviced[index] = true;
            sequence.push(requests[index]);
            head = requests[index];
        }

        finish(self.name(), sequence, start)
    }
}

/// What the head does once the primary leg runs out of requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wrap {
    /// Turn around and service the other side nearest-first.
    Reverse,
    /// Jump to the far end and keep sweeping in the original direction.
    Circular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SweepState {
    PrimaryLeg,
    AtBoundary,
    SecondaryLeg,
    Done,
}

/// Shared sweep for SCAN, C-SCAN, LOOK and C-LOOK.
///
/// With `boundary` set the head runs to the physical edge and records it
/// (and the opposite edge too, when circular). Without it the boundary
/// state is skipped and only real requests are visited.
fn sweep(
    sorted: &[Cylinder],
    start: Cylinder,
    direction: Direction,
    wrap: Wrap,
    boundary: Option<&Disk>,
) -> Vec<Cylinder> {
    let (below, above) = sorted.split_at(split_index(sorted, start));
    let synthetic = match (boundary, wrap) {
        (None, _) => 0,
        (Some(_), Wrap::Reverse) => 1,
        (Some(_), Wrap::Circular) => 2,
    };
    let mut sequence = Vec::with_capacity(sorted.len() + synthetic);

    let mut state = SweepState::PrimaryLeg;
    loop {
        state = match state {
            SweepState::PrimaryLeg => {
                match direction {
                    Direction::Left => sequence.extend(below.iter().rev()),
                    Direction::Right => sequence.extend_from_slice(above),
                }
                if boundary.is_some() {
                    SweepState::AtBoundary
                } else {
                    SweepState::SecondaryLeg
                }
            }
            SweepState::AtBoundary => {
                if let Some(disk) = boundary {
                    sequence.push(disk.edge(direction));
                    if wrap == Wrap::Circular {
                        sequence.push(disk.edge(direction.reverse()));
                    }
                }
                SweepState::SecondaryLeg
            }
            SweepState::SecondaryLeg => {
                match (direction, wrap) {
                    (Direction::Left, Wrap::Reverse) => sequence.extend_from_slice(above),
                    (Direction::Left, Wrap::Circular) => sequence.extend(above.iter().rev()),
                    (Direction::Right, Wrap::Reverse) => sequence.extend(below.iter().rev()),
                    (Direction::Right, Wrap::Circular) => sequence.extend_from_slice(below),
                }
                SweepState::Done
            }
            SweepState::Done => break,
        };
    }

    sequence
}

/// Elevator: sweep to the disk edge, then reverse.
pub struct SCAN {
    disk: Disk,
}

impl SCAN {
    pub fn new(disk: Disk) -> Self {
        SCAN { disk }
    }
}

impl DiskScheduler for SCAN {
    fn name(&self) -> &'static str {
        "SCAN"
    }

    fn schedule(&self, queue: &RequestQueue, start: Cylinder, direction: Direction) -> ServiceResult {
        let sequence = sweep(queue.sorted(), start, direction, Wrap::Reverse, Some(&self.disk));
        finish(self.name(), sequence, start)
    }
}

/// Sweep to the disk edge, return to the opposite edge, sweep the same way again.
pub struct CSCAN {
    disk: Disk,
}

impl CSCAN {
    pub fn new(disk: Disk) -> Self {
        CSCAN { disk }
    }
}

impl DiskScheduler for CSCAN {
    fn name(&self) -> &'static str {
        "C-SCAN"
    }

    fn schedule(&self, queue: &RequestQueue, start: Cylinder, direction: Direction) -> ServiceResult {
        let sequence = sweep(queue.sorted(), start, direction, Wrap::Circular, Some(&self.disk));
        finish(self.name(), sequence, start)
    }
}

pub struct LOOK;

impl DiskScheduler for LOOK {
    fn name(&self) -> &'static str {
        "LOOK"
    }

    fn schedule(&self, queue: &RequestQueue, start: Cylinder, direction: Direction) -> ServiceResult {
        let sequence = sweep(queue.sorted(), start, direction, Wrap::Reverse, None);
        finish(self.name(), sequence, start)
    }
}

pub struct CLOOK;

impl DiskScheduler for CLOOK {
    fn name(&self) -> &'static str {
        "C-LOOK"
    }

    fn schedule(&self, queue: &RequestQueue, start: Cylinder, direction: Direction) -> ServiceResult {
        let sequence = sweep(queue.sorted(), start, direction, Wrap::Circular, None);
        finish(self.name(), sequence, start)
    }
}

/// Policy tag used to pick schedulers from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Fcfs,
    Sstf,
    Scan,
    CScan,
    Look,
    CLook,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sstf,
        Algorithm::Scan,
        Algorithm::CScan,
        Algorithm::Look,
        Algorithm::CLook,
    ];

    /// Lowercase token accepted by `--sched`.
    pub fn token(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sstf => "sstf",
            Algorithm::Scan => "scan",
            Algorithm::CScan => "c-scan",
            Algorithm::Look => "look",
            Algorithm::CLook => "c-look",
        }
    }

    pub fn scheduler(self, disk: Disk) -> Box<dyn DiskScheduler> {
        match self {
            Algorithm::Fcfs => Box::new(FCFS),
            Algorithm::Sstf => Box::new(SSTF),
            Algorithm::Scan => Box::new(SCAN::new(disk)),
            Algorithm::CScan => Box::new(CSCAN::new(disk)),
            Algorithm::Look => Box::new(LOOK),
            Algorithm::CLook => Box::new(CLOOK),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.token().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
