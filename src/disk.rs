use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// A cylinder address on the simulated disk.
pub type Cylinder = usize;

pub const DEFAULT_CYLINDERS: usize = 300;
pub const DEFAULT_REQUESTS: usize = 20;
/// Requests are stored as `i32`, so no cylinder past `i32::MAX` is addressable.
pub const MAX_CYLINDERS: usize = i32::MAX as usize + 1;

/// Initial sweep direction of the head. Only the sweep policies look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LEFT" => Ok(Direction::Left),
            "RIGHT" => Ok(Direction::Right),
            other => Err(ConfigError::InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometry of the simulated disk: cylinders `0..=cylinders-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disk {
    cylinders: usize,
}

impl Disk {
    pub fn new(cylinders: usize) -> Result<Self, ConfigError> {
        if cylinders == 0 {
            return Err(ConfigError::EmptyDisk);
        }
        if cylinders > MAX_CYLINDERS {
            return Err(ConfigError::DiskTooLarge {
                cylinders,
                max: MAX_CYLINDERS,
            });
        }
        Ok(Disk { cylinders })
    }

    pub fn cylinders(&self) -> usize {
        self.cylinders
    }

    pub fn last_cylinder(&self) -> Cylinder {
        self.cylinders - 1
    }

    pub fn contains(&self, cylinder: Cylinder) -> bool {
        cylinder < self.cylinders
    }

    /// Physical boundary the head reaches when sweeping in `direction`.
    pub fn edge(&self, direction: Direction) -> Cylinder {
        match direction {
            Direction::Left => 0,
            Direction::Right => self.last_cylinder(),
        }
    }
}

impl Default for Disk {
    fn default() -> Self {
        Disk {
            cylinders: DEFAULT_CYLINDERS,
        }
    }
}

/// The unit of work for one run: requests in arrival order plus an ascending copy.
///
/// FCFS and SSTF read `arrival`; the sweep policies read `sorted`.
/// Duplicates are kept in both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestQueue {
    arrival: Vec<Cylinder>,
    sorted: Vec<Cylinder>,
}

impl RequestQueue {
    pub fn new(arrival: Vec<Cylinder>) -> Self {
        let mut sorted = arrival.clone();
        sorted.sort_unstable();
        RequestQueue { arrival, sorted }
    }

    pub fn arrival(&self) -> &[Cylinder] {
        &self.arrival
    }

    pub fn sorted(&self) -> &[Cylinder] {
        &self.sorted
    }

    pub fn len(&self) -> usize {
        self.arrival.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrival.is_empty()
    }
}

impl From<Vec<Cylinder>> for RequestQueue {
    fn from(arrival: Vec<Cylinder>) -> Self {
        RequestQueue::new(arrival)
    }
}

/// Visiting order produced by one policy and the total head travel it costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResult {
    pub sequence: Vec<Cylinder>,
    pub movement: usize,
}
