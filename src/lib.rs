//! Disk scheduling over a simulated range of cylinders.
//!
//! [`schedulers`] holds the six policies (FCFS, SSTF, SCAN, C-SCAN, LOOK,
//! C-LOOK). The other modules load requests, read the command line and
//! render the report.

pub mod config;
pub mod disk;
pub mod error;
pub mod logging;
pub mod report;
pub mod schedulers;
pub mod utils;

pub use disk::{Cylinder, Direction, Disk, RequestQueue, ServiceResult};
pub use schedulers::{Algorithm, DiskScheduler};
