use std::fmt;

use tracing::info;

use crate::config::Config;
use crate::disk::{Cylinder, Direction, RequestQueue, ServiceResult};

/// Outcome of running the selected policies over one request queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub total_requests: usize,
    pub start: Cylinder,
    pub direction: Direction,
    pub results: Vec<(&'static str, ServiceResult)>,
}

impl Report {
    pub fn build(config: &Config, queue: &RequestQueue) -> Report {
        let results = config
            .algorithms
            .iter()
            .map(|algo| {
                let scheduler = algo.scheduler(config.disk);
                let result = scheduler.schedule(queue, config.start, config.direction);
                info!(policy = scheduler.name(), movement = result.movement, "scheduled");
                (scheduler.name(), result)
            })
            .collect();

        Report {
            total_requests: queue.len(),
            start: config.start,
            direction: config.direction,
            results,
        }
    }

    pub fn result(&self, name: &str) -> Option<&ServiceResult> {
        self.results
            .iter()
            .find(|(policy, _)| *policy == name)
            .map(|(_, result)| result)
    }
}

pub struct PolicySummary<'a>(pub &'a str, pub &'a ServiceResult);

impl fmt::Display for PolicySummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let PolicySummary(name, result) = self;
        writeln!(f, "{} DISK SCHEDULING ALGORITHM:", name)?;
        writeln!(f)?;
        for (i, track) in result.sequence.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", track)?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "{} - Total head movements = {}", name, result.movement)?;
        writeln!(f)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total requests = {}", self.total_requests)?;
        writeln!(f, "Initial Head Position: {}", self.start)?;
        writeln!(f, "Direction of Head: {}", self.direction)?;
        writeln!(f)?;
        for (name, result) in &self.results {
            write!(f, "{}", PolicySummary(name, result))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_block() {
        let result = ServiceResult {
            sequence: vec![170, 200, 10],
            movement: 290,
        };
        assert_eq!(
            PolicySummary("C-LOOK", &result).to_string(),
            "C-LOOK DISK SCHEDULING ALGORITHM:\n\n170, 200, 10\n\nC-LOOK - Total head movements = 290\n\n"
        );
    }

    #[test]
    fn empty_sequence_prints_blank_line() {
        let result = ServiceResult {
            sequence: Vec::new(),
            movement: 0,
        };
        assert_eq!(
            PolicySummary("LOOK", &result).to_string(),
            "LOOK DISK SCHEDULING ALGORITHM:\n\n\n\nLOOK - Total head movements = 0\n\n"
        );
    }
}
