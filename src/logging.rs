//! Tracing setup.
//!
//! The filter comes from `DISKSCHED_LOG` when it is set, otherwise from the
//! command-line trace level. Events go to stderr so stdout only carries the report.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// ENV used to override the log filter
const FILTER_ENV: &str = "DISKSCHED_LOG";

static INIT: Once = Once::new();

/// How much of the scheduling work to trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trace {
    #[default]
    Off,
    /// every head seek (`-v`)
    Steps,
    /// seeks plus the SSTF candidate queue (`-q`)
    Queue,
}

impl Trace {
    pub fn from_flags(verbose: bool, queue: bool) -> Self {
        if queue {
            Trace::Queue
        } else if verbose {
            Trace::Steps
        } else {
            Trace::Off
        }
    }

    fn directives(self) -> &'static str {
        match self {
            Trace::Off => "warn",
            Trace::Steps => "warn,disksched=debug",
            Trace::Queue => "warn,disksched=trace",
        }
    }
}

pub fn init(trace: Trace) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(FILTER_ENV)
            .unwrap_or_else(|_| EnvFilter::new(trace.directives()));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    });
}
