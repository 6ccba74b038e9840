use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command};

use crate::disk::{Cylinder, Direction, Disk, DEFAULT_CYLINDERS, DEFAULT_REQUESTS};
use crate::error::ConfigError;
use crate::logging::Trace;
use crate::schedulers::Algorithm;

pub const DEFAULT_REQUEST_FILE: &str = "request.bin";

/// Validated run parameters. Everything handed to the schedulers is in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub start: Cylinder,
    pub direction: Direction,
    pub disk: Disk,
    pub request_file: PathBuf,
    pub num_requests: usize,
    pub algorithms: Vec<Algorithm>,
    pub trace: Trace,
}

fn command() -> Command<'static> {
    Command::new("disksched")
        .about("Service order and head movement for classical disk scheduling policies")
        .allow_negative_numbers(true)
        .arg(
            Arg::new("start")
                .help("Initial head position")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("direction")
                .help("Initial sweep direction: LEFT or RIGHT")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .env("DISKSCHED_REQUESTS")
                .takes_value(true)
                .help("Binary request file"),
        )
        .arg(
            Arg::new("cylinders")
                .short('c')
                .long("cylinders")
                .takes_value(true)
                .help("Number of cylinders on the disk [default: 300]"),
        )
        .arg(
            Arg::new("requests")
                .short('n')
                .long("requests")
                .takes_value(true)
                .help("Number of requests to read [default: 20]"),
        )
        .arg(
            Arg::new("sched")
                .short('s')
                .long("sched")
                .takes_value(true)
                .multiple_occurrences(true)
                .use_value_delimiter(true)
                .ignore_case(true)
                .possible_values(Algorithm::ALL.map(Algorithm::token))
                .help("Policies to run, in order [default: all]"),
        )
        .arg(
            Arg::new("v_flag")
                .short('v')
                .help("Trace every head seek"),
        )
        .arg(
            Arg::new("q_flag")
                .short('q')
                .help("Also trace the SSTF candidate queue"),
        )
}

fn parse_number(matches: &ArgMatches, name: &'static str, default: usize) -> Result<usize, ConfigError> {
    match matches.value_of(name) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
            name,
            value: raw.to_string(),
        }),
        None => Ok(default),
    }
}

fn parse_start(raw: &str, disk: &Disk) -> Result<Cylinder, ConfigError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidStart(raw.to_string()))?;
    usize::try_from(value)
        .ok()
        .filter(|&start| disk.contains(start))
        .ok_or(ConfigError::StartOutOfRange {
            value,
            max: disk.last_cylinder(),
        })
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;

        let disk = Disk::new(parse_number(&matches, "cylinders", DEFAULT_CYLINDERS)?)?;
        let start = parse_start(matches.value_of("start").unwrap_or_default(), &disk)?;
        let direction = matches.value_of("direction").unwrap_or_default().parse()?;
        let num_requests = parse_number(&matches, "requests", DEFAULT_REQUESTS)?;
        let request_file = PathBuf::from(matches.value_of("input").unwrap_or(DEFAULT_REQUEST_FILE));

        let algorithms = match matches.values_of("sched") {
            Some(values) => values.map(str::parse).collect::<Result<Vec<_>, _>>()?,
            None => Algorithm::ALL.to_vec(),
        };

        Ok(Config {
            start,
            direction,
            disk,
            request_file,
            num_requests,
            algorithms,
            trace: Trace::from_flags(matches.is_present("v_flag"), matches.is_present("q_flag")),
        })
    }
}
