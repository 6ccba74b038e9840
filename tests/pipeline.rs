use std::io::Write;

use disksched::config::Config;
use disksched::report::Report;
use disksched::utils::read_request_file;
use disksched::{Algorithm, Disk, RequestQueue};
use tempfile::NamedTempFile;

const REQUESTS: [i32; 20] = [
    98, 183, 37, 122, 14, 124, 65, 67, 199, 250, 5, 290, 141, 73, 160, 11, 42, 230, 188, 104,
];

fn request_file(values: &[i32]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for v in values {
        file.write_all(&v.to_ne_bytes()).unwrap();
    }
    file.flush().unwrap();
    file
}

fn report_for(start: &str, direction: &str) -> (Report, RequestQueue) {
    let file = request_file(&REQUESTS);
    let path = file.path().to_str().unwrap().to_string();
    let config = Config::from_args(["disksched", "-i", path.as_str(), start, direction]).unwrap();
    let queue = read_request_file(&config.request_file, config.num_requests, &config.disk).unwrap();
    (Report::build(&config, &queue), queue)
}

#[test]
fn full_run_right() {
    let (report, queue) = report_for("100", "RIGHT");
    assert_eq!(report.results.len(), 6);
    assert_eq!(queue.len(), 20);

    let above: Vec<usize> = vec![104, 122, 124, 141, 160, 183, 188, 199, 230, 250, 290];
    let below_desc: Vec<usize> = vec![98, 73, 67, 65, 42, 37, 14, 11, 5];
    let below_asc: Vec<usize> = below_desc.iter().rev().copied().collect();

    let look = report.result("LOOK").unwrap();
    assert_eq!(look.sequence, [above.clone(), below_desc.clone()].concat());
    assert_eq!(look.movement, (290 - 100) + (290 - 5));

    let clook = report.result("C-LOOK").unwrap();
    assert_eq!(clook.sequence, [above.clone(), below_asc.clone()].concat());
    assert_eq!(clook.movement, (290 - 100) + (290 - 5) + (98 - 5));

    let scan = report.result("SCAN").unwrap();
    assert_eq!(scan.sequence, [above.clone(), vec![299], below_desc].concat());
    assert_eq!(scan.movement, (299 - 100) + (299 - 5));

    let cscan = report.result("C-SCAN").unwrap();
    assert_eq!(cscan.sequence, [above, vec![299, 0], below_asc].concat());
    assert_eq!(cscan.movement, (299 - 100) + 299 + 98);

    let fcfs = report.result("FCFS").unwrap();
    assert_eq!(fcfs.sequence, queue.arrival());

    let sstf = report.result("SSTF").unwrap();
    assert_eq!(&sstf.sequence[..4], &[98, 104, 122, 124]);
    assert!(sstf.movement <= fcfs.movement);
}

#[test]
fn full_run_left() {
    let (report, _) = report_for("100", "LEFT");

    let scan = report.result("SCAN").unwrap();
    assert_eq!(scan.sequence[..10], [98, 73, 67, 65, 42, 37, 14, 11, 5, 0]);
    assert_eq!(scan.movement, 100 + 290);

    let cscan = report.result("C-SCAN").unwrap();
    assert_eq!(cscan.sequence[9..12], [0, 299, 290]);
    assert_eq!(*cscan.sequence.last().unwrap(), 104);
    assert_eq!(cscan.movement, 100 + 299 + (299 - 104));
}

#[test]
fn rendered_report() {
    let (report, _) = report_for("53", "LEFT");
    let text = report.to_string();
    assert!(text.starts_with(
        "Total requests = 20\nInitial Head Position: 53\nDirection of Head: LEFT\n\n"
    ));
    for name in ["FCFS", "SSTF", "SCAN", "C-SCAN", "LOOK", "C-LOOK"] {
        assert!(text.contains(&format!("{} DISK SCHEDULING ALGORITHM:\n\n", name)));
        assert!(text.contains(&format!("{} - Total head movements = ", name)));
    }
    assert!(text.contains("\n\nFCFS - Total head movements = "));
    assert!(text.contains("98, 183, 37, 122, 14"));
}

#[test]
fn selected_policies_only() {
    let file = request_file(&[10, 200, 150]);
    let path = file.path().to_str().unwrap().to_string();
    let config =
        Config::from_args(["disksched", "-i", path.as_str(), "-n", "3", "-s", "c-scan,sstf", "120", "LEFT"])
            .unwrap();
    assert_eq!(config.algorithms, vec![Algorithm::CScan, Algorithm::Sstf]);

    let queue = read_request_file(&config.request_file, 3, &Disk::default()).unwrap();
    let report = Report::build(&config, &queue);
    let names: Vec<&str> = report.results.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["C-SCAN", "SSTF"]);
    assert_eq!(report.result("SSTF").unwrap().sequence, vec![150, 200, 10]);
    assert_eq!(report.result("C-SCAN").unwrap().sequence, vec![10, 0, 299, 200, 150]);
}
