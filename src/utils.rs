use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use byteorder::{NativeEndian, ReadBytesExt};
use tracing::debug;

use crate::disk::{Disk, RequestQueue};
use crate::error::RequestError;

// The request file is a flat array of native-endian 32-bit integers, one per
// request, in arrival order. Only the first `count` values are read; any
// trailing bytes are ignored. Every value must be a cylinder on `disk`.
pub fn read_request_file(path: &Path, count: usize, disk: &Disk) -> Result<RequestQueue, RequestError> {
    let file = File::open(path)?;
    let queue = read_requests(BufReader::new(file), count, disk)?;
    debug!(path = %path.display(), count, "loaded requests");
    Ok(queue)
}

pub fn read_requests<R: Read>(mut reader: R, count: usize, disk: &Disk) -> Result<RequestQueue, RequestError> {
    // `count` is user input; let the file length bound the allocation
    let mut requests = Vec::new();
    for index in 0..count {
        let value = match reader.read_i32::<NativeEndian>() {
            Ok(value) => value,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                return Err(RequestError::ShortRead {
                    expected: count,
                    read: index,
                })
            }
            Err(e) => return Err(e.into()),
        };
        let track = usize::try_from(value)
            .ok()
            .filter(|&track| disk.contains(track))
            .ok_or(RequestError::RequestOutOfRange {
                index,
                value,
                cylinders: disk.cylinders(),
            })?;
        requests.push(track);
    }
    Ok(requests.into())
}
