//! File reading utilities

use crate::error::{Result, SwiftstatusError};
use std::fs;
use std::path::Path;

/// Longest token read from an external cache file
pub const CACHE_TOKEN_LEN: usize = 32;

/// Safely read a file to string with error handling
pub fn read_file_safe<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(path).map_err(SwiftstatusError::from)
}

/// Read the first whitespace-delimited token of a small file, keeping at
/// most `max_len` bytes of it.
/// Meant for sysfs attributes and tiny cache files; only the first 256 bytes
/// are looked at, through a single direct read.
pub fn read_token<P: AsRef<Path>>(path: P, max_len: usize) -> Result<String> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let path = path.as_ref();
    let path_cstr = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| SwiftstatusError::Parse("Invalid path".to_string()))?;

    let mut buffer = [0u8; 256];
    // Direct syscalls; sysfs attributes are a single short read anyway
    let bytes_read = unsafe {
        let fd = libc::open(path_cstr.as_ptr(), libc::O_RDONLY | libc::O_CLOEXEC);
        if fd < 0 {
            return Err(SwiftstatusError::from(std::io::Error::last_os_error()));
        }
        let n = libc::read(fd, buffer.as_mut_ptr() as *mut libc::c_void, buffer.len());
        // errno must be taken before close() can clobber it
        let read_error = (n < 0).then(std::io::Error::last_os_error);
        libc::close(fd);
        if let Some(err) = read_error {
            return Err(SwiftstatusError::from(err));
        }
        n as usize
    };

    let content = String::from_utf8_lossy(&buffer[..bytes_read]);
    let token = content
        .split_whitespace()
        .next()
        .ok_or_else(|| SwiftstatusError::Parse(format!("{} is empty", path.display())))?;

    Ok(truncate_bytes(token, max_len).to_string())
}

/// Read a single unsigned integer from a sysfs attribute
pub fn read_u64<P: AsRef<Path>>(path: P) -> Result<u64> {
    let token = read_token(&path, 32)?;
    token
        .parse()
        .map_err(|_| SwiftstatusError::Parse(format!("Invalid number '{}' in {}", token, path.as_ref().display())))
}

fn truncate_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
