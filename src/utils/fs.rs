use std::fs;
use std::path::Path;
use std::io::{self, Read, Write};

use crate::utils::error::{BoxResult, TocError};

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let mut file = fs::File::open(path.as_ref()).map_err(TocError::Io)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(TocError::Io)?;
    Ok(contents)
}

/// Read all of standard input to string
pub fn read_stdin() -> BoxResult<String> {
    let mut contents = String::new();
    io::stdin().read_to_string(&mut contents).map_err(TocError::Io)?;
    Ok(contents)
}

/// Write a string to a file, creating the file and its parent directories if needed
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

/// Write a string to standard output
pub fn write_stdout(contents: &str) -> BoxResult<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(contents.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
