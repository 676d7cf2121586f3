use std::io::{BufWriter, Write};

use anyhow::Result;

pub fn file_exists<I: AsRef<str>>(path: I) -> bool {
    std::path::Path::new(path.as_ref()).exists()
}

pub fn slurp_file<I: AsRef<str>>(path: I) -> Result<Vec<u8>> {
    let path = path.as_ref();
    debug!("Reading {}", path);
    Ok(fs_err::read(path)?)
}

/// Truncates and replaces whatever is at `path`. The parent directory must already exist.
pub fn write_file<I: AsRef<str>>(path: I, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let mut file = BufWriter::new(fs_err::File::create(path)?);
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(())
}
