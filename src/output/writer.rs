//! Writing the rendered tree to disk

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write `contents` to `path` as UTF-8, replacing whatever was there.
///
/// The file is closed when this returns, whether or not the write succeeded.
pub fn write_output(path: &Path, contents: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes())?;
    writer.flush()
}
