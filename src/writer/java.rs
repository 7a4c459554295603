//! Write the generated Java source to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write `java` to `{class_name}.java` inside `out_dir` and return
/// the path written.
pub fn emit(java: &str, class_name: &str, out_dir: &Path) -> io::Result<PathBuf> {
    let path = out_dir.join(format!("{class_name}.java"));
    fs::write(&path, java)?;
    Ok(path)
}
