use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Write `parts` back to back into `path`, replacing it in a single rename.
///
/// The parent directory must already exist. Readers see either the previous
/// file or the complete new one.
pub fn write_atomic(path: &Path, parts: &[&[u8]], mode: u32) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::Builder::new()
        .prefix(".certsync-")
        .tempfile_in(parent)
        .with_context(|| format!("create temp file in {}", parent.display()))?;
    for part in parts {
        tmp.write_all(part)
            .with_context(|| format!("write temp file for {}", path.display()))?;
    }
    tmp.flush()
        .with_context(|| format!("flush temp file for {}", path.display()))?;

    #[cfg(unix)]
    {
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(mode))
            .with_context(|| format!("set permissions {:o} on temp file", mode))?;
    }

    tmp.persist(path)
        .map_err(|err| anyhow!("replace {}: {}", path.display(), err))?;
    Ok(())
}

/// Read a file that must exist, naming it in the error.
pub fn read_required(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read {}", path.display()))
}
