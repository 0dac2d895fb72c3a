//! Absolute base directory for test scratch space.

use std::env;
use std::path::PathBuf;

/// `env::temp_dir()` when absolute, `/tmp` otherwise, so a relative `TMPDIR`
/// never places scratch directories inside the working tree.
pub fn temp_dir_base() -> PathBuf {
    let dir = env::temp_dir();
    if dir.is_absolute() {
        return dir;
    }

    #[cfg(windows)]
    {
        env::var("TEMP")
            .or_else(|_| env::var("TMP"))
            .map_or_else(|_| PathBuf::from("C:\\Windows\\Temp"), PathBuf::from)
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/tmp")
    }
}
