/*!
Locations of the files wanderlust keeps for a user.
*/
use std::fs::DirBuilder;
use std::io::Error as IOError;
use std::os::unix::fs::DirBuilderExt;
use std::path::{Path, PathBuf};

lazy_static! {
    /// The directory that wanderlust files are stored in for a user. This is `None` if the home
    /// directory of the user cannot be determined.
    pub static ref WANDERLUST_DIR: Option<PathBuf> = {
        dirs::home_dir().map(|mut path| {
            path.push(".wanderlust");
            path
        })
    };
}

#[cfg(feature = "logging")]
lazy_static! {
    /// The directory that log files are written to when no log file is given.
    pub static ref WANDERLUST_LOGS_DIR: Option<PathBuf> = {
        WANDERLUST_DIR.as_ref().map(|dir| dir.join("logs"))
    };
}

/// The permissions to use for the wanderlust directory.
static WANDERLUST_DIR_PERMS: u32 = 0o700; // rwx --- ---
/// The permissions to use for files in the wanderlust directory.
pub static WANDERLUST_FILES_PERMS: u32 = 0o600; // rw- --- ---

/// Ensure that a directory for storing private files exists.
pub fn ensure_dir_exists(dir: &Path) -> Result<(), IOError> {
    if !dir.exists() {
        DirBuilder::new()
            .recursive(true)
            .mode(WANDERLUST_DIR_PERMS)
            .create(dir)?;
    }
    Ok(())
}
