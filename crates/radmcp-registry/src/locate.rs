//! Discovery of the `rad` executable.
//!
//! Lookup order: explicitly configured path, then `PATH`, then a fixed
//! list of well-known install locations.

use std::path::{Path, PathBuf};

/// Bare command name used when nothing better is known.
pub const RAD_COMMAND: &str = "rad";

/// The resolved `rad` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadBinary {
    /// Path (or bare name) used to spawn the command.
    pub path: String,
    /// Whether an executable was actually found.
    pub available: bool,
}

impl RadBinary {
    /// A binary that could not be located; commands fall back to `rad`.
    pub fn missing() -> Self {
        Self {
            path: RAD_COMMAND.to_string(),
            available: false,
        }
    }

    /// Program string to hand to the process spawner.
    pub fn program(&self) -> &str {
        &self.path
    }
}

/// Resolves the `rad` binary for this process.
pub fn locate_rad(configured: Option<&str>) -> RadBinary {
    let on_path = which::which(RAD_COMMAND).ok();
    let found = locate_with(configured, on_path, &well_known_locations());
    if found.available {
        tracing::info!(path = %found.path, "Radius CLI found");
    } else {
        tracing::warn!(
            searched = "PATH, /usr/local/bin, /usr/bin, ~/bin, /opt/homebrew/bin",
            "Radius CLI ('rad') not found; tool calls will fail"
        );
    }
    found
}

/// Resolution with the environment lookups supplied by the caller.
pub(crate) fn locate_with(
    configured: Option<&str>,
    on_path: Option<PathBuf>,
    candidates: &[PathBuf],
) -> RadBinary {
    if let Some(path) = configured {
        let available = is_executable(Path::new(path));
        if !available {
            tracing::warn!(path, "configured rad binary is not an executable file");
        }
        return RadBinary {
            path: path.to_string(),
            available,
        };
    }

    on_path
        .into_iter()
        .chain(candidates.iter().cloned())
        .find(|p| is_executable(p))
        .map(|p| RadBinary {
            path: p.to_string_lossy().into_owned(),
            available: true,
        })
        .unwrap_or_else(RadBinary::missing)
}

fn well_known_locations() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("/usr/local/bin/rad"),
        PathBuf::from("/usr/bin/rad"),
    ];
    if let Ok(home) = std::env::var("HOME") {
        paths.push(PathBuf::from(home).join("bin").join(RAD_COMMAND));
    }
    paths.push(PathBuf::from("/opt/homebrew/bin/rad"));
    paths
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
