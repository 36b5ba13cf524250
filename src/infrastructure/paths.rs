//! Platform directory resolution.
//!
//! Config lives in the platform config directory and exported traces in the
//! platform data directory, both under a `campusnav` subdirectory:
//!
//! | Platform | Config                                   | Data                                          |
//! |----------|------------------------------------------|-----------------------------------------------|
//! | Linux    | `~/.config/campusnav`                    | `~/.local/share/campusnav`                    |
//! | macOS    | `~/Library/Application Support/campusnav`| `~/Library/Application Support/campusnav`     |
//! | Windows  | `%APPDATA%\campusnav\config`             | `%APPDATA%\campusnav\data`                    |

use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "campusnav";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Default config file path.
///
/// Falls back to `./.config/campusnav/config.toml` when no home directory
/// can be determined.
#[must_use]
pub fn config_file() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from(".config").join(APP_NAME).join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Data directory for exported traces.
///
/// Falls back to `./.local/share/campusnav` when no home directory can be
/// determined.
#[must_use]
pub fn data_dir() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from(".local").join("share").join(APP_NAME),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use campusnav::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// assert_eq!(expand_tilde("relative/~/path"), PathBuf::from("relative/~/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());

    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_is_named_config_toml() {
        let path = config_file();
        assert!(path.ends_with("config.toml"));
        assert!(path.to_string_lossy().contains(APP_NAME));
    }

    #[test]
    fn tilde_expands_under_home() {
        let Some(home) = directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf()) else {
            return;
        };
        assert_eq!(expand_tilde("~/traces/otlp.json"), home.join("traces/otlp.json"));
        assert_eq!(expand_tilde("~"), home);
    }
}
