//! Path handling for the Zellij plugin sandbox.

use std::path::PathBuf;

/// Directory holding fleetview's trace files.
///
/// Resolves to `/host/.local/share/zellij/fleetview`. `/host` is the cwd of
/// the last focused terminal, which is normally the user's home directory.
///
/// # Examples
///
/// ```
/// use fleetview::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/fleetview"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("fleetview")
}

/// Rewrites a leading `~` to the sandbox's `/host` mount.
///
/// # Examples
///
/// ```
/// use fleetview::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dock.toml"), "/host/themes/dock.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/fleetview.toml"), "/etc/fleetview.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_as_a_prefix() {
        assert_eq!(expand_tilde("~user/theme.toml"), "~user/theme.toml");
        assert_eq!(expand_tilde("themes/~/a.toml"), "themes/~/a.toml");
        assert_eq!(expand_tilde("~/a/~/b"), "/host/a/~/b");
    }

    #[test]
    fn data_dir_is_under_host_mount() {
        assert!(get_data_dir().starts_with("/host"));
        assert!(get_data_dir().ends_with("fleetview"));
    }
}
