//! Path handling for the Zellij sandbox, where the host is mounted at `/host`.

use std::path::PathBuf;

/// Mount point of the host filesystem inside the plugin sandbox.
const HOST_MOUNT: &str = "/host";

/// Returns the directory for plugin-owned files (trace output).
///
/// Resolves to `/host/.local/share/zellij/blognest`. `/host` is the directory
/// Zellij was started from, usually the user's home.
///
/// # Examples
///
/// ```
/// use blognest::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/blognest"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_MOUNT).join(".local/share/zellij").join("blognest")
}

/// Rewrites a leading `~` onto the `/host` mount.
///
/// # Examples
///
/// ```
/// use blognest::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/blogs.json"), "/host/blogs.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/srv/blogs.json"), "/srv/blogs.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_MOUNT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_MOUNT}{rest}"),
        _ => path.to_string(),
    }
}

/// Turns a configured seed path into a path readable from the sandbox.
///
/// `~` is expanded onto `/host`, relative paths are taken relative to `/host`,
/// absolute paths are used unchanged.
#[must_use]
pub fn resolve_seed_path(configured: &str) -> String {
    let expanded = expand_tilde(configured.trim());
    if expanded.starts_with('/') {
        expanded
    } else {
        format!("{HOST_MOUNT}/{expanded}")
    }
}

/// Removes the `/host` mount prefix so a path reads as it does on the host.
///
/// # Examples
///
/// ```
/// use blognest::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/notes/blogs.json"), "/notes/blogs.json");
/// assert_eq!(strip_host_prefix("/host"), "/");
/// assert_eq!(strip_host_prefix("/hostile/blogs.json"), "/hostile/blogs.json");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix(HOST_MOUNT) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_inside_a_name_is_left_alone() {
        assert_eq!(expand_tilde("~user/blogs.json"), "~user/blogs.json");
        assert_eq!(expand_tilde("notes/~draft.json"), "notes/~draft.json");
    }

    #[test]
    fn relative_seed_paths_land_under_host() {
        assert_eq!(resolve_seed_path("data/blogs.json"), "/host/data/blogs.json");
        assert_eq!(resolve_seed_path(" ~/blogs.json "), "/host/blogs.json");
        assert_eq!(resolve_seed_path("/srv/blogs.json"), "/srv/blogs.json");
    }
}
