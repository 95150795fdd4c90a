//! Path utilities for log and data files.
//!
//! Resolves the per-user data directory and expands `~` in configured paths.
//! Lookups take the environment as a parameter so they can be tested without
//! touching the process environment.

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "OBJLIST_DATA_DIR";

/// Returns the data directory for objlist files (logs, demo catalogs).
///
/// Resolution order:
/// 1. `$OBJLIST_DATA_DIR`
/// 2. `$XDG_DATA_HOME/objlist`
/// 3. `$HOME/.local/share/objlist`
/// 4. `./.objlist`
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(|key| std::env::var(key).ok())
}

/// [`get_data_dir`] with an injectable environment lookup.
///
/// # Examples
///
/// ```
/// use objlist::infrastructure::paths::data_dir_from;
/// use std::path::PathBuf;
///
/// let dir = data_dir_from(|key| (key == "HOME").then(|| "/home/ana".to_string()));
/// assert_eq!(dir, PathBuf::from("/home/ana/.local/share/objlist"));
/// ```
#[must_use]
pub fn data_dir_from(env: impl Fn(&str) -> Option<String>) -> PathBuf {
    let non_empty = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(dir) = non_empty(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    if let Some(xdg) = non_empty("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join("objlist");
    }
    non_empty("HOME").map_or_else(
        || PathBuf::from(".objlist"),
        |home| PathBuf::from(home).join(".local/share/objlist"),
    )
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a leading `~`, or when `HOME` is unset, are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, std::env::var("HOME").ok().as_deref())
}

/// [`expand_tilde`] with an explicit home directory.
///
/// # Examples
///
/// ```
/// use objlist::infrastructure::paths::expand_tilde_with;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde_with("~/logs/a.log", Some("/home/ana")), PathBuf::from("/home/ana/logs/a.log"));
/// assert_eq!(expand_tilde_with("~", Some("/home/ana")), PathBuf::from("/home/ana"));
/// assert_eq!(expand_tilde_with("/var/log/a.log", Some("/home/ana")), PathBuf::from("/var/log/a.log"));
/// assert_eq!(expand_tilde_with("~/a", None), PathBuf::from("~/a"));
/// ```
#[must_use]
pub fn expand_tilde_with(path: &str, home: Option<&str>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => PathBuf::from(home),
        (p, Some(home)) if p.starts_with("~/") => PathBuf::from(home).join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn explicit_override_wins() {
        let env = env_of(&[(DATA_DIR_ENV, "/srv/objlist"), ("HOME", "/home/ana")]);
        assert_eq!(data_dir_from(env), PathBuf::from("/srv/objlist"));
    }

    #[test]
    fn xdg_beats_home_and_empty_values_are_ignored() {
        let env = env_of(&[(DATA_DIR_ENV, ""), ("XDG_DATA_HOME", "/xdg"), ("HOME", "/home/ana")]);
        assert_eq!(data_dir_from(env), PathBuf::from("/xdg/objlist"));
    }

    #[test]
    fn falls_back_to_relative_dir() {
        assert_eq!(data_dir_from(env_of(&[])), PathBuf::from(".objlist"));
    }
}
