use std::path::PathBuf;

/// Root of the runner tool cache.
///
/// `RUNNER_TOOL_CACHE` on hosted runners, so entries are shared with other
/// setup actions; `~/.cache/setup-tweers/tool-cache` elsewhere.
pub fn tool_cache_root() -> PathBuf {
    if let Some(val) = std::env::var_os("RUNNER_TOOL_CACHE").filter(|v| !v.is_empty()) {
        return PathBuf::from(val);
    }
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("setup-tweers")
        .join("tool-cache")
}

/// Scratch space for downloads and extraction: `RUNNER_TEMP` or the system temp dir.
pub fn temp_root() -> PathBuf {
    std::env::var_os("RUNNER_TEMP")
        .filter(|v| !v.is_empty())
        .map_or_else(std::env::temp_dir, PathBuf::from)
}

/// Extract the filename from a URL.
pub fn filename_from_url(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.split('/').next_back().unwrap_or("")
}
