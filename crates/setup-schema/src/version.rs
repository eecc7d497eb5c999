//! Release tag conventions.
//!
//! Releases are tagged `tweers-cli-v<version>`. The installer reports and
//! caches the bare `<version>`.

/// Literal prefix of every release tag, including the `v`.
pub const TAG_PREFIX: &str = "tweers-cli-v";

/// Extract the canonical version from a release tag.
///
/// Strips [`TAG_PREFIX`], then one leading `v`. Input of any other shape is
/// returned minus whichever prefixes matched, so the function is total and
/// normalising an already-normalised version is a no-op.
///
/// # Example
///
/// ```
/// use setup_schema::version::normalize;
///
/// assert_eq!(normalize("tweers-cli-v1.0.5"), "1.0.5");
/// assert_eq!(normalize("v2.0.0"), "2.0.0");
/// assert_eq!(normalize("1.0.0"), "1.0.0");
/// ```
pub fn normalize(tag: &str) -> String {
    let tag = tag.strip_prefix(TAG_PREFIX).unwrap_or(tag);
    tag.strip_prefix('v').unwrap_or(tag).to_string()
}

/// Build the release tag for a requested version.
pub fn tag_for(version: &str) -> String {
    format!("{TAG_PREFIX}{}", normalize(version))
}
