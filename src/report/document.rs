//! Marker-delimited section replacement

/// Start of the generated section
pub const BEGIN_MARKER: &str = "<!-- BEGIN PROXY LIST -->";

/// End of the generated section
pub const END_MARKER: &str = "<!-- END PROXY LIST -->";

/// Replace the text strictly between `begin` and `end` with `block`.
///
/// Both markers are kept. Everything before `begin` and from `end` onwards is
/// copied unchanged. Returns `None` when `begin` is missing or no `end`
/// follows it.
pub fn replace_between(content: &str, begin: &str, end: &str, block: &str) -> Option<String> {
    let interior_start = content.find(begin)? + begin.len();
    let interior_end = interior_start + content[interior_start..].find(end)?;

    let mut updated = String::with_capacity(content.len() + block.len());
    updated.push_str(&content[..interior_start]);
    updated.push_str(block);
    updated.push_str(&content[interior_end..]);
    Some(updated)
}
