//! Final path segment extraction.

/// Returns everything after the last `/` of the URL path.
///
/// Query and fragment are not part of the segment. Returns `None` when the
/// segment is empty (root path or trailing slash).
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let segment = match url::Url::parse(url) {
        Ok(parsed) => parsed.path().rsplit('/').next()?.to_string(),
        Err(_) => {
            let tail = url.rsplit('/').next()?;
            let end = tail.find(|c: char| c == '?' || c == '#').unwrap_or(tail.len());
            tail[..end].to_string()
        }
    };
    if segment.is_empty() {
        return None;
    }
    Some(segment)
}
