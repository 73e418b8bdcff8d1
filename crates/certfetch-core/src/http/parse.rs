//! Pick the declared content type out of collected header lines.

/// Decodes one raw header line from libcurl. Invalid UTF-8 (e.g. Latin-1
/// values) is replaced rather than dropped so the header name is still seen.
pub fn header_line(data: &[u8]) -> String {
    String::from_utf8_lossy(data).trim_end().to_string()
}

/// Returns the `Content-Type` of the last response block in `lines`.
///
/// libcurl hands over headers of every response in a redirect chain; each
/// block starts with an `HTTP/` status line, which resets what was seen so far.
pub fn content_type(lines: &[String]) -> Option<String> {
    let mut found = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            found = None;
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                found = Some(value.trim().to_string());
            }
        }
    }

    found
}
