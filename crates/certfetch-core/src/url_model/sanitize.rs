//! Filename sanitization.

const NAME_MAX: usize = 255;

/// Makes a URL segment safe to join onto the destination directory.
///
/// - Replaces NUL, `\` and control characters with `_`
/// - Returns an empty string for `.` and `..`
/// - Limits length to 255 bytes (Linux NAME_MAX)
///
/// Everything else is kept as-is so the file keeps the name it has on the server.
pub fn sanitize_filename(name: &str) -> String {
    if name == "." || name == ".." {
        return String::new();
    }

    let out: String = name
        .chars()
        .map(|c| if c == '\0' || c == '\\' || c == '/' || c.is_control() { '_' } else { c })
        .collect();

    if out.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !out.is_char_boundary(take) {
            take -= 1;
        }
        out[..take].to_string()
    } else {
        out
    }
}
