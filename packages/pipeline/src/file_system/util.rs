/// Convert Windows-style separators to POSIX separators.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

fn is_windows_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Whether `path` is rooted (POSIX `/...` or a `C:`-style drive path).
pub fn is_rooted(path: &str) -> bool {
    let normalized = normalize_separators(path);
    normalized.starts_with('/') || is_windows_absolute(&normalized)
}

/// Fold `.` and `..` segments. `..` never climbs above the root of an
/// absolute path; for relative paths it is dropped when nothing is left.
pub fn clean_path(path: &str) -> String {
    let normalized = normalize_separators(path);

    let windows_absolute = is_windows_absolute(&normalized);
    let unix_absolute = normalized.starts_with('/');

    let (drive_prefix, path_part) = if windows_absolute {
        normalized.split_at(2)
    } else {
        ("", normalized.as_str())
    };

    let mut segments = Vec::new();
    for segment in path_part.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if windows_absolute {
        format!("{}/{}", drive_prefix, joined)
    } else if unix_absolute {
        format!("/{}", joined)
    } else {
        joined
    }
}

const RESERVED_URI_BYTES: &[u8] = b";/?:@&=+$,#";

fn hex_byte(bytes: &[u8], at: usize) -> Option<u8> {
    if bytes.get(at) != Some(&b'%') {
        return None;
    }
    let hex = std::str::from_utf8(bytes.get(at + 1..at + 3)?).ok()?;
    u8::from_str_radix(hex, 16).ok()
}

/// Percent-decode a URI, leaving escapes of reserved URI characters intact.
///
/// Returns `None` for malformed escapes or escapes that do not form UTF-8.
pub fn decode_uri(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        let lead = hex_byte(bytes, i)?;
        if lead < 0x80 {
            if RESERVED_URI_BYTES.contains(&lead) {
                out.extend_from_slice(&bytes[i..i + 3]);
            } else {
                out.push(lead);
            }
            i += 3;
            continue;
        }

        let width = match lead {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return None,
        };
        let mut sequence = Vec::with_capacity(width);
        for k in 0..width {
            sequence.push(hex_byte(bytes, i + 3 * k)?);
        }
        std::str::from_utf8(&sequence).ok()?;
        out.extend_from_slice(&sequence);
        i += 3 * width;
    }

    String::from_utf8(out).ok()
}
