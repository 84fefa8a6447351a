//! Tag derivation for logger display names
//!
//! Logcat truncates tags longer than 23 characters on older platforms, so the
//! full logical name of a component (typically a dotted type path) is reduced
//! to its last segment, optionally prefixed, and capped.

/// Maximum length of a display name, in characters.
pub const TAG_MAX_LENGTH: usize = 23;

/// Separator placed between the tag prefix and the derived name.
pub const PREFIX_SEPARATOR: char = '_';

/// Derive the display name shown in log output for `raw_name`.
///
/// A dot that is neither the first character nor within the last two
/// characters marks a dotted path, and only the segment after the last dot
/// is kept. A non-empty `tag_prefix` is prepended as `PREFIX_`. The result
/// never exceeds [`TAG_MAX_LENGTH`] characters.
///
/// # Examples
///
/// ```
/// use logcat_facade::core::display_name::derive_display_name;
///
/// assert_eq!(derive_display_name(Some("com.example.app.MainActivity"), None), "MainActivity");
/// assert_eq!(
///     derive_display_name(Some("com.example.app.MainActivity"), Some("APP")),
///     "APP_MainActivity"
/// );
/// assert_eq!(derive_display_name(Some("a.b"), None), "a.b");
/// assert_eq!(derive_display_name(None, Some("APP")), "");
/// ```
pub fn derive_display_name(raw_name: Option<&str>, tag_prefix: Option<&str>) -> String {
    let Some(raw_name) = raw_name else {
        eprintln!("[LOGGER WARNING] Logger requested without a name, using an empty tag");
        return String::new();
    };

    let base = short_name(raw_name);

    let mut name = match tag_prefix {
        Some(prefix) if !prefix.is_empty() => {
            let mut prefixed = String::with_capacity(prefix.len() + 1 + base.len());
            prefixed.push_str(prefix);
            prefixed.push(PREFIX_SEPARATOR);
            prefixed.push_str(base);
            prefixed
        }
        _ => base.to_string(),
    };

    truncate_chars(&mut name, TAG_MAX_LENGTH);
    name
}

/// Last segment of a dotted path, or the whole name when it is not one.
fn short_name(raw_name: &str) -> &str {
    let char_count = raw_name.chars().count();
    let last_dot = raw_name
        .char_indices()
        .enumerate()
        .filter(|(_, (_, c))| *c == '.')
        .last();

    match last_dot {
        // char position > 0 and < len - 2
        Some((position, (byte_index, _))) if position > 0 && position + 2 < char_count => {
            &raw_name[byte_index + 1..]
        }
        _ => raw_name,
    }
}

fn truncate_chars(s: &mut String, max_chars: usize) {
    if let Some((byte_index, _)) = s.char_indices().nth(max_chars) {
        s.truncate(byte_index);
    }
}
