/// Converts a snake_case catalog identifier to the PascalCase name used in the
/// generated struct. Only the first character of each `_`-separated segment is
/// uppercased; the rest of the segment is kept as is, so `userID` stays `UserID`.
/// Empty segments (leading, trailing or doubled underscores) contribute nothing.
pub fn format_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for part in name.split('_') {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}
