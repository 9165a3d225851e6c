/*!
 * Input Normalization
 * Case folding applied to every command line before parsing
 */

/// Uppercase a command line, leaving `Read` filenames untouched
///
/// A line starting with `r` or `R` only has that first letter forced to `R`,
/// so filenames keep their case. Every other line is uppercased in full.
pub fn normalize_line(line: &str) -> String {
    let mut chars = line.chars();
    match chars.next() {
        Some('r') | Some('R') => {
            let mut normalized = String::with_capacity(line.len());
            normalized.push('R');
            normalized.push_str(chars.as_str());
            normalized
        }
        _ => line.to_ascii_uppercase(),
    }
}

/// Strip the line terminator left by `BufRead::read_line`
pub fn trim_line_ending(line: &str) -> &str {
    line.trim_end_matches(&['\n', '\r'][..])
}
