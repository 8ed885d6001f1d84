use crate::ConversionDirection;

/// Header line that marks a file produced by the OLCA tool.
pub const OLCA_HEADER: &str = "File generated in OLCATool";

/// Any line starting with this prefix is an OLCA provenance header.
pub const OLCA_HEADER_PREFIX: &str = "File generated";

/// Table separator token as written in the OLCA dialect.
pub const OLCA_SEPARATOR: &str = "| )";

/// Table separator token as written in the Hugin dialect.
pub const HUGIN_SEPARATOR: &str = "|)";

/// Remove leading and trailing whitespace, including byte-order marks.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Lines emitted before any input line is processed.
pub fn header_lines(direction: ConversionDirection) -> &'static [&'static str] {
    match direction {
        ConversionDirection::OlcaToHugin => &[],
        ConversionDirection::HuginToOlca => &[OLCA_HEADER, ""],
    }
}

/// Check if the (untrimmed) line is a header that must be dropped in this direction.
pub fn is_dropped_header(line: &str, direction: ConversionDirection) -> bool {
    direction == ConversionDirection::OlcaToHugin && line.starts_with(OLCA_HEADER_PREFIX)
}

/// Re-punctuate a raw states list into the target dialect.
///
/// OLCA lists are comma-delimited (`a, b, c`), Hugin lists are whitespace-delimited (`a b c`).
pub fn repunctuate_states(raw: &str, direction: ConversionDirection) -> String {
    match direction {
        ConversionDirection::OlcaToHugin => raw
            .split(',')
            .map(trim_line)
            .collect::<Vec<_>>()
            .join(" "),
        ConversionDirection::HuginToOlca => raw.split_whitespace().collect::<Vec<_>>().join(", "),
    }
}

/// Rewrite a `states(...)` declaration into the target dialect.
///
/// Everything before the first `(` is kept as the declarator. The list ends at the first `)`
/// after it (or at the end of the line). Anything after that `)` is dropped and the result
/// always ends with `);`.
///
/// Returns `None` if the line has no `(`.
pub fn rewrite_states_line(line: &str, direction: ConversionDirection) -> Option<String> {
    let (declarator, rest) = line.split_once('(')?;
    let raw = rest.split(')').next().unwrap_or_default();
    let states = repunctuate_states(trim_line(raw), direction);
    Some(format!("{declarator}({states});"))
}

/// Rewrite every table separator into the target dialect.
///
/// Returns `None` if the line contains no separator in the source dialect.
pub fn rewrite_separator(line: &str, direction: ConversionDirection) -> Option<String> {
    let (from, to) = match direction {
        ConversionDirection::OlcaToHugin => (OLCA_SEPARATOR, HUGIN_SEPARATOR),
        ConversionDirection::HuginToOlca => (HUGIN_SEPARATOR, OLCA_SEPARATOR),
    };
    if line.contains(from) {
        Some(line.replace(from, to))
    } else {
        None
    }
}
