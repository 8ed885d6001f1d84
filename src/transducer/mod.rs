//! Line-oriented rewriting of `.net` files between the OLCA and Hugin dialects.
//!
//! The conversion is a single forward pass over the input lines. Each line is checked against
//! a fixed list of rules (in priority order) and produces zero, one, or two output lines:
//!
//!  1. A line that is just `}` is copied and remembered.
//!  2. The first non-blank line after a `}` is preceded by exactly one empty line.
//!  3. Blank lines are dropped (every empty output line is synthesized by rule 2).
//!  4. A line starting with `node` is copied and enables the `states` rewrite.
//!  5. Inside a node block, `states(...)` lists are re-punctuated.
//!  6. Table separators (`| )` vs. `|)`) are rewritten.
//!  7. Anything else is copied verbatim.
//!
//! The OLCA provenance header is dropped (OLCA → Hugin) or synthesized (Hugin → OLCA).
//! The transducer never fails: unrecognized input is passed through unchanged.

pub mod rules;

use crate::ConversionDirection;
use rules::{
    header_lines, is_dropped_header, rewrite_separator, rewrite_states_line, trim_line,
};
use tracing::{debug, trace};

/// Cross-line bookkeeping of one conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TransducerState {
    /// Set once a `node` line is seen, never cleared.
    in_node_definition: bool,
    /// Set when the last emitted line was a closing brace.
    last_emitted_was_close_brace: bool,
}

/// Convert `.net` text in the given direction.
///
/// Output lines are joined by `\n`. Empty input yields an empty string (OLCA → Hugin) or just
/// the synthesized OLCA header (Hugin → OLCA).
#[must_use]
pub fn convert(input: &str, direction: ConversionDirection) -> String {
    convert_lines(input.split('\n'), direction).join("\n")
}

/// Same as [`convert`], but works with individual lines and returns the output lines.
pub fn convert_lines<'a, I>(lines: I, direction: ConversionDirection) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut output: Vec<String> = header_lines(direction)
        .iter()
        .map(|line| line.to_string())
        .collect();
    let mut state = TransducerState::default();
    let mut input_count = 0usize;

    for line in lines {
        input_count += 1;
        if is_dropped_header(line, direction) {
            trace!(line = input_count, "Dropping OLCA header.");
            continue;
        }

        let trimmed = trim_line(line);

        if trimmed == "}" {
            state.last_emitted_was_close_brace = true;
            output.push(line.to_string());
            continue;
        }

        if state.last_emitted_was_close_brace && !trimmed.is_empty() {
            output.push(String::new());
            state.last_emitted_was_close_brace = false;
        }

        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with("node") {
            state.in_node_definition = true;
            output.push(line.to_string());
            continue;
        }

        if state.in_node_definition && trimmed.starts_with("states") {
            if let Some(rewritten) = rewrite_states_line(line, direction) {
                trace!(line = input_count, "Rewriting states list.");
                output.push(rewritten);
                continue;
            }
        }

        match rewrite_separator(line, direction) {
            Some(rewritten) => {
                trace!(line = input_count, "Rewriting table separator.");
                output.push(rewritten);
            }
            None => output.push(line.to_string()),
        }
    }

    debug!(
        %direction,
        input_lines = input_count,
        output_lines = output.len(),
        "Converted `.net` text."
    );

    output
}
