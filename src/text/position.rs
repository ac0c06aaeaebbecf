use line_index::{LineCol, LineIndex, TextSize};

use crate::domain::CursorLocus;
use crate::error::{HostError, HostResult};

/// Parse a user-supplied cursor position against `text`.
///
/// Accepted forms:
/// * `N` - byte offset
/// * `N..M` - half-open byte range
/// * `LINE:COL` - 1-based line and byte column
pub fn parse_locus(text: &str, input: &str) -> HostResult<CursorLocus> {
    let input = input.trim();
    if let Some((start, end)) = input.split_once("..") {
        let pos = parse_offset(text, input, start)?;
        let end = parse_offset(text, input, end)?;
        if end < pos {
            return Err(HostError::position(input, "range end precedes start"));
        }
        return Ok(CursorLocus::Range { pos, end });
    }
    if let Some((line, col)) = input.split_once(':') {
        return line_col_to_offset(text, input, line, col).map(CursorLocus::Offset);
    }
    parse_offset(text, input, input).map(CursorLocus::Offset)
}

fn parse_number(input: &str, part: &str) -> HostResult<usize> {
    part.trim()
        .parse()
        .map_err(|_| HostError::position(input, format!("`{}` is not a number", part.trim())))
}

fn parse_offset(text: &str, input: &str, part: &str) -> HostResult<usize> {
    let offset = parse_number(input, part)?;
    if offset > text.len() {
        return Err(HostError::position(
            input,
            format!("offset {} is past end of file ({} bytes)", offset, text.len()),
        ));
    }
    Ok(offset)
}

fn line_col_to_offset(text: &str, input: &str, line: &str, col: &str) -> HostResult<usize> {
    let line = parse_number(input, line)?;
    let col = parse_number(input, col)?;
    if line == 0 || col == 0 {
        return Err(HostError::position(input, "line and column are 1-based"));
    }

    let line = u32::try_from(line - 1).map_err(|_| HostError::position(input, "line too large"))?;
    let line_start = LineIndex::new(text)
        .offset(LineCol { line, col: 0 })
        .map(usize::from)
        .ok_or_else(|| HostError::position(input, "no such line"))?;
    let line_len = text[line_start..].find('\n').unwrap_or(text.len() - line_start);
    if col - 1 > line_len {
        return Err(HostError::position(input, "column is past end of line"));
    }
    Ok(line_start + col - 1)
}

/// 1-based `LINE:COL` for a byte offset, as accepted by [`parse_locus`].
pub fn format_line_col(text: &str, offset: usize) -> String {
    let index = LineIndex::new(text);
    let offset = TextSize::try_from(offset.min(text.len())).unwrap_or_default();
    let LineCol { line, col } = index.line_col(offset);
    format!("{}:{}", line + 1, col + 1)
}
