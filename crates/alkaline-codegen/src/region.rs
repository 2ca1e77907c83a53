//! Marker-delimited generated regions.
//!
//! The type artifact may contain hand-written code around the generated
//! block, so the block is fenced by marker lines and located by scanning
//! for them, never by pattern-matching on the declaration syntax itself.
//! A line counts as a marker when its trimmed content equals the marker
//! exactly.

use std::ops::Range;

/// A marker pair that cannot be safely rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RegionError {
    /// A begin marker with no end marker after it.
    MissingEnd,
    /// An end marker before any begin marker.
    MissingBegin,
}

/// Locates the generated region in `content`: the byte span from the start
/// of the begin-marker line to the end of the end-marker line, exclusive
/// of the end line's newline.
///
/// Returns `Ok(None)` when no marker is present at all.
pub(crate) fn locate_region(
    content: &str,
    begin: &str,
    end: &str,
) -> Result<Option<Range<usize>>, RegionError> {
    let mut begin_start: Option<usize> = None;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let text = line.trim_end_matches('\n').trim_end_matches('\r');
        let trimmed = text.trim();

        if let Some(start) = begin_start {
            if trimmed == end {
                return Ok(Some(start..offset + text.len()));
            }
        } else if trimmed == begin {
            begin_start = Some(offset);
        } else if trimmed == end {
            return Err(RegionError::MissingBegin);
        }

        offset += line.len();
    }

    match begin_start {
        Some(_) => Err(RegionError::MissingEnd),
        None => Ok(None),
    }
}
