//! Slash-delimited absolute paths.

use std::fmt;

use crate::error::PathError;

/// Segment delimiter.
pub const DELIMITER: char = '/';

/// An absolute path split into its segments.
///
/// Parsing keeps the original string for messages and never normalizes:
/// `.`, `..` and percent escapes are ordinary segment text. The root path
/// `/` has zero segments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TreePath {
    raw: String,
    segments: Vec<String>,
}

impl TreePath {
    /// Parse an absolute path such as `/a/b/c`.
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        let rest = raw
            .strip_prefix(DELIMITER)
            .ok_or_else(|| PathError::NotAbsolute {
                path: raw.to_owned(),
            })?;

        if rest.is_empty() {
            return Ok(Self::root());
        }

        let segments = rest
            .split(DELIMITER)
            .enumerate()
            .map(|(index, segment)| {
                if segment.is_empty() {
                    Err(PathError::EmptySegment {
                        path: raw.to_owned(),
                        index,
                    })
                } else {
                    Ok(segment.to_owned())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            raw: raw.to_owned(),
            segments,
        })
    }

    /// The root path `/`.
    pub fn root() -> Self {
        Self {
            raw: DELIMITER.to_string(),
            segments: Vec::new(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The string this path was parsed from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for TreePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
