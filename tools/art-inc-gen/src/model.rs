//! Intermediate representation for parsed ASCII art

use std::fmt;
use std::path::{Path, PathBuf};

/// Suffix appended to the output path for the compat table
pub const COMPAT_SUFFIX: &str = ".compat";

/// One picture: its lines in input order, without line terminators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
}

impl Frame {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Width of the first line (in chars) and number of lines
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.lines.first().map_or(0, |l| l.chars().count()),
            height: self.lines.len(),
        }
    }
}

/// Frame size in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

/// All frames parsed from one input file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub frames: Vec<Frame>,
}

impl Document {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Dimensions reported in the generated header.
    ///
    /// Taken from the first frame only; `None` when nothing was parsed.
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.frames.first().map(Frame::dimensions)
    }

    /// Frames whose dimensions differ from the first frame's
    pub fn mismatched_frames(&self) -> Vec<(usize, Dimensions)> {
        let Some(expected) = self.dimensions() else {
            return Vec::new();
        };

        self.frames
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, frame)| (i, frame.dimensions()))
            .filter(|(_, dims)| *dims != expected)
            .collect()
    }
}

/// Which of the two generated tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// `const wchar_t *` table with the original glyphs
    Full,
    /// `const char *` table using only space and `#`
    Compat,
}

impl TableKind {
    /// Where this table is written for a given output path
    pub fn output_path(self, output: &Path) -> PathBuf {
        match self {
            TableKind::Full => output.to_path_buf(),
            TableKind::Compat => compat_path(output),
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Full => write!(f, "full table"),
            TableKind::Compat => write!(f, "compat table"),
        }
    }
}

/// `<output>.compat`, keeping any existing extension
pub fn compat_path(output: &Path) -> PathBuf {
    let mut path = output.as_os_str().to_owned();
    path.push(COMPAT_SUFFIX);
    PathBuf::from(path)
}
