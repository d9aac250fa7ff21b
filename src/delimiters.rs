//! Fence delimiters bounding a front matter block.

/// Opening/closing delimiter pair for one parse or stringify operation.
///
/// Both ends default to `---`. A single string fences both ends; a pair
/// sets them independently (e.g. `("<!--", "-->")`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    /// Fence the document must start with.
    pub open: String,
    /// Fence terminating the block at a line start.
    pub close: String,
}

impl Delimiters {
    /// Use the same fence on both ends.
    pub fn symmetric(fence: impl Into<String>) -> Self {
        let fence = fence.into();
        Delimiters { open: fence.clone(), close: fence }
    }

    /// Use distinct opening and closing fences.
    pub fn pair(open: impl Into<String>, close: impl Into<String>) -> Self {
        Delimiters { open: open.into(), close: close.into() }
    }

    /// The closing fence as it occurs mid-document: at the start of a line.
    pub(crate) fn close_pattern(&self) -> String {
        format!("\n{}", self.close)
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Delimiters::symmetric("---")
    }
}

impl From<&str> for Delimiters {
    fn from(fence: &str) -> Self {
        Delimiters::symmetric(fence)
    }
}

impl From<(&str, &str)> for Delimiters {
    fn from((open, close): (&str, &str)) -> Self {
        Delimiters::pair(open, close)
    }
}
