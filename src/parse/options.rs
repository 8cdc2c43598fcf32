/// Limits applied while parsing notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    max_depth: usize,
}

impl ParseOptions {
    /// Default nesting limit, counted in parenthesised expressions.
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject input nested deeper than `max_depth` parenthesised expressions.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
