use crate::f;

/// Extends Option for display in summaries
pub trait OptionExt {
    /// Either the value contained within `Some()`, or "none"
    ///
    /// Handy for optional metadata such as an absorption edge that may not be
    /// present in an input file.
    ///
    /// ```rust
    /// # use chemtools_utils::OptionExt;
    /// let edge: Option<&str> = Some("K");
    /// assert_eq!(edge.display(), "K");
    ///
    /// let edge: Option<&str> = None;
    /// assert_eq!(edge.display(), "none");
    /// ```
    fn display(&self) -> String;
}

impl<T: std::fmt::Display> OptionExt for Option<T> {
    fn display(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => "none".to_string(),
        }
    }
}
