//! Delimiter-preserving text partitioning
//!
//!     Splits text around every occurrence of a delimiter and keeps the delimiter as its
//!     own piece:
//!
//!         "hello world"  -> ["hello", " ", "world"]
//!         "a b "         -> ["a", " ", "b", " ", ""]
//!         "plain"        -> ["plain"]
//!
//!     Joining the pieces gives back the input exactly, which is what lets the wrapper
//!     reflow text without losing its spacing. The trailing piece is always emitted, even
//!     when it is empty.

/// Lazy iterator over the pieces of a partitioned string.
///
/// Cloning it gives an independent cursor at the same position; call [partition] again
/// to start over.
#[derive(Debug, Clone)]
pub struct Partition<'a> {
    rest: Option<&'a str>,
    delimiter: &'a str,
    pending_delimiter: bool,
}

/// Partition `text` on `delimiter`.
///
/// An empty delimiter never matches, so the whole text comes back as one piece.
pub fn partition<'a>(text: &'a str, delimiter: &'a str) -> Partition<'a> {
    Partition {
        rest: Some(text),
        delimiter,
        pending_delimiter: false,
    }
}

impl<'a> Iterator for Partition<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.pending_delimiter {
            self.pending_delimiter = false;
            return Some(self.delimiter);
        }
        let rest = self.rest?;
        if self.delimiter.is_empty() {
            self.rest = None;
            return Some(rest);
        }
        match rest.find(self.delimiter) {
            Some(index) => {
                self.rest = Some(&rest[index + self.delimiter.len()..]);
                self.pending_delimiter = true;
                Some(&rest[..index])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

impl std::iter::FusedIterator for Partition<'_> {}
