//! Wildcard-aware byte pattern search.
//!
//! Equivalent to a naive sliding-window scan: candidate offsets are visited
//! in ascending order, so the first match is always the lowest one. When the
//! pattern has at least one exact byte, `memchr` jumps between positions of
//! that byte instead of testing every window.

use memchr::memchr;

use super::ByteDescriptor;

/// Lowest offset where `needle` matches `haystack`.
///
/// Windows that would run past the end of the haystack never match. An empty
/// needle matches at offset 0.
pub fn scan(haystack: &[u8], needle: &[ByteDescriptor]) -> Option<usize> {
    Matches::new(haystack, needle).next()
}

/// Iterator over match offsets in ascending order.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    haystack: &'a [u8],
    needle: &'a [ByteDescriptor],
    /// First exact byte of the needle and its index.
    anchor: Option<(usize, u8)>,
    /// Next candidate offset.
    next: usize,
    /// Highest offset a window may start at; `None` if the needle does not fit.
    last: Option<usize>,
}

impl<'a> Matches<'a> {
    pub fn new(haystack: &'a [u8], needle: &'a [ByteDescriptor]) -> Self {
        let anchor = needle.iter().enumerate().find_map(|(index, d)| match d {
            ByteDescriptor::Exact(value) => Some((index, *value)),
            ByteDescriptor::Wildcard => None,
        });

        Self {
            haystack,
            needle,
            anchor,
            next: 0,
            last: haystack.len().checked_sub(needle.len()),
        }
    }

    fn window_matches(&self, offset: usize) -> bool {
        self.haystack[offset..offset + self.needle.len()]
            .iter()
            .zip(self.needle)
            .all(|(&byte, descriptor)| descriptor.matches(byte))
    }
}

impl Iterator for Matches<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let last = self.last?;

        while self.next <= last {
            let candidate = match self.anchor {
                Some((index, value)) => {
                    let region = &self.haystack[self.next + index..=last + index];
                    match memchr(value, region) {
                        Some(pos) => self.next + pos,
                        None => {
                            self.next = last + 1;
                            return None;
                        }
                    }
                }
                None => self.next,
            };

            self.next = candidate + 1;
            if self.window_matches(candidate) {
                return Some(candidate);
            }
        }

        None
    }
}
