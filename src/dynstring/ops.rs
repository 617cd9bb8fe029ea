//! Mutating and querying operations on [`super::DString`], split out from the allocation plumbing
//! in `mod.rs`.

use core::slice;

use alloc::vec::Vec;

use super::{DString, DStringError};

fn is_ascii_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

struct CountingWriter(usize);
impl core::fmt::Write for CountingWriter {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}
impl<'a> core::fmt::Write for BoundedWriter<'a> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let bytes = s.as_bytes();
        if self.pos + bytes.len() > self.buf.len() {
            return Err(core::fmt::Error);
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }
}

impl DString {
    /// Build a string from a `core::fmt::Arguments`, the way [`format_args!`] produces one.
    ///
    /// Measures the formatted length first with a counting [`core::fmt::Write`] sink, allocates
    /// exactly once, then renders into a second, bounded sink — `core::fmt::Arguments` itself is
    /// treated as an out-of-scope collaborator supplied by the standard formatting machinery.
    pub fn from_fmt(args: core::fmt::Arguments) -> Result<Self, DStringError> {
        let mut counter = CountingWriter(0);
        core::fmt::write(&mut counter, args).map_err(|_| DStringError::AllocFailed)?;

        let mut s = Self::with_capacity(counter.0)?;
        let written = {
            let buf = unsafe { slice::from_raw_parts_mut(s.ptr.as_ptr(), s.capacity()) };
            let mut w = BoundedWriter { buf, pos: 0 };
            core::fmt::write(&mut w, args).map_err(|_| DStringError::AllocFailed)?;
            w.pos
        };
        s.set_length(written);
        s.write_terminator();
        Ok(s)
    }

    /// Replace this string's content with `bytes`, growing if needed.
    pub fn set(&mut self, bytes: &[u8]) -> Result<(), DStringError> {
        self.ensure_capacity(bytes.len())?;
        unsafe { core::ptr::copy_nonoverlapping(bytes.as_ptr(), self.ptr.as_ptr(), bytes.len()); }
        self.set_length(bytes.len());
        self.write_terminator();
        Ok(())
    }

    /// Like [`set`](Self::set), but only the first `n` bytes of `bytes` (or all of it, if shorter).
    pub fn set_n(&mut self, bytes: &[u8], n: usize) -> Result<(), DStringError> {
        self.set(&bytes[..n.min(bytes.len())])
    }

    /// Append `bytes` to this string's content, growing if needed.
    pub fn cat(&mut self, bytes: &[u8]) -> Result<(), DStringError> {
        let len = self.len();
        let new_len = len.checked_add(bytes.len()).ok_or(DStringError::AllocFailed)?;
        self.ensure_capacity(new_len)?;
        unsafe { core::ptr::copy_nonoverlapping(bytes.as_ptr(), self.ptr.as_ptr().add(len), bytes.len()); }
        self.set_length(new_len);
        self.write_terminator();
        Ok(())
    }

    /// Like [`cat`](Self::cat), but only the first `n` bytes of `bytes` (or all of it, if shorter).
    pub fn cat_n(&mut self, bytes: &[u8], n: usize) -> Result<(), DStringError> {
        self.cat(&bytes[..n.min(bytes.len())])
    }

    /// Byte offset of the first occurrence of `needle`, if any. The empty needle matches at `0`.
    pub fn find(&self, needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        self.as_bytes().windows(needle.len()).position(|w| w == needle)
    }

    /// Byte offset of the last occurrence of `needle`, if any. The empty needle matches at `len()`.
    pub fn find_last(&self, needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return Some(self.len());
        }
        self.as_bytes().windows(needle.len()).rposition(|w| w == needle)
    }

    /// A new, independently-allocated copy of the content in `start..end`.
    pub fn new_substring(&self, start: usize, end: usize) -> Result<Self, DStringError> {
        if start > end || end > self.len() {
            return Err(DStringError::OutOfRange);
        }
        Self::from_bytes(&self.as_bytes()[start..end])
    }

    /// Shrink this string in place to just its `start..end` content, discarding the rest.
    pub fn truncate_to_range(&mut self, start: usize, end: usize) -> Result<(), DStringError> {
        if start > end || end > self.len() {
            return Err(DStringError::OutOfRange);
        }
        let new_len = end - start;
        unsafe { core::ptr::copy(self.ptr.as_ptr().add(start), self.ptr.as_ptr(), new_len); }
        self.set_length(new_len);
        self.write_terminator();
        Ok(())
    }

    /// Splice `replacement` into `start..end`, shifting the remainder and growing if needed.
    pub fn replace_range(&mut self, start: usize, end: usize, replacement: &[u8]) -> Result<(), DStringError> {
        let len = self.len();
        if start > end || end > len {
            return Err(DStringError::OutOfRange);
        }
        let tail_len = len - end;
        let new_len = start
            .checked_add(replacement.len())
            .and_then(|v| v.checked_add(tail_len))
            .ok_or(DStringError::AllocFailed)?;
        self.ensure_capacity(new_len)?;
        unsafe {
            let base = self.ptr.as_ptr();
            // shift the tail into its new position before overwriting the replaced span, since
            // the span being replaced may be shorter or longer than `replacement`.
            core::ptr::copy(base.add(end), base.add(start + replacement.len()), tail_len);
            core::ptr::copy_nonoverlapping(replacement.as_ptr(), base.add(start), replacement.len());
        }
        self.set_length(new_len);
        self.write_terminator();
        Ok(())
    }

    /// Remove `count` bytes starting at `index`, shifting the remainder left.
    pub fn remove_at(&mut self, index: usize, count: usize) -> Result<(), DStringError> {
        let end = index.checked_add(count).ok_or(DStringError::OutOfRange)?;
        self.replace_range(index, end, &[])
    }

    /// A new copy with leading and trailing ASCII whitespace removed.
    pub fn new_trim(&self) -> Result<Self, DStringError> {
        let (start, end) = self.trim_span();
        Self::from_bytes(&self.as_bytes()[start..end])
    }

    /// Like [`new_trim`](Self::new_trim), but trims at most `max_each_side` whitespace bytes from
    /// each end, the same kind of bound `set_n`/`cat_n` place on their source.
    pub fn new_trim_n(&self, max_each_side: usize) -> Result<Self, DStringError> {
        let (start, end) = self.trim_span_bounded(max_each_side);
        Self::from_bytes(&self.as_bytes()[start..end])
    }

    /// Trim leading and trailing ASCII whitespace in place.
    pub fn trim_in_place(&mut self) -> Result<(), DStringError> {
        let (start, end) = self.trim_span();
        self.truncate_to_range(start, end)
    }

    fn trim_span(&self) -> (usize, usize) {
        let bytes = self.as_bytes();
        let start = bytes.iter().position(|&b| !is_ascii_ws(b)).unwrap_or(bytes.len());
        let end = bytes.iter().rposition(|&b| !is_ascii_ws(b)).map(|i| i + 1).unwrap_or(0).max(start);
        (start, end)
    }

    fn trim_span_bounded(&self, max_each_side: usize) -> (usize, usize) {
        let bytes = self.as_bytes();
        let mut start = 0;
        while start < bytes.len() && start < max_each_side && is_ascii_ws(bytes[start]) {
            start += 1;
        }
        let mut end = bytes.len();
        let mut trimmed = 0;
        while end > start && trimmed < max_each_side && is_ascii_ws(bytes[end - 1]) {
            end -= 1;
            trimmed += 1;
        }
        (start, end)
    }

    /// Byte range `[start, end)` spanning from the first occurrence of `beg_tag` through and
    /// including the first subsequent occurrence of `end_tag`. An empty tag means "start of
    /// string" / "end of string" respectively. `None` if either tag is non-empty and not found.
    pub fn substring_tagged(&self, beg_tag: &[u8], end_tag: &[u8]) -> Option<(usize, usize)> {
        let bytes = self.as_bytes();
        let start = if beg_tag.is_empty() {
            0
        } else {
            bytes.windows(beg_tag.len()).position(|w| w == beg_tag)?
        };
        let after_beg = start + beg_tag.len();
        let end = if end_tag.is_empty() {
            bytes.len()
        } else {
            let rel = bytes[after_beg..].windows(end_tag.len()).position(|w| w == end_tag)?;
            after_beg + rel + end_tag.len()
        };
        Some((start, end))
    }

    /// A new, independently-allocated copy of [`substring_tagged`](Self::substring_tagged)'s span
    /// (the tags themselves included).
    pub fn new_substring_tagged(&self, beg_tag: &[u8], end_tag: &[u8]) -> Result<Self, DStringError> {
        let (start, end) = self.substring_tagged(beg_tag, end_tag).ok_or(DStringError::TagNotFound)?;
        Self::from_bytes(&self.as_bytes()[start..end])
    }

    /// Like [`substring_tagged`](Self::substring_tagged), but excludes both tags from the span —
    /// the span strictly between them.
    fn tagged_range_exclusive(&self, beg_tag: &[u8], end_tag: &[u8]) -> Option<(usize, usize)> {
        let bytes = self.as_bytes();
        let start = if beg_tag.is_empty() {
            0
        } else {
            bytes.windows(beg_tag.len()).position(|w| w == beg_tag)? + beg_tag.len()
        };
        let end = if end_tag.is_empty() {
            bytes.len()
        } else {
            start + bytes[start..].windows(end_tag.len()).position(|w| w == end_tag)?
        };
        Some((start, end))
    }

    /// Splice the tag-bounded span of `other` (tags included) between the tag-bounded span of
    /// `self` (tags excluded, so `self`'s own tags survive unchanged). When `keep_on_separate_lines`
    /// is set, the spliced-in text is wrapped with a newline on each side.
    pub fn replace_range_tagged(
        &mut self,
        beg_tag: &[u8],
        end_tag: &[u8],
        other: &Self,
        other_beg_tag: &[u8],
        other_end_tag: &[u8],
        keep_on_separate_lines: bool,
    ) -> Result<(), DStringError> {
        let (self_start, self_end) =
            self.tagged_range_exclusive(beg_tag, end_tag).ok_or(DStringError::TagNotFound)?;
        let (other_start, other_end) =
            other.substring_tagged(other_beg_tag, other_end_tag).ok_or(DStringError::TagNotFound)?;
        let middle = &other.as_bytes()[other_start..other_end];

        if keep_on_separate_lines {
            let mut wrapped = Vec::with_capacity(middle.len() + 2);
            wrapped.push(b'\n');
            wrapped.extend_from_slice(middle);
            wrapped.push(b'\n');
            self.replace_range(self_start, self_end, &wrapped)
        } else {
            self.replace_range(self_start, self_end, middle)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_cat() {
        let mut s = DString::with_capacity(0).unwrap();
        s.set(b"hello").unwrap();
        assert_eq!(s.as_bytes(), b"hello");
        s.cat(b" world").unwrap();
        assert_eq!(s.as_bytes(), b"hello world");
    }

    #[test]
    fn cat_grows_past_initial_capacity() {
        let mut s = DString::with_capacity(2).unwrap();
        s.set(b"ab").unwrap();
        for _ in 0..20 {
            s.cat(b"xy").unwrap();
        }
        assert_eq!(s.len(), 2 + 20 * 2);
        assert!(s.capacity() >= s.len());
    }

    #[test]
    fn find_and_find_last() {
        let s = DString::from_bytes(b"abracadabra").unwrap();
        assert_eq!(s.find(b"abra"), Some(0));
        assert_eq!(s.find_last(b"abra"), Some(7));
        assert_eq!(s.find(b"zzz"), None);
    }

    #[test]
    fn substring_and_truncate_to_range() {
        let s = DString::from_bytes(b"hello world").unwrap();
        let sub = s.new_substring(6, 11).unwrap();
        assert_eq!(sub.as_bytes(), b"world");

        let mut s2 = DString::from_bytes(b"hello world").unwrap();
        s2.truncate_to_range(6, 11).unwrap();
        assert_eq!(s2.as_bytes(), b"world");

        assert_eq!(s.new_substring(5, 2), Err(DStringError::OutOfRange));
        assert_eq!(s.new_substring(0, 999), Err(DStringError::OutOfRange));
    }

    #[test]
    fn replace_range_grows_and_shrinks() {
        let mut s = DString::from_bytes(b"hello world").unwrap();
        s.replace_range(6, 11, b"rust").unwrap();
        assert_eq!(s.as_bytes(), b"hello rust");

        s.replace_range(0, 5, b"goodbye").unwrap();
        assert_eq!(s.as_bytes(), b"goodbye rust");
    }

    #[test]
    fn remove_at_shifts_remainder() {
        let mut s = DString::from_bytes(b"hello world").unwrap();
        s.remove_at(5, 6).unwrap();
        assert_eq!(s.as_bytes(), b"hello");
    }

    #[test]
    fn trim_variants() {
        let s = DString::from_bytes(b"  hi there  \n").unwrap();
        let trimmed = s.new_trim().unwrap();
        assert_eq!(trimmed.as_bytes(), b"hi there");

        let mut s2 = DString::from_bytes(b"   ").unwrap();
        s2.trim_in_place().unwrap();
        assert_eq!(s2.as_bytes(), b"");
    }

    #[test]
    fn new_trim_n_caps_how_much_it_removes_from_each_side() {
        let s = DString::from_bytes(b"   hi   ").unwrap();
        let trimmed = s.new_trim_n(1).unwrap();
        assert_eq!(trimmed.as_bytes(), b"  hi  ");
        let untrimmed_side = s.new_trim_n(0).unwrap();
        assert_eq!(untrimmed_side.as_bytes(), b"   hi   ");
    }

    #[test]
    fn from_fmt_renders_arguments() {
        let s = DString::from_fmt(format_args!("{}-{:02}", "id", 7)).unwrap();
        assert_eq!(s.as_str().unwrap(), "id-07");
    }

    #[test]
    fn substring_tagged_spans_from_beg_tag_through_end_tag() {
        let s = DString::from_bytes(b"prefix<<KEY>>middle<<END>>suffix").unwrap();
        let (start, end) = s.substring_tagged(b"<<KEY>>", b"<<END>>").unwrap();
        assert_eq!(&s.as_bytes()[start..end], b"<<KEY>>middle<<END>>");
        assert!(s.substring_tagged(b"<<NOPE>>", b"<<END>>").is_none());
    }

    #[test]
    fn new_substring_tagged_copies_the_tagged_span() {
        let s = DString::from_bytes(b"a[[x]]b").unwrap();
        let copy = s.new_substring_tagged(b"[[", b"]]").unwrap();
        assert_eq!(copy.as_bytes(), b"[[x]]");
    }

    #[test]
    fn replace_range_tagged_preserves_self_tags_and_splices_other_content() {
        // `self`'s tags are excluded from the replaced span but `other`'s are included in the
        // spliced-in content, so using the same literal tag text on both sides doubles them up.
        let mut doc = DString::from_bytes(b"<!--BEGIN-->old<!--END-->").unwrap();
        let patch = DString::from_bytes(b"<!--BEGIN-->new<!--END-->").unwrap();
        doc.replace_range_tagged(b"<!--BEGIN-->", b"<!--END-->", &patch, b"<!--BEGIN-->", b"<!--END-->", false)
            .unwrap();
        assert_eq!(doc.as_bytes(), b"<!--BEGIN--><!--BEGIN-->new<!--END--><!--END-->");
    }

    #[test]
    fn replace_range_tagged_wraps_in_newlines_when_requested() {
        let mut doc = DString::from_bytes(b"[A]old[B]").unwrap();
        let patch = DString::from_bytes(b"[A]new[B]").unwrap();
        doc.replace_range_tagged(b"[A]", b"[B]", &patch, b"[A]", b"[B]", true).unwrap();
        assert_eq!(doc.as_bytes(), b"[A]\n[A]new[B]\n[B]");
    }
}
