use regex::bytes::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Minimum run length used when none is given.
pub const DEFAULT_MIN_LEN: usize = 4;

/// Maximal runs of printable ASCII, matched on raw bytes.
static PRINTABLE_RUN: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn printable_run() -> &'static Regex {
    PRINTABLE_RUN.get_or_init(|| {
        Regex::new(r"(?-u)[\x20-\x7E]+").expect("Static regex pattern is guaranteed to be valid")
    })
}

/// A decoded printable run and where it starts in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedString {
    pub offset: usize,
    pub text: String,
}

/// Finds maximal runs of bytes in `0x20..=0x7E` of at least `min_len` bytes.
///
/// Matching happens on raw bytes; decoding only happens per match afterwards.
/// Runs are maximal, so filtering by length after matching selects the same
/// runs as a bounded repetition would.
#[derive(Debug, Clone, Copy)]
pub struct StringScanner {
    min_len: usize,
}

impl StringScanner {
    /// Build a scanner. `min_len` of 0 is treated as 1.
    #[must_use]
    pub fn new(min_len: usize) -> Self {
        Self {
            min_len: min_len.max(1),
        }
    }

    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    /// All qualifying runs in order of occurrence.
    ///
    /// Runs that fail UTF-8 decoding or are whitespace only are dropped; kept
    /// runs carry their original, untrimmed text.
    #[must_use]
    pub fn scan(&self, data: &[u8]) -> Vec<ExtractedString> {
        printable_run()
            .find_iter(data)
            .filter(|m| m.len() >= self.min_len)
            .filter_map(|m| {
                let text = std::str::from_utf8(m.as_bytes()).ok()?;
                if text.trim().is_empty() {
                    return None;
                }
                Some(ExtractedString {
                    offset: m.start(),
                    text: text.to_string(),
                })
            })
            .collect()
    }
}

impl fmt::Display for ExtractedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(found: &[ExtractedString]) -> Vec<&str> {
        found.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_scan_surrounded_by_control_bytes() {
        let mut data = vec![0x00, 0x01];
        data.extend_from_slice(b"Hello, World!");
        data.extend_from_slice(&[0x00, 0x01]);

        let found = StringScanner::new(4).scan(&data);
        assert_eq!(texts(&found), vec!["Hello, World!"]);
        assert_eq!(found[0].offset, 2);
    }

    #[test]
    fn test_scan_no_qualifying_run() {
        let data = b"\x00abc\x01de\xff\x7f~~~\x00";
        assert!(StringScanner::new(4).scan(data).is_empty());
    }

    #[test]
    fn test_scan_run_exactly_min_len() {
        let found = StringScanner::new(4).scan(b"\x00abcd\x00abc\x00");
        assert_eq!(texts(&found), vec!["abcd"]);
    }

    #[test]
    fn test_scan_runs_are_maximal_and_ordered() {
        let data = b"first run\x00\x00second\xffthird!!";
        let found = StringScanner::new(4).scan(data);
        assert_eq!(texts(&found), vec!["first run", "second", "third!!"]);
        assert_eq!(found[1].offset, 11);
        assert_eq!(found[2].offset, 18);
    }

    #[test]
    fn test_scan_excludes_tab_newline_and_del() {
        let found = StringScanner::new(4).scan(b"abcd\tefgh\nijkl\x7fmnop");
        assert_eq!(texts(&found), vec!["abcd", "efgh", "ijkl", "mnop"]);
    }

    #[test]
    fn test_scan_high_bytes_split_runs() {
        // UTF-8 "é" is two non-ASCII bytes and breaks the run
        let data = "café crème".as_bytes();
        assert!(StringScanner::new(4).scan(data).is_empty());
        assert_eq!(texts(&StringScanner::new(3).scan(data)), vec!["caf", " cr"]);
    }

    #[test]
    fn test_scan_drops_whitespace_only_keeps_padding() {
        let found = StringScanner::new(4).scan(b"      \x00  padded  \x00");
        assert_eq!(texts(&found), vec!["  padded  "]);
    }

    #[test]
    fn test_scan_min_len_one_and_zero() {
        let data = b"a\x00bc\x00";
        assert_eq!(texts(&StringScanner::new(1).scan(data)), vec!["a", "bc"]);
        let zero = StringScanner::new(0);
        assert_eq!(zero.min_len(), 1);
        assert_eq!(texts(&zero.scan(data)), vec!["a", "bc"]);
    }

    #[test]
    fn test_scan_elf_like_header() {
        let data = b"\x7fELF\x02\x01\x00libc.so.6\x00GLIBC_2.2.5\x00";
        let found = StringScanner::new(DEFAULT_MIN_LEN).scan(data);
        assert_eq!(texts(&found), vec!["libc.so.6", "GLIBC_2.2.5"]);
    }

    #[test]
    fn test_scan_huge_min_len() {
        let mut data = vec![b'A'; 4096];
        data.push(0x00);
        data.extend_from_slice(b"tail");

        let scanner = StringScanner::new(1_000_000);
        assert_eq!(scanner.min_len(), 1_000_000);
        assert!(scanner.scan(&data).is_empty());
        assert_eq!(StringScanner::new(4096).scan(&data).len(), 1);
    }

    #[test]
    fn test_display_is_text() {
        let found = StringScanner::new(4).scan(b"\x00  pad \x00");
        assert_eq!(found[0].to_string(), "  pad ");
    }

    #[test]
    fn test_scan_is_idempotent() {
        let data = b"%PDF-1.4\n\x00\x9c\x11/Type /Catalog\x00\x00endobj";
        let scanner = StringScanner::new(4);
        assert_eq!(scanner.scan(data), scanner.scan(data));
    }
}
