use super::{Prerelease, PrereleaseTag};
use crate::error::VersionError;

/// The pieces of a version string that matched the grammar.
pub(super) struct ParsedVersion {
    pub segments: Vec<u64>,
    pub prerelease: Option<Prerelease>,
}

/// Matches `text` against the full version grammar:
///
/// ```text
/// version    := segment ("." segment)* prerelease?
/// segment    := "0" | [1-9][0-9]*
/// prerelease := ("a" | "b" | "rc") [1-9][0-9]*
/// ```
pub(super) fn parse_version(text: &str) -> Result<ParsedVersion, VersionError> {
    let invalid = || VersionError::InvalidVersionFormat(text.to_string());
    let mut scanner = Scanner::new(text.as_bytes());

    let mut segments = vec![scanner.segment().ok_or_else(invalid)?];
    while scanner.eat(b".") {
        segments.push(scanner.segment().ok_or_else(invalid)?);
    }

    let prerelease = if scanner.is_done() {
        None
    } else {
        let tag = scanner.prerelease_tag().ok_or_else(invalid)?;
        let number = scanner.positive_number().ok_or_else(invalid)?;
        Some(Prerelease { tag, number })
    };

    if !scanner.is_done() {
        return Err(invalid());
    }

    Ok(ParsedVersion {
        segments,
        prerelease,
    })
}

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn is_done(&self) -> bool {
        self.pos == self.bytes.len()
    }

    fn eat(&mut self, token: &[u8]) -> bool {
        if self.bytes[self.pos..].starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn digits(&mut self) -> &'a [u8] {
        let start = self.pos;
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        &self.bytes[start..self.pos]
    }

    /// `"0" | [1-9][0-9]*`
    fn segment(&mut self) -> Option<u64> {
        let digits = self.digits();
        match digits {
            [] => None,
            [b'0'] => Some(0),
            [b'0', ..] => None,
            _ => to_number(digits),
        }
    }

    /// `[1-9][0-9]*`
    fn positive_number(&mut self) -> Option<u64> {
        match self.digits() {
            digits @ [b'1'..=b'9', ..] => to_number(digits),
            _ => None,
        }
    }

    fn prerelease_tag(&mut self) -> Option<PrereleaseTag> {
        // "rc" first so the single-letter tags never shadow it.
        [
            PrereleaseTag::ReleaseCandidate,
            PrereleaseTag::Alpha,
            PrereleaseTag::Beta,
        ]
        .into_iter()
        .find(|tag| self.eat(tag.as_str().as_bytes()))
    }
}

fn to_number(digits: &[u8]) -> Option<u64> {
    digits.iter().try_fold(0u64, |acc, d| {
        acc.checked_mul(10)?.checked_add(u64::from(d - b'0'))
    })
}
