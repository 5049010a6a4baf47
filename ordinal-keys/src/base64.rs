//! Base64 keyspace: unbounded fractional keys over a 64-digit alphabet.
//!
//! A key `d1 d2 ... dn` reads as the base-64 fraction `0.d1d2...dn`. The
//! alphabet is listed in ascending ASCII order, so comparing two keys as
//! strings gives the same answer as comparing the fractions they encode.
//!
//! Keys never end with the zero digit (`-`). Without that rule `k` and `k-`
//! would be distinct strings with no string between them, and the keyspace
//! could run out of room. With it, a strict midpoint always exists: at worst
//! the new key is one digit longer than the longer bound.

use crate::{KeyspaceKind, SortKeyProvider};
use ordinal_types::{Error, Result, SortKey};
use rand::Rng;
use tracing::trace;

/// The 64 digits in ascending order. A digit's value is its index.
pub const ALPHABET: &[u8; 64] = b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

const BASE: u16 = 64;

/// Maps an alphabet character to its digit value.
fn digit_value(c: u8) -> Option<u8> {
    match c {
        b'-' => Some(0),
        b'0'..=b'9' => Some(c - b'0' + 1),
        b'A'..=b'Z' => Some(c - b'A' + 11),
        b'_' => Some(37),
        b'a'..=b'z' => Some(c - b'a' + 38),
        _ => None,
    }
}

/// Provider for the Base64 keyspace.
///
/// With jitter enabled the new digit is drawn from the middle half of the
/// available gap instead of its exact centre, so two writers splitting the
/// same gap at once are unlikely to produce the same key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base64Keyspace {
    jitter: bool,
}

impl Base64Keyspace {
    /// Deterministic midpoints.
    #[must_use]
    pub const fn new() -> Self {
        Self { jitter: false }
    }

    /// Randomised midpoints.
    #[must_use]
    pub const fn with_jitter() -> Self {
        Self { jitter: true }
    }

    #[must_use]
    pub const fn jitter(&self) -> bool {
        self.jitter
    }

    /// Decodes a key into digit values, rejecting anything outside the keyspace.
    fn digits(key: &SortKey) -> Result<Vec<u8>> {
        let invalid = |reason: &str| Error::InvalidKey {
            key: key.clone(),
            reason: reason.to_owned(),
        };

        if key.is_empty() {
            return Err(invalid("key is empty"));
        }
        let digits = key
            .as_bytes()
            .iter()
            .map(|&c| digit_value(c))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| invalid("character outside the base64 alphabet"))?;
        if digits.last() == Some(&0) {
            return Err(invalid("key ends with the zero digit '-'"));
        }
        Ok(digits)
    }

    fn encode(digits: &[u8]) -> SortKey {
        let text: String = digits
            .iter()
            .map(|&d| char::from(ALPHABET[usize::from(d)]))
            .collect();
        SortKey::new(text)
    }

    /// Chooses a digit strictly between `lo` and `hi`, which differ by at least two.
    fn pick(&self, lo: u16, hi: u16) -> u8 {
        let digit = if self.jitter {
            let margin = ((hi - lo) / 4).max(1);
            rand::thread_rng().gen_range(lo + margin..=hi - margin)
        } else {
            (lo + hi) / 2
        };
        // Both bounds are at most BASE, so the digit fits.
        digit as u8
    }

    /// Computes digits strictly between `lower` and `upper`.
    ///
    /// `lower` may be empty (no floor); `upper` of `None` means no ceiling.
    /// Requires `lower < upper` and neither ending in a zero digit.
    fn midpoint(&self, mut lower: &[u8], mut upper: Option<&[u8]>) -> Vec<u8> {
        let mut out = Vec::with_capacity(lower.len().max(upper.map_or(0, <[u8]>::len)) + 1);

        loop {
            if let Some(up) = upper {
                // Shared prefix, reading a short lower bound as padded with zeros.
                let shared = up
                    .iter()
                    .enumerate()
                    .take_while(|&(i, &d)| lower.get(i).copied().unwrap_or(0) == d)
                    .count();
                out.extend_from_slice(&up[..shared]);
                lower = lower.get(shared..).unwrap_or(&[]);
                upper = Some(&up[shared..]);
            }

            let lo = lower.first().map_or(0, |&d| u16::from(d));
            let hi = upper
                .and_then(|up| up.first())
                .map_or(BASE, |&d| u16::from(d));

            if hi > lo + 1 {
                out.push(self.pick(lo, hi));
                return out;
            }

            match upper {
                // The upper key continues past this digit, so its first digit
                // alone already sorts below it and above `lower`.
                Some(up) if up.len() > 1 => {
                    out.push(up[0]);
                    return out;
                }
                _ => {
                    out.push(lo as u8);
                    lower = lower.get(1..).unwrap_or(&[]);
                    upper = None;
                }
            }
        }
    }
}

impl SortKeyProvider for Base64Keyspace {
    fn kind(&self) -> KeyspaceKind {
        KeyspaceKind::Base64
    }

    fn validate_key(&self, key: &SortKey) -> Result<()> {
        Self::digits(key).map(|_| ())
    }

    fn key_between(&self, lower: Option<&SortKey>, upper: Option<&SortKey>) -> Result<SortKey> {
        if let (Some(lower), Some(upper)) = (lower, upper) {
            if lower >= upper {
                return Err(Error::InvalidBounds {
                    lower: lower.clone(),
                    upper: upper.clone(),
                });
            }
        }

        let lower_digits = lower.map(Self::digits).transpose()?.unwrap_or_default();
        let upper_digits = upper.map(Self::digits).transpose()?;

        let key = Self::encode(&self.midpoint(&lower_digits, upper_digits.as_deref()));
        trace!(?lower, ?upper, %key, "base64 key generated");
        Ok(key)
    }
}
