//! Month-Range Codec
//!
//! Bidirectional conversion between a set of month indices (0 = Jan,
//! 11 = Dec) and compact range tokens using three-letter abbreviations:
//! `"Apr"`, `"Mar-Jun"`, `"Nov-Feb"` (year wraparound).
//!
//! Both directions are stateless pure transformations. Neither raises
//! errors: decode silently skips unparseable tokens, encode of an empty
//! selection returns an empty list. This tolerant policy matches the
//! seed-calendar data source, which mixes hand-entered tokens of varying
//! quality.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Three-letter month abbreviations, index 0 = January.
pub const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Look up a month abbreviation (exact match, case-sensitive).
fn month_index(abbrev: &str) -> Option<u8> {
    MONTH_ABBREVS.iter().position(|&m| m == abbrev).map(|i| i as u8)
}

/// Decode range tokens into the full set of month indices they cover.
///
/// Each token is either a single abbreviation (`"Apr"`) or a hyphenated
/// pair (`"Mar-Jun"`). A pair whose start index exceeds its end index wraps
/// the year boundary: `"Nov-Feb"` covers {10, 11, 0, 1}.
///
/// Unrecognized tokens are skipped without error. Overlapping tokens
/// deduplicate naturally (set semantics).
pub fn decode_ranges<S: AsRef<str>>(tokens: &[S]) -> FxHashSet<u8> {
    let mut months: FxHashSet<u8> = FxHashSet::default();

    for token in tokens {
        let Some((start, end)) = parse_token(token.as_ref()) else {
            continue;
        };

        if start <= end {
            months.extend(start..=end);
        } else {
            // Wraparound: start through December, then January through end
            months.extend(start..=11);
            months.extend(0..=end);
        }
    }

    months
}

/// Parse one token into (start, end) indices; a single month yields
/// start == end. Returns None for anything that is not one or two known
/// abbreviations separated by a hyphen.
fn parse_token(token: &str) -> Option<(u8, u8)> {
    let mut parts = token.split('-');
    let start = month_index(parts.next()?.trim())?;
    let end = match parts.next() {
        Some(part) => month_index(part.trim())?,
        None => start,
    };
    if parts.next().is_some() {
        return None; // More than one hyphen
    }
    Some((start, end))
}

/// Encode a month selection as the minimal list of non-wrapping range
/// tokens.
///
/// Indices are sorted ascending and consecutive runs merged greedily: a run
/// of length 1 becomes a single abbreviation, length >= 2 becomes
/// `"{start}-{end}"`.
///
/// This encoder never emits a wrapping token: {11, 0, 1} encodes as
/// `["Jan-Feb", "Dec"]`, not `["Dec-Feb"]`. The asymmetry with
/// [`decode_ranges`] is deliberate and preserved from the original
/// calendar behaviour; a round trip reproduces the month SET but not
/// necessarily the token list. Indices outside 0..=11 are ignored.
pub fn encode_ranges(months: &FxHashSet<u8>) -> Vec<String> {
    let mut sorted: Vec<u8> = months.iter().copied().filter(|&m| m < 12).collect();
    sorted.sort_unstable();

    let mut runs: SmallVec<[(u8, u8); 6]> = SmallVec::new();
    for &month in &sorted {
        match runs.last_mut() {
            Some((_, end)) if month == *end + 1 => *end = month,
            _ => runs.push((month, month)),
        }
    }

    runs.iter()
        .map(|&(start, end)| {
            if start == end {
                MONTH_ABBREVS[start as usize].to_string()
            } else {
                format!("{}-{}", MONTH_ABBREVS[start as usize], MONTH_ABBREVS[end as usize])
            }
        })
        .collect()
}
