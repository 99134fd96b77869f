//! Multi-regex scanning (the seven regex-kind registries).
//!
//! Both the fast and fallback paths extract matches the same way — by
//! walking every position a pattern could start at ("overlap between
//! triples is allowed and must be preserved", which plain `Regex::find_iter`
//! does not give us, since it only returns non-overlapping matches). The
//! fast path's only distinction is a `RegexSet` pre-filter that skips the
//! per-pattern walk for patterns known not to occur anywhere in the sequence.

use regex::Regex;

use super::Match;
use crate::registry::Pattern;

struct Compiled<'a> {
    pattern: &'a Pattern,
    regex: Regex,
}

fn compile_all(patterns: &[Pattern]) -> Vec<Compiled<'_>> {
    patterns
        .iter()
        .map(|pattern| Compiled {
            pattern,
            regex: Regex::new(&pattern.body).expect("registry patterns are validated at load time"),
        })
        .collect()
}

/// All positions at which `regex` matches, including matches that start
/// inside a previous match (overlap-preserving).
fn overlapping_matches(regex: &Regex, seq: &str) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut from = 0;
    while from <= seq.len() {
        match regex.find_at(seq, from) {
            Some(m) => {
                out.push((m.start(), m.end()));
                from = m.start() + 1;
            }
            None => break,
        }
    }
    out
}

#[cfg(feature = "fast-scan")]
pub fn scan_fast(patterns: &[Pattern], seq: &[u8]) -> Vec<Match> {
    use regex::RegexSet;

    let text = std::str::from_utf8(seq).expect("sequence is ASCII-validated upstream");
    let compiled = compile_all(patterns);
    let bodies: Vec<&str> = patterns.iter().map(|p| p.body.as_str()).collect();
    let set = RegexSet::new(&bodies).expect("registry patterns are validated at load time");
    let mut hit = vec![false; compiled.len()];
    for index in set.matches(text).into_iter() {
        hit[index] = true;
    }

    let mut matches = Vec::new();
    for (index, entry) in compiled.iter().enumerate() {
        if !hit.get(index).copied().unwrap_or(false) {
            continue;
        }
        for (start, end) in overlapping_matches(&entry.regex, text) {
            matches.push(Match {
                start,
                end,
                pattern_id: entry.pattern.id,
            });
        }
    }
    matches
}

/// Correct, unoptimized fallback: walk every pattern unconditionally, with
/// no `RegexSet` pre-filter.
pub fn scan_fallback(patterns: &[Pattern], seq: &[u8]) -> Vec<Match> {
    let text = std::str::from_utf8(seq).expect("sequence is ASCII-validated upstream");
    let compiled = compile_all(patterns);

    let mut matches = Vec::new();
    for entry in &compiled {
        for (start, end) in overlapping_matches(&entry.regex, text) {
            matches.push(Match {
                start,
                end,
                pattern_id: entry.pattern.id,
            });
        }
    }
    matches
}
