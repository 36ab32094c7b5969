//! Heuristic domain validity filter.
//!
//! Strict rejection of non-domain look-alikes: UI placeholder words, file
//! names, CDN artifacts, glued layout text. All thresholds and word lists
//! come from [`FilterConfig`]; the defaults are the most permissive variant
//! (multi-label TLD support, 3-repeat threshold, explicit denylist).
//!
//! This is a plausibility filter, not RFC-1035 validation. It is expected to
//! reject some legitimate strings (the repeated-letter rule, the extension
//! list) and the knobs exist so callers can tune that trade-off.

use crate::config::FilterConfig;

/// Decide whether a normalized candidate is an acceptable domain.
///
/// The candidate is expected to be lowercase with a collapsed `*.` prefix and
/// no scheme/port/path remnants (the extractor guarantees this); anything
/// else falls out of the structural checks naturally.
pub fn is_valid_domain(candidate: &str, filter: &FilterConfig) -> bool {
    if candidate.is_empty()
        || candidate.len() < filter.min_len
        || candidate.len() > filter.max_len
        || !candidate.contains('.')
    {
        return false;
    }

    // Wildcard prefix must be exactly "*." when present.
    let base = match candidate.strip_prefix("*.") {
        Some(rest) => rest,
        None if candidate.contains('*') => return false,
        None => candidate,
    };
    if !base.contains('.') {
        return false;
    }

    let labels: Vec<&str> = base.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    for label in &labels {
        if !label_is_well_formed(label, filter.label_max) {
            return false;
        }
        if ends_in_repeated_letters(label, filter.repeat_threshold) {
            return false;
        }
    }

    let tld = labels[labels.len() - 1];
    if tld.len() < filter.tld_min
        || tld.len() > filter.tld_max
        || !tld.bytes().all(|b| b.is_ascii_lowercase())
    {
        return false;
    }

    if is_filename(tld, filter) || is_scheme_token(&labels, filter) {
        return false;
    }

    if hits_word_denylist(&labels, filter) || hits_suffix_denylist(base, filter) {
        return false;
    }

    if is_glued_tld(tld, filter) {
        return false;
    }

    true
}

/// Structural per-label rules: non-empty, bounded length, `[a-z0-9-]` only,
/// alphanumeric first char, no hyphen at either edge.
fn label_is_well_formed(label: &str, label_max: usize) -> bool {
    if label.is_empty() || label.len() > label_max {
        return false;
    }
    if !label.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-') {
        return false;
    }
    let first = label.as_bytes()[0];
    let last = label.as_bytes()[label.len() - 1];
    first != b'-' && last != b'-' && first.is_ascii_alphanumeric()
}

/// Placeholder heuristic: a label longer than 3 chars ending in `threshold`
/// or more repeated identical letters ("xxxx", "testtttt") is noise.
fn ends_in_repeated_letters(label: &str, threshold: usize) -> bool {
    if label.len() <= 3 {
        return false;
    }
    let bytes = label.as_bytes();
    let last = bytes[bytes.len() - 1];
    if !last.is_ascii_alphabetic() {
        return false;
    }
    let run = bytes.iter().rev().take_while(|&&b| b == last).count();
    run >= threshold
}

/// Final label is a known file extension: the "domain" is a filename.
fn is_filename(tld: &str, filter: &FilterConfig) -> bool {
    filter.extension_denylist.iter().any(|ext| ext == tld)
}

/// First label is a bare scheme token: scheme-shaped noise like
/// `chrome.extension` or `https.anything` left behind by stripped URLs.
fn is_scheme_token(labels: &[&str], filter: &FilterConfig) -> bool {
    filter.scheme_tokens.iter().any(|t| t == labels[0])
}

/// Every label is a denylisted placeholder/UI word ("dashboard.targets").
/// A single denylisted label inside a real domain is fine
/// ("dashboard.example.com").
fn hits_word_denylist(labels: &[&str], filter: &FilterConfig) -> bool {
    labels
        .iter()
        .all(|l| filter.denylist_words.iter().any(|w| w == l))
}

/// Brand / platform / CDN base domains, matched as registrable suffixes.
fn hits_suffix_denylist(base: &str, filter: &FilterConfig) -> bool {
    filter
        .denylist_suffixes
        .iter()
        .any(|s| base == s || base.ends_with(&format!(".{s}")))
}

/// Glued-suffix heuristic: a final label that extends a legacy TLD stem with
/// extra letters ("comquantum") is a concatenation artifact from layout text
/// run together, unless it is itself a known modern TLD ("community").
fn is_glued_tld(tld: &str, filter: &FilterConfig) -> bool {
    if filter.glued_tld_allow.iter().any(|a| a == tld) {
        return false;
    }
    filter
        .glued_tld_stems
        .iter()
        .any(|stem| tld.len() > stem.len() && tld.starts_with(stem.as_str()))
}
