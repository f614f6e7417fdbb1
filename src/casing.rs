//! Case indicator detection and the casing policy.

/// The case marking carried by an official Unicode name.
///
/// Names in bicameral scripts spell out "CAPITAL" or "SMALL"; caseless
/// scripts and symbol names carry neither.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CaseIndicator {
    Capital,
    Small,
    None,
}

impl CaseIndicator {
    /// Scan a token sequence for its case indicator word.
    ///
    /// Read before any tokens are removed; CAPITAL wins when a name
    /// carries both words ("LATIN LETTER SMALL CAPITAL A").
    pub(crate) fn detect(tokens: &[&str]) -> Self {
        if tokens.contains(&"CAPITAL") {
            CaseIndicator::Capital
        } else if tokens.contains(&"SMALL") {
            CaseIndicator::Small
        } else {
            CaseIndicator::None
        }
    }
}

/// Title-case a token: first letter upper, remainder lower.
///
/// Continuation words of a multi-part name are always title-cased so the
/// joined body reads as camelCase.
pub(crate) fn title(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(token.len());
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(|c| c.to_lowercase()));
            out
        }
        None => String::new(),
    }
}

/// Case the leading token of a name body according to its indicator.
///
/// A capital single letter is just the one-letter case of title-casing.
pub(crate) fn lead(token: &str, indicator: CaseIndicator) -> String {
    match indicator {
        CaseIndicator::Capital => title(token),
        CaseIndicator::Small | CaseIndicator::None => token.to_lowercase(),
    }
}
