//! Special-case naming rules.
//!
//! A few constructs do not follow the generic tokenize/drop/case pipeline.
//! Each rule is an independent trigger and rewrite over the token sequence;
//! the rules run in a fixed order, and at most one applies to any name.

use log::debug;

use crate::casing::CaseIndicator;
use crate::tables::{NamingTables, ScriptMatch};

/// Latin tokens naming a single ligature glyph, which keep the case of
/// every letter instead of the capitalize-first-letter rule.
///
/// This is an explicit allow-list: matching on token length instead pulls
/// in digraphs like DZ that are cased normally.
static LATIN_LIGATURES: &[&str] = &["AE", "OE", "IJ"];

/// The rules, in trigger order.
pub(crate) static RULES: &[SpecialCase] =
    &[SpecialCase::CuneiformCompound, SpecialCase::RunicAliases, SpecialCase::LatinLigature];

/// A naming construct handled outside the generic pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SpecialCase {
    /// Cuneiform compound operators: "A TIMES B" keeps only the tokens
    /// before the operator.
    CuneiformCompound,
    /// Runic names enumerate several historical aliases for one letter
    /// ("FEHU FEOH FE F"); the single-letter or shortest alias wins.
    RunicAliases,
    /// Latin ligatures (AE, OE, IJ) keep their case across every letter.
    LatinLigature,
}

/// What a matched rule did to the name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Resolution<'a> {
    /// The token sequence was narrowed; generic processing continues on
    /// the remainder.
    Narrowed(Vec<&'a str>),
    /// The leading word's casing is fixed verbatim; generic dropping still
    /// applies to the rest.
    FixedLead(String),
}

impl SpecialCase {
    /// Apply this rule to a script-stripped token sequence, if its trigger
    /// matches.
    pub(crate) fn try_apply<'a>(
        self,
        tokens: &[&'a str],
        script: Option<ScriptMatch>,
        indicator: CaseIndicator,
        tables: &NamingTables,
    ) -> Option<Resolution<'a>> {
        match self {
            SpecialCase::CuneiformCompound => {
                let at = tokens.iter().position(|t| *t == "TIMES")?;
                Some(Resolution::Narrowed(tokens[..at].to_vec()))
            }
            SpecialCase::RunicAliases => {
                if script?.name != "RUNIC" || tokens.len() < 2 {
                    return None;
                }
                let alias = tokens
                    .iter()
                    .copied()
                    .find(|t| t.len() == 1 && t.chars().all(|c| c.is_ascii_uppercase()))
                    .or_else(|| tokens.iter().copied().min_by_key(|t| t.len()))?;
                debug!("runic aliases {tokens:?} resolved to {alias:?}");
                Some(Resolution::Narrowed(vec![alias]))
            }
            SpecialCase::LatinLigature => {
                if script?.name != "LATIN" {
                    return None;
                }
                let lead = tokens.iter().copied().find(|t| !tables.is_dropped(t))?;
                if !LATIN_LIGATURES.contains(&lead) {
                    return None;
                }
                match indicator {
                    CaseIndicator::Capital => Some(Resolution::FixedLead(lead.to_string())),
                    CaseIndicator::Small => Some(Resolution::FixedLead(lead.to_lowercase())),
                    CaseIndicator::None => None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tables() -> NamingTables {
        NamingTables::new()
    }

    fn script_for(token: &str) -> Option<ScriptMatch> {
        tables().script_match(&[token])
    }

    #[test]
    fn cuneiform_truncates_at_times() {
        let resolved = SpecialCase::CuneiformCompound.try_apply(
            &["SIGN", "A", "TIMES", "A"],
            script_for("CUNEIFORM"),
            CaseIndicator::None,
            &tables(),
        );
        assert_eq!(resolved, Some(Resolution::Narrowed(vec!["SIGN", "A"])));
    }

    #[test]
    fn cuneiform_needs_the_operator() {
        let resolved = SpecialCase::CuneiformCompound.try_apply(
            &["SIGN", "A"],
            script_for("CUNEIFORM"),
            CaseIndicator::None,
            &tables(),
        );
        assert_eq!(resolved, None);
    }

    #[test]
    fn runic_prefers_single_letter_aliases() {
        let resolved = SpecialCase::RunicAliases.try_apply(
            &["LETTER", "FEHU", "FEOH", "FE", "F"],
            script_for("RUNIC"),
            CaseIndicator::None,
            &tables(),
        );
        assert_eq!(resolved, Some(Resolution::Narrowed(vec!["F"])));
    }

    #[test]
    fn runic_falls_back_to_shortest_alias() {
        let resolved = SpecialCase::RunicAliases.try_apply(
            &["LETTER", "THURISAZ", "THURS", "THORN"],
            script_for("RUNIC"),
            CaseIndicator::None,
            &tables(),
        );
        assert_eq!(resolved, Some(Resolution::Narrowed(vec!["THURS"])));
    }

    #[test]
    fn runic_is_runic_only() {
        let resolved = SpecialCase::RunicAliases.try_apply(
            &["LETTER", "FEHU", "FEOH", "FE", "F"],
            script_for("GOTHIC"),
            CaseIndicator::None,
            &tables(),
        );
        assert_eq!(resolved, None);
    }

    #[test]
    fn ligatures_keep_capital_case() {
        let resolved = SpecialCase::LatinLigature.try_apply(
            &["CAPITAL", "LIGATURE", "OE"],
            script_for("LATIN"),
            CaseIndicator::Capital,
            &tables(),
        );
        assert_eq!(resolved, Some(Resolution::FixedLead("OE".into())));
    }

    #[test]
    fn ligatures_keep_small_case() {
        let resolved = SpecialCase::LatinLigature.try_apply(
            &["SMALL", "LETTER", "AE"],
            script_for("LATIN"),
            CaseIndicator::Small,
            &tables(),
        );
        assert_eq!(resolved, Some(Resolution::FixedLead("ae".into())));
    }

    #[test]
    fn digraphs_are_not_ligatures() {
        let resolved = SpecialCase::LatinLigature.try_apply(
            &["CAPITAL", "LETTER", "DZ"],
            script_for("LATIN"),
            CaseIndicator::Capital,
            &tables(),
        );
        assert_eq!(resolved, None);
    }

    #[test]
    fn ligature_rule_is_latin_only() {
        let resolved = SpecialCase::LatinLigature.try_apply(
            &["CAPITAL", "LETTER", "OE"],
            script_for("CYRILLIC"),
            CaseIndicator::Capital,
            &tables(),
        );
        assert_eq!(resolved, None);
    }
}
