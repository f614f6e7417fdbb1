//! The name-transformation pipeline.
//!
//! A codepoint's official name is tokenized, its case indicator and script
//! word are located, special-case rules get a chance to rewrite the token
//! sequence, the category and indicator words are dropped, and whatever
//! remains is re-assembled as a camelCase body with the script's suffix.

use std::sync::LazyLock;

use log::debug;

use crate::casing::{self, CaseIndicator};
use crate::error::Error;
use crate::metadata::{CharRecord, UcdSource, UnicodeSource};
use crate::special::{Resolution, RULES};
use crate::tables::NamingTables;

static DEFAULT: LazyLock<GlyphNamer> = LazyLock::new(GlyphNamer::new);

/// Generate the glyph identifier for a codepoint, using the bundled
/// Unicode character data.
///
/// ```
/// assert_eq!(glyphname::glyph_name_for(0x0041).unwrap(), "A-lat");
/// assert_eq!(glyphname::glyph_name_for(0x0627).unwrap(), "alef-ar");
/// ```
pub fn glyph_name_for(codepoint: u32) -> Result<String, Error> {
    DEFAULT.glyph_name_for(codepoint)
}

/// Turns official Unicode character names into short glyph identifiers.
///
/// The namer owns the compiled naming tables and the [`UnicodeSource`] it
/// queries for character metadata; both are read-only once built, so a
/// namer can be shared freely between threads. The default source is
/// [`UcdSource`].
#[derive(Debug)]
pub struct GlyphNamer<S = UcdSource> {
    tables: NamingTables,
    source: S,
}

impl GlyphNamer {
    /// Create a namer over the bundled Unicode character data.
    pub fn new() -> Self {
        GlyphNamer::with_source(UcdSource)
    }
}

impl Default for GlyphNamer {
    fn default() -> Self {
        GlyphNamer::new()
    }
}

impl<S: UnicodeSource> GlyphNamer<S> {
    /// Create a namer over a caller-provided metadata source.
    pub fn with_source(source: S) -> Self {
        GlyphNamer { tables: NamingTables::new(), source }
    }

    /// Generate the glyph identifier for `codepoint`.
    ///
    /// Returns [`Error::NotFound`] when the metadata source has no entry
    /// for the codepoint. The same codepoint always produces the same
    /// name.
    pub fn glyph_name_for(&self, codepoint: u32) -> Result<String, Error> {
        let record = self.source.lookup(codepoint).ok_or(Error::NotFound(codepoint))?;
        Ok(self.name_for(&record))
    }

    /// Run the transformation over an already-fetched character record.
    pub fn name_for(&self, record: &CharRecord) -> String {
        let mut tokens: Vec<&str> = record.name.split_whitespace().collect();
        let indicator = CaseIndicator::detect(&tokens);
        let script = self.tables.script_match(&tokens);

        if let Some(script) = script {
            tokens.retain(|t| !script.words().any(|word| word == *t));
        }

        let mut lead_override = None;
        for rule in RULES {
            match rule.try_apply(&tokens, script, indicator, &self.tables) {
                Some(Resolution::Narrowed(narrowed)) => {
                    debug!("{rule:?} narrowed {:?} to {narrowed:?}", record.name);
                    tokens = narrowed;
                    break;
                }
                Some(Resolution::FixedLead(lead)) => {
                    debug!("{rule:?} fixed the casing of {lead:?}");
                    lead_override = Some(lead);
                    break;
                }
                None => {}
            }
        }

        // Combining marks with no script of their own name the mark first:
        // "COMBINING GRAVE ACCENT" becomes graveCombining.
        let combining = script.is_none() && tokens.contains(&"COMBINING");

        tokens.retain(|t| !self.tables.is_dropped(t) && !(combining && *t == "COMBINING"));

        if tokens.is_empty() {
            return format!("uni{:04X}", record.codepoint);
        }

        let mut body = match lead_override {
            Some(lead) => lead,
            None => casing::lead(tokens[0], indicator),
        };
        for token in &tokens[1..] {
            body.push_str(&casing::title(token));
        }
        if combining {
            body.push_str("Combining");
        }

        let suffix = script.map(|s| s.suffix).unwrap_or("");
        // Arabic tanween marks spell the nunation out: fathatan becomes
        // fathaTanween.
        if suffix == "-ar" {
            if let Some(stem) = body.strip_suffix("tan") {
                body = format!("{stem}Tanween");
            }
        }
        body.push_str(suffix);
        body
    }
}
