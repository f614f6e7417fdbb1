//! Unicode character metadata.
//!
//! The transformation engine is a pure consumer of this data: one record
//! is fetched per codepoint, read, and never mutated.

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_script::{Script, UnicodeScript};

/// The Unicode character data for one codepoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharRecord {
    /// The codepoint the record describes.
    pub codepoint: u32,
    /// The official Unicode character name, e.g. "ARABIC LETTER ALEF".
    pub name: String,
    /// The general category property value.
    pub category: GeneralCategory,
    /// The script property value.
    pub script: Script,
}

/// A source of Unicode character metadata, keyed by codepoint.
///
/// `None` means the codepoint has no entry. The engine reports that as
/// [`Error::NotFound`](crate::Error::NotFound) and never guesses a name.
pub trait UnicodeSource {
    /// Fetch the record for a codepoint, if the source has one.
    fn lookup(&self, codepoint: u32) -> Option<CharRecord>;
}

/// The bundled Unicode character database.
///
/// Surrogates, unassigned codepoints, and characters without an official
/// name (most control characters) have no record.
#[derive(Clone, Copy, Debug, Default)]
pub struct UcdSource;

impl UnicodeSource for UcdSource {
    fn lookup(&self, codepoint: u32) -> Option<CharRecord> {
        let chr = char::from_u32(codepoint)?;
        let name = unicode_names2::name(chr)?.to_string();
        Some(CharRecord {
            codepoint,
            name,
            category: get_general_category(chr),
            script: chr.script(),
        })
    }
}
