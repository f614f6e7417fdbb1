//! Short glyph identifiers from official Unicode character names.
//!
//! Font sources name glyphs with short, conventionalized identifiers
//! rather than full Unicode character names: "LATIN CAPITAL LETTER A"
//! becomes `A-lat`, and "ARABIC LETTER ALEF WITH HAMZA ABOVE" becomes
//! `alefHamzaAbove-ar`. This crate implements that transformation as a
//! rule-based pipeline over the official name: tokenize, strip the
//! category and case-indicator words, resolve script-specific special
//! cases, and re-assemble the rest as a camelCase body with a short
//! script suffix.
//!
//! # Basic usage:
//!
//! ```
//! assert_eq!(glyphname::glyph_name_for(0x0152).unwrap(), "OE-lat");
//! assert_eq!(glyphname::glyph_name_for(0x0627).unwrap(), "alef-ar");
//!
//! // Codepoints with no entry in the character data are an error.
//! assert!(glyphname::glyph_name_for(0x0378).is_err());
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

mod casing;
pub mod error;
mod metadata;
mod namer;
mod special;
mod tables;

pub use error::Error;
pub use metadata::{CharRecord, UcdSource, UnicodeSource};
pub use namer::{glyph_name_for, GlyphNamer};
