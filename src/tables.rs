//! The static naming tables.
//!
//! Compiled once into an immutable [`NamingTables`] value at construction;
//! nothing mutates them afterwards.

use std::collections::HashSet;

use indexmap::IndexMap;

/// Script words as they appear in official Unicode names, paired with the
/// suffix appended to glyph identifiers of that script.
///
/// Authored order is the tie-break when a name mentions more than one
/// mapped word. Multi-word entries ("CAUCASIAN ALBANIAN") match as a
/// consecutive run of tokens and are tried before any single-word entry.
static SCRIPT_SUFFIXES: &[(&str, &str)] = &[
    // Major world scripts
    ("ARABIC", "-ar"),
    ("LATIN", "-lat"),
    ("GREEK", "-gr"),
    ("CYRILLIC", "-cyr"),
    ("HEBREW", "-heb"),
    ("ARMENIAN", "-arm"),
    // Indic scripts
    ("DEVANAGARI", "-dev"),
    ("BENGALI", "-ben"),
    ("GURMUKHI", "-gur"),
    ("GUJARATI", "-guj"),
    ("ORIYA", "-ori"),
    ("TAMIL", "-tam"),
    ("TELUGU", "-tel"),
    ("KANNADA", "-kan"),
    ("MALAYALAM", "-mal"),
    ("SINHALA", "-sin"),
    ("GRANTHA", "-gran"),
    ("BRAHMI", "-brah"),
    ("KAITHI", "-kthi"),
    ("SHARADA", "-shrd"),
    ("BHAIKSUKI", "-bhks"),
    ("KHUDAWADI", "-sind"),
    // Southeast Asian scripts
    ("THAI", "-th"),
    ("LAO", "-lao"),
    ("MYANMAR", "-mya"),
    ("KHMER", "-khm"),
    ("JAVANESE", "-java"),
    ("BALINESE", "-bali"),
    ("CHAM", "-cham"),
    // Tibetan and Himalayan scripts
    ("TIBETAN", "-tib"),
    ("LEPCHA", "-lepc"),
    ("LIMBU", "-limb"),
    // East Asian scripts
    ("HAN", "-han"),
    ("HANGUL", "-ko"),
    ("HIRAGANA", "-hira"),
    ("KATAKANA", "-kata"),
    ("BOPOMOFO", "-bop"),
    ("YI", "-yi"),
    // African scripts
    ("ETHIOPIC", "-eth"),
    ("VAI", "-vai"),
    ("BAMUM", "-bam"),
    ("ADLAM", "-adlm"),
    ("NKO", "-nko"),
    ("TIFINAGH", "-tfng"),
    ("OSMANYA", "-osma"),
    // American scripts
    ("CHEROKEE", "-chr"),
    ("CANADIAN", "-can"),
    ("DESERET", "-dsrt"),
    ("OSAGE", "-osge"),
    // Central Asian scripts
    ("MONGOLIAN", "-mon"),
    ("PHAGS-PA", "-phag"),
    // Historical scripts
    ("GEORGIAN", "-geo"),
    ("GLAGOLITIC", "-glag"),
    ("COPTIC", "-cop"),
    ("OGHAM", "-ogh"),
    ("RUNIC", "-ru"),
    ("GOTHIC", "-goth"),
    // Ancient scripts
    ("CUNEIFORM", "-xsux"),
    ("EGYPTIAN", "-egy"),
    ("ANATOLIAN", "-hluw"),
    ("LINEAR", "-lin"),
    ("CYPRIOT", "-cprt"),
    ("PHOENICIAN", "-phnx"),
    ("ARAMAIC", "-arc"),
    ("AVESTAN", "-avst"),
    ("UGARITIC", "-ugar"),
    // Other scripts
    ("DUPLOYAN", "-dupl"),
    ("MENDE", "-men"),
    ("MIAO", "-plrd"),
    ("SAURASHTRA", "-saur"),
    ("HENTAIGANA", "-hent"),
    ("MASARAM", "-gonm"),
    ("GUNJALA", "-gong"),
    ("CYPRO-MINOAN", "-cpmn"),
    ("TANGUT", "-tang"),
    ("NUSHU", "-nshu"),
    // Multi-word and umbrella entries
    ("CAUCASIAN ALBANIAN", "-aghb"),
    ("MRO", "-mroo"),
    // Covers Tai Le, Tai Tham, Tai Viet, etc.
    ("TAI", "-tai"),
    // Covers Old Italic, Old Persian, etc.
    ("OLD", "-old"),
];

/// Category and descriptive words removed wherever they occur.
static DROP_WORDS: &[&str] = &[
    // General categories
    "LETTER",
    "MARK",
    "NUMBER",
    "PUNCTUATION",
    "SYMBOL",
    "SEPARATOR",
    "DIGIT",
    "SIGN",
    "LIGATURE",
    "SYLLABLE",
    "RADICAL",
    "IDEOGRAPH",
    "CHARACTER",
    "ACCENT",
    // Hangul positional markers
    "CHOSEONG",
    "JUNGSEONG",
    "JONGSEONG",
    // Lao tone-variant marker (TAM stays, SUNG goes)
    "SUNG",
    // Cuneiform compound operator
    "TIMES",
];

/// Connecting words removed wherever they occur.
static CONNECTING_WORDS: &[&str] = &["WITH", "AND", "OR", "FOR", "TO", "OF", "THE"];

/// Case indicator words, dropped once the indicator has been read.
static CASE_WORDS: &[&str] = &["CAPITAL", "SMALL"];

/// A script word matched in a name, with its registered suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ScriptMatch {
    /// The matched table entry, e.g. "LATIN" or "CAUCASIAN ALBANIAN".
    pub(crate) name: &'static str,
    /// The suffix registered for the script, e.g. "-lat".
    pub(crate) suffix: &'static str,
}

impl ScriptMatch {
    /// The individual words of the matched script name.
    pub(crate) fn words(self) -> impl Iterator<Item = &'static str> {
        self.name.split(' ')
    }
}

/// The lookup tables driving the transformation.
#[derive(Debug)]
pub(crate) struct NamingTables {
    suffixes: IndexMap<&'static str, &'static str>,
    drop: HashSet<&'static str>,
}

impl NamingTables {
    pub(crate) fn new() -> Self {
        let suffixes = SCRIPT_SUFFIXES.iter().copied().collect();
        let drop = DROP_WORDS
            .iter()
            .chain(CONNECTING_WORDS)
            .chain(CASE_WORDS)
            .copied()
            .collect();
        NamingTables { suffixes, drop }
    }

    /// Find the script word (or consecutive word run) in a token sequence.
    ///
    /// A miss is not an error; the name degrades to its suffix-less form.
    pub(crate) fn script_match(&self, tokens: &[&str]) -> Option<ScriptMatch> {
        for (&name, &suffix) in &self.suffixes {
            if !name.contains(' ') {
                continue;
            }
            let words: Vec<&str> = name.split(' ').collect();
            if tokens.windows(words.len()).any(|run| run == words.as_slice()) {
                return Some(ScriptMatch { name, suffix });
            }
        }
        for (&name, &suffix) in &self.suffixes {
            if !name.contains(' ') && tokens.contains(&name) {
                return Some(ScriptMatch { name, suffix });
            }
        }
        None
    }

    /// True for tokens the generic pipeline removes: category words,
    /// script-structural words, connecting words, and case indicators.
    pub(crate) fn is_dropped(&self, token: &str) -> bool {
        self.drop.contains(token)
    }
}
