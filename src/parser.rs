//! Frame filename tokenization
//!
//! Frame names encode the asset type, e.g. `playership3_damage2.png`:
//! the first `_`-separated segment carries the base type (`playership`)
//! and a trailing variant number, later segments carry auxiliary tokens.

use std::sync::LazyLock;

use regex::Regex;

static TRAILING_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+$").unwrap());

/// Recognized primary asset types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseKind {
    Beam,
    BeamLong,
    Bold,
    Bolt,
    Button,
    Cockpit,
    Cursor,
    Enemy,
    Engine,
    Fire,
    Gun,
    Laser,
    Meteor,
    Numeral,
    Pill,
    PlayerLife,
    PlayerShip,
    Powerup,
    Scratch,
    Shield,
    Speed,
    Star,
    Things,
    TurretBase,
    Ufo,
    Wing,
}

/// Known base-type keys, longest first so prefix matching resolves
/// `beamlong` before `beam`.
const BASE_KEYS: &[(&str, BaseKind)] = &[
    ("playerlife", BaseKind::PlayerLife),
    ("playership", BaseKind::PlayerShip),
    ("turretbase", BaseKind::TurretBase),
    ("beamlong", BaseKind::BeamLong),
    ("cockpit", BaseKind::Cockpit),
    ("numeral", BaseKind::Numeral),
    ("powerup", BaseKind::Powerup),
    ("scratch", BaseKind::Scratch),
    ("button", BaseKind::Button),
    ("cursor", BaseKind::Cursor),
    ("engine", BaseKind::Engine),
    ("meteor", BaseKind::Meteor),
    ("shield", BaseKind::Shield),
    ("things", BaseKind::Things),
    ("enemy", BaseKind::Enemy),
    ("laser", BaseKind::Laser),
    ("speed", BaseKind::Speed),
    ("beam", BaseKind::Beam),
    ("bold", BaseKind::Bold),
    ("bolt", BaseKind::Bolt),
    ("fire", BaseKind::Fire),
    ("pill", BaseKind::Pill),
    ("star", BaseKind::Star),
    ("wing", BaseKind::Wing),
    ("gun", BaseKind::Gun),
    ("ufo", BaseKind::Ufo),
];

/// A filename segment split into its letter prefix and trailing digit
/// run. `letters` is lowercased; either half may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub letters: String,
    pub digits: String,
}

/// Everything the description builder needs from one frame filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Lowercased stem, scanned for lexical color words.
    pub stem_lower: String,
    /// Recognized base type, if the base segment starts with a known key.
    pub kind: Option<BaseKind>,
    /// The matched key, or the full lowercased base letters when unrecognized.
    pub key: String,
    /// Letters left over after the matched key, e.g. `big` in `meteorBig`.
    pub remainder: String,
    /// Normalized digit run from the base segment.
    pub variant: String,
    /// Auxiliary tokens: the base remainder (if any) followed by the
    /// later `_`-separated segments.
    pub tokens: Vec<Token>,
}

/// Split one segment into lowercased letters plus the trailing digit run.
pub fn split_token(part: &str) -> Token {
    match TRAILING_DIGITS.find(part) {
        Some(m) => Token {
            letters: part[..m.start()].to_lowercase(),
            digits: part[m.start()..].to_string(),
        },
        None => Token {
            letters: part.to_lowercase(),
            digits: String::new(),
        },
    }
}

/// Normalize a variant string: digit runs lose leading zeros (`007` ->
/// `7`), anything else is uppercased verbatim, empty stays empty.
pub fn normalize_variant(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match raw.parse::<u64>() {
        Ok(n) => n.to_string(),
        Err(_) => raw.to_uppercase(),
    }
}

/// Parse a frame filename (extension stripped, split on `_`) into its
/// base type, variant, and auxiliary tokens.
pub fn parse_filename(filename: &str) -> ParsedName {
    let stem = match filename.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => filename,
    };
    let stem_lower = stem.to_lowercase();

    let mut parts = stem.split('_');
    let base = parts.next().unwrap_or("");
    let Token { letters, digits } = split_token(base);
    let (kind, key, remainder) = match_base_key(&letters);

    let mut tokens = Vec::new();
    if !remainder.is_empty() {
        tokens.push(split_token(&remainder));
    }
    tokens.extend(parts.filter(|p| !p.is_empty()).map(split_token));

    ParsedName {
        stem_lower,
        kind,
        key,
        remainder,
        variant: normalize_variant(&digits),
        tokens,
    }
}

fn match_base_key(letters: &str) -> (Option<BaseKind>, String, String) {
    for (key, kind) in BASE_KEYS {
        if let Some(rest) = letters.strip_prefix(key) {
            return (Some(*kind), (*key).to_string(), rest.to_string());
        }
    }
    (None, letters.to_string(), String::new())
}
