//! Description assembly - one rule per recognized base type
//!
//! The rule table is a closed, hand-authored mapping; downstream catalog
//! tooling depends on the exact fragment order and omission rules, so
//! every branch is deliberate.

use image::RgbaImage;
use thiserror::Error;

use crate::color::{abbreviate, detect_color, COLOR_TOKENS};
use crate::models::{AtlasDocument, FrameRecord};
use crate::parser::{normalize_variant, parse_filename, BaseKind, ParsedName, Token};
use crate::sampler::{average_color, SampleError};

/// Frame sizes recognized among auxiliary tokens (meteor, turretbase).
const SIZE_TOKENS: &[&str] = &["big", "med", "small", "tiny", "long"];

/// Fallback labels keyed by raw base-key text. Unmapped keys pass
/// through as-is, with the lone `playership` -> `player ship` rewrite.
const BASE_LABELS: &[(&str, &str)] = &[
    ("beam", "beam"),
    ("beamlong", "long beam"),
    ("bold", "bold glyph"),
    ("bolt", "bolt pickup"),
    ("button", "ui button"),
    ("cockpit", "cockpit module"),
    ("cursor", "ui cursor"),
    ("enemy", "enemy fighter"),
    ("engine", "engine pod"),
    ("fire", "thruster flame"),
    ("gun", "gun icon"),
    ("laser", "laser bolt"),
    ("meteor", "meteor"),
    ("numeral", "digit"),
    ("pill", "pill powerup"),
    ("playerlife", "life icon"),
    ("playership", "player ship"),
    ("powerup", "powerup"),
    ("scratch", "hull scratch"),
    ("shield", "shield icon"),
    ("speed", "speed icon"),
    ("star", "star icon"),
    ("things", "badge icon"),
    ("turretbase", "turret base"),
    ("ufo", "ufo saucer"),
    ("wing", "wing segment"),
];

/// Error type for the annotation pass
#[derive(Debug, Error)]
pub enum DescribeError {
    /// Sampling failed for a frame; carries the offending frame's name
    #[error("frame '{frame}': {source}")]
    Sample {
        frame: String,
        #[source]
        source: SampleError,
    },
}

/// Build the description for one frame from its filename and its
/// sampled region of the atlas image.
pub fn describe_frame(
    filename: &str,
    record: &FrameRecord,
    image: &RgbaImage,
) -> Result<String, DescribeError> {
    let parsed = parse_filename(filename);
    let rgb = average_color(image, &record.frame).map_err(|source| DescribeError::Sample {
        frame: filename.to_string(),
        source,
    })?;
    let letters: Vec<&str> = parsed.tokens.iter().map(|t| t.letters.as_str()).collect();
    let color = abbreviate(&detect_color(&parsed.stem_lower, &letters, rgb));
    Ok(build_description(&parsed, &color))
}

/// Annotate every frame in the document, in document order.
///
/// Returns the number of frames described. The first sampling failure
/// aborts the pass; nothing is written to disk on that path because
/// saving only follows a fully successful pass.
pub fn annotate_document(
    document: &mut AtlasDocument,
    image: &RgbaImage,
) -> Result<usize, DescribeError> {
    let mut count = 0;
    for (filename, record) in document.frames.iter_mut() {
        let description = describe_frame(filename, record, image)?;
        record.description = Some(description);
        count += 1;
    }
    Ok(count)
}

/// Assemble the space-joined, empty-fragment-filtered description for a
/// parsed name and resolved color.
fn build_description(parsed: &ParsedName, color: &str) -> String {
    let variant = variant_fragment(&parsed.variant);

    let description = match parsed.kind {
        Some(BaseKind::Beam) => join(&[color, "beam", &variant]),
        Some(BaseKind::BeamLong) => join(&[color, "long beam", &variant]),
        Some(BaseKind::Bold) => format!("{color} bold glyph"),
        Some(BaseKind::Bolt) => format!("{color} bolt pickup"),
        Some(BaseKind::Button) => format!("{color} ui button"),
        Some(BaseKind::Cockpit) => join(&[color, "cockpit", &variant]),
        Some(BaseKind::Cursor) => format!("{color} ui cursor"),
        Some(BaseKind::Enemy) => join(&[color, "enemy fighter", &variant]),
        Some(BaseKind::Engine) => join(&[color, "engine pod", &variant]),
        Some(BaseKind::Fire) => join(&[color, "thruster flame", &variant]),
        Some(BaseKind::Gun) => join(&[color, "gun icon", &variant]),
        Some(BaseKind::Laser) => join(&[color, "laser bolt", &variant]),
        Some(BaseKind::Meteor) => {
            let size = first_size_token(&parsed.tokens);
            // The order number must ride on the size token itself;
            // otherwise the base variant stands in
            let order = parsed
                .tokens
                .iter()
                .find(|t| is_size(&t.letters) && !t.digits.is_empty())
                .map(|t| normalize_variant(&t.digits))
                .unwrap_or_else(|| parsed.variant.clone());
            join(&[color, size, "meteor", &variant_fragment(&order)])
        }
        Some(BaseKind::Numeral) => {
            let numeral = remainder_or_variant(parsed);
            format!("{color} digit {numeral}")
        }
        Some(BaseKind::Pill) => format!("{color} pill powerup"),
        Some(BaseKind::PlayerLife) => join(&[color, "life icon", &variant]),
        Some(BaseKind::PlayerShip) => {
            let damage = parsed
                .tokens
                .iter()
                .find(|t| t.letters == "damage")
                .map(|t| normalize_variant(&t.digits))
                .unwrap_or_default();
            let damage_tag = if damage.is_empty() {
                String::new()
            } else {
                format!("dmg{damage}")
            };
            join(&[color, "player ship", &variant, &damage_tag])
        }
        Some(BaseKind::Powerup) => {
            let flavor = parsed
                .tokens
                .iter()
                .find(|t| !t.letters.is_empty() && !is_color_word(&t.letters))
                .map(|t| t.letters.as_str())
                .unwrap_or("orb");
            format!("{color} {flavor} powerup")
        }
        Some(BaseKind::Scratch) => join(&[color, "hull scratch", &variant]),
        Some(BaseKind::Shield) => {
            let level = normalize_variant(&parsed.variant);
            join(&[color, "shield icon", &variant_fragment(&level)])
        }
        Some(BaseKind::Speed) => format!("{color} speed icon"),
        Some(BaseKind::Star) => {
            let suffix = remainder_or_variant(parsed);
            join(&[color, "star icon", &variant_fragment(&suffix)])
        }
        Some(BaseKind::Things) => {
            // Unlike powerup, an empty letter segment qualifies here and
            // then falls back to the badge label
            let flavor = if parsed.remainder.is_empty() {
                parsed
                    .tokens
                    .iter()
                    .find(|t| !is_color_word(&t.letters))
                    .map(|t| t.letters.clone())
                    .unwrap_or_default()
            } else {
                parsed.remainder.clone()
            };
            let label = if flavor.is_empty() {
                "badge"
            } else {
                flavor.as_str()
            };
            join(&[color, label, "icon"])
        }
        Some(BaseKind::TurretBase) => {
            let size = first_size_token(&parsed.tokens);
            join(&[color, size, "turret base"])
        }
        Some(BaseKind::Ufo) => format!("{color} ufo saucer"),
        Some(BaseKind::Wing) => join(&[color, "wing segment", &variant]),
        None => {
            let label = fallback_label(&parsed.key);
            join(&[color, label.trim(), &variant])
        }
    };

    description.trim().to_string()
}

fn join(fragments: &[&str]) -> String {
    fragments
        .iter()
        .filter(|f| !f.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn variant_fragment(variant: &str) -> String {
    if variant.is_empty() {
        String::new()
    } else {
        format!("v{variant}")
    }
}

/// Uppercased base remainder when present, else the base variant.
fn remainder_or_variant(parsed: &ParsedName) -> String {
    if parsed.remainder.is_empty() {
        parsed.variant.clone()
    } else {
        parsed.remainder.to_uppercase()
    }
}

fn first_size_token(tokens: &[Token]) -> &str {
    tokens
        .iter()
        .find(|t| is_size(&t.letters))
        .map(|t| t.letters.as_str())
        .unwrap_or("")
}

fn is_size(letters: &str) -> bool {
    SIZE_TOKENS.contains(&letters)
}

fn is_color_word(letters: &str) -> bool {
    COLOR_TOKENS.contains(&letters)
}

fn fallback_label(key: &str) -> String {
    BASE_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| key.replace("playership", "player ship"))
}
