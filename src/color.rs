//! Color classification
//!
//! Two-stage resolution: a color word found in the frame name wins over
//! the sampled pixel color, since artist naming is authoritative. The
//! perceptual stage buckets the averaged RGB by HSV thresholds into a
//! fixed vocabulary of display names.

/// Color words recognized in frame filenames, in match-priority order.
pub const COLOR_TOKENS: &[&str] = &[
    "bronze", "silver", "yellow", "orange", "purple", "green", "black", "white", "brown", "grey",
    "gray", "blue", "red", "teal", "gold",
];

/// Resolve the display color for a frame.
///
/// Scans the lowercased stem, then each token's letter segment, for a
/// known color word; falls back to classifying the sampled RGB.
pub fn detect_color(stem_lower: &str, token_letters: &[&str], rgb: (f64, f64, f64)) -> String {
    for token in COLOR_TOKENS {
        if stem_lower.contains(token) {
            return display_name(token);
        }
    }
    for letters in token_letters {
        for token in COLOR_TOKENS {
            if letters.contains(token) {
                return display_name(token);
            }
        }
    }
    classify_rgb(rgb)
}

/// Bucket an averaged RGB triple (channel means in 0-255) into a named
/// color via HSV thresholds.
pub fn classify_rgb((r, g, b): (f64, f64, f64)) -> String {
    if r == 0.0 && g == 0.0 && b == 0.0 {
        return "Black".to_string();
    }

    let (h, s, v) = rgb_to_hsv(r / 255.0, g / 255.0, b / 255.0);

    // Near-greyscale: bucket by brightness alone
    if s < 0.22 {
        let name = if v > 0.85 {
            "White"
        } else if v > 0.6 {
            "Light Grey"
        } else if v > 0.35 {
            "Grey"
        } else {
            "Dark Grey"
        };
        return name.to_string();
    }

    let hue = h * 360.0;
    let name = if hue < 20.0 || hue >= 340.0 {
        "Red"
    } else if hue < 40.0 {
        if v > 0.45 {
            "Orange"
        } else {
            "Brown"
        }
    } else if hue < 65.0 {
        "Yellow"
    } else if hue < 160.0 {
        "Green"
    } else if hue < 210.0 {
        "Cyan"
    } else if hue < 255.0 {
        "Blue"
    } else if hue < 310.0 {
        "Purple"
    } else {
        "Magenta"
    };
    name.to_string()
}

/// Shorten `Light `/`Dark ` prefixes for compact catalog labels.
pub fn abbreviate(color: &str) -> String {
    if let Some(rest) = color.strip_prefix("Light ") {
        return format!("Lt {rest}");
    }
    if let Some(rest) = color.strip_prefix("Dark ") {
        return format!("Dk {rest}");
    }
    color.to_string()
}

/// `gray` folds to `grey`, then the word is title-cased.
fn display_name(token: &str) -> String {
    title_case(&token.replace("gray", "grey"))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// RGB (0-1 per channel) to HSV with h in [0, 1).
fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let v = maxc;
    if maxc == minc {
        return (0.0, 0.0, v);
    }
    let s = (maxc - minc) / maxc;
    let rc = (maxc - r) / (maxc - minc);
    let gc = (maxc - g) / (maxc - minc);
    let bc = (maxc - b) / (maxc - minc);
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    ((h / 6.0).rem_euclid(1.0), s, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN_PIXELS: (f64, f64, f64) = (0.0, 255.0, 0.0);

    #[test]
    fn test_lexical_match_beats_pixels() {
        assert_eq!(detect_color("redlaser03", &[], GREEN_PIXELS), "Red");
    }

    #[test]
    fn test_lexical_match_order_is_vocabulary_order() {
        // "bronze" precedes "red" in the vocabulary even though "red"
        // appears earlier in the name
        assert_eq!(detect_color("red_bronze", &[], GREEN_PIXELS), "Bronze");
    }

    #[test]
    fn test_gray_spelling_normalized() {
        assert_eq!(detect_color("graybutton", &[], GREEN_PIXELS), "Grey");
    }

    #[test]
    fn test_token_letters_scanned_after_stem() {
        assert_eq!(detect_color("xyz", &["silvery"], GREEN_PIXELS), "Silver");
    }

    #[test]
    fn test_no_lexical_match_classifies_pixels() {
        assert_eq!(detect_color("wing2", &["damage"], GREEN_PIXELS), "Green");
    }

    #[test]
    fn test_pure_black() {
        assert_eq!(classify_rgb((0.0, 0.0, 0.0)), "Black");
    }

    #[test]
    fn test_greyscale_buckets() {
        assert_eq!(classify_rgb((250.0, 250.0, 250.0)), "White");
        assert_eq!(classify_rgb((160.0, 160.0, 160.0)), "Light Grey");
        assert_eq!(classify_rgb((128.0, 128.0, 128.0)), "Grey");
        assert_eq!(classify_rgb((60.0, 60.0, 60.0)), "Dark Grey");
    }

    #[test]
    fn test_hue_buckets() {
        assert_eq!(classify_rgb((255.0, 0.0, 0.0)), "Red");
        assert_eq!(classify_rgb((255.0, 128.0, 0.0)), "Orange");
        assert_eq!(classify_rgb((255.0, 255.0, 0.0)), "Yellow");
        assert_eq!(classify_rgb((0.0, 255.0, 0.0)), "Green");
        assert_eq!(classify_rgb((0.0, 255.0, 255.0)), "Cyan");
        assert_eq!(classify_rgb((0.0, 0.0, 255.0)), "Blue");
        assert_eq!(classify_rgb((150.0, 0.0, 255.0)), "Purple");
        assert_eq!(classify_rgb((255.0, 0.0, 153.0)), "Magenta");
    }

    #[test]
    fn test_dark_orange_is_brown() {
        // Same hue as orange, value below the 0.45 threshold
        assert_eq!(classify_rgb((100.0, 50.0, 0.0)), "Brown");
    }

    #[test]
    fn test_red_wraps_at_340() {
        // 350 degrees: back into the red bucket
        assert_eq!(classify_rgb((255.0, 0.0, 43.0)), "Red");
    }

    #[test]
    fn test_abbreviate() {
        assert_eq!(abbreviate("Light Grey"), "Lt Grey");
        assert_eq!(abbreviate("Dark Grey"), "Dk Grey");
        assert_eq!(abbreviate("Blue"), "Blue");
    }
}
