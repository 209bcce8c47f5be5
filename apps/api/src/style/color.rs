//! Hex colour arithmetic.
//!
//! Every sidebar tint, derived dark/light accent and text-on-colour choice in
//! the templates is computed here. Inputs are `#rgb` / `#rrggbb` (the `#` is
//! optional). Nothing here panics: invalid input comes back unchanged from
//! [`adjust_brightness`] and as white from [`contrast_color`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// YIQ perceived brightness, 0..=255.
    pub fn yiq(self) -> f64 {
        (299.0 * self.r as f64 + 587.0 * self.g as f64 + 114.0 * self.b as f64) / 1000.0
    }
}

/// Parses 3- or 6-digit hex, with or without a leading `#`.
pub fn parse_hex(input: &str) -> Option<Rgb> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Canonical lowercase `#rrggbb`, or `None` when the input is not a hex colour.
pub fn normalize_hex(input: &str) -> Option<String> {
    parse_hex(input).map(Rgb::to_hex)
}

/// Shifts each channel by `percent * 2.55`, clamped to 0..=255.
/// Negative percentages darken.
pub fn adjust_brightness(hex: &str, percent: f64) -> String {
    let Some(rgb) = parse_hex(hex) else {
        return hex.to_string();
    };
    if !percent.is_finite() {
        return hex.to_string();
    }
    let shift = |c: u8| (c as f64 + percent * 2.55).clamp(0.0, 255.0).round() as u8;
    Rgb {
        r: shift(rgb.r),
        g: shift(rgb.g),
        b: shift(rgb.b),
    }
    .to_hex()
}

/// Black or white, whichever reads better on `hex`.
pub fn contrast_color(hex: &str) -> &'static str {
    match parse_hex(hex) {
        Some(rgb) if rgb.yiq() >= 128.0 => "#000000",
        _ => "#ffffff",
    }
}

/// `#rrggbbaa` with the given alpha byte. Invalid input comes back unchanged.
pub fn with_alpha(hex: &str, alpha: u8) -> String {
    match parse_hex(hex) {
        Some(rgb) => format!("{}{alpha:02x}", rgb.to_hex()),
        None => hex.to_string(),
    }
}

/// Accent shift for text on a band: lighter when the band text is white,
/// darker when it is black.
pub fn contrast_shift(text_color: &str, lighter: f64, darker: f64) -> f64 {
    if text_color == "#ffffff" {
        lighter
    } else {
        darker
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrast_of_black_and_white() {
        assert_eq!(contrast_color("#000000"), "#ffffff");
        assert_eq!(contrast_color("#ffffff"), "#000000");
        assert_eq!(contrast_color("fff"), "#000000");
    }

    #[test]
    fn test_contrast_threshold_is_inclusive() {
        // yiq(#808080) = 128
        assert_eq!(contrast_color("#808080"), "#000000");
        assert_eq!(contrast_color("#7f7f7f"), "#ffffff");
    }

    #[test]
    fn test_contrast_invalid_defaults_to_white() {
        for bad in ["", "#", "#12", "#1234", "#gggggg", "red", "#1234567"] {
            assert_eq!(contrast_color(bad), "#ffffff", "input {bad:?}");
        }
    }

    #[test]
    fn test_adjust_zero_is_noop() {
        assert_eq!(adjust_brightness("#808080", 0.0), "#808080");
    }

    #[test]
    fn test_adjust_clamps_channels() {
        assert_eq!(adjust_brightness("#ffffff", 50.0), "#ffffff");
        assert_eq!(adjust_brightness("#000000", -50.0), "#000000");
        assert_eq!(adjust_brightness("#ff0000", 100.0), "#ffffff");
    }

    #[test]
    fn test_adjust_shifts_by_percent() {
        // 20% of 255 = 51
        assert_eq!(adjust_brightness("#646464", 20.0), "#979797");
        assert_eq!(adjust_brightness("#646464", -20.0), "#313131");
    }

    #[test]
    fn test_adjust_expands_shorthand() {
        assert_eq!(adjust_brightness("#abc", 0.0), "#aabbcc");
        assert_eq!(adjust_brightness("abc", 0.0), "#aabbcc");
    }

    #[test]
    fn test_adjust_invalid_returns_input() {
        for bad in ["", "not-a-colour", "#12345", "#zzzzzz"] {
            assert_eq!(adjust_brightness(bad, 30.0), bad);
        }
        assert_eq!(adjust_brightness("#808080", f64::NAN), "#808080");
    }

    #[test]
    fn test_with_alpha_appends_byte() {
        assert_eq!(with_alpha("#7c3aed", 0x15), "#7c3aed15");
        assert_eq!(with_alpha("#ABC", 0x20), "#aabbcc20");
        assert_eq!(with_alpha("nope", 0x20), "nope");
    }

    #[test]
    fn test_normalize_hex() {
        assert_eq!(normalize_hex("#7C3AED").as_deref(), Some("#7c3aed"));
        assert_eq!(normalize_hex("#7c3ae"), None);
    }
}
