//! Static glyph-width tables for estimating rendered text width.
//!
//! Widths are in em units and cover printable ASCII (0x20..=0x7E, index
//! `c - 32`). Anything else falls back to the table's average width. One
//! table stands in for each broad family class; a CSS `font-family` list is
//! mapped to the first class it names.

// ────────────────────────────────────────────────────────────────────────────
// Font classes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontClass {
    Sans,
    Serif,
    Mono,
}

const MONO_HINTS: &[&str] = &["mono", "courier", "consolas", "menlo", "code"];
const SERIF_HINTS: &[&str] = &[
    "serif",
    "garamond",
    "georgia",
    "times",
    "playfair",
    "merriweather",
    "baskerville",
    "cambria",
    "palatino",
];
const SANS_HINTS: &[&str] = &[
    "sans", "inter", "helvetica", "arial", "roboto", "lato", "calibri", "verdana", "system-ui",
];

impl FontClass {
    /// Classifies a CSS `font-family` list by the first entry it recognises.
    /// Unrecognised lists measure as sans.
    pub fn from_css(family: &str) -> Self {
        family
            .split(',')
            .map(|name| {
                name.trim()
                    .trim_matches(|c| c == '"' || c == '\'')
                    .to_ascii_lowercase()
            })
            .find_map(|name| Self::classify(&name))
            .unwrap_or(FontClass::Sans)
    }

    fn classify(name: &str) -> Option<Self> {
        let has = |hints: &[&str]| hints.iter().any(|h| name.contains(h));
        // "sans-serif" contains "serif", so sans is checked first.
        if has(MONO_HINTS) {
            Some(FontClass::Mono)
        } else if has(SANS_HINTS) {
            Some(FontClass::Sans)
        } else if has(SERIF_HINTS) {
            Some(FontClass::Serif)
        } else {
            None
        }
    }

    pub fn metrics(self) -> &'static FontMetricTable {
        match self {
            FontClass::Sans => &SANS_TABLE,
            FontClass::Serif => &SERIF_TABLE,
            FontClass::Mono => &MONO_TABLE,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Bold glyphs run roughly this much wider than regular ones.
pub const BOLD_WIDTH_FACTOR: f64 = 1.05;

/// Character widths for one family class.
///
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    pub class: FontClass,
    widths: [f32; 95],
    /// Fallback for characters outside printable ASCII.
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Width of `s` in em units.
    pub fn measure_str(&self, s: &str) -> f64 {
        s.chars().map(|c| self.char_width(c)).sum()
    }

    fn char_width(&self, c: char) -> f64 {
        let code = c as usize;
        let w = if (32..=126).contains(&code) {
            self.widths[code - 32]
        } else {
            self.average_char_width
        };
        f64::from(w)
    }

    /// Width of `s` in px as set in `face`, letter spacing included.
    pub fn width_px(&self, s: &str, face: &Face) -> f64 {
        let chars = s.chars().count() as f64;
        let em = if face.uppercase {
            self.measure_str(&s.to_uppercase())
        } else {
            self.measure_str(s)
        };
        let weight = if face.bold { BOLD_WIDTH_FACTOR } else { 1.0 };
        em * face.size_px * weight + chars * face.letter_spacing_px
    }

    pub fn space_px(&self, face: &Face) -> f64 {
        f64::from(self.space_width) * face.size_px + face.letter_spacing_px
    }
}

/// Everything about the current text run that changes its width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub class: FontClass,
    pub size_px: f64,
    pub bold: bool,
    pub uppercase: bool,
    pub letter_spacing_px: f64,
}

impl Face {
    pub fn metrics(&self) -> &'static FontMetricTable {
        self.class.metrics()
    }

    pub fn width_px(&self, s: &str) -> f64 {
        self.metrics().width_px(s, self)
    }

    pub fn space_px(&self) -> f64 {
        self.metrics().space_px(self)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Inter, standing in for every sans family.
static SANS_TABLE: FontMetricTable = FontMetricTable {
    class: FontClass::Sans,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.52,
    space_width: 0.25,
};

/// EB Garamond, standing in for every serif family.
static SERIF_TABLE: FontMetricTable = FontMetricTable {
    class: FontClass::Serif,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.21, 0.26, 0.32, 0.48, 0.48, 0.76, 0.57, 0.19, 0.28, 0.28, 0.33, 0.50, 0.24, 0.28, 0.24, 0.26,
        // 0     1     2     3     4     5     6     7     8     9
        0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48,
        // :     ;     <     =     >     ?     @
        0.24, 0.24, 0.50, 0.50, 0.50, 0.43, 0.87,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.57, 0.52, 0.52, 0.57, 0.48, 0.43, 0.57, 0.57, 0.21, 0.33, 0.52, 0.45, 0.66,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.57, 0.61, 0.48, 0.61, 0.52, 0.43, 0.48, 0.57, 0.57, 0.76, 0.52, 0.52, 0.48,
        // [     \     ]     ^     _     `
        0.24, 0.26, 0.24, 0.40, 0.48, 0.29,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.48, 0.48, 0.43, 0.48, 0.48, 0.26, 0.48, 0.48, 0.19, 0.19, 0.45, 0.19, 0.71,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.48, 0.48, 0.48, 0.48, 0.28, 0.37, 0.33, 0.48, 0.43, 0.61, 0.43, 0.43, 0.37,
        // {     |     }     ~
        0.28, 0.22, 0.28, 0.50,
    ],
    average_char_width: 0.44,
    space_width: 0.21,
};

static MONO_TABLE: FontMetricTable = FontMetricTable {
    class: FontClass::Mono,
    widths: [0.60; 95],
    average_char_width: 0.60,
    space_width: 0.60,
};

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn face(class: FontClass) -> Face {
        Face {
            class,
            size_px: 10.0,
            bold: false,
            uppercase: false,
            letter_spacing_px: 0.0,
        }
    }

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(FontClass::Sans.metrics().measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        // R(0.61) + u(0.56) + s(0.44) + t(0.39)
        let width = FontClass::Sans.metrics().measure_str("Rust");
        assert!((width - 2.00).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = FontClass::Sans.metrics();
        let width = metrics.measure_str("é");
        assert!((width - f64::from(metrics.average_char_width)).abs() < 1e-6);
    }

    #[test]
    fn test_from_css_picks_first_recognised_family() {
        assert_eq!(FontClass::from_css("\"Inter\", sans-serif"), FontClass::Sans);
        assert_eq!(FontClass::from_css("\"Playfair Display\", serif"), FontClass::Serif);
        assert_eq!(FontClass::from_css("'JetBrains Mono', monospace"), FontClass::Mono);
        assert_eq!(FontClass::from_css("Georgia"), FontClass::Serif);
        assert_eq!(FontClass::from_css("Unknown Face, serif"), FontClass::Serif);
        assert_eq!(FontClass::from_css(""), FontClass::Sans);
        for class in [FontClass::Sans, FontClass::Serif, FontClass::Mono] {
            assert_eq!(class.metrics().class, class);
        }
    }

    #[test]
    fn test_width_px_scales_with_size_and_spacing() {
        let base = face(FontClass::Sans);
        let plain = base.width_px("Rust");
        assert!((plain - 20.0).abs() < 1e-2, "got {plain}");

        let doubled = Face { size_px: 20.0, ..base }.width_px("Rust");
        assert!((doubled - 2.0 * plain).abs() < 1e-6);

        let spaced = Face { letter_spacing_px: 1.0, ..base }.width_px("Rust");
        assert!((spaced - (plain + 4.0)).abs() < 1e-6);
    }

    #[test]
    fn test_bold_and_uppercase_run_wider() {
        let base = face(FontClass::Sans);
        assert!(Face { bold: true, ..base }.width_px("skills") > base.width_px("skills"));
        assert!(Face { uppercase: true, ..base }.width_px("skills") > base.width_px("skills"));
    }

    #[test]
    fn test_serif_narrower_than_sans_and_mono_uniform() {
        let text = "Architected distributed caching layer";
        assert!(face(FontClass::Serif).width_px(text) < face(FontClass::Sans).width_px(text));
        assert_eq!(face(FontClass::Mono).width_px("iiii"), face(FontClass::Mono).width_px("WWWW"));
    }
}
