//! Typography tokens: font families, the base scales, and the composed
//! typography scale.
//!
//! The base scales ([`FontSize`], [`FontWeight`], [`LineHeight`],
//! [`LetterSpacing`]) map a key to a literal CSS value. [`TextStyle`] names a
//! complete text role whose [`TypographyStyle`] holds one key from each base
//! scale.
//!
//! ```rust
//! use svo_tokens::{FontSize, TextStyle};
//!
//! let body = TextStyle::BodyMd.style();
//! assert_eq!(body.font_size, FontSize::Base);
//! assert_eq!(body.font_size.value(), "1rem");
//! ```

use serde::ser::{SerializeMap, SerializeStruct, Serializer};
use serde::Serialize;

use crate::keys::{scale_token, token_keys};

// ============================================================================
// Font families
// ============================================================================

token_keys! {
    pub enum FontFamily("font family") {
        Sans => "sans",
        Mono => "mono",
    }
}

impl FontFamily {
    /// Fallback list for this family. The first installed font wins.
    pub fn stack(self) -> &'static [&'static str] {
        match self {
            FontFamily::Sans => FONT_FAMILIES.sans,
            FontFamily::Mono => FONT_FAMILIES.mono,
        }
    }
}

/// Ordered font fallback lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontFamilies {
    pub sans: &'static [&'static str],
    pub mono: &'static [&'static str],
}

pub static FONT_FAMILIES: FontFamilies = FontFamilies {
    sans: &[
        "ui-sans-serif",
        "system-ui",
        "sans-serif",
        "\"Apple Color Emoji\"",
        "\"Segoe UI Emoji\"",
        "\"Segoe UI Symbol\"",
        "\"Noto Color Emoji\"",
    ],
    mono: &[
        "ui-monospace",
        "SFMono-Regular",
        "\"Roboto Mono\"",
        "\"Liberation Mono\"",
        "Consolas",
        "monospace",
    ],
};

// ============================================================================
// Font sizes
// ============================================================================

token_keys! {
    pub enum FontSize("font size") {
        Xs => "xs",
        Sm => "sm",
        Base => "base",
        Lg => "lg",
        Xl => "xl",
        Xl2 => "2xl",
        Xl3 => "3xl",
        Xl4 => "4xl",
        Xl5 => "5xl",
        Xl6 => "6xl",
        Xl7 => "7xl",
        Xl8 => "8xl",
        Xl9 => "9xl",
    }
}

impl FontSize {
    /// Size in rem.
    pub const fn value(self) -> &'static str {
        match self {
            FontSize::Xs => "0.75rem",    // 12px
            FontSize::Sm => "0.875rem",   // 14px
            FontSize::Base => "1rem",     // 16px
            FontSize::Lg => "1.125rem",   // 18px
            FontSize::Xl => "1.25rem",    // 20px
            FontSize::Xl2 => "1.5rem",    // 24px
            FontSize::Xl3 => "1.875rem",  // 30px
            FontSize::Xl4 => "2.25rem",   // 36px
            FontSize::Xl5 => "3rem",      // 48px
            FontSize::Xl6 => "3.75rem",   // 60px
            FontSize::Xl7 => "4.5rem",    // 72px
            FontSize::Xl8 => "6rem",      // 96px
            FontSize::Xl9 => "8rem",      // 128px
        }
    }
}

scale_token!(FontSize);

// ============================================================================
// Font weights
// ============================================================================

token_keys! {
    pub enum FontWeight("font weight") {
        Thin => "thin",
        ExtraLight => "extralight",
        Light => "light",
        Normal => "normal",
        Medium => "medium",
        SemiBold => "semibold",
        Bold => "bold",
        ExtraBold => "extrabold",
        Black => "black",
    }
}

impl FontWeight {
    pub const fn value(self) -> &'static str {
        match self {
            FontWeight::Thin => "100",
            FontWeight::ExtraLight => "200",
            FontWeight::Light => "300",
            FontWeight::Normal => "400",
            FontWeight::Medium => "500",
            FontWeight::SemiBold => "600",
            FontWeight::Bold => "700",
            FontWeight::ExtraBold => "800",
            FontWeight::Black => "900",
        }
    }

    /// The weight as a number, e.g. `700` for [`FontWeight::Bold`].
    pub const fn numeric(self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
        }
    }
}

scale_token!(FontWeight);

// ============================================================================
// Line heights
// ============================================================================

token_keys! {
    /// Line heights: unitless multipliers by name, fixed rem heights by number.
    pub enum LineHeight("line height") {
        None => "none",
        Tight => "tight",
        Snug => "snug",
        Normal => "normal",
        Relaxed => "relaxed",
        Loose => "loose",
        L3 => "3",
        L4 => "4",
        L5 => "5",
        L6 => "6",
        L7 => "7",
        L8 => "8",
        L9 => "9",
        L10 => "10",
    }
}

impl LineHeight {
    pub const fn value(self) -> &'static str {
        match self {
            LineHeight::None => "1",
            LineHeight::Tight => "1.25",
            LineHeight::Snug => "1.375",
            LineHeight::Normal => "1.5",
            LineHeight::Relaxed => "1.625",
            LineHeight::Loose => "2",
            LineHeight::L3 => "0.75rem",
            LineHeight::L4 => "1rem",
            LineHeight::L5 => "1.25rem",
            LineHeight::L6 => "1.5rem",
            LineHeight::L7 => "1.75rem",
            LineHeight::L8 => "2rem",
            LineHeight::L9 => "2.25rem",
            LineHeight::L10 => "2.5rem",
        }
    }

    /// Whether the value is a multiplier of the font size rather than a
    /// fixed length.
    pub const fn is_relative(self) -> bool {
        matches!(
            self,
            LineHeight::None
                | LineHeight::Tight
                | LineHeight::Snug
                | LineHeight::Normal
                | LineHeight::Relaxed
                | LineHeight::Loose
        )
    }
}

scale_token!(LineHeight);

// ============================================================================
// Letter spacing
// ============================================================================

token_keys! {
    pub enum LetterSpacing("letter spacing") {
        Tighter => "tighter",
        Tight => "tight",
        Normal => "normal",
        Wide => "wide",
        Wider => "wider",
        Widest => "widest",
    }
}

impl LetterSpacing {
    pub const fn value(self) -> &'static str {
        match self {
            LetterSpacing::Tighter => "-0.05em",
            LetterSpacing::Tight => "-0.025em",
            LetterSpacing::Normal => "0em",
            LetterSpacing::Wide => "0.025em",
            LetterSpacing::Wider => "0.05em",
            LetterSpacing::Widest => "0.1em",
        }
    }
}

scale_token!(LetterSpacing);

// ============================================================================
// Typography scale
// ============================================================================

/// The four base tokens that make up one text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypographyStyle {
    pub font_size: FontSize,
    pub line_height: LineHeight,
    pub letter_spacing: LetterSpacing,
    pub font_weight: FontWeight,
}

impl TypographyStyle {
    pub const fn new(
        font_size: FontSize,
        line_height: LineHeight,
        letter_spacing: LetterSpacing,
        font_weight: FontWeight,
    ) -> Self {
        Self {
            font_size,
            line_height,
            letter_spacing,
            font_weight,
        }
    }
}

/// Serializes the resolved values, keyed the way stylesheets name them.
impl Serialize for TypographyStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TypographyStyle", 4)?;
        state.serialize_field("fontSize", self.font_size.value())?;
        state.serialize_field("lineHeight", self.line_height.value())?;
        state.serialize_field("letterSpacing", self.letter_spacing.value())?;
        state.serialize_field("fontWeight", self.font_weight.value())?;
        state.end()
    }
}

token_keys! {
    /// Named text role in the typography scale.
    pub enum TextStyle("typography style") {
        Display2xl => "display-2xl",
        DisplayXl => "display-xl",
        DisplayLg => "display-lg",
        DisplayMd => "display-md",
        DisplaySm => "display-sm",
        DisplayXs => "display-xs",
        HeadingXl => "heading-xl",
        HeadingLg => "heading-lg",
        HeadingMd => "heading-md",
        HeadingSm => "heading-sm",
        HeadingXs => "heading-xs",
        BodyXl => "body-xl",
        BodyLg => "body-lg",
        BodyMd => "body-md",
        BodySm => "body-sm",
        BodyXs => "body-xs",
        LabelXl => "label-xl",
        LabelLg => "label-lg",
        LabelMd => "label-md",
        LabelSm => "label-sm",
        LabelXs => "label-xs",
    }
}

impl TextStyle {
    /// The base tokens this style is composed of.
    #[rustfmt::skip]
    pub const fn style(self) -> TypographyStyle {
        use FontSize as Size;
        use FontWeight as Weight;
        use LetterSpacing as Spacing;
        use LineHeight as Line;

        match self {
            // Display
            TextStyle::Display2xl => TypographyStyle::new(Size::Xl8, Line::None, Spacing::Tighter, Weight::Bold),
            TextStyle::DisplayXl => TypographyStyle::new(Size::Xl7, Line::None, Spacing::Tighter, Weight::Bold),
            TextStyle::DisplayLg => TypographyStyle::new(Size::Xl6, Line::None, Spacing::Tighter, Weight::Bold),
            TextStyle::DisplayMd => TypographyStyle::new(Size::Xl5, Line::None, Spacing::Tight, Weight::Bold),
            TextStyle::DisplaySm => TypographyStyle::new(Size::Xl4, Line::Tight, Spacing::Tight, Weight::Bold),
            TextStyle::DisplayXs => TypographyStyle::new(Size::Xl3, Line::Tight, Spacing::Normal, Weight::Bold),

            // Heading
            TextStyle::HeadingXl => TypographyStyle::new(Size::Xl2, Line::Tight, Spacing::Normal, Weight::Bold),
            TextStyle::HeadingLg => TypographyStyle::new(Size::Xl, Line::Tight, Spacing::Normal, Weight::Bold),
            TextStyle::HeadingMd => TypographyStyle::new(Size::Lg, Line::Snug, Spacing::Normal, Weight::Bold),
            TextStyle::HeadingSm => TypographyStyle::new(Size::Base, Line::Snug, Spacing::Normal, Weight::Bold),
            TextStyle::HeadingXs => TypographyStyle::new(Size::Sm, Line::Snug, Spacing::Normal, Weight::Bold),

            // Body
            TextStyle::BodyXl => TypographyStyle::new(Size::Xl, Line::Relaxed, Spacing::Normal, Weight::Normal),
            TextStyle::BodyLg => TypographyStyle::new(Size::Lg, Line::Relaxed, Spacing::Normal, Weight::Normal),
            TextStyle::BodyMd => TypographyStyle::new(Size::Base, Line::Normal, Spacing::Normal, Weight::Normal),
            TextStyle::BodySm => TypographyStyle::new(Size::Sm, Line::Normal, Spacing::Normal, Weight::Normal),
            TextStyle::BodyXs => TypographyStyle::new(Size::Xs, Line::Normal, Spacing::Wide, Weight::Normal),

            // Label
            TextStyle::LabelXl => TypographyStyle::new(Size::Xl, Line::Normal, Spacing::Normal, Weight::Medium),
            TextStyle::LabelLg => TypographyStyle::new(Size::Lg, Line::Normal, Spacing::Normal, Weight::Medium),
            TextStyle::LabelMd => TypographyStyle::new(Size::Base, Line::Normal, Spacing::Normal, Weight::Medium),
            TextStyle::LabelSm => TypographyStyle::new(Size::Sm, Line::Normal, Spacing::Normal, Weight::Medium),
            TextStyle::LabelXs => TypographyStyle::new(Size::Xs, Line::Normal, Spacing::Wide, Weight::Medium),
        }
    }
}

/// The typography scale as a table, keyed by [`TextStyle`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypographyScale;

pub const TYPOGRAPHY_SCALE: TypographyScale = TypographyScale;

impl TypographyScale {
    pub const fn get(&self, style: TextStyle) -> TypographyStyle {
        style.style()
    }

    /// `(style, tokens)` pairs in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = (TextStyle, TypographyStyle)> {
        TextStyle::ALL.iter().map(|&style| (style, style.style()))
    }
}

impl Serialize for TypographyScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TextStyle::ALL.len()))?;
        for (style, tokens) in self.iter() {
            map.serialize_entry(style.key(), &tokens)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScaleToken;

    #[test]
    fn test_body_md_uses_base_size() {
        let body = TYPOGRAPHY_SCALE.get(TextStyle::BodyMd);
        assert_eq!(body.font_size, FontSize::Base);
        assert_eq!(body.font_size.value(), "1rem");
        assert_eq!(body.line_height.value(), "1.5");
        assert_eq!(body.font_weight.value(), "400");
    }

    #[test]
    fn test_display_2xl() {
        let display = TextStyle::Display2xl.style();
        assert_eq!(display.font_size.value(), "6rem");
        assert_eq!(display.line_height.value(), "1");
        assert_eq!(display.letter_spacing.value(), "-0.05em");
        assert_eq!(display.font_weight.value(), "700");
    }

    #[test]
    fn test_every_style_draws_from_base_scales() {
        for (style, tokens) in TYPOGRAPHY_SCALE.iter() {
            assert!(FontSize::ALL.contains(&tokens.font_size), "{}", style);
            assert!(LineHeight::ALL.contains(&tokens.line_height), "{}", style);
            assert!(LetterSpacing::ALL.contains(&tokens.letter_spacing), "{}", style);
            assert!(FontWeight::ALL.contains(&tokens.font_weight), "{}", style);
        }
        assert_eq!(TYPOGRAPHY_SCALE.iter().count(), 21);
    }

    #[test]
    fn test_label_styles_are_medium_weight() {
        for (style, tokens) in TYPOGRAPHY_SCALE.iter() {
            if style.key().starts_with("label-") {
                assert_eq!(tokens.font_weight, FontWeight::Medium, "{}", style);
            }
        }
    }

    #[test]
    fn test_font_families() {
        assert_eq!(FontFamily::Sans.stack().first(), Some(&"ui-sans-serif"));
        assert_eq!(FontFamily::Mono.stack().last(), Some(&"monospace"));
        assert_eq!(FontFamily::Sans.stack().len(), 7);
        assert_eq!(FontFamily::Mono.stack().len(), 6);
        assert_ne!(FontFamily::Sans.stack(), FontFamily::Mono.stack());
    }

    #[test]
    fn test_font_weight_numeric_matches_value() {
        for &weight in FontWeight::ALL {
            assert_eq!(weight.numeric().to_string(), weight.value());
        }
    }

    #[test]
    fn test_font_weight_numeric_named_weights() {
        assert_eq!(FontWeight::Thin.numeric(), 100);
        assert_eq!(FontWeight::Normal.numeric(), 400);
        assert_eq!(FontWeight::SemiBold.numeric(), 600);
        assert_eq!(FontWeight::Bold.numeric(), 700);
        assert_eq!(FontWeight::Black.numeric(), 900);
    }

    #[test]
    fn test_line_height_units() {
        for &line in LineHeight::ALL {
            assert_eq!(line.is_relative(), !line.value().ends_with("rem"), "{}", line);
        }
    }

    #[test]
    fn test_scale_entries_in_authoring_order() {
        let sizes: Vec<_> = FontSize::entries().map(|(key, _)| key).collect();
        assert_eq!(sizes.first(), Some(&"xs"));
        assert_eq!(sizes.last(), Some(&"9xl"));
        assert_eq!(sizes.len(), 13);

        let spacings: Vec<_> = LetterSpacing::entries().collect();
        assert_eq!(spacings[2], ("normal", "0em"));
    }

    #[test]
    fn test_keys_parse_back() {
        for &size in FontSize::ALL {
            assert_eq!(size.key().parse::<FontSize>().unwrap(), size);
        }
        for &style in TextStyle::ALL {
            assert_eq!(style.key().parse::<TextStyle>().unwrap(), style);
        }
        assert_eq!("10".parse::<LineHeight>().unwrap(), LineHeight::L10);
        assert!("heading-2xl".parse::<TextStyle>().is_err());
    }
}
