//! HSL color values and conversion for terminal output.

use std::fmt;
use std::str::FromStr;

use cssparser::{ParseError, Parser, ParserInput, Token};

use crate::error::TokenError;

/// A color in the `hsl(H S% L%)` form used by the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// Hue in degrees, `0..=360`.
    pub hue: u16,
    /// Saturation in percent, `0..=100`.
    pub saturation: u8,
    /// Lightness in percent, `0..=100`.
    pub lightness: u8,
}

impl Hsl {
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Converts to an sRGB triplet.
    ///
    /// # Example
    ///
    /// ```rust
    /// use svo_tokens::Hsl;
    ///
    /// assert_eq!(Hsl::new(210, 100, 50).to_rgb(), (0, 128, 255));
    /// ```
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let s = self.saturation as f32 / 100.0;
        let l = self.lightness as f32 / 100.0;
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = (self.hue % 360) as f32 / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, b) = match sector as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        (channel(r), channel(g), channel(b))
    }

    /// Nearest index in the ANSI 256-color palette.
    ///
    /// Unsaturated colors land on the grayscale ramp (`232..=255`, with the
    /// extremes at `16` and `231`), everything else in the 6x6x6 cube.
    pub fn to_ansi256(self) -> u8 {
        ansi256_index(self.to_rgb())
    }

    /// The color as a [`console::Color`] for terminal previews.
    pub fn to_console_color(self) -> console::Color {
        console::Color::Color256(self.to_ansi256())
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({} {}% {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Parses the space-separated CSS Color 4 form.
///
/// The function name is matched case-insensitively and the hue may carry a
/// `deg` unit. Values are normalized, so `Display` always prints the plain
/// `hsl(H S% L%)` form.
impl FromStr for Hsl {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut input = ParserInput::new(s);
        let mut parser = Parser::new(&mut input);
        parse_hsl(&mut parser).map_err(|_| TokenError::InvalidHsl(s.to_string()))
    }
}

fn parse_hsl<'i>(parser: &mut Parser<'i, '_>) -> Result<Hsl, ParseError<'i, ()>> {
    parser.expect_function_matching("hsl")?;
    let hsl = parser.parse_nested_block(|block| {
        let hue = parse_hue(block)?;
        let saturation = parse_percentage(block)?;
        let lightness = parse_percentage(block)?;
        block.expect_exhausted()?;
        Ok(Hsl::new(hue, saturation, lightness))
    })?;
    parser.expect_exhausted()?;
    Ok(hsl)
}

fn parse_hue<'i>(block: &mut Parser<'i, '_>) -> Result<u16, ParseError<'i, ()>> {
    let location = block.current_source_location();
    let degrees = match *block.next()? {
        Token::Number {
            int_value: Some(degrees),
            ..
        } => degrees,
        Token::Dimension {
            int_value: Some(degrees),
            ref unit,
            ..
        } if unit.eq_ignore_ascii_case("deg") => degrees,
        ref token => return Err(location.new_unexpected_token_error(token.clone())),
    };
    u16::try_from(degrees)
        .ok()
        .filter(|&hue| hue <= 360)
        .ok_or_else(|| location.new_custom_error(()))
}

fn parse_percentage<'i>(block: &mut Parser<'i, '_>) -> Result<u8, ParseError<'i, ()>> {
    let location = block.current_source_location();
    let percent = match *block.next()? {
        Token::Percentage {
            int_value: Some(percent),
            ..
        } => percent,
        ref token => return Err(location.new_unexpected_token_error(token.clone())),
    };
    u8::try_from(percent)
        .ok()
        .filter(|&percent| percent <= 100)
        .ok_or_else(|| location.new_custom_error(()))
}

fn ansi256_index((r, g, b): (u8, u8, u8)) -> u8 {
    let cube = |channel: u8| (u16::from(channel) * 5 / 255) as u8;
    if r != g || g != b {
        return 16 + 36 * cube(r) + 6 * cube(g) + cube(b);
    }
    match r {
        0..=7 => 16,
        249..=255 => 231,
        gray => 232 + ((u16::from(gray) - 8) * 24 / 247) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Palette, Step, COLORS};
    use proptest::prelude::*;

    fn token(value: &str) -> Hsl {
        value.parse().unwrap()
    }

    #[test]
    fn test_parse_palette_value() {
        assert_eq!(token("hsl(210 100% 50%)"), Hsl::new(210, 100, 50));
    }

    #[test]
    fn test_parse_follows_css_syntax() {
        let expected = Hsl::new(210, 100, 50);
        assert_eq!(token("HSL(210 100% 50%)"), expected);
        assert_eq!(token("Hsl(210 100% 50%)"), expected);
        assert_eq!(token("hsl(210deg 100% 50%)"), expected);
        assert_eq!(token("hsl(210DEG 100% 50%)"), expected);
        assert_eq!(token("  hsl( 210   100%  50% )  "), expected);
        assert_eq!(token("hsl(+210 +100% +50%)"), expected);
    }

    #[test]
    fn test_parse_normalizes_display() {
        assert_eq!(token("HSL(210deg 100% 50%)").to_string(), "hsl(210 100% 50%)");
        assert_eq!(token("hsl(+210 +100% +50%)").to_string(), "hsl(210 100% 50%)");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "",
            "hsl()",
            "hsl(210, 100%, 50%)",
            "hsl(210 100 50%)",
            "hsl(210 100% 50% 1)",
            "hsl(210 100% 50%) extra",
            "hsl(210rad 100% 50%)",
            "hsl(210.5 100% 50%)",
            "hsl(-10 100% 50%)",
            "hsl(361 100% 50%)",
            "hsl(210 101% 50%)",
            "hsla(210 100% 50%)",
            "rgb(0 0 0)",
        ] {
            assert!(
                matches!(input.parse::<Hsl>(), Err(TokenError::InvalidHsl(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_to_rgb_primaries() {
        assert_eq!(Hsl::new(0, 100, 50).to_rgb(), (255, 0, 0));
        assert_eq!(Hsl::new(120, 100, 50).to_rgb(), (0, 255, 0));
        assert_eq!(Hsl::new(240, 100, 50).to_rgb(), (0, 0, 255));
        assert_eq!(Hsl::new(360, 100, 50).to_rgb(), (255, 0, 0));
    }

    #[test]
    fn test_to_rgb_gray() {
        assert_eq!(token(&COLORS.gray[Step::S50]).to_rgb(), (250, 250, 250));
        assert_eq!(Hsl::new(0, 0, 0).to_rgb(), (0, 0, 0));
    }

    #[test]
    fn test_darkest_gray_lands_on_grayscale_ramp() {
        let index = token(&COLORS.gray[Step::S950]).to_ansi256();
        assert!((232..=255).contains(&index), "got {}", index);
    }

    #[test]
    fn test_lightest_gray_maps_to_white() {
        assert_eq!(token(&COLORS.gray[Step::S50]).to_ansi256(), 231);
    }

    #[test]
    fn test_brand_accent_cube_index() {
        // (0, 128, 255) -> cube (0, 2, 5)
        assert_eq!(token(&COLORS.primary[Step::S600]).to_ansi256(), 33);
    }

    #[test]
    fn test_gray_palette_stays_on_ramp() {
        for (step, value) in COLORS.gray.iter() {
            let index = token(value).to_ansi256();
            assert!(index == 231 || index >= 232, "gray {} -> {}", step, index);
        }
    }

    #[test]
    fn test_chromatic_palettes_stay_in_cube() {
        for (palette, scale) in COLORS.iter() {
            if palette == Palette::Gray {
                continue;
            }
            for (step, value) in scale.iter() {
                let index = token(value).to_ansi256();
                assert!(
                    (16..231).contains(&index),
                    "{} {} -> {}",
                    palette,
                    step,
                    index
                );
            }
        }
    }

    #[test]
    fn test_to_console_color() {
        assert_eq!(
            token(&COLORS.primary[Step::S600]).to_console_color(),
            console::Color::Color256(33)
        );
    }

    proptest! {
        #[test]
        fn display_parses_back(hue in 0u16..=360, saturation in 0u8..=100, lightness in 0u8..=100) {
            let hsl = Hsl::new(hue, saturation, lightness);
            prop_assert_eq!(hsl.to_string().parse::<Hsl>().unwrap(), hsl);
        }

        #[test]
        fn zero_and_full_lightness_ignore_hue(hue in 0u16..=360, saturation in 0u8..=100) {
            prop_assert_eq!(Hsl::new(hue, saturation, 0).to_rgb(), (0, 0, 0));
            prop_assert_eq!(Hsl::new(hue, saturation, 100).to_rgb(), (255, 255, 255));
        }
    }
}
