//! # SVO-UI design tokens
//!
//! Named, immutable design values for the SVO-UI component system: color
//! palettes, light and dark semantic colors, font families, and a typography
//! scale built from base size, weight, line-height, and letter-spacing tokens.
//!
//! ## Tables
//!
//! | Table | Key | Value |
//! |-------|-----|-------|
//! | [`COLORS`] | [`Palette`] + [`Step`] | `hsl()` string |
//! | [`SEMANTIC_COLORS`], [`SEMANTIC_COLORS_DARK`] | role + sub-role | [`ColorRef`] |
//! | [`FONT_FAMILIES`] | [`FontFamily`] | ordered fallback list |
//! | [`FontSize`], [`FontWeight`], [`LineHeight`], [`LetterSpacing`] | the enum itself | CSS value |
//! | [`TYPOGRAPHY_SCALE`] | [`TextStyle`] | [`TypographyStyle`] |
//!
//! Keys are enums, so a lookup cannot name a token that does not exist.
//! Derived tables point at base tokens instead of repeating their values:
//!
//! ```rust
//! use svo_tokens::{FontSize, Step, TextStyle, COLORS, SEMANTIC_COLORS};
//!
//! assert_eq!(&COLORS.primary[Step::S600], "hsl(210 100% 50%)");
//! assert_eq!(SEMANTIC_COLORS.accent.primary, COLORS.primary[Step::S600]);
//! assert_eq!(TextStyle::BodyMd.style().font_size, FontSize::Base);
//! assert_eq!(FontSize::Base.value(), "1rem");
//! ```
//!
//! ## Color mode
//!
//! [`semantic_colors`] picks the light or dark table from the OS preference.
//! Use [`set_color_mode_detector`] to force a mode:
//!
//! ```rust
//! use svo_tokens::{semantic_colors, set_color_mode_detector, ColorMode, SEMANTIC_COLORS_DARK};
//!
//! set_color_mode_detector(|| ColorMode::Dark);
//! assert_eq!(semantic_colors(), &SEMANTIC_COLORS_DARK);
//! ```
//!
//! ## Names and export
//!
//! Every key parses from its table name (`"2xl".parse::<FontSize>()`), and
//! [`to_json`] / [`to_yaml`] serialize all tables for non-Rust tooling.

pub mod color;
pub mod error;
pub mod export;
pub mod hsl;
mod keys;
pub mod mode;
pub mod semantic;
pub mod typography;

pub use color::{ColorScale, Colors, Palette, Step, COLORS};
pub use error::TokenError;
pub use export::{tables, to_json, to_json_pretty, to_yaml, TokenTables};
pub use hsl::Hsl;
pub use keys::ScaleToken;
pub use mode::{detect_color_mode, semantic_colors, set_color_mode_detector, ColorMode};
pub use semantic::{
    AccentColors, BorderColors, ColorRef, LayerColors, MutedColors, SemanticColors,
    SemanticRole, SubRole, SEMANTIC_COLORS, SEMANTIC_COLORS_DARK,
};
pub use typography::{
    FontFamilies, FontFamily, FontSize, FontWeight, LetterSpacing, LineHeight, TextStyle,
    TypographyScale, TypographyStyle, FONT_FAMILIES, TYPOGRAPHY_SCALE,
};
