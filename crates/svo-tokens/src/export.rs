//! Serialized form of every token table.
//!
//! [`TokenTables`] bundles the tables under the names stylesheet tooling
//! expects (`colors`, `semanticColors`, `typographyScale`, ...). Semantic
//! colors and typography styles serialize as their resolved values.
//!
//! ```rust
//! let json: serde_json::Value = serde_json::from_str(&svo_tokens::to_json().unwrap()).unwrap();
//!
//! assert_eq!(json["colors"]["primary"]["600"], "hsl(210 100% 50%)");
//! assert_eq!(json["typographyScale"]["body-md"]["fontSize"], "1rem");
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::color::{Colors, COLORS};
use crate::error::TokenError;
use crate::keys::ScaleToken;
use crate::semantic::{SemanticColors, SEMANTIC_COLORS, SEMANTIC_COLORS_DARK};
use crate::typography::{
    FontFamilies, FontSize, FontWeight, LetterSpacing, LineHeight, TypographyScale,
    FONT_FAMILIES, TYPOGRAPHY_SCALE,
};

/// A flat scale serialized as a `key: value` map in authoring order.
pub struct Scale<T>(PhantomData<T>);

impl<T> Scale<T> {
    pub const fn new() -> Self {
        Scale(PhantomData)
    }
}

impl<T> Default for Scale<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Scale<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Scale<T> {}

impl<T> fmt::Debug for Scale<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scale")
    }
}

impl<T: ScaleToken> Serialize for Scale<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(T::all().len()))?;
        for (key, value) in T::entries() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Every token table, ready to serialize.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTables {
    pub colors: &'static Colors,
    pub semantic_colors: &'static SemanticColors,
    pub semantic_colors_dark: &'static SemanticColors,
    pub font_families: &'static FontFamilies,
    pub font_sizes: Scale<FontSize>,
    pub font_weights: Scale<FontWeight>,
    pub line_heights: Scale<LineHeight>,
    pub letter_spacings: Scale<LetterSpacing>,
    pub typography_scale: TypographyScale,
}

impl TokenTables {
    pub fn to_json(&self) -> Result<String, TokenError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, TokenError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> Result<String, TokenError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Default for TokenTables {
    fn default() -> Self {
        tables()
    }
}

/// The crate's token tables.
pub fn tables() -> TokenTables {
    TokenTables {
        colors: &COLORS,
        semantic_colors: &SEMANTIC_COLORS,
        semantic_colors_dark: &SEMANTIC_COLORS_DARK,
        font_families: &FONT_FAMILIES,
        font_sizes: Scale::new(),
        font_weights: Scale::new(),
        line_heights: Scale::new(),
        letter_spacings: Scale::new(),
        typography_scale: TYPOGRAPHY_SCALE,
    }
}

/// Serializes every table as compact JSON.
pub fn to_json() -> Result<String, TokenError> {
    tables().to_json()
}

/// Serializes every table as indented JSON.
pub fn to_json_pretty() -> Result<String, TokenError> {
    tables().to_json_pretty()
}

/// Serializes every table as YAML.
pub fn to_yaml() -> Result<String, TokenError> {
    tables().to_yaml()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn exported() -> Value {
        serde_json::to_value(tables()).unwrap()
    }

    #[test]
    fn test_top_level_keys() {
        let json = exported();
        let keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        for expected in [
            "colors",
            "semanticColors",
            "semanticColorsDark",
            "fontFamilies",
            "fontSizes",
            "fontWeights",
            "lineHeights",
            "letterSpacings",
            "typographyScale",
        ] {
            assert!(keys.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_semantic_colors_export_values() {
        let json = exported();
        assert_eq!(json["semanticColors"]["accent"]["primary"], "hsl(210 100% 50%)");
        assert_eq!(json["semanticColorsDark"]["background"]["primary"], "hsl(0 0% 6%)");
        assert!(json["semanticColors"]["border"].get("tertiary").is_none());
    }

    #[test]
    fn test_scales_export_values() {
        let json = exported();
        assert_eq!(json["fontSizes"]["2xl"], "1.5rem");
        assert_eq!(json["fontWeights"]["semibold"], "600");
        assert_eq!(json["lineHeights"]["10"], "2.5rem");
        assert_eq!(json["letterSpacings"]["tighter"], "-0.05em");
        assert_eq!(json["fontFamilies"]["mono"][0], "ui-monospace");
    }

    #[test]
    fn test_typography_export_has_four_fields() {
        let json = exported();
        let scale = json["typographyScale"].as_object().unwrap();
        assert_eq!(scale.len(), 21);
        for (name, style) in scale {
            let fields = style.as_object().unwrap();
            assert_eq!(fields.len(), 4, "{}", name);
            for field in ["fontSize", "lineHeight", "letterSpacing", "fontWeight"] {
                assert!(fields[field].is_string(), "{}.{}", name, field);
            }
        }
    }

    #[test]
    fn test_yaml_export() {
        let yaml = to_yaml().unwrap();
        assert!(yaml.contains("semanticColorsDark:"));
        assert!(yaml.contains("display-2xl:"));
    }

    #[test]
    fn test_pretty_json_matches_compact() {
        let compact: Value = serde_json::from_str(&to_json().unwrap()).unwrap();
        let pretty: Value = serde_json::from_str(&to_json_pretty().unwrap()).unwrap();
        assert_eq!(compact, pretty);
    }
}
