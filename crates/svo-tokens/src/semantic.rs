//! Semantic color mappings for the light and dark themes.
//!
//! Every entry is a [`ColorRef`] into [`COLORS`], never a copied literal, so a
//! change to a palette step shows up in every role that points at it.
//!
//! ```rust
//! use svo_tokens::{Step, COLORS, SEMANTIC_COLORS, SEMANTIC_COLORS_DARK};
//!
//! assert_eq!(SEMANTIC_COLORS.accent.primary, COLORS.primary[Step::S600]);
//! assert_eq!(SEMANTIC_COLORS_DARK.accent.primary, COLORS.primary[Step::S500]);
//! ```

use serde::{Serialize, Serializer};

use crate::color::{Palette, Step, COLORS};
use crate::error::TokenError;
use crate::hsl::Hsl;
use crate::keys::token_keys;

/// A reference to one step of one palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorRef {
    pub palette: Palette,
    pub step: Step,
}

impl ColorRef {
    pub const fn new(palette: Palette, step: Step) -> Self {
        Self { palette, step }
    }

    pub const fn gray(step: Step) -> Self {
        Self::new(Palette::Gray, step)
    }

    pub const fn primary(step: Step) -> Self {
        Self::new(Palette::Primary, step)
    }

    /// The referenced color value.
    pub const fn value(self) -> &'static str {
        COLORS.scale(self.palette).get(self.step)
    }

    /// The referenced color, parsed.
    pub fn hsl(self) -> Result<Hsl, TokenError> {
        self.value().parse()
    }
}

impl std::fmt::Display for ColorRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

impl PartialEq<str> for ColorRef {
    fn eq(&self, other: &str) -> bool {
        self.value() == other
    }
}

impl PartialEq<&str> for ColorRef {
    fn eq(&self, other: &&str) -> bool {
        self.value() == *other
    }
}

impl Serialize for ColorRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

token_keys! {
    /// Top-level semantic color role.
    pub enum SemanticRole("semantic role") {
        Background => "background",
        Foreground => "foreground",
        Border => "border",
        Accent => "accent",
        Muted => "muted",
    }
}

token_keys! {
    /// Variant within a semantic role.
    pub enum SubRole("semantic sub-role") {
        Primary => "primary",
        Secondary => "secondary",
        Tertiary => "tertiary",
        Foreground => "foreground",
    }
}

impl SemanticRole {
    /// Sub-roles defined for this role, in authoring order.
    pub const fn sub_roles(self) -> &'static [SubRole] {
        match self {
            SemanticRole::Background | SemanticRole::Foreground => {
                &[SubRole::Primary, SubRole::Secondary, SubRole::Tertiary]
            }
            SemanticRole::Border => &[SubRole::Primary, SubRole::Secondary],
            SemanticRole::Accent => &[SubRole::Primary, SubRole::Secondary, SubRole::Foreground],
            SemanticRole::Muted => &[SubRole::Primary, SubRole::Foreground],
        }
    }
}

/// Three-level surface colors, used for backgrounds and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayerColors {
    pub primary: ColorRef,
    pub secondary: ColorRef,
    pub tertiary: ColorRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BorderColors {
    pub primary: ColorRef,
    pub secondary: ColorRef,
}

/// Accent fill colors plus the text color drawn on top of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccentColors {
    pub primary: ColorRef,
    pub secondary: ColorRef,
    pub foreground: ColorRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MutedColors {
    pub primary: ColorRef,
    pub foreground: ColorRef,
}

/// One theme's worth of role-based colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SemanticColors {
    pub background: LayerColors,
    pub foreground: LayerColors,
    pub border: BorderColors,
    pub accent: AccentColors,
    pub muted: MutedColors,
}

impl SemanticColors {
    /// Looks up a role/sub-role pair.
    ///
    /// Returns `None` for pairs that the role does not define, such as
    /// `border.tertiary`.
    pub const fn get(&self, role: SemanticRole, sub_role: SubRole) -> Option<ColorRef> {
        match (role, sub_role) {
            (SemanticRole::Background, SubRole::Primary) => Some(self.background.primary),
            (SemanticRole::Background, SubRole::Secondary) => Some(self.background.secondary),
            (SemanticRole::Background, SubRole::Tertiary) => Some(self.background.tertiary),
            (SemanticRole::Foreground, SubRole::Primary) => Some(self.foreground.primary),
            (SemanticRole::Foreground, SubRole::Secondary) => Some(self.foreground.secondary),
            (SemanticRole::Foreground, SubRole::Tertiary) => Some(self.foreground.tertiary),
            (SemanticRole::Border, SubRole::Primary) => Some(self.border.primary),
            (SemanticRole::Border, SubRole::Secondary) => Some(self.border.secondary),
            (SemanticRole::Accent, SubRole::Primary) => Some(self.accent.primary),
            (SemanticRole::Accent, SubRole::Secondary) => Some(self.accent.secondary),
            (SemanticRole::Accent, SubRole::Foreground) => Some(self.accent.foreground),
            (SemanticRole::Muted, SubRole::Primary) => Some(self.muted.primary),
            (SemanticRole::Muted, SubRole::Foreground) => Some(self.muted.foreground),
            _ => None,
        }
    }

    /// Every defined `(role, sub-role, color)` triple in authoring order.
    pub fn entries(&self) -> impl Iterator<Item = (SemanticRole, SubRole, ColorRef)> + '_ {
        SemanticRole::ALL.iter().flat_map(move |&role| {
            role.sub_roles()
                .iter()
                .filter_map(move |&sub_role| Some((role, sub_role, self.get(role, sub_role)?)))
        })
    }
}

/// Semantic colors for the light theme.
pub static SEMANTIC_COLORS: SemanticColors = SemanticColors {
    background: LayerColors {
        primary: ColorRef::gray(Step::S50),
        secondary: ColorRef::gray(Step::S100),
        tertiary: ColorRef::gray(Step::S200),
    },
    foreground: LayerColors {
        primary: ColorRef::gray(Step::S900),
        secondary: ColorRef::gray(Step::S700),
        tertiary: ColorRef::gray(Step::S500),
    },
    border: BorderColors {
        primary: ColorRef::gray(Step::S300),
        secondary: ColorRef::gray(Step::S200),
    },
    accent: AccentColors {
        primary: ColorRef::primary(Step::S600),
        secondary: ColorRef::primary(Step::S100),
        foreground: ColorRef::primary(Step::S50),
    },
    muted: MutedColors {
        primary: ColorRef::gray(Step::S100),
        foreground: ColorRef::gray(Step::S600),
    },
};

/// Semantic colors for the dark theme.
///
/// Authored independently of the light table rather than derived from it.
pub static SEMANTIC_COLORS_DARK: SemanticColors = SemanticColors {
    background: LayerColors {
        primary: ColorRef::gray(Step::S950),
        secondary: ColorRef::gray(Step::S900),
        tertiary: ColorRef::gray(Step::S800),
    },
    foreground: LayerColors {
        primary: ColorRef::gray(Step::S50),
        secondary: ColorRef::gray(Step::S300),
        tertiary: ColorRef::gray(Step::S500),
    },
    border: BorderColors {
        primary: ColorRef::gray(Step::S700),
        secondary: ColorRef::gray(Step::S800),
    },
    accent: AccentColors {
        primary: ColorRef::primary(Step::S500),
        secondary: ColorRef::primary(Step::S900),
        foreground: ColorRef::primary(Step::S50),
    },
    muted: MutedColors {
        primary: ColorRef::gray(Step::S800),
        foreground: ColorRef::gray(Step::S400),
    },
};
