//! Base color palette.
//!
//! Six palettes of eleven steps each, from `50` (lightest) to `950` (darkest).
//! Values are CSS `hsl()` strings in the space-separated form.
//!
//! ```rust
//! use svo_tokens::{Palette, Step, COLORS};
//!
//! assert_eq!(&COLORS.primary[Step::S600], "hsl(210 100% 50%)");
//! assert_eq!(COLORS.scale(Palette::Gray).get(Step::S950), "hsl(0 0% 6%)");
//! ```

use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::keys::token_keys;

token_keys! {
    /// A step within a color scale.
    pub enum Step("color step") {
        S50 => "50",
        S100 => "100",
        S200 => "200",
        S300 => "300",
        S400 => "400",
        S500 => "500",
        S600 => "600",
        S700 => "700",
        S800 => "800",
        S900 => "900",
        S950 => "950",
    }
}

impl Step {
    /// Number of steps in every scale.
    pub const COUNT: usize = 11;

    /// The numeric step, e.g. `600` for [`Step::S600`].
    pub const fn number(self) -> u16 {
        match self {
            Step::S50 => 50,
            Step::S100 => 100,
            Step::S200 => 200,
            Step::S300 => 300,
            Step::S400 => 400,
            Step::S500 => 500,
            Step::S600 => 600,
            Step::S700 => 700,
            Step::S800 => 800,
            Step::S900 => 900,
            Step::S950 => 950,
        }
    }

    /// Looks up a step by its number.
    pub const fn from_number(number: u16) -> Option<Self> {
        match number {
            50 => Some(Step::S50),
            100 => Some(Step::S100),
            200 => Some(Step::S200),
            300 => Some(Step::S300),
            400 => Some(Step::S400),
            500 => Some(Step::S500),
            600 => Some(Step::S600),
            700 => Some(Step::S700),
            800 => Some(Step::S800),
            900 => Some(Step::S900),
            950 => Some(Step::S950),
            _ => None,
        }
    }
}

token_keys! {
    /// Name of a color palette.
    pub enum Palette("palette") {
        Gray => "gray",
        Primary => "primary",
        Success => "success",
        Warning => "warning",
        Error => "error",
        Info => "info",
    }
}

/// Eleven color values indexed by [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScale {
    values: [&'static str; Step::COUNT],
}

impl ColorScale {
    /// Creates a scale from values ordered `50, 100, ..., 900, 950`.
    pub const fn new(values: [&'static str; Step::COUNT]) -> Self {
        Self { values }
    }

    pub const fn get(&self, step: Step) -> &'static str {
        self.values[step as usize]
    }

    /// `(step, value)` pairs from lightest to darkest.
    pub fn iter(&self) -> impl Iterator<Item = (Step, &'static str)> + '_ {
        Step::ALL.iter().map(move |&step| (step, self.get(step)))
    }
}

impl Index<Step> for ColorScale {
    type Output = str;

    fn index(&self, step: Step) -> &str {
        self.get(step)
    }
}

impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Step::COUNT))?;
        for (step, value) in self.iter() {
            map.serialize_entry(step.key(), value)?;
        }
        map.end()
    }
}

/// The full base palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
    pub gray: ColorScale,
    pub primary: ColorScale,
    pub success: ColorScale,
    pub warning: ColorScale,
    pub error: ColorScale,
    pub info: ColorScale,
}

impl Colors {
    pub const fn scale(&self, palette: Palette) -> &ColorScale {
        match palette {
            Palette::Gray => &self.gray,
            Palette::Primary => &self.primary,
            Palette::Success => &self.success,
            Palette::Warning => &self.warning,
            Palette::Error => &self.error,
            Palette::Info => &self.info,
        }
    }

    /// Palettes in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = (Palette, &ColorScale)> + '_ {
        Palette::ALL
            .iter()
            .map(move |&palette| (palette, self.scale(palette)))
    }
}

impl Serialize for Colors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Palette::ALL.len()))?;
        for (palette, scale) in self.iter() {
            map.serialize_entry(palette.key(), scale)?;
        }
        map.end()
    }
}

pub const COLORS: Colors = Colors {
    gray: ColorScale::new([
        "hsl(0 0% 98%)",
        "hsl(0 0% 96%)",
        "hsl(0 0% 93%)",
        "hsl(0 0% 87%)",
        "hsl(0 0% 72%)",
        "hsl(0 0% 53%)",
        "hsl(0 0% 42%)",
        "hsl(0 0% 31%)",
        "hsl(0 0% 21%)",
        "hsl(0 0% 13%)",
        "hsl(0 0% 6%)",
    ]),

    // Brand
    primary: ColorScale::new([
        "hsl(210 100% 98%)",
        "hsl(210 100% 95%)",
        "hsl(210 100% 90%)",
        "hsl(210 100% 82%)",
        "hsl(210 100% 70%)",
        "hsl(210 100% 60%)",
        "hsl(210 100% 50%)",
        "hsl(210 100% 45%)",
        "hsl(210 100% 35%)",
        "hsl(210 100% 25%)",
        "hsl(210 100% 15%)",
    ]),

    // Status
    success: ColorScale::new([
        "hsl(120 60% 97%)",
        "hsl(120 60% 93%)",
        "hsl(120 60% 87%)",
        "hsl(120 60% 77%)",
        "hsl(120 60% 65%)",
        "hsl(120 60% 50%)",
        "hsl(120 60% 40%)",
        "hsl(120 60% 30%)",
        "hsl(120 60% 22%)",
        "hsl(120 60% 15%)",
        "hsl(120 60% 10%)",
    ]),
    warning: ColorScale::new([
        "hsl(45 100% 97%)",
        "hsl(45 100% 93%)",
        "hsl(45 100% 87%)",
        "hsl(45 100% 77%)",
        "hsl(45 100% 65%)",
        "hsl(45 100% 50%)",
        "hsl(45 100% 40%)",
        "hsl(45 100% 30%)",
        "hsl(45 100% 22%)",
        "hsl(45 100% 15%)",
        "hsl(45 100% 10%)",
    ]),
    error: ColorScale::new([
        "hsl(0 60% 97%)",
        "hsl(0 60% 93%)",
        "hsl(0 60% 87%)",
        "hsl(0 60% 77%)",
        "hsl(0 60% 65%)",
        "hsl(0 60% 50%)",
        "hsl(0 60% 40%)",
        "hsl(0 60% 30%)",
        "hsl(0 60% 22%)",
        "hsl(0 60% 15%)",
        "hsl(0 60% 10%)",
    ]),
    info: ColorScale::new([
        "hsl(200 100% 97%)",
        "hsl(200 100% 93%)",
        "hsl(200 100% 87%)",
        "hsl(200 100% 77%)",
        "hsl(200 100% 65%)",
        "hsl(200 100% 50%)",
        "hsl(200 100% 40%)",
        "hsl(200 100% 30%)",
        "hsl(200 100% 22%)",
        "hsl(200 100% 15%)",
        "hsl(200 100% 10%)",
    ]),
};
