//! Key enums shared by every token table.
//!
//! Each table is addressed by a closed enum of keys. The [`token_keys!`] macro
//! generates the enum together with its authoring-order `ALL` list, its table
//! name (`key()`), and string conversions through [`FromStr`](std::str::FromStr),
//! [`Display`](std::fmt::Display) and serde.

/// A key of a flat token scale whose entries are literal strings.
///
/// Implemented by [`FontSize`](crate::FontSize), [`FontWeight`](crate::FontWeight),
/// [`LineHeight`](crate::LineHeight) and [`LetterSpacing`](crate::LetterSpacing).
pub trait ScaleToken: Copy + Sized + 'static {
    /// Every key in authoring order.
    fn all() -> &'static [Self];

    /// Name of the key as written in the table (`"2xl"`, `"semibold"`, `"10"`).
    fn key(self) -> &'static str;

    /// Literal value of the token (`"1.5rem"`, `"600"`, `"2.5rem"`).
    fn value(self) -> &'static str;

    /// `(key, value)` pairs in authoring order.
    fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
        Self::all().iter().map(|&token| (token.key(), token.value()))
    }
}

macro_rules! token_keys {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every key in authoring order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Name of this key as written in the token table.
            pub const fn key(self) -> &'static str {
                match self {
                    $( $name::$variant => $key, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.key())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::TokenError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $key => Ok($name::$variant), )+
                    _ => Err($crate::TokenError::unknown($kind, s)),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.key())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let name = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                name.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

macro_rules! scale_token {
    ($name:ident) => {
        impl $crate::keys::ScaleToken for $name {
            fn all() -> &'static [Self] {
                $name::ALL
            }

            fn key(self) -> &'static str {
                $name::key(self)
            }

            fn value(self) -> &'static str {
                $name::value(self)
            }
        }
    };
}

pub(crate) use scale_token;
pub(crate) use token_keys;
