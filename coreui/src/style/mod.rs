//! Enumerated props and the tables that turn them into visual attributes.

/// Declare a prop enum with its canonical names.
///
/// Generates `ALL`, `KIND`, `name()`, strict `parse()`, lenient
/// `from_name()` (falls back to the default with a warning), plus
/// `Default`, `Display` and `FromStr`.
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $label:literal ),+ $(,)?
        }
        default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const KIND: &'static str = $kind;

            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn parse(value: &str) -> Result<Self, $crate::style::UnknownVariant> {
                match value.trim().to_ascii_lowercase().as_str() {
                    $($label => Ok($name::$variant),)+
                    _ => Err($crate::style::UnknownVariant::new($kind, value)),
                }
            }

            pub fn from_name(value: &str) -> Self {
                Self::parse(value).unwrap_or_else(|err| {
                    let fallback = Self::default();
                    log::warn!("{}, falling back to `{}`", err, fallback.name());
                    fallback
                })
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::style::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

pub(crate) use named_enum;

mod color;
mod props;

pub use color::ColorScheme;
pub use props::{PropDoc, UnknownVariant};
