//! Closed name catalogs.
//!
//! Values and emotions are fixed vocabularies with attached descriptions.
//! Both are generated by [`closed_catalog!`], which yields a `Copy` enum, a
//! total `description()` lookup, and a `FromStr` that fails with a typed
//! [`ValidationError`](crate::error::ValidationError) on a miss.

/// Normalizes a catalog name for comparison.
///
/// Case is ignored and spaces or hyphens count as underscores, so display
/// forms such as `"True Friendship"` match `"TRUE_FRIENDSHIP"`.
pub(crate) fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

/// Finds the catalog entry whose canonical name matches `raw`.
pub(crate) fn lookup<T: Copy>(all: &[T], name_of: impl Fn(&T) -> &'static str, raw: &str) -> Option<T> {
    let wanted = normalize(raw);
    if wanted.is_empty() {
        return None;
    }
    all.iter().copied().find(|item| normalize(name_of(item)) == wanted)
}

macro_rules! closed_catalog {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($unknown:ident) {
            $( $variant:ident => $canonical:literal, $desc:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        $vis enum $name {
            $(
                #[doc = $desc]
                $variant,
            )+
        }

        impl $name {
            /// Every entry of the catalog, in catalog order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Returns the canonical identifier.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $canonical,)+
                }
            }

            /// Returns the catalog description.
            #[must_use]
            pub const fn description(&self) -> &'static str {
                match self {
                    $(Self::$variant => $desc,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::catalog::lookup(Self::ALL, Self::as_str, s).ok_or_else(|| {
                    $crate::error::ValidationError::$unknown {
                        name: s.to_string(),
                    }
                })
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::error::ValidationError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

pub(crate) use closed_catalog;
