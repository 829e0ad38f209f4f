//! Declarative helper for lowercase string enums with an `Unknown` fallback.

/// Declare a string-backed wire enum.
///
/// Each listed variant maps to its wire literal. An extra `Unknown` variant
/// is appended, used as the `Default`, serialized as `"unknown"`, and chosen
/// for any unrecognized input.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
            /// Value not recognized by this client.
            #[default]
            #[serde(rename = "unknown")]
            #[serde(other)]
            Unknown,
        }

        impl $name {
            /// Wire representation of this value.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unknown => "unknown",
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
