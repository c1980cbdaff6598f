//! Macros.

/// Implements serialization and deserialization with serde as a plain
/// string.
///
/// The type must have `as_str()`, and implement `TryFrom<String>` and
/// `FromStr` whose errors implement `Display`.
///
/// * `$ty`: the type.
/// * `$expecting`: `&'static str` describing the expected value.
macro_rules! impl_serde_str {
    ($ty:ident, $expecting:expr) => {
        #[cfg(feature = "serde")]
        const _: () = {
            use core::fmt;
            use core::str::FromStr;

            use alloc::string::String;

            use serde::de::{self, Visitor};
            use serde::{Deserialize, Deserializer, Serialize, Serializer};

            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.serialize_str(self.as_str())
                }
            }

            /// Owned string visitor.
            #[derive(Debug, Clone, Copy)]
            struct StringVisitor;

            impl<'de> Visitor<'de> for StringVisitor {
                type Value = $ty;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str($expecting)
                }

                fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    <$ty>::from_str(v).map_err(E::custom)
                }

                fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    <$ty>::try_from(v).map_err(E::custom)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    deserializer.deserialize_string(StringVisitor)
                }
            }
        };
    };
}
