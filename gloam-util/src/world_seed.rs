use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Visitor};

use crate::random::get_seed;

/// A world seed. Numeric text is used as is, any other text is hashed and
/// blank text picks a random seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seed(pub i64);

/// The 31-multiplier string hash used for textual seeds.
pub fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |hash, c| hash.wrapping_mul(31).wrapping_add(c as i32))
}

impl Seed {
    pub fn random() -> Self {
        Seed(get_seed() as i64)
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Self::random();
        }
        Seed(
            trimmed
                .parse::<i64>()
                .unwrap_or_else(|_| string_hash(trimmed) as i64),
        )
    }
}

impl Serialize for Seed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SeedVisitor;

        impl Visitor<'_> for SeedVisitor {
            type Value = Seed;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a string seed")
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Seed(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Seed(v as i64))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Seed::from(v))
            }
        }

        deserializer.deserialize_any(SeedVisitor)
    }
}
