use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

// clients post select-box values, so ids arrive as either 2 or "2"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LooseInt(pub i64);

impl<'de> Deserialize<'de> for LooseInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LooseIntVisitor)
    }
}

struct LooseIntVisitor;

impl Visitor<'_> for LooseIntVisitor {
    type Value = LooseInt;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer or a string holding an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(LooseInt(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(LooseInt)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.trim()
            .parse::<i64>()
            .map(LooseInt)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

/// `Option<i64>` field that also accepts numeric strings; `null` and a
/// missing field both give `None`.
pub fn deserialize_optional_loose_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LooseInt>::deserialize(deserializer)?.map(|v| v.0))
}
