//! Client-supplied to-do fields

use serde::{de, Deserialize, Deserializer};

/// The mutable fields of a to-do item.
///
/// Shared by create and update. Update is a full replace: all three fields
/// are written on every call, and an omitted `done` means `false`.
/// `done` also accepts `0`/`1` and the usual yes/no strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TodoFields {
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub done: bool,
}

impl TodoFields {
    pub fn new(title: impl Into<String>, description: impl Into<String>, done: bool) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            done,
        }
    }
}

/// Wire forms accepted for a boolean field
#[derive(Deserialize)]
#[serde(untagged)]
enum BoolLike {
    Bool(bool),
    Int(i64),
    Str(String),
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match BoolLike::deserialize(deserializer)? {
        BoolLike::Bool(b) => Ok(b),
        BoolLike::Int(0) => Ok(false),
        BoolLike::Int(1) => Ok(true),
        BoolLike::Int(n) => Err(de::Error::custom(format!(
            "invalid boolean value: {}",
            n
        ))),
        BoolLike::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "on" | "1" => Ok(true),
            "false" | "f" | "no" | "n" | "off" | "0" => Ok(false),
            _ => Err(de::Error::custom(format!("invalid boolean value: '{}'", s))),
        },
    }
}
