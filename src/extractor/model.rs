use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Value of one infobox field. The shape follows the structure of the source
/// section, so one field can be `Scalar` on one page and `List` on another.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Absent,
    Scalar(String),
    List(Vec<String>),
    PairList(Vec<(String, String)>),
}

impl FieldValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

/// One character page, fully assembled. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub(crate) name: String,
    pub(crate) url: String,
    pub(crate) image: String,
    pub(crate) fields: Vec<(&'static str, FieldValue)>,
}

impl Character {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Infobox image URL, or [`NO_IMAGE`](super::assembler::NO_IMAGE).
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Value of a registered field; `None` only for unknown field names.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }

    /// Fields in registration order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for Character {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3 + self.fields.len()))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("url", &self.url)?;
        map.serialize_entry("image", &self.image)?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
