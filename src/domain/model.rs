use serde::{Deserialize, Serialize};

/// One person in orbit, as reported by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstroRecord {
    pub name: String,
    pub craft: String,
}

/// Raw body of `astros.json`. `number` is taken as-is and never checked
/// against `people.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamPayload {
    pub number: u64,
    pub people: Vec<AstroRecord>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacecraftGroup {
    pub craft: String,
    pub crew: Vec<String>,
    pub icon: String,
}

impl SpacecraftGroup {
    pub fn new(craft: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            craft: craft.into(),
            crew: Vec::new(),
            icon: icon.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub number_of_people: u64,
    pub spacecrafts: Vec<SpacecraftGroup>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
