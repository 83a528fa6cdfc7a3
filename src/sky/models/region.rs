use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    #[serde(rename = "HD")]
    Hd,
    #[serde(rename = "SD")]
    Sd,
}

/// A broadcast region. Catalogue contents differ between regions, so every
/// region-scoped request takes one explicitly.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Region {
    #[serde(rename = "n")]
    pub name: String,
    #[serde(rename = "t")]
    pub broadcast_quality: Quality,
    /// Area code.
    #[serde(rename = "b")]
    pub bouquet: i32,
    /// Sub-area code.
    #[serde(rename = "sb")]
    pub subbouquet: i32,
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.bouquet == other.bouquet
            && self.subbouquet == other.subbouquet
            && self.name == other.name
    }
}

impl Eq for Region {}
