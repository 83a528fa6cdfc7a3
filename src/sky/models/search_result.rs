use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    lenient::{from_object, lenient},
    Decode, DecodeError,
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Programme,
    Sport,
    Series,
    Person,
    Team,
    Competition,
}

impl SearchType {
    pub const ALL: [SearchType; 6] = [
        SearchType::Programme,
        SearchType::Sport,
        SearchType::Series,
        SearchType::Person,
        SearchType::Team,
        SearchType::Competition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Programme => "programme",
            SearchType::Sport => "sport",
            SearchType::Series => "series",
            SearchType::Person => "person",
            SearchType::Team => "team",
            SearchType::Competition => "competition",
        }
    }
}

impl FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchType::ALL
            .into_iter()
            .find(|search_type| search_type.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown search type `{}`", s))
    }
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a programme result is a film or a television programme.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ProgrammeType {
    Movie,
    #[serde(alias = "programme")]
    TvShow,
    #[default]
    NotAProgramme,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub name: String,
    pub id: String,
    pub search_type: SearchType,
    /// Only set when `search_type` is [`SearchType::Programme`].
    pub programme_type: ProgrammeType,
}

#[derive(Deserialize)]
struct RawSearchResult {
    #[serde(rename = "uuidtype", default, deserialize_with = "lenient")]
    search_type: Option<String>,
    #[serde(rename = "t", default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(rename = "uuid", default, deserialize_with = "lenient")]
    id: Option<String>,
    /// `movie` or `programme`; anything else is not a programme.
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    programme_type: Option<ProgrammeType>,
}

impl Decode for SearchResult {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let raw: RawSearchResult = from_object(value)?;

        let raw_type = raw
            .search_type
            .ok_or(DecodeError::MissingField("uuidtype"))?;
        let search_type = raw_type.parse::<SearchType>().map_err(|_| DecodeError::InvalidType {
            found: raw_type.clone(),
            expected: SearchType::ALL.map(|t| t.as_str()).join(", "),
        })?;

        Ok(SearchResult {
            name: raw.name.ok_or(DecodeError::MissingField("t"))?,
            id: raw.id.ok_or(DecodeError::MissingField("uuid"))?,
            search_type,
            programme_type: raw.programme_type.unwrap_or_default(),
        })
    }
}
