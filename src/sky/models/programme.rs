use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    failable::decode_lossy,
    lenient::{from_object, lenient, required_node_type},
    Decode, DecodeError, Node, NodeType,
};

const PROGRAMME_TYPES: [NodeType; 2] = [NodeType::Programme, NodeType::Content];

/// A video format a programme is offered in.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoFormat {
    #[serde(rename = "SD", alias = "sd")]
    Sd,
    #[serde(rename = "HD", alias = "hd")]
    Hd,
    #[serde(rename = "UHD", alias = "uhd", alias = "4K", alias = "4k")]
    Uhd,
    #[serde(rename = "3D", alias = "3d")]
    ThreeD,
}

impl Decode for VideoFormat {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        VideoFormat::deserialize(value).map_err(|_| DecodeError::MissingField("format"))
    }
}

/// Detailed information about a single programme.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Programme {
    pub id: String,
    pub name: String,
    pub synopsis: String,
    /// The age rating, if any.
    pub certification: Option<String>,
    /// Review rating out of 100, 0 when unrated.
    pub rating: i32,
    pub formats: Vec<VideoFormat>,
}

#[derive(Deserialize)]
struct RawProgramme {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    programme_type: Option<String>,
    #[serde(rename = "nodetype", default, deserialize_with = "lenient")]
    node_type: Option<String>,
    #[serde(rename = "programmeuuid", default, deserialize_with = "lenient")]
    programme_uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    id: Option<String>,
    #[serde(rename = "t", default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(rename = "sy", default, deserialize_with = "lenient")]
    synopsis: Option<String>,
    #[serde(rename = "r", default, deserialize_with = "lenient")]
    certification: Option<String>,
    #[serde(rename = "reviewrating", default, deserialize_with = "lenient")]
    rating: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    formats: Option<Vec<Value>>,
}

impl Decode for Programme {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let raw: RawProgramme = from_object(value)?;
        // Programme info bodies tag themselves with `type`, catalogue
        // children may use `nodetype`.
        let tag = raw.programme_type.as_deref().or(raw.node_type.as_deref());
        required_node_type(tag, "type", &PROGRAMME_TYPES)?;

        Ok(Programme {
            id: raw
                .programme_uuid
                .or(raw.id)
                .ok_or(DecodeError::MissingField("programmeuuid"))?,
            name: raw.name.ok_or(DecodeError::MissingField("t"))?,
            synopsis: raw.synopsis.ok_or(DecodeError::MissingField("sy"))?,
            certification: raw.certification,
            rating: raw.rating.unwrap_or(0),
            formats: decode_lossy(&raw.formats.ok_or(DecodeError::MissingField("formats"))?),
        })
    }
}

impl Node for Programme {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}
