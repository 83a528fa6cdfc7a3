use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    lenient::{from_object, lenient, required_node_type},
    Decode, DecodeError, Node, NodeType,
};

pub(crate) const SHELF_ITEM_TYPES: [NodeType; 2] = [NodeType::Programme, NodeType::Series];

/// A selectable title on a home screen shelf.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfItem {
    pub name: String,
    /// The programme uuid or the series uuid, depending on `node_type`.
    pub id: String,
    pub node_type: NodeType,
    /// The channel the title belongs to.
    pub provider: String,
    pub synopsis: Option<String>,
}

#[derive(Deserialize)]
struct RawShelfItem {
    #[serde(rename = "nodetype", default, deserialize_with = "lenient")]
    node_type: Option<String>,
    #[serde(rename = "t", default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(rename = "programmeuuid", default, deserialize_with = "lenient")]
    programme_uuid: Option<String>,
    #[serde(rename = "seriesuuid", default, deserialize_with = "lenient")]
    series_uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    provider: Option<String>,
    #[serde(rename = "sy", default, deserialize_with = "lenient")]
    synopsis: Option<String>,
}

impl Decode for ShelfItem {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let raw: RawShelfItem = from_object(value)?;
        let node_type =
            required_node_type(raw.node_type.as_deref(), "nodetype", &SHELF_ITEM_TYPES)?;
        let name = raw.name.ok_or(DecodeError::MissingField("t"))?;

        let id = match node_type {
            NodeType::Series => raw.series_uuid.ok_or(DecodeError::MissingField("seriesuuid"))?,
            _ => raw
                .programme_uuid
                .ok_or(DecodeError::MissingField("programmeuuid"))?,
        };

        Ok(ShelfItem {
            name,
            id,
            node_type,
            provider: raw.provider.ok_or(DecodeError::MissingField("provider"))?,
            synopsis: raw.synopsis,
        })
    }
}

impl Node for ShelfItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_programme_id() {
        let value = json!({
            "nodetype": "PROGRAMME",
            "t": "Chernobyl",
            "programmeuuid": "p-1",
            "seriesuuid": "s-1",
            "provider": "Sky Atlantic",
            "sy": "Drama."
        });
        let item = ShelfItem::decode(&value).unwrap();
        assert_eq!(item.id, "p-1");
        assert_eq!(item.node_type, NodeType::Programme);
        assert_eq!(item.provider, "Sky Atlantic");
        assert_eq!(item.synopsis.as_deref(), Some("Drama."));
    }

    #[test]
    fn test_series_id_ignores_programme_uuid() {
        let value = json!({
            "nodetype": "series",
            "t": "Succession",
            "seriesuuid": "X",
            "programmeuuid": "Y",
            "provider": "HBO"
        });
        let item = ShelfItem::decode(&value).unwrap();
        assert_eq!(item.id, "X");
        assert_eq!(item.synopsis, None);
    }

    #[test]
    fn test_series_without_series_uuid_fails() {
        let value = json!({
            "nodetype": "SERIES",
            "t": "Succession",
            "programmeuuid": "Y",
            "provider": "HBO"
        });
        assert_eq!(
            ShelfItem::decode(&value),
            Err(DecodeError::MissingField("seriesuuid"))
        );
    }

    #[test]
    fn test_other_node_types_fail() {
        let value = json!({ "nodetype": "HEADING", "t": "Top Picks", "cmsid": "h-1" });
        assert!(matches!(
            ShelfItem::decode(&value),
            Err(DecodeError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_malformed_synopsis_is_dropped() {
        let value = json!({
            "nodetype": "PROGRAMME",
            "t": "Chernobyl",
            "programmeuuid": "p-1",
            "provider": "Sky Atlantic",
            "sy": 42
        });
        assert_eq!(ShelfItem::decode(&value).unwrap().synopsis, None);
    }

    #[test]
    fn test_title_of_wrong_type_is_missing() {
        let value = json!({ "nodetype": "PROGRAMME", "t": 7, "programmeuuid": "p-1", "provider": "Sky One" });
        assert_eq!(ShelfItem::decode(&value), Err(DecodeError::MissingField("t")));
    }

    #[test]
    fn test_missing_provider_fails() {
        let value = json!({ "nodetype": "PROGRAMME", "t": "Chernobyl", "programmeuuid": "p-1" });
        assert_eq!(
            ShelfItem::decode(&value),
            Err(DecodeError::MissingField("provider"))
        );
    }
}
