use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    failable::decode_lossy,
    lenient::{from_object, lenient},
    Decode, DecodeError, Node, ParentNode,
};

/// A choice used to narrow an on demand catalogue. Filters may have
/// sub-filters of their own.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub name: String,
    pub id: String,
    pub child_nodes: Vec<Filter>,
}

#[derive(Deserialize)]
struct RawFilter {
    #[serde(rename = "nodename", default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(rename = "nodeid", default, deserialize_with = "lenient")]
    id: Option<String>,
    /// Leaf filters have no children, or a placeholder that is not a list.
    #[serde(rename = "childnodes", default, deserialize_with = "lenient")]
    child_nodes: Option<Vec<Value>>,
}

impl Decode for Filter {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let raw: RawFilter = from_object(value)?;

        Ok(Filter {
            name: raw.name.ok_or(DecodeError::MissingField("nodename"))?,
            id: raw.id.ok_or(DecodeError::MissingField("nodeid"))?,
            child_nodes: raw
                .child_nodes
                .map(|values| decode_lossy(&values))
                .unwrap_or_default(),
        })
    }
}

impl Node for Filter {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl ParentNode for Filter {
    type Child = Filter;

    fn child_nodes(&self) -> &[Filter] {
        &self.child_nodes
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_sub_filters() {
        let value = json!({
            "nodename": "Football",
            "nodeid": "f-1",
            "childnodes": [
                { "nodename": "Premier League", "nodeid": "f-1-1" },
                { "nodeid": "nameless" },
                { "nodename": "Championship", "nodeid": "f-1-2", "childnodes": "none" }
            ]
        });
        let filter = Filter::decode(&value).unwrap();
        assert_eq!(filter.child_nodes.len(), 2);
        assert_eq!(filter.child_nodes[0].name, "Premier League");
        assert!(filter.child_nodes[1].child_nodes.is_empty());
    }

    #[test]
    fn test_same_node_by_id() {
        let a = Filter { name: "Action".into(), id: "f-1".into(), child_nodes: vec![] };
        let b = Filter { name: "Action & Adventure".into(), id: "f-1".into(), child_nodes: vec![] };
        assert!(a.is_same_node(&b));
        assert_ne!(a, b);
    }
}
