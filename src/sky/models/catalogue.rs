use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    failable::decode_lossy,
    lenient::{check_node_type, from_object, lenient, required_node_type},
    Decode, DecodeError, Node, NodeType, ParentNode,
};

/// Node types a catalogue may declare for itself.
const CATALOGUE_TYPES: [NodeType; 2] = [NodeType::Menu, NodeType::Collection];

/// A named node whose children all share one type.
///
/// Catalogues nest: `Catalogue<Catalogue<Filter>>` is the on demand root
/// with one filter catalogue per section.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Catalogue<T> {
    pub name: String,
    pub id: String,
    /// A short description of the contents, if any.
    pub subtitle: Option<String>,
    /// Children that decoded as `T`, in payload order.
    pub child_nodes: Vec<T>,
    pub child_node_type: NodeType,
}

#[derive(Deserialize)]
struct RawCatalogue {
    #[serde(rename = "nodetype", default, deserialize_with = "lenient")]
    node_type: Option<String>,
    #[serde(rename = "nodename", default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(rename = "nodeid", default, deserialize_with = "lenient")]
    id: Option<String>,
    #[serde(rename = "sy", default, deserialize_with = "lenient")]
    subtitle: Option<String>,
    #[serde(rename = "childnodetype", default, deserialize_with = "lenient")]
    child_node_type: Option<String>,
    #[serde(rename = "childnodes", default, deserialize_with = "lenient")]
    child_nodes: Option<Vec<Value>>,
}

impl<T: Node + Decode> Decode for Catalogue<T> {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let raw: RawCatalogue = from_object(value)?;
        if let Some(node_type) = raw.node_type.as_deref() {
            check_node_type(node_type, &CATALOGUE_TYPES)?;
        }

        let name = raw.name.ok_or(DecodeError::MissingField("nodename"))?;
        let id = raw.id.ok_or(DecodeError::MissingField("nodeid"))?;
        let subtitle = raw.subtitle;
        let child_node_type =
            required_node_type(raw.child_node_type.as_deref(), "childnodetype", &NodeType::ALL)?;
        let child_nodes = decode_lossy(
            &raw.child_nodes
                .ok_or(DecodeError::MissingField("childnodes"))?,
        );

        Ok(Catalogue {
            name,
            id,
            subtitle,
            child_nodes,
            child_node_type,
        })
    }
}

impl<T> Node for Catalogue<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl<T: Node> ParentNode for Catalogue<T> {
    type Child = T;

    fn child_nodes(&self) -> &[T] {
        &self.child_nodes
    }
}
