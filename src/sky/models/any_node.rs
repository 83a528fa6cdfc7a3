use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    catalogue::Catalogue,
    lenient::{check_node_type, from_object, lenient},
    programme::Programme,
    shelf::Shelf,
    shelf_item::ShelfItem,
    shelf_menu::ShelfMenu,
    Decode, DecodeError, Node, NodeType,
};

/// Any node the service can send, selected by its discriminator.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum AnyNode {
    Menu(ShelfMenu),
    Shelf(Shelf),
    Item(ShelfItem),
    Programme(Programme),
    Collection(Catalogue<AnyNode>),
}

impl AnyNode {
    pub fn node_type(&self) -> NodeType {
        match self {
            AnyNode::Menu(_) => NodeType::Menu,
            AnyNode::Shelf(_) => NodeType::Heading,
            AnyNode::Item(item) => item.node_type,
            AnyNode::Programme(_) => NodeType::Content,
            AnyNode::Collection(_) => NodeType::Collection,
        }
    }
}

/// The two places a node can carry its discriminator.
#[derive(Deserialize)]
struct Tags {
    #[serde(rename = "nodetype", default, deserialize_with = "lenient")]
    node_type: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    programme_type: Option<String>,
}

impl Decode for AnyNode {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let tags: Tags = from_object(value)?;

        match (tags.node_type.as_deref(), tags.programme_type.as_deref()) {
            (Some(raw), _) => match check_node_type(raw, &NodeType::ALL)? {
                NodeType::Menu => ShelfMenu::decode(value).map(AnyNode::Menu),
                NodeType::Heading => Shelf::decode(value).map(AnyNode::Shelf),
                NodeType::Programme | NodeType::Series => {
                    ShelfItem::decode(value).map(AnyNode::Item)
                }
                NodeType::Content => Programme::decode(value).map(AnyNode::Programme),
                NodeType::Collection => Catalogue::decode(value).map(AnyNode::Collection),
            },
            // Only programme details are tagged with `type`.
            (None, Some(_)) => Programme::decode(value).map(AnyNode::Programme),
            (None, None) => Err(DecodeError::MissingField("nodetype")),
        }
    }
}

impl Node for AnyNode {
    fn name(&self) -> &str {
        match self {
            AnyNode::Menu(node) => node.name(),
            AnyNode::Shelf(node) => node.name(),
            AnyNode::Item(node) => node.name(),
            AnyNode::Programme(node) => node.name(),
            AnyNode::Collection(node) => node.name(),
        }
    }

    fn id(&self) -> &str {
        match self {
            AnyNode::Menu(node) => node.id(),
            AnyNode::Shelf(node) => node.id(),
            AnyNode::Item(node) => node.id(),
            AnyNode::Programme(node) => node.id(),
            AnyNode::Collection(node) => node.id(),
        }
    }
}
