use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    failable::decode_aligned,
    lenient::{from_object, lenient, required_node_type},
    shelf::Shelf,
    shelf_item::ShelfItem,
    Decode, DecodeError, Node, NodeType, ParentNode,
};

/// The home screen: a list of shelves, each holding the items shown on it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfMenu {
    pub name: String,
    pub id: String,
    /// Shelves with at least one item, in payload order.
    pub child_nodes: Vec<Shelf>,
}

impl ShelfMenu {
    /// Builds a menu from a bare flat child list. The result has an empty
    /// name and id.
    pub fn from_flat(values: &[Value]) -> Self {
        ShelfMenu {
            name: String::new(),
            id: String::new(),
            child_nodes: group_shelves(values),
        }
    }
}

#[derive(Deserialize)]
struct RawShelfMenu {
    #[serde(rename = "nodetype", default, deserialize_with = "lenient")]
    node_type: Option<String>,
    #[serde(rename = "t", default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(rename = "cmsid", default, deserialize_with = "lenient")]
    id: Option<String>,
    #[serde(rename = "childnodes", default, deserialize_with = "lenient")]
    child_nodes: Option<Vec<Value>>,
}

impl Decode for ShelfMenu {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let raw: RawShelfMenu = from_object(value)?;
        required_node_type(raw.node_type.as_deref(), "nodetype", &[NodeType::Menu])?;

        Ok(ShelfMenu {
            name: raw.name.ok_or(DecodeError::MissingField("t"))?,
            id: raw.id.ok_or(DecodeError::MissingField("cmsid"))?,
            child_nodes: group_shelves(
                &raw.child_nodes
                    .ok_or(DecodeError::MissingField("childnodes"))?,
            ),
        })
    }
}

/// Rebuilds shelves from the service's flat child list, where a heading is
/// followed by the items that belong to it.
///
/// The list is decoded twice over the same positions, once as headings and
/// once as items. An item joins the most recent heading; entries that are
/// neither are skipped without closing the group. Items before the first
/// heading, and headings without items, are dropped.
pub(crate) fn group_shelves(values: &[Value]) -> Vec<Shelf> {
    let headings = decode_aligned::<Shelf>(values);
    let items = decode_aligned::<ShelfItem>(values);

    let mut shelves = Vec::new();
    let mut current: Option<Shelf> = None;

    for (heading, item) in headings.into_iter().zip(items) {
        match (heading, item) {
            (Some(heading), item) => {
                debug_assert!(item.is_none(), "entry decoded as both heading and item");
                if let Some(shelf) = current.replace(heading) {
                    push_non_empty(&mut shelves, shelf);
                }
            }
            (None, Some(item)) => {
                if let Some(shelf) = current.as_mut() {
                    shelf.items.push(item);
                }
            }
            (None, None) => {}
        }
    }

    if let Some(shelf) = current {
        push_non_empty(&mut shelves, shelf);
    }

    shelves
}

fn push_non_empty(shelves: &mut Vec<Shelf>, shelf: Shelf) {
    if !shelf.items.is_empty() {
        shelves.push(shelf);
    }
}

impl Node for ShelfMenu {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl ParentNode for ShelfMenu {
    type Child = Shelf;

    fn child_nodes(&self) -> &[Shelf] {
        &self.child_nodes
    }
}
