use serde::Serialize;
use serde_json::Value;

pub mod any_node;
pub mod catalogue;
pub mod error;
pub mod failable;
pub mod filter;
pub mod programme;
pub mod region;
pub mod search_result;
pub mod shelf;
pub mod shelf_item;
pub mod shelf_menu;

mod lenient;

pub use error::DecodeError;

/// The discriminator carried by every node in a catalogue payload.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Menu,
    Programme,
    Series,
    Content,
    Collection,
    Heading,
}

/// Whether a node type designates something with children or a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeFamily {
    Container,
    Leaf,
}

impl NodeType {
    pub const ALL: [NodeType; 6] = [
        NodeType::Menu,
        NodeType::Programme,
        NodeType::Series,
        NodeType::Content,
        NodeType::Collection,
        NodeType::Heading,
    ];

    /// Looks up a raw discriminator. Matching ignores case; the service sends
    /// upper case. Unknown values are not an error here, the decoder that
    /// receives them decides.
    pub fn parse(raw: &str) -> Option<NodeType> {
        NodeType::ALL
            .into_iter()
            .find(|node_type| node_type.as_str().eq_ignore_ascii_case(raw))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Menu => "MENU",
            NodeType::Programme => "PROGRAMME",
            NodeType::Series => "SERIES",
            NodeType::Content => "CONTENT",
            NodeType::Collection => "COLLECTION",
            NodeType::Heading => "HEADING",
        }
    }

    pub fn family(&self) -> NodeFamily {
        match self {
            NodeType::Menu | NodeType::Collection | NodeType::Heading => NodeFamily::Container,
            NodeType::Programme | NodeType::Series | NodeType::Content => NodeFamily::Leaf,
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait Node {
    /// The display name of the node.
    fn name(&self) -> &str;

    /// The node's id. Stable per entity and never shared by two entities.
    fn id(&self) -> &str;

    fn is_same_node<N: Node + ?Sized>(&self, other: &N) -> bool {
        self.id() == other.id()
    }
}

pub trait ParentNode: Node {
    type Child: Node;

    /// The node's children, in payload order.
    fn child_nodes(&self) -> &[Self::Child];
}

/// A decode strategy for one node shape.
///
/// Implementations check their discriminator before anything else so that a
/// sibling of another kind is rejected with [`DecodeError::InvalidType`].
pub trait Decode: Sized {
    fn decode(value: &Value) -> Result<Self, DecodeError>;
}
