use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    lenient::{from_object, lenient, required_node_type},
    shelf_item::ShelfItem,
    Decode, DecodeError, Node, NodeType, ParentNode,
};

pub(crate) const SHELF_TYPES: [NodeType; 1] = [NodeType::Heading];

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfLayout {
    #[serde(rename = "CAROUSEL")]
    Carousel,
    #[serde(rename = "RAIL")]
    Rail,
}

/// The kind of rail, only meaningful when the layout is [`ShelfLayout::Rail`].
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RailTemplate {
    #[serde(rename = "3COL")]
    Background,
    #[serde(rename = "5COL")]
    Poster,
    #[default]
    #[serde(rename = "")]
    NotARail,
}

/// A titled group of items on the home screen.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Shelf {
    pub name: String,
    pub id: String,
    /// How the shelf should be displayed. Following it is optional.
    pub layout: ShelfLayout,
    pub template: RailTemplate,
    /// Filled in by [`ShelfMenu`](super::shelf_menu::ShelfMenu) from the
    /// items that follow the heading; a lone heading decodes with none.
    pub items: Vec<ShelfItem>,
}

#[derive(Deserialize)]
struct RawShelf {
    #[serde(rename = "nodetype", default, deserialize_with = "lenient")]
    node_type: Option<String>,
    #[serde(rename = "t", default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(rename = "cmsid", default, deserialize_with = "lenient")]
    id: Option<String>,
    #[serde(rename = "renderhints", default, deserialize_with = "lenient")]
    render_hints: Option<RenderHints>,
}

#[derive(Deserialize)]
struct RenderHints {
    #[serde(default, deserialize_with = "lenient")]
    layout: Option<ShelfLayout>,
    /// Unknown templates read as absent and fall back to `NotARail`.
    #[serde(default, deserialize_with = "lenient")]
    template: Option<RailTemplate>,
}

impl Decode for Shelf {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let raw: RawShelf = from_object(value)?;
        required_node_type(raw.node_type.as_deref(), "nodetype", &SHELF_TYPES)?;

        let name = raw.name.ok_or(DecodeError::MissingField("t"))?;
        let id = raw.id.ok_or(DecodeError::MissingField("cmsid"))?;
        let render_hints = raw
            .render_hints
            .ok_or(DecodeError::MissingField("renderhints"))?;

        Ok(Shelf {
            name,
            id,
            layout: render_hints
                .layout
                .ok_or(DecodeError::MissingField("layout"))?,
            template: render_hints.template.unwrap_or_default(),
            items: Vec::new(),
        })
    }
}

impl Node for Shelf {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl ParentNode for Shelf {
    type Child = ShelfItem;

    fn child_nodes(&self) -> &[ShelfItem] {
        &self.items
    }
}
