//! Entry points from raw response bytes to typed nodes.
//!
//! Failures of individual children are absorbed by the node decoders; only
//! a failure of the outer payload reaches the caller.

use std::collections::BTreeMap;

use serde_json::Value;

use super::models::{
    catalogue::Catalogue, failable::decode_lossy_value, region::Region, shelf_menu::ShelfMenu,
    Decode, DecodeError, Node,
};

fn parse(bytes: &[u8]) -> Result<Value, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// A single node.
pub fn node<T: Decode>(bytes: &[u8]) -> Result<T, DecodeError> {
    T::decode(&parse(bytes)?)
}

/// A catalogue whose children are all `T`.
pub fn catalogue<T: Node + Decode>(bytes: &[u8]) -> Result<Catalogue<T>, DecodeError> {
    node(bytes)
}

/// A top level array of `T`, dropping the elements that do not decode.
pub fn list<T: Decode>(bytes: &[u8]) -> Result<Vec<T>, DecodeError> {
    decode_lossy_value(&parse(bytes)?)
}

/// The home menu, either as its envelope object or as the bare flat list of
/// headings and items.
pub fn menu(bytes: &[u8]) -> Result<ShelfMenu, DecodeError> {
    match parse(bytes)? {
        Value::Array(values) => Ok(ShelfMenu::from_flat(&values)),
        value => ShelfMenu::decode(&value),
    }
}

/// The list held by a `{ "<key>": [..] }` envelope. When there are several
/// keys the first in key order wins.
pub fn keyed_list<T: Decode>(bytes: &[u8]) -> Result<Vec<T>, DecodeError> {
    match parse(bytes)? {
        Value::Object(object) => match object.into_iter().next() {
            Some((_, value)) => decode_lossy_value(&value),
            None => Ok(Vec::new()),
        },
        _ => Err(DecodeError::MalformedPayload(
            "expected an object of lists".to_string(),
        )),
    }
}

/// Every region of a `{ "<key>": [Region] }` envelope, all lists joined.
pub fn regions(bytes: &[u8]) -> Result<Vec<Region>, DecodeError> {
    let lists: BTreeMap<String, Vec<Region>> = serde_json::from_slice(bytes)?;
    Ok(lists.into_values().flatten().collect())
}
