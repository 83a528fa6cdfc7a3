//! Tests for the payload level decode entry points

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::sky::decode;
    use crate::sky::models::{
        catalogue::Catalogue, filter::Filter, programme::Programme, region::Quality,
        search_result::SearchResult, shelf_item::ShelfItem, DecodeError, NodeType,
    };

    fn bytes(value: &Value) -> Vec<u8> {
        serde_json::to_vec(value).unwrap()
    }

    fn heading(id: &str) -> Value {
        json!({
            "nodetype": "HEADING",
            "t": id,
            "cmsid": id,
            "renderhints": { "layout": "CAROUSEL" }
        })
    }

    fn item(id: &str) -> Value {
        json!({
            "nodetype": "PROGRAMME",
            "t": id,
            "programmeuuid": id,
            "provider": "Sky Arts"
        })
    }

    fn programme(id: &str) -> Value {
        json!({
            "type": "PROGRAMME",
            "programmeuuid": id,
            "t": id,
            "sy": "Synopsis",
            "formats": ["SD"]
        })
    }

    #[test]
    fn test_list_keeps_valid_subsequence() {
        let payload = json!([
            item("1"),
            { "nodetype": "PROGRAMME", "t": "no id", "provider": "x" },
            item("2"),
            42,
            heading("H"),
            item("3")
        ]);
        let items: Vec<ShelfItem> = decode::list(&bytes(&payload)).unwrap();
        let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_list_requires_array() {
        let err = decode::list::<ShelfItem>(&bytes(&item("1"))).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedPayload(_)));
    }

    #[test]
    fn test_catalogue_with_one_bad_child() {
        let mut children: Vec<Value> = (0..5).map(|i| programme(&i.to_string())).collect();
        children.insert(2, json!({ "type": "PROGRAMME", "t": "no synopsis" }));
        let payload = json!({
            "nodename": "Drama",
            "nodeid": "c-7",
            "childnodetype": "PROGRAMME",
            "childnodes": children
        });
        let catalogue: Catalogue<Programme> = decode::catalogue(&bytes(&payload)).unwrap();
        let ids: Vec<&str> = catalogue.child_nodes.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_decoding_is_repeatable() {
        let payload = bytes(&json!({
            "nodename": "On Demand",
            "nodeid": "root",
            "childnodetype": "COLLECTION",
            "childnodes": [
                {
                    "nodename": "Sky Cinema",
                    "nodeid": "cinema",
                    "childnodetype": "COLLECTION",
                    "childnodes": [{ "nodename": "Action", "nodeid": "f-1" }, "junk"]
                }
            ]
        }));
        let first: Catalogue<Catalogue<Filter>> = decode::catalogue(&payload).unwrap();
        let second: Catalogue<Catalogue<Filter>> = decode::catalogue(&payload).unwrap();
        assert_eq!(first, second);

        let menu = bytes(&json!([heading("A"), item("1")]));
        assert_eq!(decode::menu(&menu).unwrap(), decode::menu(&menu).unwrap());
    }

    #[test]
    fn test_menu_from_flat_array() {
        let payload = json!([heading("A"), item("1"), item("2"), heading("B"), item("3")]);
        let menu = decode::menu(&bytes(&payload)).unwrap();
        assert_eq!(menu.child_nodes.len(), 2);
        assert_eq!(menu.child_nodes[0].name, "A");
        assert_eq!(menu.child_nodes[0].items.len(), 2);
        assert_eq!(menu.child_nodes[1].name, "B");
        assert_eq!(menu.child_nodes[1].items[0].id, "3");
    }

    #[test]
    fn test_menu_drops_empty_shelf() {
        let payload = json!([heading("A"), heading("B"), item("1")]);
        let menu = decode::menu(&bytes(&payload)).unwrap();
        assert_eq!(menu.child_nodes.len(), 1);
        assert_eq!(menu.child_nodes[0].name, "B");
        assert_eq!(menu.child_nodes[0].items[0].id, "1");
    }

    #[test]
    fn test_menu_envelope() {
        let payload = json!({
            "nodetype": "MENU",
            "t": "Home",
            "cmsid": "home",
            "childnodes": [heading("A"), item("1")]
        });
        let menu = decode::menu(&bytes(&payload)).unwrap();
        assert_eq!(menu.id, "home");
        assert_eq!(menu.child_nodes.len(), 1);
    }

    #[test]
    fn test_menu_rejects_scalars() {
        assert!(matches!(
            decode::menu(b"\"home\""),
            Err(DecodeError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_heading_through_catalogue_list() {
        let payload = json!([{
            "nodetype": "HEADING",
            "nodename": "Top Picks",
            "nodeid": "h-1",
            "childnodetype": "PROGRAMME",
            "childnodes": []
        }]);
        let catalogues: Vec<Catalogue<Programme>> = decode::list(&bytes(&payload)).unwrap();
        assert!(catalogues.is_empty());

        let err = decode::node::<Catalogue<Programme>>(&bytes(&payload[0])).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidType { .. }));
    }

    #[test]
    fn test_single_node_errors_propagate() {
        assert!(matches!(
            decode::node::<Programme>(b"{ not json"),
            Err(DecodeError::MalformedPayload(_))
        ));

        let mut value = programme("p");
        value.as_object_mut().unwrap().remove("t");
        assert_eq!(
            decode::node::<Programme>(&bytes(&value)),
            Err(DecodeError::MissingField("t"))
        );
    }

    #[test]
    fn test_missing_rating_is_zero() {
        let programme: Programme = decode::node(&bytes(&programme("p"))).unwrap();
        assert_eq!(programme.rating, 0);
    }

    #[test]
    fn test_series_id_resolution() {
        let payload = json!({
            "nodetype": "SERIES",
            "t": "The Wire",
            "seriesuuid": "X",
            "programmeuuid": "P",
            "provider": "Sky Atlantic"
        });
        let item: ShelfItem = decode::node(&bytes(&payload)).unwrap();
        assert_eq!(item.id, "X");
        assert_eq!(item.node_type, NodeType::Series);
    }

    #[test]
    fn test_keyed_list() {
        let payload = json!({
            "results": [
                { "uuid": "1", "t": "Dunkirk", "uuidtype": "programme", "type": "movie" },
                { "uuid": "2", "t": "Nowhere", "uuidtype": "venue" }
            ]
        });
        let results: Vec<SearchResult> = decode::keyed_list(&bytes(&payload)).unwrap();
        assert_eq!(results.len(), 1);
        assert!(decode::keyed_list::<SearchResult>(b"{}").unwrap().is_empty());
        assert!(decode::keyed_list::<SearchResult>(b"[]").is_err());
    }

    #[test]
    fn test_regions_are_flattened() {
        let payload = json!({
            "a": [{ "n": "London", "t": "HD", "b": 4101, "sb": 1 }],
            "b": [{ "n": "Scotland", "t": "SD", "b": 4104, "sb": 2 }]
        });
        let regions = decode::regions(&bytes(&payload)).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[1].broadcast_quality, Quality::Sd);
    }
}
