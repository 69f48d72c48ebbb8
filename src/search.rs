use serde_json::Value;

use crate::value::{member, strict_equals};

fn has_property(item: &Value, property: &str, value: &Value) -> bool {
    member(item, property).map_or(false, |found| strict_equals(&found, value))
}

/// Returns the first element of `data` whose `property` strictly equals `value`.
///
/// `data` may be an array or an object; for an object its own entries are
/// searched in insertion order. Anything else holds no elements.
pub fn find_by_property<'a>(data: &'a Value, property: &str, value: &Value) -> Option<&'a Value> {
    match data {
        Value::Array(items) => items.iter().find(|item| has_property(item, property, value)),
        Value::Object(map) => map.values().find(|item| has_property(item, property, value)),
        _ => None,
    }
}

// objects have no length to walk, so only arrays can produce a hit
pub fn position_by_property(data: &Value, property: &str, value: &Value) -> Option<usize> {
    data.as_array()?
        .iter()
        .position(|item| has_property(item, property, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn people() -> Value {
        json!([
            {"id": 1, "name": "ada", "team": "core"},
            {"id": 2, "name": "grace", "team": "web"},
            {"id": 3, "name": "linus", "team": "web"}
        ])
    }

    #[test]
    fn finds_first_match() {
        let data = people();
        assert_eq!(find_by_property(&data, "team", &json!("web")), Some(&data[1]));
        assert_eq!(position_by_property(&data, "team", &json!("web")), Some(1));
    }

    #[test]
    fn searches_agree_on_arrays() {
        let data = people();
        for (property, value) in [("id", json!(3)), ("name", json!("ada")), ("team", json!("web"))] {
            let index = position_by_property(&data, property, &value).unwrap();
            assert_eq!(find_by_property(&data, property, &value), Some(&data[index]));
        }
    }

    #[test]
    fn no_match_gives_sentinels() {
        let data = people();
        assert_eq!(find_by_property(&data, "team", &json!("ops")), None);
        assert_eq!(position_by_property(&data, "team", &json!("ops")), None);
        assert_eq!(find_by_property(&data, "missing", &json!(null)), None);
        assert_eq!(find_by_property(&json!([]), "id", &json!(1)), None);
        assert_eq!(position_by_property(&json!([]), "id", &json!(1)), None);
    }

    #[test]
    fn comparison_is_strict() {
        let data = people();
        assert_eq!(find_by_property(&data, "id", &json!("1")), None);
        assert_eq!(position_by_property(&data, "id", &json!(true)), None);
        assert_eq!(position_by_property(&data, "id", &json!(2.0)), Some(1));
    }

    #[test]
    fn object_collections_are_searched_by_value() {
        let data = json!({
            "x": {"kind": "a"},
            "y": {"kind": "b"},
            "z": {"kind": "b", "last": true}
        });
        assert_eq!(find_by_property(&data, "kind", &json!("b")), Some(&data["y"]));
        assert_eq!(position_by_property(&data, "kind", &json!("b")), None);
    }

    #[test]
    fn array_elements_match_on_length() {
        let data = json!([{"id": 1}, [7], ["a", "b"]]);
        assert_eq!(position_by_property(&data, "length", &json!(2)), Some(2));
        assert_eq!(find_by_property(&data, "length", &json!(1)), Some(&data[1]));
    }

    #[test]
    fn primitive_elements_never_match() {
        let data = json!([null, 4, "str", {"v": 4}]);
        assert_eq!(position_by_property(&data, "v", &json!(4)), Some(3));
        assert_eq!(find_by_property(&json!("not a list"), "v", &json!(4)), None);
    }
}
