//! Browser-side helpers. The JS exports keep the names page scripts already call.

use anyhow::{anyhow, Result};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

mod console;
pub mod escape;
pub mod path;
pub mod query;
pub mod search;
pub mod value;

use console::{console_error, console_warn};

pub use escape::escape_html;
pub use path::{lookup_path, lookup_path_with, EmptyPath, PathOptions};
pub use query::{encode_uri_component, to_query_string};
pub use search::{find_by_property, position_by_property};
pub use value::{is_object_like, member, strict_equals, to_js_string};

#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

// `undefined` members arrive as `null`; JSON has no way to keep them apart
fn from_js(js_value: JsValue, what: &str) -> Result<Value> {
    serde_wasm_bindgen::from_value(js_value)
        .map_err(|e| anyhow!("{} could not be read as JSON data: {}", what, e))
}

fn to_js(value: &Value) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer).map_err(JsValue::from)
}

fn fail(context: &str, e: anyhow::Error) -> JsValue {
    console_error!("{}: {}", context, e);
    JsValue::from_str(&format!("{}: {}", context, e))
}

fn search_target(js_value: JsValue, export: &str) -> Result<Option<Value>> {
    if js_value.is_undefined() {
        console_warn!("{}: an undefined search value never matches", export);
        return Ok(None);
    }
    from_js(js_value, "Search value").map(Some)
}

#[wasm_bindgen(js_name = jsonToQueryString)]
pub fn json_to_query_string(source: JsValue, prefix: Option<String>) -> Result<String, JsValue> {
    let source = from_js(source, "Query source").map_err(|e| fail("Query String Error", e))?;
    to_query_string(&source, prefix.as_deref()).map_err(|e| fail("Query String Error", e))
}

#[wasm_bindgen(js_name = getObjectByPropertyValue)]
pub fn get_object_by_property_value(
    data: JsValue,
    property: &str,
    value: JsValue,
) -> Result<JsValue, JsValue> {
    let target = match search_target(value, "getObjectByPropertyValue")
        .map_err(|e| fail("Search Error", e))?
    {
        Some(target) => target,
        None => return Ok(JsValue::UNDEFINED),
    };
    let data = from_js(data, "Search data").map_err(|e| fail("Search Error", e))?;
    match find_by_property(&data, property, &target) {
        Some(found) => to_js(found),
        None => Ok(JsValue::UNDEFINED),
    }
}

#[wasm_bindgen(js_name = getKeyByPropertyValue)]
pub fn get_key_by_property_value(data: JsValue, property: &str, value: JsValue) -> Result<i32, JsValue> {
    let target = match search_target(value, "getKeyByPropertyValue")
        .map_err(|e| fail("Search Error", e))?
    {
        Some(target) => target,
        None => return Ok(-1),
    };
    let data = from_js(data, "Search data").map_err(|e| fail("Search Error", e))?;
    Ok(position_by_property(&data, property, &target)
        .and_then(|index| i32::try_from(index).ok())
        .unwrap_or(-1))
}

#[wasm_bindgen(js_name = stringJsonParser)]
pub fn string_json_parser(path: &str, object: JsValue) -> Result<JsValue, JsValue> {
    let root = from_js(object, "Lookup root").map_err(|e| fail("Path Lookup Error", e))?;
    match lookup_path(path, &root) {
        Some(found) => to_js(&found),
        None => Ok(JsValue::UNDEFINED),
    }
}

/// `stringJsonParser` with options, e.g. `{ emptyPath: "root" }`.
#[wasm_bindgen(js_name = stringJsonParserWith)]
pub fn string_json_parser_with(path: &str, object: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let options: PathOptions = if options.is_undefined() || options.is_null() {
        PathOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| fail("Path Lookup Error", anyhow!("Invalid lookup options: {}", e)))?
    };
    let root = from_js(object, "Lookup root").map_err(|e| fail("Path Lookup Error", e))?;
    match lookup_path_with(path, &root, options) {
        Some(found) => to_js(&found),
        None => Ok(JsValue::UNDEFINED),
    }
}

#[wasm_bindgen(js_name = escapeHtml)]
pub fn escape_html_js(input: &str) -> String {
    escape_html(input)
}
