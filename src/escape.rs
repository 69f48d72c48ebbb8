use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref HTML_ENTITY_MAP: HashMap<char, &'static str> = {
        let mut map = HashMap::new();
        map.insert('&', "&amp;");
        map.insert('<', "&lt;");
        map.insert('>', "&gt;");
        map.insert('"', "&quot;");
        map.insert('\'', "&#39;");
        map.insert('/', "&#x2F;");
        map
    };
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match HTML_ENTITY_MAP.get(&ch) {
            Some(entity) => escaped.push_str(entity),
            None => escaped.push(ch),
        }
    }
    escaped
}
