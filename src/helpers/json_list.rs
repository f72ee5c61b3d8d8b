use tracing::warn;

/// Stored list columns (`features`, `dietary`, `dishes_tried`) hold JSON text.
/// A missing or unparsable value reads as an empty list.
pub fn parse_string_list(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(values) => values,
        Err(e) => {
            warn!("Ignoring malformed list field {:?} due to: {}", raw, e);
            Vec::new()
        }
    }
}

/// Parses each entry with `FromStr`, dropping values outside the vocabulary.
pub fn parse_tag_list<T: std::str::FromStr>(raw: Option<&str>) -> Vec<T> {
    parse_string_list(raw)
        .iter()
        .filter_map(|value| match value.parse::<T>() {
            Ok(tag) => Some(tag),
            Err(_) => {
                warn!("Dropping unknown tag: {}", value);
                None
            }
        })
        .collect()
}
