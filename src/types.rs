use serde::Deserialize;

/// One selectable entry, as supplied by the calling process.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Stable 1-based identifier written back on confirm.
    #[serde(rename = "index")]
    pub ordinal: u32,
    pub name: String,
    pub short_name: String,
    pub category: String,
    pub category_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

impl Item {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_fields_and_optional_description() {
        let json = r#"[
            {"index": 1, "name": "basic/hello", "shortName": "hello", "category": "basic",
             "categoryName": "Basic", "description": "Says hi", "path": "examples/basic/hello"},
            {"index": 2, "name": "basic/bye", "shortName": "bye", "category": "basic",
             "categoryName": "Basic"}
        ]"#;
        let items: Vec<Item> = serde_json::from_str(json).expect("parse items");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].ordinal, 1);
        assert_eq!(items[0].short_name, "hello");
        assert_eq!(items[0].description(), "Says hi");
        assert_eq!(items[0].path.as_deref(), Some("examples/basic/hello"));
        assert_eq!(items[1].description(), "");
    }

    #[test]
    fn null_description_reads_as_empty() {
        let json = r#"{"index": 3, "name": "n", "shortName": "s", "category": "c",
                       "categoryName": "C", "description": null}"#;
        let item: Item = serde_json::from_str(json).expect("parse item");
        assert_eq!(item.description(), "");
    }
}
