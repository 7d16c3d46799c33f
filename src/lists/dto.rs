use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use crate::core::library::ListKind;

// ListEntryDto is a data transfer object for list services. The status flag is written
// under the field name of its list, e.g. `wishlistStatus` or `readingStatus`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntryDto {
    pub entry_id: String,
    pub kind: ListKind,
    pub status: bool,
    pub id: String,
    pub data: Map<String, Value>,
}

impl Serialize for ListEntryDto {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("_id", &self.entry_id)?;
        map.serialize_entry(self.kind.status_field(), &self.status)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("data", &self.data)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map};
    use crate::core::library::ListKind;
    use crate::lists::dto::ListEntryDto;

    #[tokio::test]
    async fn test_should_serialize_status_under_list_field() {
        let mut data = Map::new();
        data.insert("email".to_string(), json!("a@b.com"));
        let entry = ListEntryDto {
            entry_id: "p1".to_string(),
            kind: ListKind::Reading,
            status: false,
            id: "p1".to_string(),
            data,
        };
        assert_eq!(json!({"_id": "p1", "readingStatus": false, "id": "p1", "data": {"email": "a@b.com"}}),
                   serde_json::to_value(&entry).expect("should serialize"));

        let entry = ListEntryDto { kind: ListKind::Wishlist, status: true, ..entry };
        let value = serde_json::to_value(&entry).expect("should serialize");
        assert_eq!(json!(true), value["wishlistStatus"]);
        assert!(value.get("readingStatus").is_none());
    }
}
