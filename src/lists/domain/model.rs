use serde_json::{Map, Value};
use crate::core::library::{LibraryError, LibraryResult, ListKind};
use crate::lists::{EMAIL_FIELD, PRODUCT_ID_FIELD};

// ListEntryEntity is a wishlist or reading list membership. The storage key is the
// referenced product id, so the store itself keeps one entry per product and list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntryEntity {
    pub entry_id: String,
    pub kind: ListKind,
    pub status: bool,
    pub id: String,
    pub data: Map<String, Value>,
}

impl ListEntryEntity {
    pub fn new(kind: ListKind, id: &str, data: Map<String, Value>) -> Self {
        Self {
            entry_id: id.to_string(),
            kind,
            status: kind.default_status(),
            id: id.to_string(),
            data,
        }
    }

    // splits the caller payload into the product reference and the verbatim rest
    pub fn from_payload(kind: ListKind, mut payload: Map<String, Value>) -> LibraryResult<Self> {
        let id = match payload.remove(PRODUCT_ID_FIELD) {
            Some(Value::String(id)) if !id.is_empty() => id,
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => {
                return Err(LibraryError::validation(
                    format!("{} entry requires a {} field", kind, PRODUCT_ID_FIELD).as_str(), Some("400".to_string())));
            }
        };
        Ok(Self::new(kind, id.as_str(), payload))
    }

    pub fn email(&self) -> Option<&str> {
        self.data.get(EMAIL_FIELD).and_then(Value::as_str)
    }

    // without an email only entries that carry none (missing or null) belong to the caller
    pub fn owned_by(&self, email: Option<&str>) -> bool {
        match email {
            Some(email) => self.email() == Some(email),
            None => self.data.get(EMAIL_FIELD).map_or(true, Value::is_null),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use crate::core::library::{LibraryError, ListKind};
    use crate::lists::domain::model::ListEntryEntity;

    fn payload(value: Value) -> serde_json::Map<String, Value> {
        value.as_object().cloned().expect("should be an object")
    }

    #[tokio::test]
    async fn test_should_build_entry_from_payload() {
        let entry = ListEntryEntity::from_payload(ListKind::Reading, payload(json!({
            "_id": "p1", "Title": "Dune", "email": "a@b.com"}))).expect("should build entry");
        assert_eq!("p1", entry.id.as_str());
        assert_eq!("p1", entry.entry_id.as_str());
        assert!(!entry.status);
        assert_eq!(Some("a@b.com"), entry.email());
        assert!(!entry.data.contains_key("_id"));
        assert_eq!(Some(&json!("Dune")), entry.data.get("Title"));
    }

    #[tokio::test]
    async fn test_should_start_wishlist_entries_flagged() {
        let entry = ListEntryEntity::from_payload(ListKind::Wishlist, payload(json!({"_id": 42})))
            .expect("should build entry");
        assert_eq!("42", entry.id.as_str());
        assert!(entry.status);
        assert_eq!(None, entry.email());
    }

    #[tokio::test]
    async fn test_should_reject_payload_without_id() {
        for value in [json!({"email": "a@b.com"}), json!({"_id": ""}), json!({"_id": null}), json!({"_id": {"$oid": "x"}})] {
            let res = ListEntryEntity::from_payload(ListKind::Wishlist, payload(value));
            assert!(matches!(res, Err(LibraryError::Validation { .. })));
        }
    }

    #[tokio::test]
    async fn test_should_match_owner_by_email() {
        let owned = ListEntryEntity::new(ListKind::Reading, "p1", payload(json!({"email": "a@b.com"})));
        let anonymous = ListEntryEntity::new(ListKind::Reading, "p2", payload(json!({"Title": "Dune"})));
        let nulled = ListEntryEntity::new(ListKind::Reading, "p3", payload(json!({"email": null})));
        let empty = ListEntryEntity::new(ListKind::Reading, "p4", payload(json!({"email": ""})));
        assert!(owned.owned_by(Some("a@b.com")));
        assert!(!owned.owned_by(None));
        assert!(anonymous.owned_by(None));
        assert!(nulled.owned_by(None));
        assert!(!empty.owned_by(None));
        assert!(empty.owned_by(Some("")));
    }
}
