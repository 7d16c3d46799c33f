use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};

use crate::core::library::{LibraryError, LibraryResult, ListKind};
use crate::core::repository::Repository;
use crate::lists::domain::model::ListEntryEntity;
use crate::lists::repository::ListRepository;
use crate::lists::EMAIL_FIELD;
use crate::utils::ddb::{parse_bool_attribute, parse_map_attribute, parse_string_attribute, put_condition_failed, scan_all, update_condition_failed, value_to_item, ScanFilter};

pub(crate) const ENTRY_KEY: &str = "_id";

#[derive(Debug)]
pub struct DDBListRepository {
    client: Client,
    table_name: String,
    kind: ListKind,
}

impl DDBListRepository {
    pub(crate) fn new(client: Client, table_name: &str, kind: ListKind) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
            kind,
        }
    }

    fn to_item(&self, entity: &ListEntryEntity) -> HashMap<String, AttributeValue> {
        HashMap::from([
            (ENTRY_KEY.to_string(), AttributeValue::S(entity.entry_id.to_string())),
            (self.kind.status_field().to_string(), AttributeValue::Bool(entity.status)),
            ("id".to_string(), AttributeValue::S(entity.id.to_string())),
            ("data".to_string(), value_to_item(serde_json::Value::Object(entity.data.clone()))),
        ])
    }

    fn map_to_entry(&self, map: &HashMap<String, AttributeValue>) -> ListEntryEntity {
        ListEntryEntity {
            entry_id: parse_string_attribute(ENTRY_KEY, map).unwrap_or_default(),
            kind: self.kind,
            status: parse_bool_attribute(self.kind.status_field(), map),
            id: parse_string_attribute("id", map).unwrap_or_default(),
            data: parse_map_attribute("data", map),
        }
    }
}

#[async_trait]
impl Repository<ListEntryEntity> for DDBListRepository {
    // single conditional put, so concurrent adds of the same product can't both succeed
    async fn create(&self, entity: &ListEntryEntity) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(#pk)")
            .expression_attribute_names("#pk", ENTRY_KEY)
            .set_item(Some(self.to_item(entity)))
            .send()
            .await.map(|_| 1).map_err(|err| {
            if put_condition_failed(&err) {
                LibraryError::duplicate_key(format!("{} already has {}", self.kind, entity.id).as_str())
            } else {
                LibraryError::from(err)
            }
        })
    }
}

#[async_trait]
impl ListRepository for DDBListRepository {
    async fn find_by_email(&self, email: Option<&str>) -> LibraryResult<Vec<ListEntryEntity>> {
        let (expression, value) = match email {
            Some(email) => ("#data.#email = :email", AttributeValue::S(email.to_string())),
            None => ("attribute_not_exists(#data.#email) OR attribute_type(#data.#email, :email)",
                     AttributeValue::S("NULL".to_string())),
        };
        let filter = ScanFilter {
            expression: expression.to_string(),
            names: HashMap::from([
                ("#data".to_string(), "data".to_string()),
                ("#email".to_string(), EMAIL_FIELD.to_string()),
            ]),
            values: HashMap::from([
                (":email".to_string(), value),
            ]),
        };
        let items = scan_all(&self.client, self.table_name.as_str(), Some(filter)).await?;
        Ok(items.iter().map(|item| self.map_to_entry(item)).collect())
    }

    async fn update_status(&self, id: &str, status: bool) -> LibraryResult<ListEntryEntity> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .update_item()
            .table_name(table_name)
            .key(ENTRY_KEY, AttributeValue::S(id.to_string()))
            .update_expression("SET #status = :status")
            .expression_attribute_names("#pk", ENTRY_KEY)
            .expression_attribute_names("#status", self.kind.status_field())
            .expression_attribute_values(":status", AttributeValue::Bool(status))
            .condition_expression("attribute_exists(#pk)")
            .return_values(ReturnValue::AllNew)
            .send()
            .await.map_err(|err| {
            if update_condition_failed(&err) {
                LibraryError::not_found(format!("{} entry not found for {}", self.kind, id).as_str())
            } else {
                LibraryError::from(err)
            }
        }).and_then(|res| {
            res.attributes().map(|map| self.map_to_entry(map)).ok_or_else(|| LibraryError::database(
                format!("no attributes returned for {} entry {}", self.kind, id).as_str(), None, false))
        })
    }
}
