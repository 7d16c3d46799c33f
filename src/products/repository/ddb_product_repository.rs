use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};

use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::products::domain::model::ProductEntity;
use crate::products::dto::ProductEdit;
use crate::products::filter::ProductFilter;
use crate::products::repository::ProductRepository;
use crate::utils::ddb::{parse_item, parse_string_attribute, parse_string_list_attribute, put_condition_failed, scan_all, update_condition_failed};

pub(crate) const PRODUCT_KEY: &str = "_id";

#[derive(Debug)]
pub struct DDBProductRepository {
    client: Client,
    table_name: String,
}

impl DDBProductRepository {
    pub(crate) fn new(client: Client, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait]
impl Repository<ProductEntity> for DDBProductRepository {
    async fn create(&self, entity: &ProductEntity) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(#pk)")
            .expression_attribute_names("#pk", PRODUCT_KEY)
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| 1).map_err(|err| {
            if put_condition_failed(&err) {
                LibraryError::duplicate_key(format!("product {} already exists", entity.product_id).as_str())
            } else {
                LibraryError::from(err)
            }
        })
    }
}

#[async_trait]
impl ProductRepository for DDBProductRepository {
    async fn get(&self, id: &str) -> LibraryResult<ProductEntity> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .get_item()
            .table_name(table_name)
            .consistent_read(true)
            .key(PRODUCT_KEY, AttributeValue::S(id.to_string()))
            .send()
            .await.map_err(LibraryError::from).and_then(|res| {
            if let Some(map) = res.item() {
                return Ok(map_to_product(map));
            }
            Err(LibraryError::not_found(format!("product not found for {}", id).as_str()))
        })
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        self.client.delete_item()
            .table_name(table_name)
            .key(PRODUCT_KEY, AttributeValue::S(id.to_string()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await.map(|res| if res.attributes().is_some() { 1 } else { 0 }).map_err(LibraryError::from)
    }

    // DynamoDB has no case-insensitive regex, so the table is scanned and the
    // filter is evaluated here.
    async fn find(&self, filter: &ProductFilter) -> LibraryResult<Vec<ProductEntity>> {
        let items = scan_all(&self.client, self.table_name.as_str(), None).await?;
        Ok(items.iter()
            .map(map_to_product)
            .filter(|product| filter.matches(product))
            .collect())
    }

    async fn edit(&self, id: &str, edit: &ProductEdit) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .update_item()
            .table_name(table_name)
            .key(PRODUCT_KEY, AttributeValue::S(id.to_string()))
            .update_expression("SET #title = :title, #author = :author, #genre = :genre, #publication_date = :publication_date")
            .expression_attribute_names("#pk", PRODUCT_KEY)
            .expression_attribute_names("#title", "Title")
            .expression_attribute_names("#author", "Author")
            .expression_attribute_names("#genre", "Genre")
            .expression_attribute_names("#publication_date", "PublicationDate")
            .expression_attribute_values(":title", AttributeValue::S(edit.title.to_string()))
            .expression_attribute_values(":author", AttributeValue::S(edit.author.to_string()))
            .expression_attribute_values(":genre", AttributeValue::S(edit.genre.to_string()))
            .expression_attribute_values(":publication_date", AttributeValue::S(edit.publication_date.to_string()))
            .condition_expression("attribute_exists(#pk)")
            .send()
            .await.map(|_| 1).map_err(|err| {
            if update_condition_failed(&err) {
                LibraryError::not_found(format!("product not found for {}", id).as_str())
            } else {
                LibraryError::from(err)
            }
        })
    }

    async fn push_review(&self, id: &str, review: &str) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .update_item()
            .table_name(table_name)
            .key(PRODUCT_KEY, AttributeValue::S(id.to_string()))
            .update_expression("SET #reviews = list_append(if_not_exists(#reviews, :empty), :review)")
            .expression_attribute_names("#pk", PRODUCT_KEY)
            .expression_attribute_names("#reviews", "Reviews")
            .expression_attribute_values(":empty", AttributeValue::L(vec![]))
            .expression_attribute_values(":review", AttributeValue::L(vec![AttributeValue::S(review.to_string())]))
            .condition_expression("attribute_exists(#pk)")
            .send()
            .await.map(|_| 1).map_err(|err| {
            if update_condition_failed(&err) {
                LibraryError::not_found(format!("product not found for {}", id).as_str())
            } else {
                LibraryError::from(err)
            }
        })
    }
}

fn map_to_product(map: &HashMap<String, AttributeValue>) -> ProductEntity {
    ProductEntity {
        product_id: parse_string_attribute(PRODUCT_KEY, map).unwrap_or_default(),
        title: parse_string_attribute("Title", map).unwrap_or_default(),
        author: parse_string_attribute("Author", map).unwrap_or_default(),
        genre: parse_string_attribute("Genre", map).unwrap_or_default(),
        publication_date: parse_string_attribute("PublicationDate", map).unwrap_or_default(),
        reviews: parse_string_list_attribute("Reviews", map),
    }
}
