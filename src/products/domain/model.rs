use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::products::domain::{Product, ProductField};

// ProductEntity is the stored form of a catalog book, the attribute names match the
// documents the catalog has always served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntity {
    #[serde(rename = "_id")]
    pub product_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Author", default)]
    pub author: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "PublicationDate", default)]
    pub publication_date: String,
    #[serde(rename = "Reviews", default)]
    pub reviews: Vec<String>,
}

impl ProductEntity {
    pub fn new(title: &str, author: &str, genre: &str, publication_date: &str) -> Self {
        Self {
            product_id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            publication_date: publication_date.to_string(),
            reviews: vec![],
        }
    }
}

impl Product for ProductEntity {
    fn field(&self, field: ProductField) -> &str {
        match field {
            ProductField::Title => self.title.as_str(),
            ProductField::Author => self.author.as_str(),
            ProductField::Genre => self.genre.as_str(),
            ProductField::PublicationDate => self.publication_date.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::products::domain::{Product, ProductField};
    use crate::products::domain::model::ProductEntity;

    #[tokio::test]
    async fn test_should_build_products() {
        let product = ProductEntity::new("1984", "George Orwell", "Dystopia", "June 1949");
        assert_eq!("1984", product.field(ProductField::Title));
        assert_eq!("June 1949", product.field(ProductField::PublicationDate));
        assert!(product.reviews.is_empty());
        assert!(!product.product_id.is_empty());
    }

    #[tokio::test]
    async fn test_should_serialize_with_catalog_names() {
        let product = ProductEntity::new("1984", "George Orwell", "Dystopia", "June 1949");
        let value = serde_json::to_value(&product).expect("should serialize");
        assert_eq!(json!(product.product_id), value["_id"]);
        assert_eq!(json!("George Orwell"), value["Author"]);
        assert_eq!(json!([]), value["Reviews"]);
    }
}
