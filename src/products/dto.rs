use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::products::domain::{Product, ProductField};

// ProductDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
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

impl ProductDto {
    pub fn new(title: &str, author: &str, genre: &str, publication_date: &str) -> ProductDto {
        ProductDto {
            product_id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            publication_date: publication_date.to_string(),
            reviews: vec![],
        }
    }
}

impl Product for ProductDto {
    fn field(&self, field: ProductField) -> &str {
        match field {
            ProductField::Title => self.title.as_str(),
            ProductField::Author => self.author.as_str(),
            ProductField::Genre => self.genre.as_str(),
            ProductField::PublicationDate => self.publication_date.as_str(),
        }
    }
}

// ProductEdit overwrites the descriptive fields of a product; reviews are untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEdit {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Author", default)]
    pub author: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "PublicationDate", default)]
    pub publication_date: String,
}

impl ProductEdit {
    pub fn new(title: &str, author: &str, genre: &str, publication_date: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            publication_date: publication_date.to_string(),
        }
    }
}
