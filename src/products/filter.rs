use regex::{Regex, RegexBuilder};
use serde_json::{json, Map, Value};
use crate::core::library::LibraryResult;
use crate::products::domain::{Product, ProductField};

// ProductFilter is a predicate over catalog products. Text matching is a case-insensitive
// regular expression search, so a plain word behaves as a substring match.
#[derive(Debug, Clone)]
pub enum ProductFilter {
    // matches every product, stands in for an absent condition
    Any,
    Matches {
        field: ProductField,
        pattern: Regex,
    },
    And(Vec<ProductFilter>),
    Or(Vec<ProductFilter>),
}

impl ProductFilter {
    pub fn matching(field: ProductField, pattern: &str) -> LibraryResult<ProductFilter> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(ProductFilter::Matches { field, pattern })
    }

    pub fn matches(&self, product: &dyn Product) -> bool {
        match self {
            ProductFilter::Any => true,
            ProductFilter::Matches { field, pattern } => pattern.is_match(product.field(*field)),
            ProductFilter::And(filters) => filters.iter().all(|f| f.matches(product)),
            ProductFilter::Or(filters) => filters.iter().any(|f| f.matches(product)),
        }
    }

    // document-style rendering of the predicate, used for logging
    pub fn describe(&self) -> Value {
        match self {
            ProductFilter::Any => Value::Object(Map::new()),
            ProductFilter::Matches { field, pattern } => {
                json!({ field.attribute_name(): { "$regex": pattern.as_str(), "$options": "i" } })
            }
            ProductFilter::And(filters) => {
                json!({ "$and": filters.iter().map(ProductFilter::describe).collect::<Vec<Value>>() })
            }
            ProductFilter::Or(filters) => {
                json!({ "$or": filters.iter().map(ProductFilter::describe).collect::<Vec<Value>>() })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::products::domain::ProductField;
    use crate::products::dto::ProductDto;
    use crate::products::filter::ProductFilter;

    #[tokio::test]
    async fn test_should_match_case_insensitive_substring() {
        let product = ProductDto::new("Animal Farm", "George Orwell", "Satire", "17 August 1945");
        let filter = ProductFilter::matching(ProductField::Author, "orWELL").expect("should build filter");
        assert!(filter.matches(&product));
        let filter = ProductFilter::matching(ProductField::Title, "orwell").expect("should build filter");
        assert!(!filter.matches(&product));
    }

    #[tokio::test]
    async fn test_should_combine_groups() {
        let product = ProductDto::new("Animal Farm", "George Orwell", "Satire", "17 August 1945");
        let title = ProductFilter::matching(ProductField::Title, "farm").expect("should build filter");
        let genre = ProductFilter::matching(ProductField::Genre, "horror").expect("should build filter");
        assert!(ProductFilter::Or(vec![title.clone(), genre.clone()]).matches(&product));
        assert!(!ProductFilter::And(vec![title.clone(), genre]).matches(&product));
        assert!(ProductFilter::And(vec![title, ProductFilter::Any]).matches(&product));
        assert!(ProductFilter::And(vec![]).matches(&product));
    }

    #[tokio::test]
    async fn test_should_reject_invalid_pattern() {
        assert!(ProductFilter::matching(ProductField::Title, "C++(").is_err());
    }

    #[tokio::test]
    async fn test_should_describe_filter() {
        let filter = ProductFilter::And(vec![
            ProductFilter::matching(ProductField::PublicationDate, "2020").expect("should build filter"),
            ProductFilter::Any,
        ]);
        assert_eq!(json!({"$and": [{"PublicationDate": {"$regex": "2020", "$options": "i"}}, {}]}),
                   filter.describe());
    }
}
