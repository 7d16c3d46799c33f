use serde::Deserialize;
use crate::core::library::LibraryResult;
use crate::products::domain::ProductField;
use crate::products::filter::ProductFilter;

// CatalogQuery holds the optional browse/search parameters of the catalog. Year and genre
// narrow a browse conjunctively, the search term matches title, author or genre, and the
// two facets are ANDed so a search narrows a browse instead of replacing it.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct CatalogQuery {
    #[serde(rename = "Year", alias = "year", default)]
    pub year: Option<String>,
    #[serde(rename = "Genre", alias = "genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

impl CatalogQuery {
    pub fn new(year: Option<&str>, genre: Option<&str>, search_term: Option<&str>) -> Self {
        Self {
            year: year.map(str::to_string),
            genre: genre.map(str::to_string),
            search_term: search_term.map(str::to_string),
        }
    }

    pub fn to_filter(&self) -> LibraryResult<ProductFilter> {
        let year = present(&self.year);
        let genre = present(&self.genre);
        let mut groups = vec![];

        if year.is_some() || genre.is_some() {
            groups.push(ProductFilter::And(vec![
                condition(ProductField::PublicationDate, year)?,
                condition(ProductField::Genre, genre)?,
            ]));
        }

        if let Some(term) = present(&self.search_term) {
            groups.push(ProductFilter::Or(vec![
                ProductFilter::matching(ProductField::Title, term)?,
                ProductFilter::matching(ProductField::Author, term)?,
                ProductFilter::matching(ProductField::Genre, term)?,
            ]));
        }

        if groups.is_empty() {
            Ok(ProductFilter::Any)
        } else {
            Ok(ProductFilter::And(groups))
        }
    }
}

// empty parameters count as absent
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// an absent value must not constrain anything
fn condition(field: ProductField, value: Option<&str>) -> LibraryResult<ProductFilter> {
    match value {
        Some(pattern) => ProductFilter::matching(field, pattern),
        None => Ok(ProductFilter::Any),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::catalog::query::CatalogQuery;
    use crate::products::dto::ProductDto;
    use crate::products::filter::ProductFilter;

    fn catalog() -> Vec<ProductDto> {
        vec![
            ProductDto::new("The Martian", "Andy Weir", "Science Fiction", "March 2020"),
            ProductDto::new("Nineteen Eighty-Four", "George Orwell", "Dystopian Fiction", "1949"),
            ProductDto::new("Normal People", "Sally Rooney", "Fiction", "2019"),
            ProductDto::new("Sapiens", "Yuval Noah Harari", "History", "2020-05-01"),
        ]
    }

    fn titles(query: &CatalogQuery) -> Vec<String> {
        let filter = query.to_filter().expect("should build filter");
        catalog().into_iter().filter(|p| filter.matches(p)).map(|p| p.title).collect()
    }

    #[tokio::test]
    async fn test_should_match_everything_without_parameters() {
        let query = CatalogQuery::default();
        assert!(matches!(query.to_filter().expect("should build filter"), ProductFilter::Any));
        assert_eq!(4, titles(&query).len());
    }

    #[tokio::test]
    async fn test_should_treat_empty_parameters_as_absent() {
        let query = CatalogQuery::new(Some(""), Some(""), Some(""));
        assert_eq!(4, titles(&query).len());
    }

    #[tokio::test]
    async fn test_should_filter_by_year_substring() {
        let query = CatalogQuery::new(Some("2020"), None, None);
        assert_eq!(vec!["The Martian", "Sapiens"], titles(&query));
    }

    #[tokio::test]
    async fn test_should_filter_by_year_and_genre() {
        let query = CatalogQuery::new(Some("2020"), Some("Fiction"), None);
        assert_eq!(vec!["The Martian"], titles(&query));
    }

    #[tokio::test]
    async fn test_should_filter_by_genre_case_insensitive() {
        let query = CatalogQuery::new(None, Some("fiction"), None);
        assert_eq!(vec!["The Martian", "Nineteen Eighty-Four", "Normal People"], titles(&query));
    }

    #[tokio::test]
    async fn test_should_search_title_author_or_genre() {
        assert_eq!(vec!["Nineteen Eighty-Four"], titles(&CatalogQuery::new(None, None, Some("Orwell"))));
        assert_eq!(vec!["Sapiens"], titles(&CatalogQuery::new(None, None, Some("history"))));
        assert_eq!(vec!["Normal People"], titles(&CatalogQuery::new(None, None, Some("normal"))));
        assert!(titles(&CatalogQuery::new(None, None, Some("Tolkien"))).is_empty());
    }

    #[tokio::test]
    async fn test_should_narrow_browse_with_search() {
        let query = CatalogQuery::new(Some("20"), Some("fiction"), Some("rooney"));
        assert_eq!(vec!["Normal People"], titles(&query));
    }

    #[tokio::test]
    async fn test_should_compose_groups() {
        let filter = CatalogQuery::new(Some("2020"), None, Some("weir")).to_filter().expect("should build filter");
        assert_eq!(json!({"$and": [
            {"$and": [{"PublicationDate": {"$regex": "2020", "$options": "i"}}, {}]},
            {"$or": [
                {"Title": {"$regex": "weir", "$options": "i"}},
                {"Author": {"$regex": "weir", "$options": "i"}},
                {"Genre": {"$regex": "weir", "$options": "i"}}
            ]}
        ]}), filter.describe());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_pattern() {
        assert!(CatalogQuery::new(None, None, Some("(")).to_filter().is_err());
    }

    #[tokio::test]
    async fn test_should_parse_query_parameters() {
        let query: CatalogQuery = serde_json::from_value(json!({"Year": "2020", "genre": "Fiction", "searchTerm": "mars"}))
            .expect("should parse query");
        assert_eq!(CatalogQuery::new(Some("2020"), Some("Fiction"), Some("mars")), query);
    }
}
