use std::fmt;
use std::fmt::{Display, Formatter};

pub mod model;

// ProductField names the text fields of a catalog product that filters can match on.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ProductField {
    Title,
    Author,
    Genre,
    PublicationDate,
}

impl ProductField {
    pub fn attribute_name(&self) -> &'static str {
        match self {
            ProductField::Title => "Title",
            ProductField::Author => "Author",
            ProductField::Genre => "Genre",
            ProductField::PublicationDate => "PublicationDate",
        }
    }
}

impl Display for ProductField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.attribute_name())
    }
}

pub trait Product: Sync + Send {
    fn field(&self, field: ProductField) -> &str;
}
