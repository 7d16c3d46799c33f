pub mod domain;
pub mod command;
pub mod dto;
pub mod factory;
pub mod repository;
pub mod controller;

// field of the add payload that names the listed product
pub const PRODUCT_ID_FIELD: &str = "_id";

// field of the stored payload that identifies the owning user
pub const EMAIL_FIELD: &str = "email";
