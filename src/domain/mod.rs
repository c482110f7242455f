pub mod blog;
pub mod catalog;
pub mod contact;
pub mod listing;
pub mod profile;
pub mod query;
