pub mod followers;
pub mod follows;
pub mod get;
pub mod list;
