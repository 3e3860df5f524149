pub mod db_service;
pub mod follow;
pub mod user;
