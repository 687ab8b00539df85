pub mod directory_service;
pub mod fetch_worker;
