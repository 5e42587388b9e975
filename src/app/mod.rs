pub mod catalog_service;
pub mod launcher_service;
pub mod state;
