pub mod logging;
pub mod opener;
