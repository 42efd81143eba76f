pub mod api;
pub mod currency;
pub mod logging;
pub mod session_store;
pub mod stats;
