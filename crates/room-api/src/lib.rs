pub mod concierge;
pub mod error;
pub mod mii;
pub mod msginfo;
pub mod routes;
