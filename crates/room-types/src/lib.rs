pub mod api;
pub mod mii;
pub mod xml;
