pub mod http;
pub mod products;
