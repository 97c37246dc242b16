pub mod dashboard;
pub mod orders;
pub mod placeholder;
pub mod products;
