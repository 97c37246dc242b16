pub mod alerts;
pub mod auth;
pub mod header;
pub mod sidebar;
