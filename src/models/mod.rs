pub mod analytics;
pub mod bookmark;
pub mod platform;
pub mod user;
