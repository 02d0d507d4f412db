pub mod chat;
pub mod tenant;
