pub mod auth;
pub mod memos;
