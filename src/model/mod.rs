pub mod memo;
pub mod user;
