pub mod credential;
pub mod response;
pub mod status;
pub mod user;
