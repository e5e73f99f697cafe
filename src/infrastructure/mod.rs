pub mod argon2_password_hasher;
pub mod entity;
pub mod schema;
pub mod user_repository;
