//! Backend for a personal website: user registration over HTTP, backed by a
//! relational `user_table`.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod usecase;
