//! Request, response, and storage models

pub mod user;

pub use user::{CreateUserRequest, UpdateUserRequest, User, UserRecord};
