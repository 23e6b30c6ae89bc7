//! Data Transfer Objects for the panel host API.

pub mod messages;
