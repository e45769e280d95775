//! API request handlers

pub mod telegram;
