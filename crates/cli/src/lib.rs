#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod profile;
pub mod prompt;
pub mod render;
