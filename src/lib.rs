pub mod config;
pub mod extract;
pub mod logging;
pub mod manual;
pub mod page;
pub mod redirect;
pub mod report;
pub mod token;
pub mod utility;
pub mod web;

mod error;
pub use error::*;
