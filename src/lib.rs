#[macro_use]
extern crate custom_derive;
#[macro_use]
extern crate enum_derive;

pub mod config;
pub mod error;
pub mod hydro;
pub mod run;

pub use error::{InitError, Result};
