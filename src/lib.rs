//! Sign-up form validation: raw submissions in, normalized users or
//! per-field errors out.

pub mod config;
pub mod consts;
pub mod form;
pub mod models;
pub mod output;
pub mod utils;
