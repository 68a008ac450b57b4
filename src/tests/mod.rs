pub mod common;

mod config;
mod contact;
mod layout;
mod theme;
