#![forbid(unsafe_code)]
pub mod api;
pub mod booker;
pub mod client;
pub mod controller;
pub mod error;
pub mod render;
pub mod routes;
