pub mod adapters;
pub mod config;
pub mod controllers;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod ports;
pub mod request;
pub mod views;
