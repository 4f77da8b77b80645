pub mod common;
pub mod config;
pub mod db;
pub mod models;
pub mod routing;
pub mod services;
