#![allow(non_snake_case)]

use std::fmt::Display;

use tracing::log;

pub mod aggregate_service;
pub mod chart_service;
pub mod config_handler;
pub mod models;
pub mod models_api;
pub mod models_external;
pub mod replay_service;
pub mod ui;

pub trait LogResult<T, E: Display> {
    fn ok_log(self, msg: &str) -> Option<T>;
}

impl<T, E: Display> LogResult<T, E> for Result<T, E> {
    fn ok_log(self, msg: &str) -> Option<T> {
        match self {
            Ok(o) => Some(o),
            Err(e) => {
                log::error!("{}: {}", msg, e);
                None
            }
        }
    }
}
