//! Infrastructure layer - Service and adapter implementations

pub mod auth;
pub mod bot;
pub mod exchange;
pub mod logging;
pub mod storage;
pub mod user;
