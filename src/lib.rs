//! Starlance - Mercenary Spacefighter Squadron Management Engine

pub mod catalog;
pub mod core;
pub mod ledger;
pub mod model;
pub mod recruit;
pub mod resolver;
