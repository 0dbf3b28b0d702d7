// Module declaration file for handlers/

pub mod health;
pub mod ready;

pub use health::health_handler;
pub use ready::ready_handler;
