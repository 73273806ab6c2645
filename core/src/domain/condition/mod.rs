pub mod entities;
pub mod ports;
pub mod score;
pub mod services;
