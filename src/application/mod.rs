pub mod access;
pub mod dialog;
pub mod engine;
pub mod session;
