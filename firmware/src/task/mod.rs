//! Task implementations
pub mod buttons;
pub mod control_loop;
