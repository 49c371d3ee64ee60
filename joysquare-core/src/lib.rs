//! Core logic for the joysquare demo, kept free of hardware access so it
//! can be unit tested on the host.

#![no_std]

pub mod border;
pub mod debounce;
pub mod latch;
pub mod mapper;
pub mod render;
pub mod state;

pub use border::BorderStyle;
pub use debounce::DebounceGate;
pub use latch::PressLatch;
pub use state::PanelState;
