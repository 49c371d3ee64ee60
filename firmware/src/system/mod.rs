//! Core system components: hardware resource map and cross-task signaling
pub mod press;
pub mod resources;
