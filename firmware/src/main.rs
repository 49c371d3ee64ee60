//! Joysquare firmware entry point
//!
//! Initializes the system and spawns the control loop and button tasks.

#![no_std]
#![no_main]

use crate::task::{
    buttons::{button_a_handle, joystick_button_handle},
    control_loop::control_loop,
};
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use system::resources::{
    AssignedResources, ButtonAResources, DisplayResources, JoystickButtonResources,
    JoystickResources, RgbLedResources,
};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// System core modules
mod system;
/// Task implementations
mod task;

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // Split the resources into separate groups, one per task.
    let r = split_resources!(p);

    spawner
        .spawn(control_loop(r.joystick, r.rgb_led, r.display))
        .unwrap();
    spawner
        .spawn(joystick_button_handle(r.joystick_button))
        .unwrap();
    spawner.spawn(button_a_handle(r.button_a)).unwrap();
}
