//! Main control loop
//!
//! Single cooperative loop tying the demo together. Each iteration samples
//! both joystick axes, maps them to the square position and the red/blue
//! brightness levels, redraws the display and drains the two press
//! latches, then sleeps for one frame interval (~20 Hz).
//!
//! All output peripherals live here: the ADC, the three PWM channels and
//! the OLED are owned by this task alone.

use crate::system::press;
use crate::system::resources::{DisplayResources, Irqs, JoystickResources, RgbLedResources};
use defmt::info;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::Pull;
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::pwm::{Config as PwmConfig, Pwm, SetDutyCycle};
use embassy_time::{Duration, Timer};
use joysquare_core::mapper::{self, PWM_MAX};
use joysquare_core::{render, PanelState};
use ssd1306::{mode::DisplayConfigAsync, prelude::*, I2CDisplayInterface, Ssd1306Async};

/// Loop period, bounds sampling and refresh to ~20 Hz
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Control loop task
#[embassy_executor::task]
pub async fn control_loop(joy: JoystickResources, led: RgbLedResources, disp: DisplayResources) {
    // Joystick axes: ADC0 on the X pin, ADC1 on the Y pin
    let mut adc = Adc::new(joy.adc, Irqs, AdcConfig::default());
    let mut x_channel = Channel::new_pin(joy.x_pin, Pull::None);
    let mut y_channel = Channel::new_pin(joy.y_pin, Pull::None);

    // PWM wrap equals the full sample range, so mapped brightness levels
    // are emitted without rescaling. Red and blue share slice 6 and are
    // split into independent channel outputs.
    let mut config = PwmConfig::default();
    config.top = PWM_MAX;
    let (blue, red) =
        Pwm::new_output_ab(led.red_blue_slice, led.blue_pin, led.red_pin, config.clone()).split();
    let mut pwm_blue = blue.unwrap();
    let mut pwm_red = red.unwrap();
    let (_, green) = Pwm::new_output_b(led.green_slice, led.green_pin, config).split();
    let mut pwm_green = green.unwrap();

    let _ = pwm_red.set_duty_cycle_fully_off();
    let _ = pwm_green.set_duty_cycle_fully_off();
    let _ = pwm_blue.set_duty_cycle_fully_off();

    // SSD1306 at the fixed bus address 0x3C, 400kHz fast mode
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = 400_000;
    let i2c = I2c::new_async(disp.i2c, disp.scl_pin, disp.sda_pin, Irqs, i2c_config);
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306Async::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().await.unwrap();
    display.flush().await.unwrap();

    info!("control loop started");

    let mut state = PanelState::new();

    loop {
        let raw_x = adc.read(&mut x_channel).await.unwrap_or(0);
        let raw_y = adc.read(&mut y_channel).await.unwrap_or(0);

        let (square_x, square_y) = mapper::map_position(raw_x, raw_y);

        // The disable override sits here, outside the mapper
        if state.leds_enabled {
            let _ = pwm_red.set_duty_cycle(mapper::map_brightness(raw_x));
            let _ = pwm_blue.set_duty_cycle(mapper::map_brightness(raw_y));
        } else {
            let _ = pwm_red.set_duty_cycle_fully_off();
            let _ = pwm_blue.set_duty_cycle_fully_off();
        }

        let _ = render::draw_frame(&mut display, square_x, square_y, state.border);
        display.flush().await.unwrap();

        if press::take_joystick_press() {
            state.on_joystick_press();
            info!("border style -> {}", state.border);
            if state.green_led_on {
                let _ = pwm_green.set_duty_cycle_fully_on();
            } else {
                let _ = pwm_green.set_duty_cycle_fully_off();
            }
            // redraw now, the border change should not wait a frame
            let _ = render::draw_frame(&mut display, square_x, square_y, state.border);
            display.flush().await.unwrap();
        }

        if press::take_button_a_press() {
            let enabled = state.on_button_a_press();
            info!("led output {}", if enabled { "enabled" } else { "disabled" });
            if !enabled {
                let _ = pwm_red.set_duty_cycle_fully_off();
                let _ = pwm_green.set_duty_cycle_fully_off();
                let _ = pwm_blue.set_duty_cycle_fully_off();
            }
        }

        Timer::after(FRAME_INTERVAL).await;
    }
}
