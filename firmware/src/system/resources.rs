//! Hardware Resource Management
//!
//! Assigns pins and peripherals to the tasks that own them. Every resource
//! group is handed to exactly one task, so no peripheral is ever shared:
//! the control loop owns the ADC, the PWM slices and the display bus; each
//! button task owns its input pin.
//!
//! # Wiring (BitDogLab-style board, Pico 2 pinout)
//! - Red/Green/Blue LEDs on GPIO 13/11/12, PWM driven
//! - Joystick X/Y on GPIO 26/27 (ADC0/ADC1)
//! - Joystick button on GPIO 22, button A on GPIO 5, both active low
//! - SSD1306 OLED on I2C1, SDA GPIO 14 / SCL GPIO 15

use assign_resources::assign_resources;
use embassy_rp::adc::InterruptHandler as AdcInterruptHandler;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::InterruptHandler as I2cInterruptHandler;
use embassy_rp::peripherals::{self, I2C1};

assign_resources! {
    /// Joystick analog axes and the ADC that samples them
    joystick: JoystickResources {
        adc: ADC,
        x_pin: PIN_26,
        y_pin: PIN_27,
    },
    /// PWM-controlled RGB LED pins; red and blue share slice 6
    rgb_led: RgbLedResources {
        red_blue_slice: PWM_SLICE6,
        blue_pin: PIN_12,
        red_pin: PIN_13,
        green_slice: PWM_SLICE5,
        green_pin: PIN_11,
    },
    /// SSD1306 OLED bus
    display: DisplayResources {
        i2c: I2C1,
        sda_pin: PIN_14,
        scl_pin: PIN_15,
    },
    /// Joystick push-button
    joystick_button: JoystickButtonResources {
        pin: PIN_22,
    },
    /// Button A
    button_a: ButtonAResources {
        pin: PIN_5,
    },
}

bind_interrupts!(pub struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
    I2C1_IRQ => I2cInterruptHandler<I2C1>;
});
