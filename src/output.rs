//! Output adapter for `smart-leds` drivers

use smart_leds::SmartLedsWrite;

use crate::{OutputSink, color::Rgb};

/// Buffers pixels and writes them through a `SmartLedsWrite` driver on commit
pub struct SmartLedsSink<W, const N: usize> {
    driver: W,
    pixels: [Rgb; N],
}

impl<W, const N: usize> SmartLedsSink<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    pub fn new(driver: W) -> Self {
        Self {
            driver,
            pixels: [Rgb::default(); N],
        }
    }

    /// Pixels staged for the next commit
    pub const fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    pub fn into_inner(self) -> W {
        self.driver
    }
}

impl<W, const N: usize> OutputSink for SmartLedsSink<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
    W::Error: core::fmt::Debug,
{
    type Error = W::Error;

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        self.driver.write(self.pixels.iter().copied())
    }
}
