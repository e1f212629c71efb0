//! Pixel drawing on top of any [`LedSink`].
//!
//! [`LedMatrix`] turns `(x, y)` coordinates into LED writes: the logical
//! coordinate is rotated to a physical one, looked up in the board
//! [`Layout`] and the RGB565 color is expanded and written one channel at a
//! time in the layout's order. Coordinates outside the matrix, and pixels the
//! board has no LED for, are ignored.
//!
//! With the direct driver as the sink every pixel is three I²C writes; with
//! the buffered driver pixels only reach the LEDs on
//! [`BufferedIs31fl3741::show`](crate::buffered::BufferedIs31fl3741::show).

use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Point, Size};
use embedded_graphics::Pixel;

use crate::color::expand;
use crate::layout::Layout;
use crate::{Color, Error, LedSink, Rotation};

/// An RGB matrix drawn through a [`LedSink`].
#[derive(Debug)]
pub struct LedMatrix<S> {
    sink: S,
    layout: Layout,
    rotation: Rotation,
}

impl<S> LedMatrix<S> {
    /// Wrap a sink with the given board layout, unrotated.
    pub fn new(sink: S, layout: Layout) -> Self {
        Self {
            sink,
            layout,
            rotation: Rotation::Deg0,
        }
    }

    /// Board layout.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Current rotation.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Change the rotation. Already drawn pixels are not moved.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// The underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the underlying sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Give back the sink.
    pub fn release(self) -> S {
        self.sink
    }

    fn physical_size(&self) -> (i32, i32) {
        let (width, height) = self.layout.size();
        (width as i32, height as i32)
    }
}

impl<S: LedSink> LedMatrix<S> {
    /// Draw one pixel.
    ///
    /// # Errors
    ///
    /// Only sink errors. Points outside the matrix or on an unconnected
    /// position are skipped without error.
    pub fn set_pixel(&mut self, point: Point, color: Color) -> Result<(), Error<S::BusError>> {
        let logical = self.size();
        if point.x < 0
            || point.y < 0
            || point.x >= logical.width as i32
            || point.y >= logical.height as i32
        {
            return Ok(());
        }

        let (width, height) = self.physical_size();
        let (x, y) = self.rotation.apply(point.x, point.y, width, height);
        let Some(leds) = self.layout.leds(x as usize, y as usize) else {
            return Ok(());
        };

        let rgb = expand(color);
        for (channel, led) in leds.iter() {
            self.sink.set_led(led, channel.component(rgb))?;
        }
        Ok(())
    }

    /// Set every connected pixel to `color`.
    ///
    /// # Errors
    ///
    /// Whatever the sink reports.
    pub fn fill_color(&mut self, color: Color) -> Result<(), Error<S::BusError>> {
        let (width, height) = self.layout.size();
        let rgb = expand(color);
        for x in 0..width as usize {
            for y in 0..height as usize {
                if let Some(leds) = self.layout.leds(x, y) {
                    for (channel, led) in leds.iter() {
                        self.sink.set_led(led, channel.component(rgb))?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl<S> OriginDimensions for LedMatrix<S> {
    /// Logical size, with width and height swapped for 90° and 270°.
    fn size(&self) -> Size {
        let (width, height) = self.layout.size();
        if self.rotation.is_transposed() {
            Size::new(height, width)
        } else {
            Size::new(width, height)
        }
    }
}

impl<S: LedSink> DrawTarget for LedMatrix<S> {
    type Color = Color;
    type Error = Error<S::BusError>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point, color)?;
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_color(color)
    }
}
