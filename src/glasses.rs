//! Adafruit LED glasses: an 18 × 5 matrix between two 24-pixel rings.
//!
//! The matrix has no LEDs in its top corners or below the nose bridge, and
//! several of its edge pixels share LEDs with ring pixels. Drawing on either
//! overwrites the other; the last write wins.
//!
//! [`LedGlasses`] works over either driver flavour. With the buffered driver
//! it can also carry a 54 × 15 [`Canvas`] that [`LedGlasses::scale`]
//! downsamples onto the matrix, and [`LedGlasses::show`] sends the frame.

use embedded_hal::i2c::I2c;

use crate::buffered::BufferedIs31fl3741;
use crate::canvas::Canvas;
use crate::layout::{Layout, LedTable};
use crate::matrix::LedMatrix;
use crate::ring::{Ring, RingSide, RingWriter};
use crate::{Error, LedBuffer, LedSink};

/// Matrix width in pixels.
pub const GLASSES_WIDTH: u8 = 18;
/// Matrix height in pixels.
pub const GLASSES_HEIGHT: u8 = 5;

/// `[blue, red, green]` LEDs of each matrix pixel, column-major.
static GLASSES_MATRIX_LEDS: [Option<[u16; 3]>; 18 * 5] = [
    // x = 0
    None,
    Some([10, 9, 8]),
    Some([13, 12, 11]),
    Some([16, 15, 14]),
    Some([4, 3, 2]),
    // x = 1
    Some([217, 216, 215]),
    Some([220, 219, 218]),
    Some([223, 222, 221]),
    Some([226, 225, 224]),
    Some([214, 213, 212]),
    // x = 2
    Some([187, 186, 185]),
    Some([190, 189, 188]),
    Some([193, 192, 191]),
    Some([196, 195, 194]),
    Some([184, 183, 182]),
    // x = 3
    Some([37, 36, 35]),
    Some([40, 39, 38]),
    Some([43, 42, 41]),
    Some([46, 45, 44]),
    Some([34, 33, 32]),
    // x = 4
    Some([67, 66, 65]),
    Some([70, 69, 68]),
    Some([73, 72, 71]),
    Some([76, 75, 74]),
    Some([64, 63, 62]),
    // x = 5
    Some([97, 96, 95]),
    Some([100, 99, 98]),
    Some([103, 102, 101]),
    Some([106, 105, 104]),
    Some([94, 93, 92]),
    // x = 6
    Some([127, 126, 125]),
    Some([130, 129, 128]),
    Some([133, 132, 131]),
    Some([136, 135, 134]),
    Some([124, 123, 122]),
    // x = 7
    Some([157, 156, 155]),
    Some([160, 159, 158]),
    Some([163, 162, 161]),
    Some([166, 165, 164]),
    Some([244, 243, 242]),
    // x = 8
    Some([247, 246, 245]),
    Some([250, 249, 248]),
    Some([253, 252, 251]),
    Some([256, 255, 254]),
    None,
    // x = 9
    Some([345, 346, 347]),
    Some([342, 343, 344]),
    Some([267, 268, 269]),
    Some([263, 264, 265]),
    None,
    // x = 10
    Some([336, 337, 338]),
    Some([333, 334, 335]),
    Some([237, 238, 239]),
    Some([233, 234, 235]),
    Some([348, 349, 262]),
    // x = 11
    Some([327, 328, 329]),
    Some([324, 325, 326]),
    Some([207, 208, 209]),
    Some([203, 204, 205]),
    Some([330, 331, 202]),
    // x = 12
    Some([318, 319, 320]),
    Some([315, 316, 317]),
    Some([177, 178, 179]),
    Some([173, 174, 175]),
    Some([321, 322, 172]),
    // x = 13
    Some([309, 310, 311]),
    Some([306, 307, 308]),
    Some([147, 148, 149]),
    Some([143, 144, 145]),
    Some([312, 313, 142]),
    // x = 14
    Some([300, 301, 302]),
    Some([297, 298, 299]),
    Some([117, 118, 119]),
    Some([113, 114, 115]),
    Some([303, 304, 112]),
    // x = 15
    Some([291, 292, 293]),
    Some([288, 289, 290]),
    Some([87, 88, 89]),
    Some([83, 84, 85]),
    Some([294, 295, 82]),
    // x = 16
    Some([282, 283, 284]),
    Some([279, 280, 281]),
    Some([57, 58, 59]),
    Some([53, 54, 55]),
    Some([285, 286, 52]),
    // x = 17
    None,
    Some([270, 271, 272]),
    Some([27, 28, 29]),
    Some([23, 24, 25]),
    Some([276, 277, 22]),
];

/// Wiring of the glasses matrix.
pub static GLASSES_MATRIX: LedTable =
    LedTable::new(GLASSES_WIDTH, GLASSES_HEIGHT, &GLASSES_MATRIX_LEDS);

/// The matrix and both rings of a pair of LED glasses.
#[derive(Debug)]
pub struct LedGlasses<S> {
    matrix: LedMatrix<S>,
    left: Ring,
    right: Ring,
    canvas: Option<Canvas>,
}

impl<S: LedSink> LedGlasses<S> {
    /// Glasses drawn through `sink`, both rings at full brightness.
    pub fn new(sink: S) -> Self {
        Self {
            matrix: LedMatrix::new(sink, Layout::glasses()),
            left: Ring::new(RingSide::Left),
            right: Ring::new(RingSide::Right),
            canvas: None,
        }
    }

    /// The 18 × 5 matrix, an embedded-graphics draw target.
    pub fn matrix(&mut self) -> &mut LedMatrix<S> {
        &mut self.matrix
    }

    /// The left ring.
    pub fn left_ring(&mut self) -> RingWriter<'_, S> {
        RingWriter::new(&mut self.left, self.matrix.sink_mut())
    }

    /// The right ring.
    pub fn right_ring(&mut self) -> RingWriter<'_, S> {
        RingWriter::new(&mut self.right, self.matrix.sink_mut())
    }

    /// Either ring by side.
    pub fn ring(&mut self, side: RingSide) -> RingWriter<'_, S> {
        match side {
            RingSide::Left => self.left_ring(),
            RingSide::Right => self.right_ring(),
        }
    }

    /// The underlying sink.
    pub fn sink(&self) -> &S {
        self.matrix.sink()
    }

    /// Mutable access to the underlying sink.
    pub fn sink_mut(&mut self) -> &mut S {
        self.matrix.sink_mut()
    }

    /// Give back the sink. The canvas, if any, is dropped.
    pub fn release(self) -> S {
        self.matrix.release()
    }
}

impl<S: LedSink + LedBuffer> LedGlasses<S> {
    /// Glasses with a high resolution canvas already attached.
    pub fn with_canvas(sink: S) -> Self {
        let mut glasses = Self::new(sink);
        glasses.enable_canvas();
        glasses
    }

    /// Attach a cleared canvas, replacing any existing one.
    pub fn enable_canvas(&mut self) {
        self.canvas = Some(Canvas::new());
    }

    /// Drop the canvas.
    pub fn disable_canvas(&mut self) {
        self.canvas = None;
    }

    /// The canvas, if one is attached.
    pub fn canvas_mut(&mut self) -> Option<&mut Canvas> {
        self.canvas.as_mut()
    }

    /// Downsample the canvas onto the matrix in the LED mirror.
    ///
    /// Returns `false`, changing nothing, when no canvas is attached.
    pub fn scale(&mut self) -> bool {
        let Some(canvas) = &self.canvas else {
            return false;
        };
        canvas.downsample(self.matrix.sink_mut().leds_mut());
        true
    }
}

impl<I2C: I2c> LedGlasses<BufferedIs31fl3741<I2C>> {
    /// Send the mirrored frame to the chip.
    ///
    /// # Errors
    ///
    /// See [`BufferedIs31fl3741::show`].
    pub fn show(&mut self) -> Result<(), Error<I2C::Error>> {
        self.matrix.sink_mut().show()
    }
}
