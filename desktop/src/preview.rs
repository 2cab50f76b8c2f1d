use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Size},
};

/// Text framebuffer, one character per pixel.
pub struct AsciiCanvas {
    size: Size,
    cells: Vec<bool>,
}

impl AsciiCanvas {
    pub fn new(size: Size) -> Self {
        AsciiCanvas {
            size,
            cells: vec![false; size.width as usize * size.height as usize],
        }
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: BinaryColor) {
        if x < 0 || y < 0 || x as u32 >= self.size.width || y as u32 >= self.size.height {
            return;
        }
        let index = y as usize * self.size.width as usize + x as usize;
        self.cells[index] = color.is_on();
    }

    pub fn render(&self) -> String {
        let width = self.size.width as usize;
        if width == 0 {
            return String::new();
        }
        let mut out = String::with_capacity(self.cells.len() + self.size.height as usize);
        for row in self.cells.chunks(width) {
            out.extend(row.iter().map(|&on| if on { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}

impl OriginDimensions for AsciiCanvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for AsciiCanvas {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, color);
        }
        Ok(())
    }
}
