/// Half-block presenter: maps an RGBA back buffer onto terminal cells
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wire3d_core::Device;

/// Upper half block; one terminal cell shows two vertically stacked
/// pixels (foreground = top, background = bottom).
const HALF_BLOCK: char = '\u{2580}';

/// A terminal-cell surface that consumes a device's back buffer.
pub struct TerminalSurface {
    columns: u16,
    rows: u16,
}

impl TerminalSurface {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Pixel dimensions a device must have to fill this surface.
    pub fn device_size(&self) -> (u32, u32) {
        (self.columns as u32, self.rows as u32 * 2)
    }

    /// Queue the whole back buffer as colored half-block cells. The
    /// caller flushes; flushing is what makes the frame visible.
    pub fn present<W: Write>(&self, device: &Device, writer: &mut W) -> std::io::Result<()> {
        for row in 0..self.rows {
            writer.queue(cursor::MoveTo(0, row))?;
            for column in 0..self.columns {
                let (top, bottom) = cell_colors(device, column as u32, row as u32);
                writer.queue(SetForegroundColor(top))?;
                writer.queue(SetBackgroundColor(bottom))?;
                writer.queue(Print(HALF_BLOCK))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// The two pixel colors backing one terminal cell. Cells past the
/// buffer edge read as black.
fn cell_colors(device: &Device, column: u32, row: u32) -> (Color, Color) {
    let top = pixel_color(device, column, row * 2);
    let bottom = pixel_color(device, column, row * 2 + 1);
    (top, bottom)
}

fn pixel_color(device: &Device, x: u32, y: u32) -> Color {
    match device.pixel(x, y) {
        Some([r, g, b, _]) => Color::Rgb { r, g, b },
        None => Color::Rgb { r: 0, g: 0, b: 0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;
    use wire3d_core::Color as DeviceColor;

    #[test]
    fn test_device_size_doubles_rows() {
        let surface = TerminalSurface::new(80, 24);
        assert_eq!(surface.device_size(), (80, 48));
    }

    #[test]
    fn test_cell_colors_split_pixel_rows() {
        let mut device = Device::new(4, 4);
        device.clear(DeviceColor::black());
        // Top pixel of cell (1, 0) is (1, 0); bottom is (1, 1).
        device.draw_point(Vector2::new(1.0, 0.0));

        let (top, bottom) = cell_colors(&device, 1, 0);
        assert_eq!(top, Color::Rgb { r: 255, g: 255, b: 255 });
        assert_eq!(bottom, Color::Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_out_of_range_cell_reads_black() {
        let device = Device::new(2, 2);
        let (top, bottom) = cell_colors(&device, 5, 5);
        assert_eq!(top, Color::Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(bottom, Color::Rgb { r: 0, g: 0, b: 0 });
    }
}
