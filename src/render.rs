// render.rs - Draws a generation through a minimal canvas interface

use egui::Color32;

use crate::life::Life;

/// The drawing calls a frame needs. Coordinates are pixels from the
/// top-left corner of the board.
pub trait Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color32);
    fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color32);
    fn text(&mut self, x: f32, y: f32, size: f32, text: &str, color: Color32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub alive: Color32,
    pub dead: Color32,
    pub grid: Color32,
    pub overlay: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: Color32::WHITE,
            dead: Color32::BLACK,
            grid: Color32::GRAY,
            overlay: Color32::RED,
        }
    }
}

/// How a frame is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pub cell_size: f32,
    pub show_grid: bool,
    pub palette: Palette,
}

impl View {
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size as f32,
            show_grid: true,
            palette: Palette::default(),
        }
    }

    /// Pixel size of the whole board.
    pub fn board_size(&self, life: &Life) -> (f32, f32) {
        (
            life.width() as f32 * self.cell_size,
            life.height() as f32 * self.cell_size,
        )
    }

    /// Draws every cell, then the gridlines, then the pause label.
    pub fn render(&self, life: &Life, paused: bool, canvas: &mut impl Canvas) {
        let size = self.cell_size;
        for y in 0..life.height() {
            for x in 0..life.width() {
                let color = if life.is_alive(x as i32, y as i32) {
                    self.palette.alive
                } else {
                    self.palette.dead
                };
                canvas.fill_rect(x as f32 * size, y as f32 * size, size, size, color);
            }
        }

        if self.show_grid {
            self.draw_grid(life, canvas);
        }

        if paused {
            let (w, _) = self.board_size(life);
            canvas.text(w - 100.0, 10.0, 20.0, "PAUSED", self.palette.overlay);
        }
    }

    fn draw_grid(&self, life: &Life, canvas: &mut impl Canvas) {
        let (w, h) = self.board_size(life);
        for x in 0..=life.width() {
            let px = x as f32 * self.cell_size;
            canvas.line(px, 0.0, px, h, self.palette.grid);
        }
        for y in 0..=life.height() {
            let py = y as f32 * self.cell_size;
            canvas.line(0.0, py, w, py, self.palette.grid);
        }
    }
}
