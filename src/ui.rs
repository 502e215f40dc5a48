// ui.rs - eframe front end: keyboard in, painter out, fixed generation rate

use eframe::egui;
use egui::{Align2, Color32, FontId, Key, Painter, Pos2, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::driver::{Command, Driver};
use crate::patterns::Scene;
use crate::render::Canvas;

pub struct LifeApp {
    driver: Driver,
    last_update: Instant,
    update_interval: Duration,
}

impl LifeApp {
    pub fn new(config: &Config) -> Self {
        Self {
            driver: Driver::new(config),
            last_update: Instant::now(),
            update_interval: config.frame_interval(),
        }
    }
}

/// Maps this frame's key presses to driver commands.
fn poll_keys(ctx: &egui::Context) -> Vec<Command> {
    const BINDINGS: [(Key, Command); 8] = [
        (Key::Space, Command::TogglePause),
        (Key::N, Command::Step),
        (Key::ArrowRight, Command::Step),
        (Key::G, Command::ToggleGrid),
        (Key::C, Command::Clear),
        (Key::Num1, Command::Seed(Scene::Showcase)),
        (Key::Num2, Command::Seed(Scene::GosperGun)),
        (Key::Num3, Command::Seed(Scene::Chaotic)),
    ];

    ctx.input(|i| {
        BINDINGS
            .iter()
            .filter(|(key, _)| i.key_pressed(*key))
            .map(|&(_, command)| command)
            .collect()
    })
}

/// Draws onto an egui painter, offset to where the board was allocated.
struct PainterCanvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl Canvas for PainterCanvas<'_> {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color32) {
        let rect = Rect::from_min_size(self.origin + Vec2::new(x, y), Vec2::new(w, h));
        self.painter.rect_filled(rect, 0.0, color);
    }

    fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color32) {
        self.painter.line_segment(
            [self.origin + Vec2::new(x0, y0), self.origin + Vec2::new(x1, y1)],
            Stroke::new(1.0, color),
        );
    }

    fn text(&mut self, x: f32, y: f32, size: f32, text: &str, color: Color32) {
        self.painter.text(
            self.origin + Vec2::new(x, y),
            Align2::LEFT_TOP,
            text,
            FontId::proportional(size),
            color,
        );
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let commands = poll_keys(ctx);

        let step_due = self.last_update.elapsed() >= self.update_interval;
        if step_due {
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let (w, h) = self.driver.view().board_size(self.driver.life());
                let (response, painter) = ui.allocate_painter(Vec2::new(w, h), egui::Sense::hover());
                let mut canvas = PainterCanvas {
                    painter: &painter,
                    origin: response.rect.min,
                };
                self.driver.frame(commands, step_due, &mut canvas);
            });

        // Keep ticking at the configured rate
        ctx.request_repaint_after(self.update_interval.saturating_sub(self.last_update.elapsed()));
    }
}
