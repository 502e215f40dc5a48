// driver.rs - Per-frame control state: pause, single step and reseeding

use log::{debug, info, trace};

use crate::config::Config;
use crate::life::Life;
use crate::patterns::Scene;
use crate::render::{Canvas, View};

/// What a key press asks the driver to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    /// Advance exactly one generation, then stay paused.
    Step,
    ToggleGrid,
    Clear,
    Seed(Scene),
}

/// Owns the simulation and everything about running it that the
/// engine does not care about.
pub struct Driver {
    life: Life,
    view: View,
    paused: bool,
    step_pending: bool,
}

impl Driver {
    pub fn new(config: &Config) -> Self {
        let mut life = Life::new(config.grid_width, config.grid_height);
        match config.pattern {
            Some(pattern) => {
                pattern.place_centered(&mut life);
                info!("Placed {} at the center", pattern.name);
            }
            None => {
                config.scene.seed(&mut life);
                info!("Seeded {} with {} live cells", config.scene.name(), life.population());
            }
        }

        let mut view = View::new(config.cell_size);
        view.show_grid = config.show_grid;

        Self {
            life,
            view,
            paused: config.start_paused,
            step_pending: false,
        }
    }

    pub fn life(&self) -> &Life {
        &self.life
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::TogglePause => {
                self.paused = !self.paused;
                info!(
                    "{} at generation {}",
                    if self.paused { "Paused" } else { "Resumed" },
                    self.life.generation()
                );
            }
            Command::Step => {
                self.step_pending = true;
                debug!("Single step requested");
            }
            Command::ToggleGrid => {
                self.view.show_grid = !self.view.show_grid;
                debug!("Gridlines {}", if self.view.show_grid { "on" } else { "off" });
            }
            Command::Clear => {
                self.life.clear();
                debug!("Cleared the board");
            }
            Command::Seed(scene) => {
                scene.seed(&mut self.life);
                info!("Seeded {} with {} live cells", scene.name(), self.life.population());
            }
        }
    }

    /// Runs the simulation part of one frame. Returns whether a
    /// generation was computed.
    pub fn tick(&mut self) -> bool {
        if self.paused && !self.step_pending {
            return false;
        }

        self.life.step();
        trace!(
            "Generation {}: {} live cells",
            self.life.generation(),
            self.life.population()
        );

        if self.step_pending {
            self.step_pending = false;
            self.paused = true;
        }
        true
    }

    pub fn render(&self, canvas: &mut impl Canvas) {
        self.view.render(&self.life, self.paused, canvas);
    }

    /// One full frame: apply input, step if due, draw.
    pub fn frame(
        &mut self,
        commands: impl IntoIterator<Item = Command>,
        step_due: bool,
        canvas: &mut impl Canvas,
    ) {
        for command in commands {
            self.apply(command);
        }
        if step_due {
            self.tick();
        }
        self.render(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(paused: bool) -> Driver {
        Driver::new(&Config {
            grid_width: 12,
            grid_height: 12,
            scene: Scene::GosperGun,
            start_paused: paused,
            ..Config::default()
        })
    }

    #[test]
    fn paused_does_not_step() {
        let mut driver = small(true);
        assert!(!driver.tick());
        assert_eq!(driver.life().generation(), 0);
    }

    #[test]
    fn single_step_leaves_paused() {
        let mut driver = small(true);
        driver.apply(Command::Step);
        assert!(driver.tick());
        assert!(!driver.tick());
        assert_eq!(driver.life().generation(), 1);
        assert!(driver.is_paused());
    }

    #[test]
    fn step_while_running_pauses_after_it() {
        let mut driver = small(false);
        assert!(driver.tick());
        driver.apply(Command::Step);
        assert!(driver.tick());
        assert!(driver.is_paused());
        assert_eq!(driver.life().generation(), 2);
    }

    #[test]
    fn single_pattern_replaces_scene() {
        let driver = Driver::new(&Config {
            pattern: Some(&crate::patterns::GLIDER),
            ..Config::default()
        });
        assert_eq!(driver.life().population(), 5);
        assert!(driver.life().is_alive(49, 38));
    }

    #[test]
    fn toggles_and_reseeds() {
        let mut driver = small(false);
        driver.apply(Command::TogglePause);
        assert!(driver.is_paused());
        driver.apply(Command::ToggleGrid);
        assert!(!driver.view().show_grid);
        driver.apply(Command::Clear);
        assert_eq!(driver.life().population(), 0);
        driver.apply(Command::Seed(Scene::Chaotic));
        assert_eq!(driver.life().generation(), 0);
    }
}
