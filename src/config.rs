// config.rs - Startup settings read from the command line

use std::time::Duration;

use clap::{command, value_parser, Arg, ArgAction, ArgMatches};
use displaydoc::Display;
use thiserror::Error;

use crate::grid::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::patterns::{find_pattern, Pattern, Scene, PATTERNS};

pub const DEFAULT_CELL_SIZE: u32 = 8;
pub const DEFAULT_FPS: u32 = 10;

/// Errors from reading the startup settings.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// {0}
    Args(#[from] clap::Error),
    /// {0} should be a positive integer.
    NonPositive(&'static str),
    /// Unknown scene {0:?}, expected showcase, gosper-gun or chaotic.
    UnknownScene(String),
    /// Unknown pattern {0:?}.
    UnknownPattern(String),
    /// A {0} of {1} cells at {2}px per cell does not fit in a window.
    WindowTooLarge(&'static str, u32, u32),
}

/// Settings fixed for the lifetime of the window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub grid_width: usize,
    pub grid_height: usize,
    pub cell_size: u32,
    pub fps: u32,
    pub scene: Scene,
    /// Replaces the scene with this pattern alone, centered.
    pub pattern: Option<&'static Pattern>,
    pub start_paused: bool,
    pub show_grid: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_WIDTH,
            grid_height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            fps: DEFAULT_FPS,
            scene: Scene::default(),
            pattern: None,
            start_paused: false,
            show_grid: true,
        }
    }
}

impl Config {
    /// Parses `std::env::args`.
    pub fn from_args() -> Result<Self, ConfigError> {
        Self::parse_from(std::env::args_os())
    }

    pub fn parse_from<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = command!()
            .about("Conway's Game of Life on a bounded grid")
            .after_help(
                "Keys: Space pause/resume, N or Right step once, G gridlines, \
                 C clear, 1/2/3 reseed showcase/gosper-gun/chaotic",
            )
            .arg(number("width", "Grid width in cells", "100"))
            .arg(number("height", "Grid height in cells", "80"))
            .arg(number("cell-size", "Cell size in pixels", "8"))
            .arg(number("fps", "Generations per second", "10"))
            .arg(
                Arg::new("scene")
                    .long("scene")
                    .short('s')
                    .help("Starting board: showcase, gosper-gun or chaotic")
                    .default_value(Scene::default().name()),
            )
            .arg(
                Arg::new("pattern")
                    .long("pattern")
                    .short('p')
                    .help("Start from a single centered pattern instead of a scene")
                    .long_help(pattern_help()),
            )
            .arg(
                Arg::new("paused")
                    .long("paused")
                    .help("Start with the simulation paused")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("no-grid")
                    .long("no-grid")
                    .help("Hide the gridlines")
                    .action(ArgAction::SetTrue),
            )
            .try_get_matches_from(args)?;

        Self::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, ConfigError> {
        let scene_name = matches.get_one::<String>("scene").map_or("", String::as_str);
        let scene = Scene::from_name(scene_name)
            .ok_or_else(|| ConfigError::UnknownScene(scene_name.to_owned()))?;

        let pattern = match matches.get_one::<String>("pattern") {
            Some(name) => Some(
                find_pattern(name).ok_or_else(|| ConfigError::UnknownPattern(name.clone()))?,
            ),
            None => None,
        };

        let width = positive(matches, "width")?;
        let height = positive(matches, "height")?;
        let cell_size = positive(matches, "cell-size")?;
        fits_window("width", width, cell_size)?;
        fits_window("height", height, cell_size)?;

        Ok(Self {
            grid_width: width as usize,
            grid_height: height as usize,
            cell_size,
            fps: positive(matches, "fps")?,
            scene,
            pattern,
            start_paused: matches.get_flag("paused"),
            show_grid: !matches.get_flag("no-grid"),
        })
    }

    /// Inner window size in pixels.
    pub fn window_size(&self) -> [f32; 2] {
        let cell = self.cell_size as f32;
        [self.grid_width as f32 * cell, self.grid_height as f32 * cell]
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

fn number(name: &'static str, help: &'static str, default: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_name("N")
        .value_parser(value_parser!(u32))
        .default_value(default)
}

fn pattern_help() -> String {
    let names: Vec<_> = PATTERNS.iter().map(|p| p.name).collect();
    format!(
        "Start from a single centered pattern instead of a scene.\n\
         Known patterns (case-insensitive): {}",
        names.join(", ")
    )
}

/// Largest board edge, in pixels, accepted for the window.
const MAX_WINDOW_EDGE: u32 = 1 << 16;

fn fits_window(name: &'static str, cells: u32, cell_size: u32) -> Result<(), ConfigError> {
    match cells.checked_mul(cell_size) {
        Some(px) if px <= MAX_WINDOW_EDGE => Ok(()),
        _ => Err(ConfigError::WindowTooLarge(name, cells, cell_size)),
    }
}

fn positive(matches: &ArgMatches, name: &'static str) -> Result<u32, ConfigError> {
    match matches.get_one::<u32>(name).copied() {
        Some(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::NonPositive(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        Config::parse_from(std::iter::once("conway_life").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.window_size(), [800.0, 640.0]);
        assert_eq!(config.frame_interval(), Duration::from_millis(100));
    }

    #[test]
    fn overrides() {
        let config = parse(&[
            "--width", "40", "--height", "30", "--cell-size", "4", "--fps", "20",
            "--scene", "Chaotic", "--paused", "--no-grid",
        ])
        .unwrap();
        assert_eq!((config.grid_width, config.grid_height), (40, 30));
        assert_eq!(config.cell_size, 4);
        assert_eq!(config.fps, 20);
        assert_eq!(config.scene, Scene::Chaotic);
        assert!(config.start_paused);
        assert!(!config.show_grid);
    }

    #[test]
    fn rejects_zero_and_unknown_scene() {
        assert!(matches!(parse(&["--fps", "0"]), Err(ConfigError::NonPositive("fps"))));
        assert!(matches!(parse(&["--width", "0"]), Err(ConfigError::NonPositive("width"))));
        assert!(matches!(
            parse(&["--scene", "random"]),
            Err(ConfigError::UnknownScene(name)) if name == "random"
        ));
        assert!(matches!(parse(&["--height", "-3"]), Err(ConfigError::Args(_))));
        assert!(matches!(
            parse(&["--pattern", "spaceship"]),
            Err(ConfigError::UnknownPattern(_))
        ));
    }

    #[test]
    fn rejects_oversized_window() {
        assert!(matches!(
            parse(&["--width", "70000", "--cell-size", "70000"]),
            Err(ConfigError::WindowTooLarge("width", 70000, 70000))
        ));
        assert!(matches!(
            parse(&["--height", "10000", "--cell-size", "8"]),
            Err(ConfigError::WindowTooLarge("height", 10000, 8))
        ));
        let config = parse(&["--width", "8192", "--height", "1", "--cell-size", "8"]).unwrap();
        assert_eq!(config.window_size(), [65536.0, 8.0]);
    }

    #[test]
    fn pattern_by_name() {
        let config = parse(&["-p", "diehard"]).unwrap();
        assert_eq!(config.pattern.map(|p| p.name), Some("Diehard"));
    }
}
