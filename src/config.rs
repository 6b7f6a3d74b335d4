//! Runtime knobs for the window and the frame loop.

use thiserror::Error;

use crate::sim::MOVE_DIVISOR;

/// Invalid [`Config`] values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("screen size {width}x{height} must be non-zero")]
    ZeroSize { width: usize, height: usize },

    #[error("target frame rate must be at least 1 fps")]
    ZeroFps,

    /// Frames would routinely last longer than movement is allowed to step.
    #[error("frame budget {frame} ms exceeds max step {step} ms")]
    FrameLongerThanStep { frame: u64, step: u64 },

    /// A single movement step would cover a whole cell or more.
    #[error("max step {0} ms must be between 1 and {max} ms", max = MOVE_DIVISOR as u64 - 1)]
    StepOutOfRange(u64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Frames finishing early sleep until this much time has passed.
    pub min_frame_ms: u64,
    /// Upper bound on the elapsed time fed to movement in one frame.
    pub max_step_ms: u64,
    /// How often render statistics are logged.
    pub stats_interval_ms: u64,
}

impl Default for Config {
    /// 800×600, ~60 fps (17 ms).
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            min_frame_ms: 17,
            max_step_ms: DEFAULT_MAX_STEP_MS,
            stats_interval_ms: 3_000,
        }
    }
}

/// Default movement clamp; raised for slow frame rates.
const DEFAULT_MAX_STEP_MS: u64 = 50;

/// Largest clamp ever derived; one step stays under a cell.
const MAX_STEP_LIMIT_MS: u64 = MOVE_DIVISOR as u64 - 1;

impl Config {
    /// Frame budget for a target rate, rounded to whole milliseconds and
    /// never below 1 ms.
    pub fn frame_ms_for_fps(fps: u32) -> Result<u64, ConfigError> {
        if fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        Ok(((1000.0 / fps as f64).round() as u64).max(1))
    }

    /// Defaults with the frame budget and movement clamp set for `fps`.
    ///
    /// The clamp leaves room for frames up to twice the budget.
    pub fn for_fps(fps: u32) -> Result<Self, ConfigError> {
        let min_frame_ms = Self::frame_ms_for_fps(fps)?;
        Ok(Self {
            min_frame_ms,
            max_step_ms: (min_frame_ms * 2).clamp(DEFAULT_MAX_STEP_MS, MAX_STEP_LIMIT_MS),
            ..Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_frame_ms == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if self.max_step_ms == 0 || self.max_step_ms as f64 >= MOVE_DIVISOR {
            return Err(ConfigError::StepOutOfRange(self.max_step_ms));
        }
        if self.min_frame_ms > self.max_step_ms {
            return Err(ConfigError::FrameLongerThanStep {
                frame: self.min_frame_ms,
                step: self.max_step_ms,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid_and_60_fps() {
        let cfg = Config::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(Config::frame_ms_for_fps(60), Ok(cfg.min_frame_ms));
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = Config {
            width: 0,
            ..Config::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ZeroSize {
                width: 0,
                height: 600
            })
        );
        assert_eq!(Config::frame_ms_for_fps(0), Err(ConfigError::ZeroFps));

        let cfg = Config {
            max_step_ms: 300,
            ..Config::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::StepOutOfRange(300)));
    }

    #[test]
    fn fps_rounding() {
        assert_eq!(Config::frame_ms_for_fps(30), Ok(33));
        assert_eq!(Config::frame_ms_for_fps(144), Ok(7));
        assert_eq!(Config::frame_ms_for_fps(2000), Ok(1));
    }

    #[test]
    fn very_high_fps_keeps_a_frame_cap() {
        assert_eq!(Config::frame_ms_for_fps(3000), Ok(1));
        assert_eq!(Config::frame_ms_for_fps(u32::MAX), Ok(1));
        let cfg = Config::for_fps(3000).unwrap();
        assert_eq!(cfg.min_frame_ms, 1);
        assert_eq!(cfg.validate(), Ok(()));

        let uncapped = Config {
            min_frame_ms: 0,
            ..Config::default()
        };
        assert_eq!(uncapped.validate(), Err(ConfigError::ZeroFps));
    }

    #[test]
    fn low_fps_raises_step_clamp() {
        let cfg = Config::for_fps(10).unwrap();
        assert_eq!(cfg.min_frame_ms, 100);
        assert_eq!(cfg.max_step_ms, 200);
        assert_eq!(cfg.validate(), Ok(()));

        assert_eq!(Config::for_fps(60).unwrap(), Config::default());

        let cfg = Config::for_fps(4).unwrap();
        assert_eq!(cfg.max_step_ms, 299);
        assert_eq!(cfg.validate(), Ok(()));

        // 3 fps = 333 ms frames, more than a cell per step
        let cfg = Config::for_fps(3).unwrap();
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::FrameLongerThanStep {
                frame: 333,
                step: 299
            })
        );
    }

    #[test]
    fn frame_longer_than_step_rejected() {
        let cfg = Config {
            min_frame_ms: 100,
            ..Config::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::FrameLongerThanStep {
                frame: 100,
                step: 50
            })
        );
    }
}
