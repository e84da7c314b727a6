use serde::Deserialize;
use thiserror::Error;

use crate::color::Palette;
use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub menu_paddle_speed_min: f32,
    pub menu_paddle_speed_max: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_ramp: f32,
    pub ball_serve_vy: f32,
    pub ball_respawn_vy: f32,
    pub ball_bounce_jitter: f32,
    pub ball_bounce_cooldown: f32,
    pub ball_respawn_delay: f32,
    pub fixed_dt: f32,
    pub max_dt: f32,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            menu_paddle_speed_min: Params::MENU_PADDLE_SPEED_MIN,
            menu_paddle_speed_max: Params::MENU_PADDLE_SPEED_MAX,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_ramp: Params::BALL_SPEED_RAMP,
            ball_serve_vy: Params::BALL_SERVE_VY,
            ball_respawn_vy: Params::BALL_RESPAWN_VY,
            ball_bounce_jitter: Params::BALL_BOUNCE_JITTER,
            ball_bounce_cooldown: Params::BALL_BOUNCE_COOLDOWN,
            ball_respawn_delay: Params::BALL_RESPAWN_DELAY,
            fixed_dt: Params::FIXED_DT,
            max_dt: Params::MAX_DT,
            palette: Palette::default(),
        }
    }
}

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("`{field}` must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f32 },
    #[error("`{field}` must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("`{field}` must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("menu paddle speed range is empty ({min} > {max})")]
    EmptySpeedRange { min: f32, max: f32 },
    #[error("`max_dt` ({max_dt}) must be at least `fixed_dt` ({fixed_dt})")]
    StepTooLarge { fixed_dt: f32, max_dt: f32 },
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the values describe a playable game
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_margin", self.paddle_margin),
            ("paddle_speed", self.paddle_speed),
            ("menu_paddle_speed_min", self.menu_paddle_speed_min),
            ("menu_paddle_speed_max", self.menu_paddle_speed_max),
            ("ball_radius", self.ball_radius),
            ("ball_speed_initial", self.ball_speed_initial),
            ("ball_speed_ramp", self.ball_speed_ramp),
            ("ball_serve_vy", self.ball_serve_vy),
            ("ball_respawn_vy", self.ball_respawn_vy),
            ("ball_bounce_jitter", self.ball_bounce_jitter),
            ("ball_bounce_cooldown", self.ball_bounce_cooldown),
            ("ball_respawn_delay", self.ball_respawn_delay),
            ("fixed_dt", self.fixed_dt),
            ("max_dt", self.max_dt),
        ];
        for (field, value) in all {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        let positive = [
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("menu_paddle_speed_min", self.menu_paddle_speed_min),
            ("ball_radius", self.ball_radius),
            ("ball_speed_initial", self.ball_speed_initial),
            ("fixed_dt", self.fixed_dt),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("paddle_margin", self.paddle_margin),
            ("ball_speed_ramp", self.ball_speed_ramp),
            ("ball_serve_vy", self.ball_serve_vy),
            ("ball_respawn_vy", self.ball_respawn_vy),
            ("ball_bounce_jitter", self.ball_bounce_jitter),
            ("ball_bounce_cooldown", self.ball_bounce_cooldown),
            ("ball_respawn_delay", self.ball_respawn_delay),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.menu_paddle_speed_min > self.menu_paddle_speed_max {
            return Err(ConfigError::EmptySpeedRange {
                min: self.menu_paddle_speed_min,
                max: self.menu_paddle_speed_max,
            });
        }

        if self.max_dt < self.fixed_dt {
            return Err(ConfigError::StepTooLarge {
                fixed_dt: self.fixed_dt,
                max_dt: self.max_dt,
            });
        }

        Ok(())
    }

    /// Get the left edge X position of a paddle
    pub fn paddle_x(&self, side: Side, arena_width: f32) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Clamp a paddle's top edge to the arena
    pub fn clamp_paddle_y(&self, y: f32, arena_height: f32) -> f32 {
        let max_y = (arena_height - self.paddle_height).max(0.0);
        y.clamp(0.0, max_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left, 1280.0), 30.0, "Left paddle X position");
        assert_eq!(
            config.paddle_x(Side::Right, 1280.0),
            1220.0,
            "Right paddle X position"
        );
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-10.0, 720.0), 0.0);
        assert_eq!(config.clamp_paddle_y(1000.0, 720.0), 720.0 - 250.0);
        assert_eq!(config.clamp_paddle_y(200.0, 720.0), 200.0);
    }

    #[test]
    fn test_clamp_when_arena_shorter_than_paddle() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(50.0, 100.0), 0.0);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config {
            ball_radius: 0.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "ball_radius",
                ..
            })
        ));

        let config = Config {
            ball_bounce_cooldown: -1.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { .. })
        ));

        let config = Config {
            menu_paddle_speed_min: 500.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptySpeedRange { .. })
        ));

        let config = Config {
            max_dt: 0.001,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StepTooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_values() {
        let config: Config = toml::from_str("max_dt = nan").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { field: "max_dt", .. })
        ));

        let config: Config = toml::from_str("ball_respawn_vy = inf").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                field: "ball_respawn_vy",
                ..
            })
        ));

        let config = Config {
            menu_paddle_speed_max: f32::INFINITY,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                field: "menu_paddle_speed_max",
                ..
            })
        ));

        let config = Config {
            ball_bounce_jitter: f32::NEG_INFINITY,
            ..Config::new()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NotFinite { .. })));
    }

    #[test]
    fn test_config_from_toml_uses_defaults_for_missing_fields() {
        let config: Config = toml::from_str(
            r#"
            paddle_speed = 450.0

            [palette]
            background = { r = 0, g = 0, b = 0 }
            "#,
        )
        .unwrap();
        assert_eq!(config.paddle_speed, 450.0);
        assert_eq!(config.paddle_height, Params::PADDLE_HEIGHT);
        assert_eq!(config.palette.background, crate::Rgb::BLACK);
    }
}
