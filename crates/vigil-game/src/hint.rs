//! Transient interaction hint
//!
//! A small icon + label pinned to an interactable in world space. Each call to
//! [`HintScheduler::show`] restarts a short countdown; the hint fades in softly
//! right after being shown, then fades out linearly as the countdown runs out.
//! Interactables call `show` every frame the player is in range, so the hint
//! stays up while the player lingers and disappears shortly after they leave.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vigil_core::{lerp, ConfigError};

/// Icon shown next to the hint label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HintIcon {
    /// Look at / inspect
    #[default]
    Eye,
    /// Operate a mechanism
    Gear,
    /// Pick up or open
    Hand,
    /// Talk, eat or drink
    Mouth,
}

impl HintIcon {
    /// Animation name the sprite sheet uses for this icon
    pub fn animation_name(&self) -> &'static str {
        match self {
            HintIcon::Eye => "eye",
            HintIcon::Gear => "gear",
            HintIcon::Hand => "hand",
            HintIcon::Mouth => "mouth",
        }
    }
}

/// Hint timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HintConfig {
    /// Countdown restarted by every `show`, in seconds
    pub max_duration: f32,
    /// Remaining time above which opacity is smoothed instead of set directly
    pub fade_threshold: f32,
    /// Smoothing rate of the fade-in phase, per second
    pub fade_in_rate: f32,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            max_duration: 0.5,
            fade_threshold: 0.45,
            fade_in_rate: 2.0,
        }
    }
}

impl HintConfig {
    /// Check the countdown and fade values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_duration > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "max_duration",
                value: self.max_duration,
            });
        }
        if !(0.0..=self.max_duration).contains(&self.fade_threshold) {
            return Err(ConfigError::FadeThresholdOutOfRange {
                threshold: self.fade_threshold,
                max_duration: self.max_duration,
            });
        }
        if !(self.fade_in_rate >= 0.0) {
            return Err(ConfigError::Negative {
                name: "fade_in_rate",
                value: self.fade_in_rate,
            });
        }
        Ok(())
    }
}

/// Owns the single on-screen interaction hint
#[derive(Debug, Clone)]
pub struct HintScheduler {
    /// Timing configuration
    pub config: HintConfig,
    label: String,
    icon: HintIcon,
    /// World position the hint is pinned to
    world_position: Vec2,
    remaining: f32,
    opacity: f32,
    visible: bool,
}

impl HintScheduler {
    /// Create a hidden hint with default timing
    pub fn new() -> Self {
        Self::with_config(HintConfig::default())
    }

    /// Create a hidden hint with custom timing
    pub fn with_config(config: HintConfig) -> Self {
        Self {
            config,
            label: String::new(),
            icon: HintIcon::default(),
            world_position: Vec2::ZERO,
            remaining: 0.0,
            opacity: 0.0,
            visible: false,
        }
    }

    /// Show (or re-show) the hint, restarting its countdown.
    ///
    /// Returns `true` when the icon changed, so the host can restart the icon animation.
    pub fn show(&mut self, label: impl Into<String>, icon: HintIcon, world_position: Vec2) -> bool {
        let label = label.into();
        let was_visible = self.visible;

        self.remaining = self.config.max_duration;
        self.visible = true;
        self.world_position = world_position;

        let icon_changed = self.icon != icon;
        if icon_changed {
            self.icon = icon;
        }

        if !was_visible || self.label != label {
            debug!(label = %label, icon = icon.animation_name(), "Showing interaction hint");
        }
        self.label = label;

        icon_changed
    }

    /// Hide the hint immediately. Safe to call repeatedly.
    pub fn hide(&mut self) {
        if self.visible {
            debug!(label = %self.label, "Hiding interaction hint");
        }
        self.visible = false;
    }

    /// Advance the countdown and fade (call each frame)
    pub fn tick(&mut self, delta: f32) {
        if self.remaining <= 0.0 {
            return;
        }

        self.remaining = (self.remaining - delta).max(0.0);

        // Two-phase curve: smoothed while fresh, linear once under the threshold.
        let target = self.remaining / self.config.max_duration;
        if self.remaining > self.config.fade_threshold {
            self.opacity = lerp(self.opacity, target, delta * self.config.fade_in_rate);
        } else {
            self.opacity = target;
        }

        self.expire_if_done();
    }

    /// Advance the countdown only, leaving opacity where it is.
    ///
    /// Used while a cutscene owns the camera: the hint still expires on time
    /// but does not animate.
    pub fn tick_frozen(&mut self, delta: f32) {
        if self.remaining <= 0.0 {
            return;
        }

        self.remaining = (self.remaining - delta).max(0.0);
        self.expire_if_done();
    }

    fn expire_if_done(&mut self) {
        if self.remaining == 0.0 {
            self.opacity = 0.0;
            self.hide();
        }
    }

    /// Whether the hint is drawn
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the countdown is still running
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Current opacity (0-1)
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Seconds left on the countdown
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Current label text
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current icon
    pub fn icon(&self) -> HintIcon {
        self.icon
    }

    /// World position the hint is pinned to
    pub fn world_position(&self) -> Vec2 {
        self.world_position
    }
}

impl Default for HintScheduler {
    fn default() -> Self {
        Self::new()
    }
}
