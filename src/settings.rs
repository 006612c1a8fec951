//! Render and HUD settings
//!
//! Built once at startup from a quality preset. The browser build reads the
//! preset (and the FPS toggle) from the page's query string, native runs from
//! the environment. Nothing here is persisted.

use std::str::FromStr;

use thiserror::Error;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quality preset: {0:?}")]
pub struct UnknownPreset(pub String);

impl FromStr for QualityPreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(QualityPreset::Low),
            "medium" | "med" => Ok(QualityPreset::Medium),
            "high" => Ok(QualityPreset::High),
            _ => Err(UnknownPreset(s.to_string())),
        }
    }
}

impl QualityPreset {
    /// Maximum particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 40,
            QualityPreset::Medium => 200,
            QualityPreset::High => 400,
        }
    }
}

/// What gets drawn and shown
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Jump dust and crash bursts
    pub particles: bool,
    /// Drifting clouds
    pub clouds: bool,
    /// Scrolling dashes on the ground strip
    pub ground_texture: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,

            // Visual effects - all on by default
            particles: true,
            clouds: true,
            ground_texture: true,

            show_fps: false,
        }
    }
}

impl Settings {
    /// Settings for a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            // Low drops scenery for performance
            clouds: preset != QualityPreset::Low,
            ..Self::default()
        }
    }

    /// Settings from a URL query string such as `?quality=low&fps=1`.
    ///
    /// Unknown keys are ignored; a bad preset keeps the default one.
    pub fn from_query(query: &str) -> Self {
        let mut preset = QualityPreset::default();
        let mut show_fps = false;

        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "quality" => match value.parse() {
                    Ok(parsed) => preset = parsed,
                    Err(e) => log::warn!("{}, using {:?}", e, preset),
                },
                "fps" => show_fps = matches!(value, "" | "1" | "true" | "on"),
                _ => {}
            }
        }

        Self {
            show_fps,
            ..Self::from_preset(preset)
        }
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parsing() {
        assert_eq!("LOW".parse::<QualityPreset>(), Ok(QualityPreset::Low));
        assert_eq!("med".parse::<QualityPreset>(), Ok(QualityPreset::Medium));
        assert_eq!(
            "ultra".parse::<QualityPreset>(),
            Err(UnknownPreset("ultra".to_string()))
        );
    }

    #[test]
    fn test_particle_budget() {
        let mut settings = Settings::default();
        assert_eq!(settings.max_particles(), 200);
        settings.particles = false;
        assert_eq!(settings.max_particles(), 0);
        assert_eq!(Settings::from_preset(QualityPreset::Low).max_particles(), 40);
        assert_eq!(Settings::from_preset(QualityPreset::High).max_particles(), 400);
    }

    #[test]
    fn test_low_preset_drops_clouds() {
        assert!(!Settings::from_preset(QualityPreset::Low).clouds);
        assert!(Settings::from_preset(QualityPreset::High).clouds);
    }

    #[test]
    fn test_empty_query_is_default() {
        assert_eq!(Settings::from_query(""), Settings::default());
        assert_eq!(Settings::from_query("?"), Settings::default());
    }

    #[test]
    fn test_query_picks_preset_and_fps() {
        let settings = Settings::from_query("?quality=low&fps=1");
        assert_eq!(settings.quality, QualityPreset::Low);
        assert!(!settings.clouds);
        assert!(settings.show_fps);

        let settings = Settings::from_query("?debug&fps");
        assert_eq!(settings.quality, QualityPreset::Medium);
        assert!(settings.show_fps);
    }

    #[test]
    fn test_bad_preset_in_query_keeps_default() {
        let settings = Settings::from_query("?quality=ultra&fps=0");
        assert_eq!(settings, Settings::default());
    }
}
