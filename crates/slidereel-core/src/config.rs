use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default = "default_slides")]
    pub slides: Vec<SlideConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            slider: SliderConfig::default(),
            ui: UiConfig::default(),
            slides: default_slides(),
        }
    }
}

/// Carousel behaviour options.
///
/// Host references (`caption`, `mask`, `navigation`, `next`, `prev`) name
/// parts of the rendering host. Leaving one out disables that part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Keep every caption visible instead of fading them around transitions
    #[serde(default)]
    pub always_show_captions: bool,
    /// Duration of a single-step slide
    #[serde(default)]
    pub animation_duration: AnimationDuration,
    /// Duration of a direct multi-item jump (falls back to `animation_duration`)
    #[serde(default)]
    pub jump_duration: Option<AnimationDuration>,
    /// Center the active item on the mask
    #[serde(default = "default_true")]
    pub center_items: bool,
    /// Enable keyboard navigation through `next_key` / `prev_key`
    #[serde(default = "default_true")]
    pub keys: bool,
    /// Key code(s) moving forward (39 = right arrow)
    #[serde(default = "default_next_key")]
    pub next_key: KeyCodes,
    /// Key code(s) moving backward (37 = left arrow)
    #[serde(default = "default_prev_key")]
    pub prev_key: KeyCodes,
    /// Auto-advance interval in milliseconds (0 = disabled)
    #[serde(default)]
    pub slider_interval_ms: u64,
    /// Navigate to distant indices one step at a time instead of jumping
    #[serde(default)]
    pub step_by_step: bool,
    #[serde(default = "default_caption")]
    pub caption: Option<String>,
    #[serde(default = "default_mask")]
    pub mask: Option<String>,
    #[serde(default)]
    pub navigation: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            always_show_captions: false,
            animation_duration: AnimationDuration::default(),
            jump_duration: None,
            center_items: default_true(),
            keys: default_true(),
            next_key: default_next_key(),
            prev_key: default_prev_key(),
            slider_interval_ms: 0,
            step_by_step: false,
            caption: default_caption(),
            mask: default_mask(),
            navigation: None,
            next: None,
            prev: None,
        }
    }
}

impl SliderConfig {
    pub fn step_duration(&self) -> Duration {
        self.animation_duration.as_duration()
    }

    pub fn jump_duration(&self) -> Duration {
        self.jump_duration
            .unwrap_or(self.animation_duration)
            .as_duration()
    }

    /// Auto-advance interval, `None` when disabled
    pub fn slider_interval(&self) -> Option<Duration> {
        (self.slider_interval_ms > 0).then(|| Duration::from_millis(self.slider_interval_ms))
    }

    pub fn captions_enabled(&self) -> bool {
        self.caption.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// Whether captions are faded in and out around transitions
    pub fn captions_managed(&self) -> bool {
        !self.always_show_captions && self.captions_enabled()
    }

    pub fn navigation_enabled(&self) -> bool {
        self.navigation.as_deref().is_some_and(|n| !n.is_empty())
    }

    pub fn buttons_enabled(&self) -> (bool, bool) {
        let enabled = |s: &Option<String>| s.as_deref().is_some_and(|v| !v.is_empty());
        (enabled(&self.prev), enabled(&self.next))
    }

    pub fn mask_enabled(&self) -> bool {
        self.mask.as_deref().is_some_and(|m| !m.is_empty())
    }
}

/// Animation duration, given either in milliseconds or as a named speed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnimationDuration {
    Millis(u64),
    #[default]
    Slow,
    Normal,
    Fast,
}

impl AnimationDuration {
    pub fn as_millis(&self) -> u64 {
        match self {
            AnimationDuration::Millis(ms) => *ms,
            AnimationDuration::Slow => 600,
            AnimationDuration::Normal => 400,
            AnimationDuration::Fast => 200,
        }
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(self.as_millis())
    }
}

impl Serialize for AnimationDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            AnimationDuration::Millis(ms) => serializer.serialize_u64(*ms),
            AnimationDuration::Slow => serializer.serialize_str("slow"),
            AnimationDuration::Normal => serializer.serialize_str("normal"),
            AnimationDuration::Fast => serializer.serialize_str("fast"),
        }
    }
}

// Accept either a number of milliseconds or one of "slow", "normal", "fast"
impl<'de> Deserialize<'de> for AnimationDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        use std::fmt;

        struct DurationVisitor;

        impl<'de> Visitor<'de> for DurationVisitor {
            type Value = AnimationDuration;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("milliseconds or one of \"slow\", \"normal\", \"fast\"")
            }

            fn visit_u64<E>(self, value: u64) -> Result<AnimationDuration, E>
            where
                E: de::Error,
            {
                Ok(AnimationDuration::Millis(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<AnimationDuration, E>
            where
                E: de::Error,
            {
                u64::try_from(value)
                    .map(AnimationDuration::Millis)
                    .map_err(|_| E::custom(format!("negative duration: {}", value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<AnimationDuration, E>
            where
                E: de::Error,
            {
                match value {
                    "slow" => Ok(AnimationDuration::Slow),
                    "normal" => Ok(AnimationDuration::Normal),
                    "fast" => Ok(AnimationDuration::Fast),
                    other => Err(E::unknown_variant(other, &["slow", "normal", "fast"])),
                }
            }
        }

        deserializer.deserialize_any(DurationVisitor)
    }
}

/// One key code or a set of key codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyCodes {
    One(u16),
    Many(Vec<u16>),
}

impl KeyCodes {
    pub fn contains(&self, code: u16) -> bool {
        match self {
            KeyCodes::One(c) => *c == code,
            KeyCodes::Many(codes) => codes.contains(&code),
        }
    }

    pub fn codes(&self) -> Vec<u16> {
        match self {
            KeyCodes::One(c) => vec![*c],
            KeyCodes::Many(codes) => codes.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while a slide animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Width of a single slide in terminal cells
    #[serde(default = "default_item_width")]
    pub item_width: u16,
    /// Easing curve used for slide animations
    #[serde(default)]
    pub easing: EasingType,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            item_width: default_item_width(),
            easing: EasingType::default(),
            log_level: default_log_level(),
        }
    }
}

/// Easing function type for slide animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// No easing (jump to the end)
    None,
    /// Constant speed
    Linear,
    /// Cubic ease-out
    #[default]
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideConfig {
    pub title: String,
    #[serde(default)]
    pub caption: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_next_key() -> KeyCodes {
    KeyCodes::One(39)
}

fn default_prev_key() -> KeyCodes {
    KeyCodes::One(37)
}

fn default_caption() -> Option<String> {
    Some(".caption".to_string())
}

fn default_mask() -> Option<String> {
    Some(".mask".to_string())
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_item_width() -> u16 {
    24
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_slides() -> Vec<SlideConfig> {
    [
        ("Harbour at dawn", Some("Fishing boats leaving the quay")),
        ("Old town", Some("Cobblestones after the rain")),
        ("Lighthouse", None),
        ("Cliff path", Some("Looking north along the coast")),
        ("Market day", Some("Saturday stalls on the square")),
        ("Night ferry", Some("Last crossing of the evening")),
    ]
    .into_iter()
    .map(|(title, caption)| SlideConfig {
        title: title.to_string(),
        caption: caption.map(str::to_string),
    })
    .collect()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, falling back to defaults when absent
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/slidereel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("slidereel")
            .join("config.toml")
    }

    /// Directory holding the log file
    pub fn data_dir(&self) -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("slidereel")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SliderConfig::default();
        assert!(!config.always_show_captions);
        assert_eq!(config.animation_duration, AnimationDuration::Slow);
        assert!(config.center_items);
        assert!(config.keys);
        assert_eq!(config.next_key, KeyCodes::One(39));
        assert_eq!(config.prev_key, KeyCodes::One(37));
        assert_eq!(config.slider_interval(), None);
        assert!(!config.step_by_step);
        assert!(config.captions_managed());
        assert!(!config.navigation_enabled());
    }

    #[test]
    fn test_named_and_numeric_durations() {
        let config = AppConfig::from_toml(
            r#"
            [slider]
            animation_duration = "fast"
            jump_duration = 900
            "#,
        )
        .unwrap();
        assert_eq!(config.slider.step_duration(), Duration::from_millis(200));
        assert_eq!(config.slider.jump_duration(), Duration::from_millis(900));
    }

    #[test]
    fn test_jump_duration_falls_back_to_step_duration() {
        let config = AppConfig::from_toml("[slider]\nanimation_duration = 250\n").unwrap();
        assert_eq!(config.slider.jump_duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_unknown_speed_is_config_error() {
        let err = AppConfig::from_toml("[slider]\nanimation_duration = \"glacial\"\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_key_code_sets() {
        let config = AppConfig::from_toml(
            r#"
            [slider]
            next_key = [39, 76]
            prev_key = 72
            "#,
        )
        .unwrap();
        assert!(config.slider.next_key.contains(76));
        assert!(config.slider.next_key.contains(39));
        assert!(!config.slider.next_key.contains(37));
        assert_eq!(config.slider.prev_key.codes(), vec![72]);
    }

    #[test]
    fn test_disabled_host_parts() {
        let config = AppConfig::from_toml(
            r#"
            [slider]
            caption = ""
            navigation = ".pager"
            next = ".next"
            slider_interval_ms = 3000
            "#,
        )
        .unwrap();
        assert!(!config.slider.captions_enabled());
        assert!(!config.slider.captions_managed());
        assert!(config.slider.navigation_enabled());
        assert_eq!(config.slider.buttons_enabled(), (false, true));
        assert_eq!(config.slider.slider_interval(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_slides_from_toml() {
        let config = AppConfig::from_toml(
            r#"
            [[slides]]
            title = "One"
            caption = "First"

            [[slides]]
            title = "Two"
            "#,
        )
        .unwrap();
        assert_eq!(config.slides.len(), 2);
        assert_eq!(config.slides[1].caption, None);
    }

    #[test]
    fn test_missing_file_gives_default_slides() {
        let config = AppConfig::load_from(Path::new("/nonexistent/slidereel.toml")).unwrap();
        assert_eq!(config.slides.len(), 6);
    }

    #[test]
    fn test_save_to_writes_loadable_toml() {
        let dir = std::env::temp_dir().join(format!("slidereel-config-{}", std::process::id()));
        let path = dir.join("config.toml");

        let mut config = AppConfig::default();
        config.slider.step_by_step = true;
        config.slider.animation_duration = AnimationDuration::Fast;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert!(loaded.slider.step_by_step);
        assert_eq!(loaded.slider.animation_duration, AnimationDuration::Fast);
        assert_eq!(loaded.slides, config.slides);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
