use crate::geometry::{Point, Rectangle, Size};
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub policy: PolicyConfig,
    pub source: SourceConfig,
    pub desktop: DesktopConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    /// Полная директива EnvFilter; если пусто, строится из `level`
    pub filter: String,
}

/// Какая политика оконного менеджера подключается при старте
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Alt-жесты, тач и клавиатурные команды поверх canonical
    #[default]
    Gesture,
    /// Только click-to-focus
    Canonical,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub kind: PolicyKind,
    pub min_width: i32,
    pub min_height: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Пауза между событиями сценария в dry-run режиме
    pub replay_interval_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub bounds: Option<Rectangle>,
    pub windows: Vec<WindowSpec>,
}

/// Окно, с которым стартует рабочий стол в памяти
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WindowSpec {
    pub app: String,
    #[serde(default)]
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
            filter: String::new(),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            kind: PolicyKind::Gesture,
            min_width: 5,
            min_height: 5,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            replay_interval_ms: 250,
        }
    }
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            bounds: Some(Rectangle::new(Point::new(0, 0), Size::new(1920, 1080))),
            windows: vec![
                WindowSpec {
                    app: "terminal".to_string(),
                    title: "Terminal".to_string(),
                    x: 100,
                    y: 100,
                    width: 640,
                    height: 400,
                },
                WindowSpec {
                    app: "browser".to_string(),
                    title: "Browser".to_string(),
                    x: 800,
                    y: 200,
                    width: 800,
                    height: 600,
                },
                WindowSpec {
                    app: "terminal".to_string(),
                    title: "Terminal 2".to_string(),
                    x: 300,
                    y: 600,
                    width: 480,
                    height: 300,
                },
            ],
        }
    }
}

impl LoggingConfig {
    pub fn effective_filter(&self) -> String {
        if self.filter.trim().is_empty() {
            format!("wm_policy={}", self.level)
        } else {
            self.filter.clone()
        }
    }
}

impl PolicyConfig {
    pub fn minimum_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }
}

impl Config {
    /// Встроенные значения <- TOML файл <- переменные окружения `WMP_`
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        let figment = Self::defaults()
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("WMP_").split("__"));

        Self::extract(figment)
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))
    }

    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Self::extract(Self::defaults().merge(Toml::string(toml)))
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // Валидация настроек логирования
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "compact" | "full" => {}
            _ => anyhow::bail!("Неверный формат логирования: {}", self.logging.format),
        }

        // Минимальный размер окна
        if self.policy.min_width < 1 || self.policy.min_height < 1 {
            anyhow::bail!(
                "min_width и min_height должны быть не меньше 1, получено {}x{}",
                self.policy.min_width,
                self.policy.min_height
            );
        }

        if self.source.replay_interval_ms < 10 {
            anyhow::bail!("replay_interval_ms должно быть минимум 10");
        }

        if let Some(bounds) = self.desktop.bounds {
            if bounds.size.width < 1 || bounds.size.height < 1 {
                anyhow::bail!("Пустые границы экрана: {}", bounds);
            }
        }

        // Валидация окон рабочего стола
        for (i, window) in self.desktop.windows.iter().enumerate() {
            if window.app.is_empty() {
                anyhow::bail!("Пустой app в окне #{}", i + 1);
            }
            if window.width < 1 || window.height < 1 {
                anyhow::bail!(
                    "Неверный размер {}x{} окна #{}",
                    window.width,
                    window.height,
                    i + 1
                );
            }
        }

        Ok(())
    }
}
