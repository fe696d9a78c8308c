use std::sync::Arc;

use strum::{AsRefStr, Display, EnumString, VariantArray};
use tokio::sync::watch;

/// Cookie that carries a visitor's theme override.
pub const THEME_COOKIE: &str = "portfolio-theme";

#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Blue,
    Green,
    Purple,
    Orange,
    HighContrast,
}

impl Theme {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Blue => "Ocean Blue",
            Self::Green => "Nature Green",
            Self::Purple => "Royal Purple",
            Self::Orange => "Sunset Orange",
            Self::HighContrast => "High Contrast",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Light => "Clean and bright theme",
            Self::Dark => "Easy on the eyes",
            Self::Blue => "Cool and professional",
            Self::Green => "Fresh and vibrant",
            Self::Purple => "Creative and bold",
            Self::Orange => "Warm and energetic",
            Self::HighContrast => "Maximum accessibility",
        }
    }

    pub fn primary(&self) -> &'static str {
        match self {
            Self::Light => "#2563eb",
            Self::Dark => "#3b82f6",
            Self::Blue => "#0ea5e9",
            Self::Green => "#10b981",
            Self::Purple => "#8b5cf6",
            Self::Orange => "#f97316",
            Self::HighContrast => "#0000ff",
        }
    }

    pub fn accent(&self) -> &'static str {
        match self {
            Self::Light => "#f59e0b",
            Self::Dark => "#fbbf24",
            Self::Blue => "#06b6d4",
            Self::Green => "#34d399",
            Self::Purple => "#a78bfa",
            Self::Orange => "#fb923c",
            Self::HighContrast => "#ff0000",
        }
    }
}

/// Owns the site-wide default theme.
///
/// There is deliberately no global here: the manager lives in `AppState`
/// and is handed to whatever needs it. Interested parties subscribe
/// through an explicit [`watch`] handle instead of registering callbacks
/// on a singleton. Visitors override the default per browser via the
/// [`THEME_COOKIE`]; that never touches this value.
#[derive(Debug, Clone)]
pub struct Manager {
    tx: Arc<watch::Sender<Theme>>,
}

impl Manager {
    pub fn new(initial: Theme) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> Theme {
        *self.tx.borrow()
    }

    /// Changes the default and wakes every subscriber.
    pub fn set(&self, theme: Theme) {
        self.tx.send_replace(theme);
    }

    /// Light/dark flip; any other current theme goes to light.
    pub fn toggle(&self) {
        let next = match self.current() {
            Theme::Light => Theme::Dark,
            _ => Theme::Light,
        };
        self.set(next);
    }

    /// The theme after the current one in catalog order, wrapping around.
    pub fn next_theme(&self) -> Theme {
        let current = self.current();
        let variants = Theme::VARIANTS;
        let index = variants
            .iter()
            .position(|&t| t == current)
            .unwrap_or_default();
        variants[(index + 1) % variants.len()]
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.tx.subscribe()
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
