//! App-wide display settings passed explicitly to consumers.
//!
//! # Responsibility
//! - Persist the user's design style and theme mode in the preference area.
//! - Notify subscribers after every successful change.
//!
//! # Invariants
//! - A missing or unreadable settings slot yields `AppSettings::default()`.
//! - Subscribers only ever observe persisted values.
//! - Dropped receivers are pruned on the next broadcast.

use crate::prefs::{PreferenceArea, PrefsError};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::mpsc::{channel, Receiver, Sender};

const SETTINGS_NAMESPACE: &str = "settings";
const SETTINGS_SLOT_KEY: &str = "app_settings_v1";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignStyle {
    #[default]
    Classic,
    Minimal,
    Playful,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub design_style: DesignStyle,
    pub theme_mode: ThemeMode,
}

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Debug)]
pub enum SettingsError {
    Prefs(PrefsError),
    Encode(serde_json::Error),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prefs(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode settings: {err}"),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Prefs(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<PrefsError> for SettingsError {
    fn from(value: PrefsError) -> Self {
        Self::Prefs(value)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Owner of the current settings and their update channel.
pub struct SettingsHandle<'p> {
    prefs: &'p dyn PreferenceArea,
    current: AppSettings,
    subscribers: Vec<Sender<AppSettings>>,
}

impl<'p> SettingsHandle<'p> {
    /// Loads persisted settings, falling back to defaults.
    pub fn load(prefs: &'p dyn PreferenceArea) -> Self {
        let current = match prefs.get_string(SETTINGS_NAMESPACE, SETTINGS_SLOT_KEY) {
            Ok(raw) if raw.trim().is_empty() => AppSettings::default(),
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!("event=settings_load module=settings status=degraded error={err}");
                AppSettings::default()
            }),
            Err(err) => {
                warn!("event=settings_load module=settings status=degraded error={err}");
                AppSettings::default()
            }
        };

        Self {
            prefs,
            current,
            subscribers: Vec::new(),
        }
    }

    pub fn current(&self) -> AppSettings {
        self.current
    }

    /// Returns a receiver for every settings value persisted from now on.
    pub fn subscribe(&mut self) -> Receiver<AppSettings> {
        let (sender, receiver) = channel();
        self.subscribers.push(sender);
        receiver
    }

    /// Applies `change`, persists, then broadcasts the new value.
    ///
    /// Nothing is broadcast and the in-memory value is unchanged when
    /// persistence fails.
    pub fn update(&mut self, change: impl FnOnce(&mut AppSettings)) -> SettingsResult<AppSettings> {
        let mut next = self.current;
        change(&mut next);

        let encoded = serde_json::to_string(&next)?;
        self.prefs
            .set_string(SETTINGS_NAMESPACE, SETTINGS_SLOT_KEY, &encoded)?;
        self.current = next;

        self.subscribers
            .retain(|subscriber| subscriber.send(next).is_ok());
        info!(
            "event=settings_update module=settings status=ok subscribers={}",
            self.subscribers.len()
        );
        Ok(next)
    }
}
