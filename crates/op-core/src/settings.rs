//! Global library settings.
//!
//! [`Settings`] holds the process-wide defaults picked up by engine
//! constructors: the seed of a default-constructed Monte Carlo simulator and
//! the [`ValidationMode`] applied when an engine is not given one explicitly.
//! It is a singleton accessed via a `std::sync::OnceLock`.
//!
//! Changing a default only affects engines constructed afterwards.

use std::sync::{Mutex, OnceLock};

/// Seed used by a default-constructed simulator.
pub const DEFAULT_SEED: u64 = 42;

/// How an engine treats inputs outside their domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationMode {
    /// Validate every input before computing and report failures as
    /// errors; non-finite results are reported as numeric instability.
    #[default]
    Strict,
    /// Compute unconditionally and let NaN / ±∞ propagate.
    Permissive,
}

impl ValidationMode {
    /// `true` for [`ValidationMode::Strict`].
    pub fn is_strict(self) -> bool {
        matches!(self, ValidationMode::Strict)
    }
}

#[derive(Debug, Clone, Copy)]
struct Defaults {
    seed: u64,
    validation: ValidationMode,
}

/// Process-wide settings used by optpricer.
pub struct Settings {
    defaults: Mutex<Defaults>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            defaults: Mutex::new(Defaults {
                seed: DEFAULT_SEED,
                validation: ValidationMode::default(),
            }),
        })
    }

    fn defaults(&self) -> Defaults {
        // The guarded value is plain `Copy` data, so a poisoned lock still
        // holds a consistent value.
        *self
            .defaults
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn update(&self, f: impl FnOnce(&mut Defaults)) {
        let mut guard = self
            .defaults
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard);
    }

    /// Seed given to simulators built with `Default`.
    pub fn default_seed(&self) -> u64 {
        self.defaults().seed
    }

    /// Override the default simulator seed.
    pub fn set_default_seed(&self, seed: u64) {
        self.update(|d| d.seed = seed);
    }

    /// Validation mode given to engines built without an explicit one.
    pub fn validation_mode(&self) -> ValidationMode {
        self.defaults().validation
    }

    /// Override the default validation mode.
    pub fn set_validation_mode(&self, mode: ValidationMode) {
        self.update(|d| d.validation = mode);
    }

    /// Restore the built-in defaults (seed 42, strict validation).
    pub fn reset(&self) {
        self.update(|d| {
            d.seed = DEFAULT_SEED;
            d.validation = ValidationMode::default();
        });
    }
}
