// crates/searchhit-core/src/config.rs

//! # Codec Configuration
//!
//! Buffer margins and the batch ceiling used by the wire encoder.
//!
//! Uses Figment to merge, lowest first: built-in defaults, an optional JSON
//! file, then `SEARCHHIT_*` environment variables (`SEARCHHIT_GROW_BY=4096`
//! sets `grow_by`).

use crate::error::{HitError, Result};
#[cfg(feature = "json")]
use figment::providers::{Format, Json};
use figment::providers::{Env, Serialized};
use figment::Figment;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
#[cfg(feature = "json")]
use std::path::Path;

static GLOBAL_CONFIG: OnceCell<CodecConfig> = OnceCell::new();

/// Prefix of the environment variables that override codec settings.
pub const ENV_PREFIX: &str = "SEARCHHIT_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Free capacity required before a top-level hit is written.
    pub min_free: usize,
    /// Free capacity required before each nested region is written.
    pub mid_write_free: usize,
    /// Capacity added whenever a margin is not met.
    pub grow_by: usize,
    /// Batch encoding reports `Full` once the buffer reaches this size.
    pub max_batch_size: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            min_free: 3000,
            mid_write_free: 2000,
            grow_by: 3000,
            max_batch_size: 65536,
        }
    }
}

impl CodecConfig {
    /// Process-wide configuration: defaults plus environment, loaded once.
    ///
    /// An invalid environment falls back to the defaults with a warning.
    pub fn global() -> &'static CodecConfig {
        GLOBAL_CONFIG.get_or_init(|| match CodecConfig::from_env() {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("ignoring codec environment overrides: {e}");
                CodecConfig::default()
            }
        })
    }

    /// The defaults as the lowest provider layer.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(CodecConfig::default()))
    }

    /// Defaults, then `SEARCHHIT_*` variables.
    pub fn from_env() -> Result<Self> {
        Self::from_figment(Self::figment().merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Defaults, then the JSON file at `path`, then `SEARCHHIT_*` variables.
    /// Fields missing from the file keep their defaults.
    #[cfg(feature = "json")]
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        // Figment skips missing files silently.
        if !path.is_file() {
            return Err(HitError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no config file at {}", path.display()),
            )));
        }
        Self::from_figment(
            Self::figment()
                .merge(Json::file(path))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    /// Extracts and validates a configuration from any provider stack.
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let cfg: CodecConfig = figment.extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grow_by == 0 {
            return Err(HitError::InvalidData("grow_by must be non-zero".into()));
        }
        if self.mid_write_free > self.min_free {
            return Err(HitError::InvalidData(format!(
                "mid_write_free ({}) exceeds min_free ({})",
                self.mid_write_free, self.min_free
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_are_valid() {
        let cfg = CodecConfig::from_figment(CodecConfig::figment()).unwrap();
        assert_eq!(cfg, CodecConfig::default());
        assert_eq!(cfg.max_batch_size, 65536);
    }

    #[test]
    fn mid_write_margin_cannot_exceed_top_margin() {
        let res = CodecConfig::from_figment(CodecConfig::figment().merge(("mid_write_free", 5000)));
        assert!(matches!(res, Err(HitError::InvalidData(_))));

        let res = CodecConfig::from_figment(CodecConfig::figment().merge(("grow_by", 0)));
        assert!(matches!(res, Err(HitError::InvalidData(_))));
    }

    #[test]
    fn env_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("SEARCHHIT_GROW_BY", 512);
            jail.set_env("SEARCHHIT_MIN_FREE", 4000);
            let cfg = CodecConfig::from_env().map_err(|e| e.to_string())?;
            assert_eq!(cfg.grow_by, 512);
            assert_eq!(cfg.min_free, 4000);
            assert_eq!(cfg.mid_write_free, 2000);
            Ok(())
        });
    }

    #[test]
    fn env_values_must_be_byte_counts() {
        Jail::expect_with(|jail| {
            jail.set_env("SEARCHHIT_MIN_FREE", "lots");
            assert!(matches!(CodecConfig::from_env(), Err(HitError::Config(_))));
            Ok(())
        });
    }

    #[cfg(feature = "json")]
    #[test]
    fn file_sits_between_defaults_and_env() {
        Jail::expect_with(|jail| {
            jail.create_file("codec.json", r#"{ "grow_by": 1024, "min_free": 5000 }"#)?;
            let cfg = CodecConfig::from_json_path("codec.json").map_err(|e| e.to_string())?;
            assert_eq!(cfg.grow_by, 1024);
            assert_eq!(cfg.min_free, 5000);
            assert_eq!(cfg.max_batch_size, 65536);

            jail.set_env("SEARCHHIT_GROW_BY", 2048);
            let cfg = CodecConfig::from_json_path("codec.json").map_err(|e| e.to_string())?;
            assert_eq!(cfg.grow_by, 2048);
            assert_eq!(cfg.min_free, 5000);

            assert!(matches!(
                CodecConfig::from_json_path("missing.json"),
                Err(HitError::Io(_))
            ));
            Ok(())
        });
    }
}
