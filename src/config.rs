use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::path::PathBuf;

/// Default volume mount used by the hosted OpenWebUI deployment.
pub const DEFAULT_DATA_MOUNT_PATH: &str = "/opt/render/project/src/data";

/// Runtime configuration for one fix run.
///
/// Loaded from defaults, then `USERNAME_FIX_*` variables, then the two
/// unprefixed variables `DATA_DIR` and `FORCE_USERNAME_FIX`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Display name to be corrected.
    pub wrong_name: String,
    /// Display name the account should end up with.
    pub correct_name: String,
    /// Appended to the database path to form the backup path.
    pub backup_suffix: String,
    /// Marker file created next to the database after a successful run.
    pub sentinel_file: String,
    pub db_file_name: String,
    /// Data directory probed before the candidate list.
    pub data_dir: Option<PathBuf>,
    /// Probed in order; relative entries resolve against the working directory.
    pub candidate_paths: Vec<PathBuf>,
    pub force_username_fix: ForceFlag,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrong_name: "Jessica Petree".to_string(),
            correct_name: "Jess Petree".to_string(),
            backup_suffix: ".pre_username_fix_backup".to_string(),
            sentinel_file: ".username_fix_applied".to_string(),
            db_file_name: "webui.db".to_string(),
            data_dir: None,
            candidate_paths: vec![
                PathBuf::from(DEFAULT_DATA_MOUNT_PATH).join("webui.db"),
                PathBuf::from("/app/data/webui.db"),
                PathBuf::from("/app/backend/data/webui.db"),
                PathBuf::from("/data/webui.db"),
                PathBuf::from("data/webui.db"),
            ],
            force_username_fix: ForceFlag::default(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Layered providers. The force flag is left out: env providers coerce
    /// `01` or `+1` into numbers, so it is read from the raw string in `load`.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("USERNAME_FIX_").ignore(&["force_username_fix"]))
            .merge(Env::raw().only(&["data_dir"]))
    }

    pub fn load() -> Result<Self, figment::Error> {
        let mut cfg: Config = Self::figment().extract()?;
        let raw = Env::var("FORCE_USERNAME_FIX")
            .or_else(|| Env::var("USERNAME_FIX_FORCE_USERNAME_FIX"));
        if let Some(raw) = raw {
            cfg.force_username_fix = ForceFlag::parse(&raw);
        }
        Ok(cfg)
    }

    pub fn force_rerun(&self) -> bool {
        self.force_username_fix.0
    }

    /// `data_dir` with surrounding whitespace stripped; blank means unset.
    pub fn data_dir(&self) -> Option<PathBuf> {
        let raw = self.data_dir.as_ref()?.to_string_lossy();
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}

/// Force-rerun switch. Truthy values are `1`, `true` and `yes`,
/// case-insensitive and ignoring surrounding whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ForceFlag(pub bool);

impl ForceFlag {
    pub fn parse(raw: &str) -> Self {
        let v = raw.trim().to_ascii_lowercase();
        ForceFlag(matches!(v.as_str(), "1" | "true" | "yes"))
    }
}

impl<'de> Deserialize<'de> for ForceFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FlagVisitor;

        impl de::Visitor<'_> for FlagVisitor {
            type Value = ForceFlag;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a boolean or a string")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<ForceFlag, E> {
                Ok(ForceFlag(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ForceFlag, E> {
                Ok(ForceFlag::parse(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<ForceFlag, E> {
                Ok(ForceFlag(false))
            }

            fn visit_none<E: de::Error>(self) -> Result<ForceFlag, E> {
                Ok(ForceFlag(false))
            }
        }

        deserializer.deserialize_any(FlagVisitor)
    }
}
