use nospace_statics::resolve::DEFAULT_MAX_PASSES;
use sculptor::{AppAuthor, FileIO, ProjectInfo, impl_serde_str_toml};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// Check every program as if it began with `Strict`.
    pub strict: bool,
    /// Resolver passes allowed before a check is abandoned.
    pub max_passes: usize,
}

impl Default for Conf {
    fn default() -> Self {
        Conf { strict: false, max_passes: DEFAULT_MAX_PASSES }
    }
}

impl_serde_str_toml!(Conf);

impl AppAuthor for Conf {
    fn app_name() -> &'static str {
        "Nospace"
    }

    fn author() -> &'static str {
        "Nospace"
    }
}

impl Conf {
    /// Read `nospace.toml` from the user's config directory, writing out the
    /// defaults when there is none yet.
    pub fn load() -> Self {
        let path = Conf::config_dir().join("nospace.toml");
        let file_conf = FileIO::new(path.clone());
        file_conf.load().unwrap_or_else(|_| {
            log::warn!("Using default configuration; suppose to find one at `{}`.", path.display());
            let conf = Conf::default();
            if let Err(err) = file_conf.save(&conf) {
                log::warn!("Could not save configuration: {}", err);
            }
            conf
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sculptor::SerdeStr;

    #[test]
    fn missing_fields_take_defaults() {
        let conf = Conf::de_from_str("strict = true\n").unwrap();
        assert!(conf.strict);
        assert_eq!(conf.max_passes, DEFAULT_MAX_PASSES);
    }

    #[test]
    fn written_conf_reads_back() {
        let conf = Conf { strict: true, max_passes: 42 };
        let back = Conf::de_from_str(&conf.ser_to_string().unwrap()).unwrap();
        assert!(back.strict);
        assert_eq!(back.max_passes, 42);
    }
}
