// Copyright 2024. The Tari Project
//
// Redistribution and use in source and binary forms, with or without modification, are permitted provided that the
// following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this list of conditions and the following
// disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice, this list of conditions and the
// following disclaimer in the documentation and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors may be used to endorse or promote
// products derived from this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES,
// INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL,
// SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY,
// WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE
// USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use config::{Config, Value};
use log::*;

use crate::configuration::ConfigurationError;

const LOG_TARGET: &str = "common::configuration::loader";

/// Names the configuration table a struct is deserialized from.
pub trait SubConfigPath {
    /// Dotted path of the table, e.g. `"autocctp"` for a `[autocctp]` TOML section.
    fn main_key_prefix() -> &'static str;
}

/// Loads a [`SubConfigPath`] struct, using its [`Default`] for every key that is missing from the supplied
/// [`Config`].
///
/// ```
/// use config::Config;
/// use serde::{Deserialize, Serialize};
/// use autocctp_common::{DefaultConfigLoader, SubConfigPath};
///
/// #[derive(Serialize, Deserialize)]
/// struct Greeter {
///     welcome_message: String,
///     goodbye_message: String,
/// }
/// impl Default for Greeter {
///     fn default() -> Self {
///         Self {
///             welcome_message: "welcome".into(),
///             goodbye_message: "bye bye".into(),
///         }
///     }
/// }
/// impl SubConfigPath for Greeter {
///     fn main_key_prefix() -> &'static str {
///         "greeter"
///     }
/// }
/// let config = Config::builder()
///     .set_override("greeter.goodbye_message", "see you later")
///     .unwrap()
///     .build()
///     .unwrap();
/// let greeter = Greeter::load_from(&config).unwrap();
/// assert_eq!(greeter.goodbye_message, "see you later");
/// assert_eq!(greeter.welcome_message, "welcome");
/// ```
pub trait DefaultConfigLoader:
    SubConfigPath + Default + serde::ser::Serialize + for<'de> serde::de::Deserialize<'de>
{
    fn load_from(config: &Config) -> Result<Self, ConfigurationError> {
        let default = <Self as Default>::default();
        let buf = serde_json::to_string(&default)?;
        let value: Value = serde_json::from_str(buf.as_str())?;
        let merged = Config::builder()
            .set_default(Self::main_key_prefix(), value)?
            .add_source(config.clone())
            .build()?;
        let loaded = merged.get(Self::main_key_prefix())?;
        debug!(
            target: LOG_TARGET,
            "Loaded configuration section '{}'",
            Self::main_key_prefix()
        );
        Ok(loaded)
    }
}

impl<C> DefaultConfigLoader for C where C: SubConfigPath + Default + serde::ser::Serialize + for<'de> serde::de::Deserialize<'de>
{}

#[cfg(test)]
mod test {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Limits {
        max_items: u32,
        name: String,
        tags: Vec<String>,
    }

    impl Default for Limits {
        fn default() -> Self {
            Self {
                max_items: 10,
                name: "limits".to_string(),
                tags: vec!["a".to_string()],
            }
        }
    }

    impl SubConfigPath for Limits {
        fn main_key_prefix() -> &'static str {
            "service.limits"
        }
    }

    #[test]
    fn it_uses_defaults_for_an_empty_config() {
        let config = Config::builder().build().unwrap();
        let limits = Limits::load_from(&config).unwrap();
        assert_eq!(limits, Limits::default());
    }

    #[test]
    fn it_overrides_individual_keys() {
        let config = Config::builder()
            .set_override("service.limits.max_items", 3)
            .unwrap()
            .build()
            .unwrap();
        let limits = Limits::load_from(&config).unwrap();
        assert_eq!(limits.max_items, 3);
        assert_eq!(limits.name, "limits");
    }

    #[test]
    fn it_loads_from_a_toml_source() {
        let toml = r#"
            [service.limits]
            name = "custom"
            tags = ["x", "y"]
        "#;
        let config = Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap();
        let limits = Limits::load_from(&config).unwrap();
        assert_eq!(limits.name, "custom");
        assert_eq!(limits.tags, vec!["x".to_string(), "y".to_string()]);
        assert_eq!(limits.max_items, 10);
    }

    #[test]
    fn it_rejects_values_of_the_wrong_type() {
        let config = Config::builder()
            .set_override("service.limits.max_items", "lots")
            .unwrap()
            .build()
            .unwrap();
        assert!(Limits::load_from(&config).is_err());
    }
}
