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

//! # Common configuration utilities
//!
//! Every autocctp component reads its settings from a section of a single [`config::Config`]. A component
//! describes where its section lives by implementing [`SubConfigPath`], after which [`DefaultConfigLoader`] can
//! produce it, falling back to the component's [`Default`] for any key the host did not set.
//!
//! ### Example
//!
//! ```
//! # use config::Config;
//! # use serde::{Deserialize, Serialize};
//! # use autocctp_common::{DefaultConfigLoader, SubConfigPath};
//! #[derive(Default, Serialize, Deserialize)]
//! struct RouterConfig {
//!     enabled: bool,
//!     label: String,
//! }
//! impl SubConfigPath for RouterConfig {
//!     fn main_key_prefix() -> &'static str {
//!         "router"
//!     }
//! }
//!
//! let config = Config::builder()
//!     .set_override("router.enabled", true)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//! let router = RouterConfig::load_from(&config).unwrap();
//! assert!(router.enabled);
//! assert_eq!(router.label, "");
//! ```

pub mod configuration;

pub use configuration::{ConfigList, ConfigurationError, DefaultConfigLoader, SubConfigPath};
