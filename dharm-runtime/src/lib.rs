// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! The `dharm` library sits between the kinematics engine and its users.
//!
//! It provides the editable joint table with CSV import and export, arm
//! configuration files, the scene geometry a 3D presentation layer draws,
//! and the application service that ties these to the engine. The engine
//! itself lives in `dharm-core`, which is re-exported.

pub mod app;
pub mod logger;
pub mod scene;
pub mod table;

mod config;
mod error;

pub use self::config::*;
pub use self::error::{Error, Result};

pub use dharm_core;

/// Dharm runtime module containing various constants.
pub mod consts {
    /// Dharm runtime version.
    ///
    /// # Example
    ///
    /// ```
    /// use dharm::consts::VERSION;
    ///
    /// println!("Dharm runtime version: {}", VERSION);
    /// ```
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Default arm configuration file.
    pub const DEFAULT_CONFIG_PATH: &str = "/etc/dharm/arm.toml";
}

/// Read and parse a TOML configuration file.
pub fn from_file<T: serde::de::DeserializeOwned>(path: impl AsRef<std::path::Path>) -> Result<T> {
    let path = path.as_ref();

    log::debug!("Reading configuration from {}", path.display());

    let content = std::fs::read_to_string(path)?;

    Ok(toml::from_str(&content)?)
}
