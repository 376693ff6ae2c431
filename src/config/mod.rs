//! Policy configuration for the roster engine.
//!
//! Employee type profiles, split-shift parameters and branch formats are
//! policy data: [`PolicyConfig::default`] carries the canonical values and
//! [`ConfigLoader`] reads an equivalent set from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::ConfigLoader;
//!
//! let policy = ConfigLoader::load("./config/retail").unwrap().into_policy();
//! println!("Split days need {} blocks", policy.split_shift().blocks_per_day);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BranchFormat, FormatsConfig, PolicyConfig, ProfilesConfig, SplitShiftPolicy};
