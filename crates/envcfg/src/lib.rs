//! Load annotated configuration structs from environment variables.
//!
//! Each field carries an annotation of the form `key[,required][,default]`:
//!
//! - `key` is the environment variable to read.
//! - `required` (case-insensitive) makes an empty result an error.
//! - `default` is used when the variable is unset or empty.
//!
//! Supported field types are `String`, `i64` and `f64`.
//!
//! ```
//! use envcfg::{EnvConfig, env_config};
//!
//! env_config! {
//!     #[derive(Debug, Default)]
//!     pub struct Config {
//!         pub a: String = "A",
//!         pub b: i64 = "B,required",
//!         pub c: String = "C,,FOOBAR",
//!     }
//! }
//!
//! let env = std::collections::HashMap::from([
//!     ("A".to_string(), "hello".to_string()),
//!     ("B".to_string(), "42".to_string()),
//! ]);
//! let config = Config::from_env_with(&env).unwrap();
//! assert_eq!(config.a, "hello");
//! assert_eq!(config.b, 42);
//! assert_eq!(config.c, "FOOBAR");
//! ```

mod annotation;
mod constants;
mod field;
mod loader;
mod macros;

pub use annotation::{Annotation, parse_annotation};
pub use field::{EnvConfig, Field, Kind, Slot, Value};
pub use loader::{
    ConfigError, ConfigLoader, ConversionError, Environment, FnEnv, ProcessEnv, env_var_or_empty,
    from_fn, load,
};
