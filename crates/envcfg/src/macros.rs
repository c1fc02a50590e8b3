//! Declarative struct definitions with generated field registration.

/// Declare a configuration struct and implement [`EnvConfig`](crate::EnvConfig) for it.
///
/// Each field may carry an annotation of the form `"key[,required][,default]"`
/// after an `=`. Fields without one are never loaded, unless they are the
/// target of a required annotation without a key, in which case the field name
/// is used as the key.
///
/// `String`, `i64` and `f64` fields are loaded. Any other type is accepted in
/// the declaration but loading it with a key fails with
/// [`ConfigError::UnsupportedType`](crate::ConfigError::UnsupportedType).
/// Types must be written as a single token (`String`, not `std::string::String`).
///
/// ```
/// use envcfg::{EnvConfig, env_config};
/// use std::collections::HashMap;
///
/// env_config! {
///     #[derive(Debug, Default, PartialEq)]
///     pub struct Config {
///         /// Listen host.
///         pub host: String = "APP_HOST,,0.0.0.0",
///         pub port: i64 = "APP_PORT,required",
///         pub ratio: f64 = "APP_RATIO,,0.5",
///         pub scratch: String,
///     }
/// }
///
/// let env = HashMap::from([("APP_PORT".to_string(), "8080".to_string())]);
/// let config = Config::from_env_with(&env).unwrap();
/// assert_eq!(config.host, "0.0.0.0");
/// assert_eq!(config.port, 8080);
/// assert_eq!(config.ratio, 0.5);
/// assert_eq!(config.scratch, "");
/// ```
#[macro_export]
macro_rules! env_config {
    (@annotation) => {
        ::core::option::Option::None
    };
    (@annotation $annotation:literal) => {
        ::core::option::Option::Some($annotation)
    };
    (@slot String, $place:expr) => {
        $crate::Slot::Text(&mut $place)
    };
    (@slot i64, $place:expr) => {
        $crate::Slot::Integer(&mut $place)
    };
    (@slot f64, $place:expr) => {
        $crate::Slot::Float(&mut $place)
    };
    (@slot $other:tt, $place:expr) => {
        $crate::Slot::Unsupported {
            type_name: ::core::stringify!($other),
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:tt $(= $annotation:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::EnvConfig for $name {
            fn fields(&mut self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![
                    $(
                        $crate::Field::new(
                            ::core::stringify!($field),
                            $crate::env_config!(@annotation $($annotation)?),
                            $crate::env_config!(@slot $ty, self.$field),
                        ),
                    )*
                ]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{ConfigError, EnvConfig, Slot};
    use std::collections::HashMap;

    crate::env_config! {
        #[derive(Debug, Default, Clone, PartialEq)]
        struct Sample {
            a: String = "A",
            b: i64 = "B,required",
            c: String = "C,,FOOBAR",
            d: f64,
        }
    }

    crate::env_config! {
        #[derive(Debug, Default)]
        struct WithUnsupported {
            name: String = "NAME,,svc",
            verbose: bool = "VERBOSE,,true",
        }
    }

    crate::env_config! {
        #[derive(Debug, Default)]
        struct Empty {}
    }

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_fields_follow_declaration_order() {
        let mut sample = Sample::default();
        let fields = sample.fields();
        let names: Vec<_> = fields.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
        let annotations: Vec<_> = fields.iter().map(|f| f.annotation()).collect();
        assert_eq!(annotations, ["A", "B,required", "C,,FOOBAR", ""]);
    }

    #[test]
    fn test_slot_kinds_match_declared_types() {
        let mut sample = WithUnsupported::default();
        let fields = sample.fields();
        assert!(matches!(fields[0].slot(), Slot::Text(_)));
        assert!(matches!(
            fields[1].slot(),
            Slot::Unsupported { type_name: "bool" }
        ));
    }

    #[test]
    fn test_generated_impl_loads() {
        let config = Sample::from_env_with(&env(&[("A", "hello"), ("B", "42")])).unwrap();
        assert_eq!(
            config,
            Sample {
                a: "hello".to_string(),
                b: 42,
                c: "FOOBAR".to_string(),
                d: 0.0,
            }
        );
    }

    #[test]
    fn test_unsupported_field_fails_by_type_name() {
        let err = WithUnsupported::from_env_with(&env(&[])).unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedType("bool".to_string()));
    }

    #[test]
    fn test_empty_struct_loads() {
        assert!(Empty::from_env_with(&env(&[])).is_ok());
    }
}
