use anyhow::Result;
use serde::Deserialize;
use std::fs;

pub const DEFAULT_MANIFEST: &str = "testsdk.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bindings: BindingsConfig,
}

/// Kotlin package and class the host declares the bindings in.
///
/// `surface` refuses values that differ from the compiled JNI entry points.
#[derive(Debug, Deserialize, Clone)]
pub struct BindingsConfig {
    #[serde(default = "default_package")]
    pub package: String,
    #[serde(default = "default_class")]
    pub class: String,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
            class: default_class(),
        }
    }
}

fn default_package() -> String {
    crate::ffi::JNI_PACKAGE.to_string()
}

fn default_class() -> String {
    crate::ffi::JNI_CLASS.to_string()
}

/// Load and parse a testsdk.toml configuration file
pub fn load_config(path: &str) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            anyhow::anyhow!("could not find `{}`", path)
        } else {
            anyhow::anyhow!("failed to read `{}`: {}", path, e)
        }
    })?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse `{}`: {}", path, e))?;

    validate_package_name(&config.bindings.package)?;
    validate_class_name(&config.bindings.class)?;

    Ok(config)
}

/// Validate Android package name format
fn validate_package_name(package: &str) -> Result<()> {
    // Must have at least two parts (e.g., com.example)
    let parts: Vec<&str> = package.split('.').collect();
    if parts.len() < 2 {
        anyhow::bail!(
            "Invalid package name '{}'. Must have at least two parts (e.g., 'com.example')",
            package
        );
    }

    for (i, part) in parts.iter().enumerate() {
        let Some(first_char) = part.chars().next() else {
            anyhow::bail!("Invalid package name '{}'. Part {} is empty", package, i + 1);
        };

        if !first_char.is_ascii_lowercase() {
            anyhow::bail!(
                "Invalid package name '{}'. Part '{}' must start with a lowercase letter",
                package,
                part
            );
        }

        for ch in part.chars() {
            if !ch.is_ascii_lowercase() && !ch.is_ascii_digit() && ch != '_' {
                anyhow::bail!(
                    "Invalid package name '{}'. Part '{}' contains invalid character '{}'",
                    package,
                    part,
                    ch
                );
            }
        }
    }

    Ok(())
}

/// Validate the Kotlin class that declares the external functions
fn validate_class_name(class: &str) -> Result<()> {
    let Some(first_char) = class.chars().next() else {
        anyhow::bail!("Invalid class name: must not be empty");
    };

    if !first_char.is_ascii_uppercase() {
        anyhow::bail!(
            "Invalid class name '{}'. Must start with an uppercase letter",
            class
        );
    }

    if let Some(ch) = class.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        anyhow::bail!(
            "Invalid class name '{}'. Contains invalid character '{}'",
            class,
            ch
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_package_name_valid() {
        assert!(validate_package_name("com.example.testsdk").is_ok());
        assert!(validate_package_name("com.example.my_sdk").is_ok());
        assert!(validate_package_name("com.example.sdk2").is_ok());
    }

    #[test]
    fn test_validate_package_name_invalid() {
        // Too few parts
        assert!(validate_package_name("testsdk").is_err());

        // Starts with uppercase
        assert!(validate_package_name("Com.example.sdk").is_err());

        // Contains invalid characters
        assert!(validate_package_name("com.example.my-sdk").is_err());

        // Empty part
        assert!(validate_package_name("com..sdk").is_err());
    }

    #[test]
    fn test_validate_class_name() {
        assert!(validate_class_name("Testsdk").is_ok());
        assert!(validate_class_name("Math_2").is_ok());

        assert!(validate_class_name("").is_err());
        assert!(validate_class_name("testsdk").is_err());
        assert!(validate_class_name("Test-sdk").is_err());
    }

    #[test]
    fn test_default_bindings_config() {
        let config = Config::default();
        assert_eq!(config.bindings.package, "com.example.testsdk");
        assert_eq!(config.bindings.class, "Testsdk");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[bindings]\nclass = \"MathSdk\"\n").unwrap();
        assert_eq!(config.bindings.package, "com.example.testsdk");
        assert_eq!(config.bindings.class, "MathSdk");

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.bindings.class, "Testsdk");
    }
}
