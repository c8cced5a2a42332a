use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::config::{self, Config, DEFAULT_MANIFEST};
use crate::ffi::{JNI_CLASS, JNI_PACKAGE};
use crate::surface::{self, Surface};

/// List every interface and function that crosses the binding boundary
pub fn execute(manifest_path: Option<&str>) -> Result<()> {
    let config = load_bindings_config(manifest_path)?;
    surface::check_bindings(&config.bindings)?;

    let surface = surface::exported_surface()?;

    println!(
        "{} {}.{} ({} interfaces, {} functions)",
        "Surface".green().bold(),
        JNI_PACKAGE,
        JNI_CLASS,
        surface.interfaces.len(),
        surface.functions.len()
    );
    print!("{}", render_surface(&surface));

    Ok(())
}

/// An explicit manifest must exist; the default one is optional.
fn load_bindings_config(manifest_path: Option<&str>) -> Result<Config> {
    match manifest_path {
        Some(path) => config::load_config(path),
        None if Path::new(DEFAULT_MANIFEST).exists() => config::load_config(DEFAULT_MANIFEST),
        None => Ok(Config::default()),
    }
}

/// Interface declarations first, then one block per function: Kotlin
/// declaration followed by the native symbol the library exports.
pub fn render_surface(surface: &Surface) -> String {
    let mut out = String::new();

    for interface in &surface.interfaces {
        out.push_str(&interface.kotlin_declaration());
        out.push('\n');
    }

    for function in &surface.functions {
        out.push_str(&function.kotlin_signature());
        if function.return_type.is_result {
            out.push_str("  // throws");
        }
        out.push('\n');
        out.push_str("    ");
        out.push_str(&function.jni_symbol(JNI_PACKAGE, JNI_CLASS));
        out.push('\n');
    }

    out
}
