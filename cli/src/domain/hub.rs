//! Unity Hub command-line argument builders.

use anyhow::Result;

/// Build the argument list for `Unity Hub.exe -- --headless install`.
///
/// Modules are de-duplicated, keeping the first occurrence.
///
/// # Errors
///
/// Returns an error if `version` is blank or a module name is blank.
pub fn editor_install_args(version: &str, modules: &[String]) -> Result<Vec<String>> {
    let version = version.trim();
    anyhow::ensure!(!version.is_empty(), "Editor version must not be empty");

    let mut args: Vec<String> = ["--", "--headless", "install", "--version", version]
        .iter()
        .map(ToString::to_string)
        .collect();

    let mut seen: Vec<&str> = Vec::with_capacity(modules.len());
    for module in modules {
        let module = module.trim();
        anyhow::ensure!(!module.is_empty(), "Editor module names must not be empty");
        if seen.contains(&module) {
            continue;
        }
        seen.push(module);
        args.push("-m".to_string());
        args.push(module.to_string());
    }
    Ok(args)
}

/// Lower-case hex encoding for digests shown in CI logs.
#[must_use]
pub fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(char::from(HEX[(b >> 4) as usize]));
        out.push(char::from(HEX[(b & 0xf) as usize]));
    }
    out
}
