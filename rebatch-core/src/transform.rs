use crate::errors::Error;
use crate::rule::{Action, Rule};
use std::path::{Path, PathBuf};

/// Compute the path a file would be renamed to under `rule`.
///
/// Pure and deterministic, performs no I/O and no collision checking. The
/// base name is split at its last `.`: the extension is everything from
/// and including that dot, so `archive.tar.gz` splits into `archive.tar` +
/// `.gz` and a dotless name has an empty extension.
pub fn apply_rule(path: &Path, rule: &Rule) -> Result<PathBuf, Error> {
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (stem, ext) = split_name(&name);

    let new_name = match rule.action {
        Action::Prefix => format!("{}{}{}", rule.parameter, stem, ext),
        Action::Suffix => format!("{}{}{}", stem, rule.parameter, ext),
        Action::Replace => {
            let (search, replacement) = rule.replace_parts()?;
            format!("{}{}", stem.replace(search, replacement), ext)
        },
        // A parameter containing a dot is rejected upstream; if one slips
        // through it is appended literally.
        Action::Extension => format!("{}.{}", stem, rule.parameter),
        Action::Lowercase => format!("{}{}", stem.to_lowercase(), ext),
        Action::Uppercase => format!("{}{}", stem.to_uppercase(), ext),
    };

    Ok(dir.join(new_name))
}

/// Split a base name into `(stem, extension)` at the last dot.
fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}
