//! Waterfox editions and how their names appear on disk.

use anyhow::{bail, Result};
use std::fmt;
use std::str::FromStr;

const PREFIX: &str = "waterfox-";

/// File name suffixes recognised as installable packages.
pub const PACKAGE_SUFFIXES: &[&str] = &[".tar.bz2", ".tar.gz", ".AppImage"];

/// A named Waterfox edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    /// The legacy, XUL-extension compatible edition.
    Classic,
    /// The edition tracking current Firefox ESR.
    Current,
    /// Numbered generations: G3, G4, ...
    Generation(u8),
}

impl Variant {
    /// Lowercase name used in paths, e.g. `classic` or `g4`.
    #[must_use]
    pub fn slug(self) -> String {
        match self {
            Self::Classic => "classic".to_string(),
            Self::Current => "current".to_string(),
            Self::Generation(n) => format!("g{n}"),
        }
    }

    /// `waterfox-<slug>`: the app directory, launcher and icon basename.
    #[must_use]
    pub fn dir_name(self) -> String {
        format!("{PREFIX}{}", self.slug())
    }

    /// Name of the desktop entry file for this variant.
    #[must_use]
    pub fn desktop_file_name(self) -> String {
        format!("{}.desktop", self.dir_name())
    }

    /// Derive the variant from a downloaded package file name such as
    /// `waterfox-G4.0.1.en-US.linux-x86_64.tar.bz2`.
    #[must_use]
    pub fn from_package_name(file_name: &str) -> Option<Self> {
        if !is_package_file(file_name) {
            return None;
        }
        let rest = file_name.strip_prefix(PREFIX)?;
        parse_leading(rest)
    }

    /// Derive the variant from an installed app directory name. Only the
    /// exact `waterfox-<slug>` form is accepted.
    #[must_use]
    pub fn from_dir_name(dir_name: &str) -> Option<Self> {
        let rest = dir_name.strip_prefix(PREFIX)?;
        let variant = parse_leading(rest)?;
        (variant.slug() == rest).then_some(variant)
    }
}

/// True for `waterfox-*` files ending in one of [`PACKAGE_SUFFIXES`].
#[must_use]
pub fn is_package_file(file_name: &str) -> bool {
    file_name.starts_with(PREFIX)
        && PACKAGE_SUFFIXES.iter().any(|s| file_name.ends_with(s))
}

fn parse_leading(s: &str) -> Option<Variant> {
    let lower = s.to_ascii_lowercase();
    if lower.starts_with("classic") {
        return Some(Variant::Classic);
    }
    if lower.starts_with("current") {
        return Some(Variant::Current);
    }
    let digits: String = lower
        .strip_prefix('g')?
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    match digits.parse::<u8>() {
        Ok(n) if n > 0 => Some(Variant::Generation(n)),
        _ => None,
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classic => write!(f, "Classic"),
            Self::Current => write!(f, "Current"),
            Self::Generation(n) => write!(f, "G{n}"),
        }
    }
}

impl FromStr for Variant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match parse_leading(s) {
            Some(v) if v.slug().eq_ignore_ascii_case(s) => Ok(v),
            _ => bail!("Unknown Waterfox variant: {s}"),
        }
    }
}
