//! Where cow templates come from: the set bundled into the binary, or a
//! directory (or single `.cow` file) on disk.

use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{include_dir, Dir};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::CowError;

static COWS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/cows");

const COW_EXT: &str = "cow";

/// Anything that can hand out raw template bytes by name.
pub trait TemplateSource {
    /// Human readable location, used in messages.
    fn location(&self) -> String;

    /// Names of every template available here, sorted.
    fn names(&self) -> Result<Vec<String>, CowError>;

    fn load(&self, name: &str) -> Result<Vec<u8>, CowError>;
}

/// Stem of `path` when it names a `.cow` file (extension matched
/// case-insensitively).
pub fn cow_file_stem(path: &Path) -> Option<&str> {
    let ext = path.extension()?.to_str()?;
    if !ext.eq_ignore_ascii_case(COW_EXT) {
        return None;
    }
    path.file_stem()?.to_str()
}

/// Cows compiled into the binary from `cows/`.
pub struct Embedded {
    names: Vec<String>,
}

impl Embedded {
    pub fn new() -> Self {
        let mut names: Vec<String> = COWS_DIR
            .files()
            .filter_map(|f| cow_file_stem(f.path()))
            .map(str::to_owned)
            .collect();
        names.sort();
        Embedded { names }
    }
}

impl Default for Embedded {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSource for Embedded {
    fn location(&self) -> String {
        "built-in cows".to_owned()
    }

    fn names(&self) -> Result<Vec<String>, CowError> {
        Ok(self.names.clone())
    }

    fn load(&self, name: &str) -> Result<Vec<u8>, CowError> {
        COWS_DIR
            .get_file(format!("{name}.{COW_EXT}"))
            .map(|f| f.contents().to_vec())
            .ok_or_else(|| CowError::TemplateNotFound {
                name: name.to_owned(),
                location: self.location(),
                source: None,
            })
    }
}

/// Cows read from disk. `path` is either a directory of `*.cow` files or a
/// single `.cow` file.
pub struct Directory {
    path: PathBuf,
}

impl Directory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Directory { path: path.into() }
    }

    fn single_file(&self) -> Option<&str> {
        cow_file_stem(&self.path)
    }
}

impl TemplateSource for Directory {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn names(&self) -> Result<Vec<String>, CowError> {
        if let Some(stem) = self.single_file() {
            return Ok(vec![stem.to_owned()]);
        }

        let list_err = |source| CowError::ListTemplates {
            path: self.path.clone(),
            source,
        };
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.path).map_err(list_err)? {
            let entry = entry.map_err(list_err)?;
            if entry.file_type().map_err(list_err)?.is_dir() {
                continue;
            }
            let path = entry.path();
            if let Some(stem) = cow_file_stem(&path) {
                names.push(stem.to_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    fn load(&self, name: &str) -> Result<Vec<u8>, CowError> {
        let file = match self.single_file() {
            Some(_) => self.path.clone(),
            None => self.path.join(format!("{name}.{COW_EXT}")),
        };
        debug!("reading cow file {}", file.display());
        fs::read(&file).map_err(|e| CowError::TemplateNotFound {
            name: name.to_owned(),
            location: file.display().to_string(),
            source: Some(e),
        })
    }
}

/// Picks a template name uniformly at random.
pub fn pick_random<R: Rng + ?Sized>(
    source: &dyn TemplateSource,
    rng: &mut R,
) -> Result<String, CowError> {
    let names = source.names()?;
    let name = names
        .choose(rng)
        .cloned()
        .ok_or_else(|| CowError::NoTemplatesAvailable {
            location: source.location(),
        })?;
    debug!("picked {name:?} out of {} cow(s)", names.len());
    Ok(name)
}
