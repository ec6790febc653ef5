use log::debug;

use crate::art::extract_art;
use crate::assets::TemplateSource;
use crate::cowsay::{build_balloon, DEFAULT_WRAP};
use crate::error::CowError;

pub const DEFAULT_COW: &str = "default";
pub const DEFAULT_MESSAGE: &str = "Hello, World!";

/// A named cow from a given source, ready to say things.
pub struct Cow<'a> {
    name: String,
    source: &'a dyn TemplateSource,
    wrap: i64,
}

impl<'a> Cow<'a> {
    pub fn new(name: &str, source: &'a dyn TemplateSource) -> Self {
        let name = if name.is_empty() { DEFAULT_COW } else { name };
        Cow {
            name: name.to_owned(),
            source,
            wrap: DEFAULT_WRAP as i64,
        }
    }

    pub fn with_wrap(mut self, wrap: i64) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Balloon, newline, art, newline.
    pub fn render(&self, msg: &str) -> Result<Vec<u8>, CowError> {
        let msg = if msg.trim().is_empty() { DEFAULT_MESSAGE } else { msg };
        let balloon = build_balloon(msg, self.wrap);

        debug!("rendering {:?} from {}", self.name, self.source.location());
        let template = self.source.load(&self.name)?;
        let art = extract_art(&template).map_err(|_| CowError::EmptyArt {
            name: self.name.clone(),
        })?;

        let mut out = Vec::with_capacity(balloon.len() + art.len() + 2);
        out.extend_from_slice(&balloon);
        out.push(b'\n');
        out.extend_from_slice(art);
        out.push(b'\n');
        Ok(out)
    }
}

/// One-shot form of [`Cow::render`].
pub fn render(
    name: &str,
    source: &dyn TemplateSource,
    msg: &str,
    wrap: i64,
) -> Result<Vec<u8>, CowError> {
    Cow::new(name, source).with_wrap(wrap).render(msg)
}
