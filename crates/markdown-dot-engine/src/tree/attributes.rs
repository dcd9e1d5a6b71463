use serde::Serialize;

/// Names an attribute slot that a pattern capture can fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AttrKey {
    Lang,
    Start,
    Href,
    Src,
    Alt,
    /// Open-ended attribute stored in the side-table.
    Other(String),
}

impl AttrKey {
    pub fn name(&self) -> &str {
        match self {
            AttrKey::Lang => "lang",
            AttrKey::Start => "start",
            AttrKey::Href => "href",
            AttrKey::Src => "src",
            AttrKey::Alt => "alt",
            AttrKey::Other(name) => name,
        }
    }
}

/// Rendered tag attributes.
///
/// The common attributes have typed slots; anything else lands in `extra`,
/// which keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attributes {
    pub lang: Option<String>,
    pub start: Option<u64>,
    pub href: Option<String>,
    pub src: Option<String>,
    pub alt: Option<String>,
    pub extra: Vec<(String, String)>,
}

impl Attributes {
    /// Sets an attribute from captured text.
    ///
    /// `start` only accepts a decimal number that fits a `u64`; anything
    /// else is logged and ignored.
    pub fn set(&mut self, key: &AttrKey, value: &str) {
        match key {
            AttrKey::Lang => self.lang = Some(value.to_string()),
            AttrKey::Start => match value.trim().parse::<u64>() {
                Ok(n) => self.start = Some(n),
                Err(err) => log::warn!("ignoring list start '{value}': {err}"),
            },
            AttrKey::Href => self.href = Some(value.to_string()),
            AttrKey::Src => self.src = Some(value.to_string()),
            AttrKey::Alt => self.alt = Some(value.to_string()),
            AttrKey::Other(name) => {
                if let Some(slot) = self.extra.iter_mut().find(|(k, _)| k == name) {
                    slot.1 = value.to_string();
                } else {
                    self.extra.push((name.clone(), value.to_string()));
                }
            }
        }
    }

    pub fn get(&self, key: &AttrKey) -> Option<String> {
        match key {
            AttrKey::Lang => self.lang.clone(),
            AttrKey::Start => self.start.map(|n| n.to_string()),
            AttrKey::Href => self.href.clone(),
            AttrKey::Src => self.src.clone(),
            AttrKey::Alt => self.alt.clone(),
            AttrKey::Other(name) => self
                .extra
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }

    /// All present attributes as `(name, value)` in render order.
    pub fn pairs(&self) -> Vec<(&str, String)> {
        let mut out = Vec::new();
        if let Some(lang) = &self.lang {
            out.push(("lang", lang.clone()));
        }
        if let Some(start) = self.start {
            out.push(("start", start.to_string()));
        }
        if let Some(href) = &self.href {
            out.push(("href", href.clone()));
        }
        if let Some(src) = &self.src {
            out.push(("src", src.clone()));
        }
        if let Some(alt) = &self.alt {
            out.push(("alt", alt.clone()));
        }
        for (k, v) in &self.extra {
            out.push((k.as_str(), v.clone()));
        }
        out
    }
}

/// Values that steer rendering but are never emitted as attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Values {
    /// Heading level, the length of the leading `#` run.
    pub level: Option<u8>,
}
