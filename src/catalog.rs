//! Static mapping from clip key to the audio resource it plays.

use crate::settings::ClipEntry;
use crate::utils::title_case;
use dioxus::logger::tracing;

#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    pub name: String,
    pub src: String,
    pub label: String,
}

/// Immutable after construction. Declaration order is kept for rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SoundCatalog {
    clips: Vec<Clip>,
}

impl SoundCatalog {
    pub fn from_entries(entries: &[ClipEntry]) -> Self {
        let mut clips: Vec<Clip> = Vec::with_capacity(entries.len());
        for entry in entries {
            let name = entry.name.trim();
            let src = entry.src.trim();
            if name.is_empty() || src.is_empty() {
                tracing::warn!("[catalog] skipping clip with blank name or source");
                continue;
            }
            if clips.iter().any(|c| c.name == name) {
                tracing::warn!("[catalog] duplicate clip \"{name}\" ignored");
                continue;
            }
            let label = entry
                .label
                .clone()
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| title_case(name));
            clips.push(Clip {
                name: name.to_string(),
                src: src.to_string(),
                label,
            });
        }
        Self { clips }
    }

    pub fn get(&self, name: &str) -> Option<&Clip> {
        self.clips.iter().find(|c| c.name == name)
    }

    /// Resource locator for `name`, or `None` for keys the catalog doesn't know.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.get(name).map(|c| c.src.as_str())
    }

    pub fn clips(&self) -> impl Iterator<Item = &Clip> {
        self.clips.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.clips.len()
    }
}
