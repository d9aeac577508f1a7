//! Named color constants of the scripted API.

use crate::vector::Vector;
use litemap::LiteMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// The standard color names, each a unit-range RGB triple.
///
/// Built once per [`World`](crate::world::World) and handed to whatever needs
/// named colors; there is no process-wide table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorTable {
    entries: LiteMap<SmolStr, Vector>,
}
impl ColorTable {
    pub fn standard() -> Self {
        let mut entries = LiteMap::new();
        for (name, [r, g, b]) in [
            ("red", [1.0, 0.0, 0.0]),
            ("green", [0.0, 1.0, 0.0]),
            ("blue", [0.0, 0.0, 1.0]),
            ("purple", [0.4, 0.2, 0.6]),
            ("yellow", [1.0, 1.0, 0.0]),
            ("orange", [1.0, 0.6, 0.0]),
            ("cyan", [0.0, 1.0, 1.0]),
            ("magenta", [1.0, 0.0, 1.0]),
            ("black", [0.0, 0.0, 0.0]),
            ("white", [1.0, 1.0, 1.0]),
        ] {
            entries.insert(SmolStr::new_static(name), Vector::new(r, g, b));
        }
        Self { entries }
    }
    pub fn get(&self, name: &str) -> Option<Vector> {
        self.entries.get(name).copied()
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter_keys().map(|k| &**k)
    }
}
impl Default for ColorTable {
    fn default() -> Self {
        Self::standard()
    }
}
