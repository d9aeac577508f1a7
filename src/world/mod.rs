//! The per-run shim surface a grading harness hands to a script.

use crate::color::ColorTable;
use crate::mock::{MockObject, Template};
use crate::value::Value;
use crate::vector::Vector;
use litemap::LiteMap;
use smol_str::SmolStr;
use tracing::debug;

#[cfg(test)]
mod tests;

/// Primitives the real library renders. Here they all construct mocks.
const PRIMITIVES: &[&str] = &[
    "arrow",
    "box",
    "cone",
    "curve",
    "cylinder",
    "ellipsoid",
    "helix",
    "label",
    "pyramid",
    "ring",
    "sphere",
];
/// Non-rendering surface: the display/timing no-ops and the plot helpers.
const AUXILIARY: &[&str] = &["canvas", "rate", "graph", "gcurve"];

/// Everything one grading run constructs against: the primitive template set
/// and the color table.
///
/// Each grading job builds its own `World`; nothing here is shared or
/// synchronized, since a script owns its mocks exclusively.
#[derive(Debug, Clone)]
pub struct World {
    templates: LiteMap<SmolStr, Template>,
    pub color: ColorTable,
}
impl World {
    pub fn new() -> Self {
        let color = ColorTable::standard();
        let white = color.get("white").unwrap_or(Vector::ZERO);
        let mut templates = LiteMap::new();
        for &name in PRIMITIVES {
            let mut template = Template::new(name)
                .with_default("pos", Vector::ZERO)
                .with_default("color", white);
            match name {
                "arrow" | "box" | "cone" | "cylinder" | "helix" | "pyramid" => {
                    template = template
                        .with_default("axis", Vector::new(1.0, 0.0, 0.0))
                        .with_default("up", Vector::new(0.0, 1.0, 0.0));
                }
                "ring" | "sphere" => {
                    template = template.with_default("radius", 1.0);
                }
                _ => {}
            }
            templates.insert(SmolStr::new_static(name), template);
        }
        for &name in AUXILIARY {
            templates.insert(SmolStr::new_static(name), Template::new(name));
        }
        // Legacy revisions constructed vectors through the mock path too.
        templates.insert(SmolStr::new_static("vector"), Template::new("vector"));
        Self { templates, color }
    }
    pub fn template(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }
    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter_values()
    }
    /// Construct a primitive by name.
    ///
    /// An unregistered name gets an empty template on the fly; construction
    /// never fails, no matter what the script asks for.
    pub fn instantiate<K: Into<SmolStr>, V: Into<Value>>(
        &self,
        name: &str,
        args: Vec<Value>,
        kwargs: impl IntoIterator<Item = (K, V)>,
    ) -> MockObject {
        if let Some(template) = self.templates.get(name) {
            template.instantiate(args, kwargs)
        } else {
            debug!(name, "no template registered, starting empty");
            let mut obj = MockObject::new(name);
            obj.invoke(args, kwargs);
            obj
        }
    }
}
impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
