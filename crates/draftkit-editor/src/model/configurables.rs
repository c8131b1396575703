use serde::{Deserialize, Serialize};

/// A user editable knob that a renderer exposes for its shapes.
///
/// Configurables drive the properties panel only. The value itself lives in
/// the shape appearance under [`Configurable::name`], so two shapes of the
/// same kind can still be styled independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Configurable {
    /// A horizontal slider for a bounded numeric value.
    Slider {
        name: String,
        label: String,
        min: f64,
        max: f64,
    },
    /// A spinner for a numeric value.
    Number {
        name: String,
        label: String,
        min: f64,
        max: f64,
    },
    /// A dropdown over a fixed set of choices.
    Selection {
        name: String,
        label: String,
        options: Vec<String>,
    },
    /// A color well.
    Color { name: String, label: String },
    /// A single line text input.
    Text { name: String, label: String },
}

impl Configurable {
    pub fn slider(name: &str, label: &str, min: f64, max: f64) -> Self {
        Self::Slider {
            name: name.to_string(),
            label: label.to_string(),
            min,
            max,
        }
    }

    pub fn number(name: &str, label: &str, min: f64, max: f64) -> Self {
        Self::Number {
            name: name.to_string(),
            label: label.to_string(),
            min,
            max,
        }
    }

    pub fn selection(name: &str, label: &str, options: &[&str]) -> Self {
        Self::Selection {
            name: name.to_string(),
            label: label.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    pub fn color(name: &str, label: &str) -> Self {
        Self::Color {
            name: name.to_string(),
            label: label.to_string(),
        }
    }

    pub fn text(name: &str, label: &str) -> Self {
        Self::Text {
            name: name.to_string(),
            label: label.to_string(),
        }
    }

    /// The appearance key this configurable edits.
    pub fn name(&self) -> &str {
        match self {
            Self::Slider { name, .. }
            | Self::Number { name, .. }
            | Self::Selection { name, .. }
            | Self::Color { name, .. }
            | Self::Text { name, .. } => name,
        }
    }

    /// The label shown next to the control.
    pub fn label(&self) -> &str {
        match self {
            Self::Slider { label, .. }
            | Self::Number { label, .. }
            | Self::Selection { label, .. }
            | Self::Color { label, .. }
            | Self::Text { label, .. } => label,
        }
    }
}
