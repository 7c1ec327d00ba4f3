//! Observable view attributes: width, height, padding, margin and focus.

use canvas_input_config::BoxEdges;

type ChangeListener<T> = Box<dyn FnMut(&T, &T)>;

/// A value with its own list of change listeners.
pub struct Attribute<T> {
    value: T,
    listeners: Vec<ChangeListener<T>>,
}

impl<T: Clone + PartialEq> Attribute<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Adds a listener called with `(old, new)` after each change.
    pub fn on_change(&mut self, listener: impl FnMut(&T, &T) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Stores `value`. Returns false, without notifying, if it is unchanged.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        let old = std::mem::replace(&mut self.value, value);
        for listener in &mut self.listeners {
            listener(&old, &self.value);
        }
        true
    }
}

/// The attribute set every input exposes to its host.
pub struct AttributeObservers {
    pub width: Attribute<f32>,
    pub height: Attribute<f32>,
    pub padding: Attribute<BoxEdges>,
    pub margin: Attribute<BoxEdges>,
    focus: Vec<Box<dyn FnMut(bool)>>,
}

impl AttributeObservers {
    pub fn new(width: f32, height: f32, padding: BoxEdges, margin: BoxEdges) -> Self {
        Self {
            width: Attribute::new(width),
            height: Attribute::new(height),
            padding: Attribute::new(padding),
            margin: Attribute::new(margin),
            focus: Vec::new(),
        }
    }

    /// Sets padding from a CSS-style edge list. Unparseable input is
    /// logged and ignored.
    pub fn set_padding(&mut self, spec: &str) -> bool {
        match BoxEdges::parse(spec) {
            Some(edges) => self.padding.set(edges),
            None => {
                tracing::warn!("Ignoring invalid padding '{spec}'");
                false
            }
        }
    }

    pub fn set_margin(&mut self, spec: &str) -> bool {
        match BoxEdges::parse(spec) {
            Some(edges) => self.margin.set(edges),
            None => {
                tracing::warn!("Ignoring invalid margin '{spec}'");
                false
            }
        }
    }

    pub fn on_focus_change(&mut self, listener: impl FnMut(bool) + 'static) {
        self.focus.push(Box::new(listener));
    }

    pub(crate) fn notify_focus(&mut self, focused: bool) {
        for listener in &mut self.focus {
            listener(focused);
        }
    }
}
