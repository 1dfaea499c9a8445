//! Controlled and uncontrolled state.
//!
//! Some widget fields (`open`, `value`, `search_term`) can be owned either
//! by the host or by the widget. The choice is made once, when the widget
//! is built:
//!
//! - **Controlled**: the host owns the value. The widget only *requests*
//!   changes through the paired callback and waits for the host to push
//!   the new value back with a setter.
//! - **Uncontrolled**: the widget owns the value, applies changes itself
//!   and still reports them through the paired callback.

/// A field whose ownership is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Controllable<T> {
    value: T,
    controlled: bool,
}

impl<T: PartialEq> Controllable<T> {
    /// A field owned by the widget, starting at `initial`.
    pub fn uncontrolled(initial: T) -> Self {
        Self {
            value: initial,
            controlled: false,
        }
    }

    /// A field owned by the host, currently `value`.
    pub fn controlled(value: T) -> Self {
        Self {
            value,
            controlled: true,
        }
    }

    /// The current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns `true` if the host owns this field.
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Applies a change requested by the widget.
    ///
    /// Uncontrolled fields take the new value; controlled fields keep the
    /// host's value. Returns `true` if the stored value changed.
    pub fn request(&mut self, value: T) -> bool {
        if self.controlled || self.value == value {
            return false;
        }
        self.value = value;
        true
    }

    /// Stores a value pushed by the host. Returns `true` if it changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncontrolled_applies_requests() {
        let mut open = Controllable::uncontrolled(false);
        assert!(open.request(true));
        assert!(*open.get());
        assert!(!open.request(true));
    }

    #[test]
    fn test_controlled_waits_for_host() {
        let mut open = Controllable::controlled(false);
        assert!(!open.request(true));
        assert!(!*open.get());

        assert!(open.set(true));
        assert!(*open.get());
        assert!(open.is_controlled());
    }
}
