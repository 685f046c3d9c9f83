/// A callback receiving an owned snapshot of some state
pub type Listener<T> = Box<dyn FnMut(Vec<T>)>;

/// Ordered set of snapshot listeners
///
/// Listeners are called in registration order and each gets its own clone
/// of the items, so one listener can never affect what another sees.
pub struct Listeners<T> {
    callbacks: Vec<Listener<T>>,
}

impl<T: Clone> Listeners<T> {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// Registers a listener for the lifetime of the registry
    pub fn add(&mut self, callback: impl FnMut(Vec<T>) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Calls every listener with a fresh copy of `items`
    pub fn notify(&mut self, items: &[T]) {
        for callback in self.callbacks.iter_mut() {
            callback(items.to_vec());
        }
    }

    /// Moves every listener of `other` after the existing ones
    pub fn append(&mut self, mut other: Listeners<T>) {
        self.callbacks.append(&mut other.callbacks);
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<T: Clone> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn test_notify_in_registration_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut listeners: Listeners<u32> = Listeners::new();

        for name in ["first", "second", "third"] {
            let calls = Rc::clone(&calls);
            listeners.add(move |_| calls.borrow_mut().push(name));
        }

        listeners.notify(&[1, 2]);
        assert_eq!(*calls.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_each_listener_gets_its_own_copy() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners: Listeners<u32> = Listeners::new();

        listeners.add(|mut items| {
            items.clear();
            items.push(99);
        });
        {
            let seen = Rc::clone(&seen);
            listeners.add(move |items| *seen.borrow_mut() = items);
        }

        let source = vec![1, 2, 3];
        listeners.notify(&source);

        assert_eq!(source, vec![1, 2, 3]);
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_append_keeps_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut first: Listeners<u32> = Listeners::new();
        let mut second: Listeners<u32> = Listeners::new();
        {
            let calls = Rc::clone(&calls);
            first.add(move |_| calls.borrow_mut().push("first"));
        }
        {
            let calls = Rc::clone(&calls);
            second.add(move |_| calls.borrow_mut().push("second"));
        }

        first.append(second);
        first.notify(&[]);

        assert_eq!(first.len(), 2);
        assert_eq!(*calls.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_empty_registry() {
        let mut listeners: Listeners<u32> = Listeners::default();
        assert!(listeners.is_empty());
        listeners.notify(&[1]);
        assert_eq!(listeners.len(), 0);
    }
}
