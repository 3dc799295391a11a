use std::fmt;

/// Callback receiving a full copy of the items after each mutation
pub type Listener<T> = Box<dyn FnMut(Vec<T>)>;

/// Ordered registry of listeners over a list of `T`
pub struct Observable<T> {
    listeners: Vec<Listener<T>>,
}

impl<T: Clone> Observable<T> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Registers a listener; listeners stay registered for the container's lifetime
    pub fn subscribe(&mut self, listener: impl FnMut(Vec<T>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Calls every listener in registration order, each with its own copy of `items`
    pub fn notify(&mut self, items: &[T]) {
        for listener in self.listeners.iter_mut() {
            listener(items.to_vec());
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T: Clone> Default for Observable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
