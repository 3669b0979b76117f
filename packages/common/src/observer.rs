//! # Notification Hub
//!
//! One-to-many change notification.
//!
//! A [`Subject`] keeps an ordered list of shared observer handles and calls
//! [`Observer::update`] on each of them, in registration order, whenever it
//! is notified. Registering the same handle twice is allowed and results in
//! two updates per notification.
//!
//! ```rust,ignore
//! let mut subject = Subject::<()>::new();
//! let gui: Rc<dyn Observer> = Rc::new(Gui);
//!
//! subject.register(gui.clone());
//! subject.notify(&())?;
//! subject.remove(&gui)?;
//! ```

use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::{ObserverError, ObserverResult};

/// Receiver of change notifications carrying an event of type `E`
pub trait Observer<E = ()> {
    /// Label used in logs and errors
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// React to a notification. Concrete observers must override this.
    fn update(&self, _event: &E) -> ObserverResult<()> {
        Err(ObserverError::Unimplemented {
            observer: self.name().to_string(),
        })
    }
}

impl<E> fmt::Debug for dyn Observer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered registry of observers
pub struct Subject<E = ()> {
    observers: Vec<Rc<dyn Observer<E>>>,
}

impl<E> Subject<E> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Append an observer to the notification list
    pub fn register(&mut self, observer: Rc<dyn Observer<E>>) {
        debug!("Registered observer {}", observer.name());
        self.observers.push(observer);
    }

    /// Remove the first registration of `observer` and hand it back
    pub fn remove(&mut self, observer: &Rc<dyn Observer<E>>) -> ObserverResult<Rc<dyn Observer<E>>> {
        let position = self
            .observers
            .iter()
            .position(|registered| Rc::ptr_eq(registered, observer))
            .ok_or_else(|| ObserverError::NotRegistered {
                observer: observer.name().to_string(),
            })?;

        let removed = self.observers.remove(position);
        debug!("Removed observer {}", removed.name());
        Ok(removed)
    }

    /// Update every observer in registration order.
    ///
    /// Stops at the first observer that fails; later observers are not updated.
    pub fn notify(&self, event: &E) -> ObserverResult<()> {
        debug!("Notifying {} observers", self.observers.len());
        for observer in &self.observers {
            observer.update(event)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn observer_names(&self) -> Vec<&str> {
        self.observers.iter().map(|o| o.name()).collect()
    }
}

impl<E> Default for Subject<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Subject<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("observers", &self.observer_names())
            .finish()
    }
}

/// Types that own a [`Subject`] and expose it as their own registry
pub trait Observable<E> {
    fn subject(&self) -> &Subject<E>;

    fn subject_mut(&mut self) -> &mut Subject<E>;

    fn register_observer(&mut self, observer: Rc<dyn Observer<E>>) {
        self.subject_mut().register(observer);
    }

    fn remove_observer(&mut self, observer: &Rc<dyn Observer<E>>) -> ObserverResult<Rc<dyn Observer<E>>> {
        self.subject_mut().remove(observer)
    }

    fn notify_observers(&self, event: &E) -> ObserverResult<()> {
        self.subject().notify(event)
    }
}
