//! Signals as driver state.

use api::StateCell;
use dioxus::prelude::*;

/// Lets the `api` drivers read and write a [`Signal`] between awaits.
#[derive(Clone, Copy)]
pub struct SignalCell<T: 'static>(pub Signal<T>);

impl<T: 'static> StateCell<T> for SignalCell<T> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.0.with(f)
    }

    fn with_mut<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        self.0.with_mut(f)
    }
}
