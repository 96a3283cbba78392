//! §4.12 — the escape hatch for payload kinds this crate does not model
//! natively.
//!
//! The original core carries an opaque payload pointer plus a
//! `{destroy, walk, walk_back}` dispatch table; `destroy` is simply Rust's
//! `Drop` here, since [`FnCustomHandler`] owns whatever state its closures
//! close over.

use std::fmt;

use crate::driver::CustomHandler;
use crate::options::WalkOptions;
use crate::state::State;

type WalkFn<E> = Box<dyn Fn(&State<E>, &WalkOptions) -> Option<State<E>> + Send + Sync>;

/// A [`CustomHandler`] backed by a pair of closures, for callers who want an
/// ad hoc edge kind without declaring a named type.
pub struct FnCustomHandler<E: Copy> {
    label: &'static str,
    walk: WalkFn<E>,
    walk_back: WalkFn<E>,
}

impl<E: Copy> FnCustomHandler<E> {
    pub fn new(
        label: &'static str,
        walk: impl Fn(&State<E>, &WalkOptions) -> Option<State<E>> + Send + Sync + 'static,
        walk_back: impl Fn(&State<E>, &WalkOptions) -> Option<State<E>> + Send + Sync + 'static,
    ) -> Self {
        FnCustomHandler {
            label,
            walk: Box::new(walk),
            walk_back: Box::new(walk_back),
        }
    }
}

impl<E: Copy> fmt::Debug for FnCustomHandler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCustomHandler").field("label", &self.label).finish()
    }
}

impl<E: Copy> CustomHandler<E> for FnCustomHandler<E> {
    fn walk(&self, state: &State<E>, options: &WalkOptions) -> Option<State<E>> {
        (self.walk)(state, options)
    }

    fn walk_back(&self, state: &State<E>, options: &WalkOptions) -> Option<State<E>> {
        (self.walk_back)(state, options)
    }
}
