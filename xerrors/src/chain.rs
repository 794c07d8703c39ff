//! Walking an error's `source()` chain

use std::error::Error;

/// Iterator over an error and all of its transitive sources, outermost first.
///
/// Created by [`chain`].
#[derive(Clone, Debug)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Iterate over `err` and every error reachable through `source()`.
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Find the first link in the chain whose concrete type is `E`.
///
/// The search starts at `err` itself and stops at the nearest match, so an
/// outer `E` shadows any `E` further down.
pub fn find<'a, E: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a E> {
    chain(err).find_map(|link| link.downcast_ref::<E>())
}

/// Check whether `target` appears anywhere in the chain.
///
/// A link matches when it has the same concrete type as `target` and
/// compares equal to it.
pub fn is<E: Error + PartialEq + 'static>(err: &(dyn Error + 'static), target: &E) -> bool {
    chain(err).any(|link| link.downcast_ref::<E>() == Some(target))
}

/// The innermost error in the chain.
pub fn root_cause<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    let mut current = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current
}
