//! The composers written out by hand, without macros.
//!
//! Both folds only handle steps that keep the same type, since a slice or
//! `Vec` cannot hold functions with different signatures.

/// Run `seed` through each function in order.
///
/// An empty slice returns the seed unchanged.
pub fn pipe_all<T>(seed: T, steps: &[&dyn Fn(T) -> T]) -> T {
    steps.iter().fold(seed, |value, step| step(value))
}

/// Compose the functions left to right into a single function.
///
/// An empty list composes to the identity.
pub fn flow_all<T>(steps: Vec<Box<dyn Fn(T) -> T>>) -> impl Fn(T) -> T {
    move |seed| steps.iter().fold(seed, |value, step| step(value))
}

/// `flow_pair(f, g)` is `x -> g(f(x))`.
pub fn flow_pair<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |x| g(f(x))
}
