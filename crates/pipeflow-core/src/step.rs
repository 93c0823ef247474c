use std::marker::PhantomData;

/// A unary computation that can be chained with `.pipe()`.
///
/// This is the trait-based spelling of `flow!`: a `StepSequence` built from
/// `a.pipe(b).pipe(c)` applies `a`, then `b`, then `c`. Closures are lifted
/// into steps with `FnStep` from `pipeflow-chain`.
pub trait Step {
    type Input;
    type Output;

    /// Apply the step to one input.
    fn apply(&self, input: Self::Input) -> Self::Output;

    /// Apply the step to each input in order.
    fn apply_all(&self, inputs: Vec<Self::Input>) -> Vec<Self::Output> {
        inputs.into_iter().map(|input| self.apply(input)).collect()
    }
}

impl<S: Step + ?Sized> Step for &S {
    type Input = S::Input;
    type Output = S::Output;

    fn apply(&self, input: Self::Input) -> Self::Output {
        (**self).apply(input)
    }
}

impl<S: Step + ?Sized> Step for Box<S> {
    type Input = S::Input;
    type Output = S::Output;

    fn apply(&self, input: Self::Input) -> Self::Output {
        (**self).apply(input)
    }
}

/// Extension trait providing `.pipe()` for composing steps.
pub trait StepExt: Step + Sized {
    /// Compose this step with another, creating a sequence where the output
    /// of `self` feeds into the input of `next`.
    fn pipe<S>(self, next: S) -> StepSequence<Self, S>
    where
        S: Step<Input = Self::Output>,
    {
        StepSequence {
            first: self,
            second: next,
        }
    }

    /// Turn the step into a plain closure.
    fn into_fn(self) -> impl Fn(Self::Input) -> Self::Output {
        move |input| self.apply(input)
    }
}

impl<T: Step + Sized> StepExt for T {}

/// A step composed of two sequential steps.
#[derive(Debug, Clone, Copy)]
pub struct StepSequence<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> StepSequence<A, B> {
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> Step for StepSequence<A, B>
where
    A: Step,
    B: Step<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    fn apply(&self, input: Self::Input) -> Self::Output {
        let intermediate = self.first.apply(input);
        self.second.apply(intermediate)
    }
}

/// A step that passes its input through unchanged.
pub struct IdentityStep<T>(PhantomData<fn(T) -> T>);

impl<T> IdentityStep<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for IdentityStep<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Step for IdentityStep<T> {
    type Input = T;
    type Output = T;

    fn apply(&self, input: Self::Input) -> Self::Output {
        input
    }
}
