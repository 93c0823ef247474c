use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::error::Result;

/// Async counterpart of [`Step`](crate::step::Step).
///
/// Stages are awaited one after the other; a stage that returns `Err` ends
/// the sequence and the error is handed back untouched.
#[async_trait]
pub trait Runnable: Send + Sync {
    type Input: Send + 'static;
    type Output: Send + 'static;

    /// Process a single input and return a result.
    async fn invoke(&self, input: Self::Input) -> Result<Self::Output>;

    /// Process multiple inputs one at a time, stopping at the first error.
    async fn batch(&self, inputs: Vec<Self::Input>) -> Result<Vec<Self::Output>> {
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            results.push(self.invoke(input).await?);
        }
        Ok(results)
    }

    /// Stream output chunks for a single input.
    ///
    /// Default implementation yields a single item from `invoke`.
    async fn stream(
        &self,
        input: Self::Input,
    ) -> Result<Pin<Box<dyn Stream<Item = Result<Self::Output>> + Send>>> {
        let result = self.invoke(input).await?;
        Ok(Box::pin(futures::stream::once(async { Ok(result) })))
    }
}

/// Extension trait providing `.pipe()` for composing Runnables.
pub trait RunnableExt: Runnable + Sized {
    /// Compose this Runnable with another, creating a sequence where
    /// the output of `self` feeds into the input of `next`.
    fn pipe<R>(self, next: R) -> RunnableSequence<Self, R>
    where
        R: Runnable<Input = Self::Output>,
    {
        RunnableSequence {
            first: self,
            second: next,
        }
    }
}

impl<T: Runnable + Sized> RunnableExt for T {}

/// A Runnable composed of two sequential Runnables.
pub struct RunnableSequence<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

#[async_trait]
impl<A, B> Runnable for RunnableSequence<A, B>
where
    A: Runnable,
    B: Runnable<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    async fn invoke(&self, input: Self::Input) -> Result<Self::Output> {
        let intermediate = self.first.invoke(input).await?;
        self.second.invoke(intermediate).await
    }
}
