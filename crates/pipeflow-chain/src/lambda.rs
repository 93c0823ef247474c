use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;

use pipeflow_core::error::Result;
use pipeflow_core::runnable::Runnable;
use pipeflow_core::step::Step;

/// A [`Step`] that wraps a plain closure.
pub struct FnStep<I, O, F> {
    func: F,
    _marker: PhantomData<fn(I) -> O>,
}

impl<I, O, F> FnStep<I, O, F>
where
    F: Fn(I) -> O,
{
    pub fn new(func: F) -> Self {
        Self {
            func,
            _marker: PhantomData,
        }
    }
}

impl<I, O, F: Clone> Clone for FnStep<I, O, F> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I, O, F> Step for FnStep<I, O, F>
where
    F: Fn(I) -> O,
{
    type Input = I;
    type Output = O;

    fn apply(&self, input: I) -> O {
        (self.func)(input)
    }
}

/// Shorthand for [`FnStep::new`].
pub fn step<I, O, F>(func: F) -> FnStep<I, O, F>
where
    F: Fn(I) -> O,
{
    FnStep::new(func)
}

type AsyncFn<I, O> = dyn Fn(I) -> Pin<Box<dyn Future<Output = Result<O>> + Send>> + Send + Sync;

/// A Runnable that wraps an async closure.
pub struct AsyncLambda<I, O> {
    func: Arc<AsyncFn<I, O>>,
}

impl<I, O> Clone for AsyncLambda<I, O> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
        }
    }
}

impl<I, O> AsyncLambda<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    /// Create a new `AsyncLambda` from an async function.
    pub fn new<F, Fut>(func: F) -> Self
    where
        F: Fn(I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<O>> + Send + 'static,
    {
        Self {
            func: Arc::new(move |input| Box::pin(func(input))),
        }
    }

    /// Lift a synchronous fallible function.
    pub fn from_fn<F>(func: F) -> Self
    where
        F: Fn(I) -> Result<O> + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(move |input| {
                let result = func(input);
                Box::pin(async move { result })
            }),
        }
    }
}

#[async_trait]
impl<I, O> Runnable for AsyncLambda<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    type Input = I;
    type Output = O;

    async fn invoke(&self, input: Self::Input) -> Result<Self::Output> {
        (self.func)(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeflow_core::error::FlowError;
    use pipeflow_core::runnable::RunnableExt;
    use pipeflow_core::step::StepExt;

    #[test]
    fn fn_step_basic() {
        let double = step(|x: i32| x * 2);
        assert_eq!(double.apply(5), 10);
    }

    #[test]
    fn fn_step_pipe() {
        let chain = step(|x: i32| x + 2).pipe(step(|x: i32| x * 2));
        assert_eq!(chain.apply(2), 8);
        assert_eq!(chain.apply(3), 10);
    }

    #[test]
    fn fn_step_with_string_transform() {
        let chain = step(|s: String| s.trim().to_string())
            .pipe(step(|s: String| s.to_uppercase()))
            .pipe(step(|s: String| s.len()));
        assert_eq!(chain.apply("  hey ".into()), 3);
    }

    #[test]
    fn fn_step_accepts_fn_items() {
        fn negate(x: i64) -> i64 {
            -x
        }
        let chain = step(negate).pipe(step(i64::abs));
        assert_eq!(chain.apply(-9), 9);
    }

    #[tokio::test]
    async fn lambda_basic() {
        let double = AsyncLambda::new(|x: i32| async move { Ok(x * 2) });
        assert_eq!(double.invoke(5).await.unwrap(), 10);
    }

    #[tokio::test]
    async fn lambda_from_sync_fn() {
        let upper = AsyncLambda::from_fn(|s: String| Ok(s.to_uppercase()));
        assert_eq!(upper.invoke("hello".into()).await.unwrap(), "HELLO");
    }

    #[tokio::test]
    async fn lambda_error() {
        let fail = AsyncLambda::new(|_x: i32| async move {
            Err::<i32, _>(FlowError::Step("lambda failed".into()))
        });
        let err = fail.invoke(1).await.unwrap_err();
        assert_eq!(err.to_string(), "Step failed: lambda failed");
    }

    #[tokio::test]
    async fn lambda_pipe() {
        let add_two = AsyncLambda::new(|x: i32| async move { Ok(x + 2) });
        let describe = AsyncLambda::new(|x: i32| async move { Ok(format!("result: {x}")) });

        let chain = add_two.pipe(describe);
        assert_eq!(chain.invoke(8).await.unwrap(), "result: 10");
    }

    #[tokio::test]
    async fn lambda_awaits_each_stage_in_order() {
        use std::sync::Mutex;

        let log = Arc::new(Mutex::new(Vec::new()));
        let first_log = Arc::clone(&log);
        let second_log = Arc::clone(&log);

        let first = AsyncLambda::new(move |x: i32| {
            let log = Arc::clone(&first_log);
            async move {
                tokio::time::sleep(std::time::Duration::from_millis(20)).await;
                log.lock().unwrap().push("first");
                Ok(x)
            }
        });
        let second = AsyncLambda::new(move |x: i32| {
            let log = Arc::clone(&second_log);
            async move {
                log.lock().unwrap().push("second");
                Ok(x)
            }
        });

        first.pipe(second).invoke(0).await.unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    }
}
