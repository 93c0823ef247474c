//! The `pipe!` and `flow!` macros and their fallible twins.
//!
//! Both macros expand to straight-line code: every step is called exactly
//! once, left to right, and the output of one step is moved into the next.
//! Adjacent types are checked by the compiler, so
//! `pipe!(1, |x: i32| x.to_string(), |s: String| s.len())` compiles while
//! swapping the two closures does not.

/// Returns the value unchanged.
///
/// The unit of composition: `flow!(identity, f)` and `flow!(f, identity)`
/// both behave like `f`.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Value-first composition.
///
/// `pipe!(x, f, g, h)` evaluates `h(g(f(x)))`. With no steps the seed is
/// returned unchanged.
///
/// ```
/// use pipeflow_core::pipe;
///
/// let shouted = pipe!(
///     "  hello  ",
///     str::trim,
///     str::to_uppercase,
///     |s: String| s + "!",
/// );
/// assert_eq!(shouted, "HELLO!");
/// ```
#[macro_export]
macro_rules! pipe {
    ($seed:expr $(,)?) => {
        $seed
    };
    ($seed:expr, $($step:expr),+ $(,)?) => {{
        let value = $seed;
        $(
            let value = ($step)(value);
        )+
        value
    }};
}

/// Function-first composition.
///
/// `flow!(f, g, h)` returns a closure `x -> h(g(f(x)))`. Nothing runs until
/// the closure is called, and each call runs every step once.
/// `flow!()` is [`identity`](crate::compose::identity).
///
/// ```
/// use pipeflow_core::flow;
///
/// let add_then_double = flow!(|x: i32| x + 2, |x: i32| x * 2);
/// assert_eq!(add_then_double(2), 8);
/// assert_eq!(add_then_double(3), 10);
/// ```
#[macro_export]
macro_rules! flow {
    () => {
        $crate::compose::identity
    };
    ($step:expr $(,)?) => {{
        let step = $step;
        move |input| step(input)
    }};
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let first = $first;
        let rest = $crate::flow!($($rest),+);
        move |input| rest(first(input))
    }};
}

/// [`pipe!`] for steps returning `Result<T, E>`.
///
/// The first `Err` stops the chain and is returned as is; the remaining
/// steps are not called. Every step must use the same error type.
///
/// ```
/// use pipeflow_core::try_pipe;
///
/// let parse = |s: &str| s.parse::<i32>().map_err(|e| e.to_string());
/// let halve = |n: i32| {
///     if n % 2 == 0 { Ok(n / 2) } else { Err(format!("{n} is odd")) }
/// };
///
/// assert_eq!(try_pipe!("42", parse, halve), Ok(21));
/// assert_eq!(try_pipe!("7", parse, halve), Err("7 is odd".to_string()));
/// ```
#[macro_export]
macro_rules! try_pipe {
    ($seed:expr $(,)?) => {
        ::core::result::Result::Ok($seed)
    };
    ($seed:expr, $($step:expr),+ $(,)?) => {{
        'try_pipe: {
            let value = $seed;
            $(
                let value = match ($step)(value) {
                    ::core::result::Result::Ok(value) => value,
                    ::core::result::Result::Err(error) => {
                        break 'try_pipe ::core::result::Result::Err(error)
                    }
                };
            )+
            ::core::result::Result::Ok(value)
        }
    }};
}

/// [`flow!`] for steps returning `Result<T, E>`.
///
/// ```
/// use pipeflow_core::try_flow;
///
/// let checked = try_flow!(
///     |x: u8| x.checked_add(100).ok_or("overflow"),
///     |x: u8| x.checked_mul(2).ok_or("overflow"),
/// );
/// assert_eq!(checked(10), Ok(220));
/// assert_eq!(checked(100), Err("overflow"));
/// ```
#[macro_export]
macro_rules! try_flow {
    () => {
        |input| ::core::result::Result::Ok(input)
    };
    ($step:expr $(,)?) => {{
        let step = $step;
        move |input| step(input)
    }};
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let first = $first;
        let rest = $crate::try_flow!($($rest),+);
        move |input| match first(input) {
            ::core::result::Result::Ok(value) => rest(value),
            ::core::result::Result::Err(error) => ::core::result::Result::Err(error),
        }
    }};
}
