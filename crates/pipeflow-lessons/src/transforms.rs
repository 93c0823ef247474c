use pipeflow_core::arity::{flow2, pipe2};
use pipeflow_core::{flow, pipe};

pub fn add_two(x: i64) -> i64 {
    x + 2
}

pub fn double(x: i64) -> i64 {
    x * 2
}

/// `(x + 2) * 2`.
pub fn add_then_double(x: i64) -> i64 {
    pipe!(x, add_two, double)
}

/// `x * 2 + 2`. Same steps as [`add_then_double`], other order.
pub fn double_then_add(x: i64) -> i64 {
    pipe2(x, double, add_two)
}

pub fn exclaim(s: &str) -> String {
    format!("{s}!")
}

/// Trim, uppercase, then add a bang.
pub fn shout(s: &str) -> String {
    pipe!(s, str::trim, str::to_uppercase, |s: String| exclaim(&s))
}

/// Split on whitespace into owned words.
pub fn words(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn title_case(s: &str) -> String {
    pipe!(
        s,
        words,
        |ws: Vec<String>| ws.iter().map(|w| capitalize(w)).collect::<Vec<_>>(),
        |ws: Vec<String>| ws.join(" "),
    )
}

/// Lowercase ASCII words joined by single dashes.
///
/// Anything that is not an ASCII letter or digit separates words.
pub fn slugify(s: &str) -> String {
    let to_slug = flow!(
        str::to_lowercase,
        |s: String| {
            s.split(|c: char| !c.is_ascii_alphanumeric())
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        },
        |parts: Vec<String>| parts.join("-"),
    );
    to_slug(s)
}

pub fn evens(xs: Vec<i64>) -> Vec<i64> {
    xs.into_iter().filter(|x| x % 2 == 0).collect()
}

pub fn squares(xs: Vec<i64>) -> Vec<i64> {
    xs.into_iter().map(|x| x * x).collect()
}

pub fn sum(xs: Vec<i64>) -> i64 {
    xs.into_iter().sum()
}

/// Keep the even numbers, square them, add them up.
pub fn sum_of_even_squares(xs: Vec<i64>) -> i64 {
    let evens_squared = flow2(evens, squares);
    pipe!(xs, evens_squared, sum)
}
