//! Value-first and function-first composition side by side.
//!
//! ```bash
//! cargo run --example pipe_and_flow
//! ```

use pipeflow_core::prelude::*;
use pipeflow_lessons::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn parse_age(s: &str) -> std::result::Result<u32, String> {
    s.trim().parse().map_err(|e| format!("'{s}' is not an age: {e}"))
}

fn check_adult(age: u32) -> std::result::Result<u32, String> {
    if age >= 18 {
        Ok(age)
    } else {
        Err(format!("{age} is under 18"))
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pipe_and_flow=info".into()),
        )
        .init();

    // pipe: the value comes first and is pushed through each step.
    let eight = pipe!(2, add_two, double);
    let ten = pipe2(3, add_two, double);
    tracing::info!(eight, ten, "pipe");

    // flow: build the function now, call it later.
    let add_then_double = flow!(add_two, double);
    let double_then_add = flow2(double, add_two);
    for x in [2, 3] {
        tracing::info!(
            x,
            add_then_double = add_then_double(x),
            double_then_add = double_then_add(x),
            "flow"
        );
    }

    // Types may change from one step to the next.
    let headline = pipe!("  pipe and flow, explained ", title_case, |s: String| s.len());
    tracing::info!(headline_len = headline, slug = %slugify("Pipe and Flow, Explained"), "strings");

    // The first failure ends the chain.
    let validate = try_flow!(parse_age, check_adult);
    for raw in ["42", "12", "forty"] {
        match validate(raw) {
            Ok(age) => tracing::info!(raw, age, "accepted"),
            Err(reason) => tracing::info!(raw, %reason, "rejected"),
        }
    }

    // Hand-written composers from the exercises.
    let all = flow_all::<i64>(vec![Box::new(add_two), Box::new(double), Box::new(add_two)]);
    tracing::info!(
        piped = pipe_all::<i64>(1, &[&add_two, &double, &add_two]),
        flowed = all(1),
        "exercises"
    );
}
