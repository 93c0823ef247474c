//! Fixed-arity function forms of `pipe` and `flow`, for arities 1 through 19.
//!
//! These mirror [`pipe!`](crate::pipe) and [`flow!`](crate::flow) for callers
//! who prefer plain functions (for instance to pass `flow3` itself as a
//! value). Longer chains can nest calls or fall back to the macros.

macro_rules! fixed_arity {
    ($n:literal, $pipe:ident, $flow:ident, $input:ident => $output:ident; $($step:ident: $from:ident -> $to:ident),+) => {
        #[doc = concat!("Applies ", stringify!($n), " function(s) to `seed`, left to right.")]
        #[allow(clippy::too_many_arguments)]
        pub fn $pipe<$input, $($to),+>(seed: $input, $($step: impl FnOnce($from) -> $to),+) -> $output {
            let value = seed;
            $(
                let value = $step(value);
            )+
            value
        }

        #[doc = concat!("Composes ", stringify!($n), " function(s) into one, applied left to right.")]
        #[allow(clippy::too_many_arguments)]
        pub fn $flow<$input, $($to),+>($($step: impl Fn($from) -> $to),+) -> impl Fn($input) -> $output {
            move |value| {
                $(
                    let value = $step(value);
                )+
                value
            }
        }
    };
}

fixed_arity!(1, pipe1, flow1, T0 => T1; f1: T0 -> T1);
fixed_arity!(2, pipe2, flow2, T0 => T2; f1: T0 -> T1, f2: T1 -> T2);
fixed_arity!(3, pipe3, flow3, T0 => T3; f1: T0 -> T1, f2: T1 -> T2, f3: T2 -> T3);
fixed_arity!(4, pipe4, flow4, T0 => T4; f1: T0 -> T1, f2: T1 -> T2, f3: T2 -> T3, f4: T3 -> T4);
fixed_arity!(5, pipe5, flow5, T0 => T5; f1: T0 -> T1, f2: T1 -> T2, f3: T2 -> T3, f4: T3 -> T4, f5: T4 -> T5);
fixed_arity!(6, pipe6, flow6, T0 => T6; f1: T0 -> T1, f2: T1 -> T2, f3: T2 -> T3, f4: T3 -> T4, f5: T4 -> T5, f6: T5 -> T6);
fixed_arity!(7, pipe7, flow7, T0 => T7; f1: T0 -> T1, f2: T1 -> T2, f3: T2 -> T3, f4: T3 -> T4, f5: T4 -> T5, f6: T5 -> T6, f7: T6 -> T7);
fixed_arity!(8, pipe8, flow8, T0 => T8; f1: T0 -> T1, f2: T1 -> T2, f3: T2 -> T3, f4: T3 -> T4, f5: T4 -> T5, f6: T5 -> T6, f7: T6 -> T7, f8: T7 -> T8);
fixed_arity!(9, pipe9, flow9, T0 => T9; f1: T0 -> T1, f2: T1 -> T2, f3: T2 -> T3, f4: T3 -> T4, f5: T4 -> T5, f6: T5 -> T6, f7: T6 -> T7, f8: T7 -> T8, f9: T8 -> T9);
fixed_arity!(10, pipe10, flow10, T0 => T10; f1: T0 -> T1, f2: T1 -> T2, f3: T2 -> T3, f4: T3 -> T4, f5: T4 -> T5, f6: T5 -> T6, f7: T6 -> T7, f8: T7 -> T8, f9: T8 -> T9, f10: T9 -> T10);
fixed_arity!(11, pipe11, flow11, T0 => T11; f1: T0 -> T1, f2: T1 -> T2, f3: T2 -> T3, f4: T3 -> T4, f5: T4 -> T5, f6: T5 -> T6, f7: T6 -> T7, f8: T7 -> T8, f9: T8 -> T9, f10: T9 -> T10, f11: T10 -> T11);
fixed_arity!(12, pipe12, flow12, T0 => T12; f1: T0 -> T1, f2: T1 -> T2, f3: T2 -> T3, f4: T3 -> T4, f5: T4 -> T5, f6: T5 -> T6, f7: T6 -> T7, f8: T7 -> T8, f9: T8 -> T9, f10: T9 -> T10, f11: T10 -> T11, f12: T11 -> T12);
fixed_arity!(13, pipe13, flow13, T0 => T13; f1: T0 -> T1, f2: T1 -> T2, f3: T2 -> T3, f4: T3 -> T4, f5: T4 -> T5, f6: T5 -> T6, f7: T6 -> T7, f8: T7 -> T8, f9: T8 -> T9, f10: T9 -> T10, f11: T10 -> T11, f12: T11 -> T12, f13: T12 -> T13);
fixed_arity!(14, pipe14, flow14, T0 => T14; f1: T0 -> T1, f2: T1 -> T2, f3: T2 -> T3, f4: T3 -> T4, f5: T4 -> T5, f6: T5 -> T6, f7: T6 -> T7, f8: T7 -> T8, f9: T8 -> T9, f10: T9 -> T10, f11: T10 -> T11, f12: T11 -> T12, f13: T12 -> T13, f14: T13 -> T14);
fixed_arity!(15, pipe15, flow15, T0 => T15; f1: T0 -> T1, f2: T1 -> T2, f3: T2 -> T3, f4: T3 -> T4, f5: T4 -> T5, f6: T5 -> T6, f7: T6 -> T7, f8: T7 -> T8, f9: T8 -> T9, f10: T9 -> T10, f11: T10 -> T11, f12: T11 -> T12, f13: T12 -> T13, f14: T13 -> T14, f15: T14 -> T15);
fixed_arity!(16, pipe16, flow16, T0 => T16; f1: T0 -> T1, f2: T1 -> T2, f3: T2 -> T3, f4: T3 -> T4, f5: T4 -> T5, f6: T5 -> T6, f7: T6 -> T7, f8: T7 -> T8, f9: T8 -> T9, f10: T9 -> T10, f11: T10 -> T11, f12: T11 -> T12, f13: T12 -> T13, f14: T13 -> T14, f15: T14 -> T15, f16: T15 -> T16);
fixed_arity!(17, pipe17, flow17, T0 => T17; f1: T0 -> T1, f2: T1 -> T2, f3: T2 -> T3, f4: T3 -> T4, f5: T4 -> T5, f6: T5 -> T6, f7: T6 -> T7, f8: T7 -> T8, f9: T8 -> T9, f10: T9 -> T10, f11: T10 -> T11, f12: T11 -> T12, f13: T12 -> T13, f14: T13 -> T14, f15: T14 -> T15, f16: T15 -> T16, f17: T16 -> T17);
fixed_arity!(18, pipe18, flow18, T0 => T18; f1: T0 -> T1, f2: T1 -> T2, f3: T2 -> T3, f4: T3 -> T4, f5: T4 -> T5, f6: T5 -> T6, f7: T6 -> T7, f8: T7 -> T8, f9: T8 -> T9, f10: T9 -> T10, f11: T10 -> T11, f12: T11 -> T12, f13: T12 -> T13, f14: T13 -> T14, f15: T14 -> T15, f16: T15 -> T16, f17: T16 -> T17, f18: T17 -> T18);
fixed_arity!(19, pipe19, flow19, T0 => T19; f1: T0 -> T1, f2: T1 -> T2, f3: T2 -> T3, f4: T3 -> T4, f5: T4 -> T5, f6: T5 -> T6, f7: T6 -> T7, f8: T7 -> T8, f9: T8 -> T9, f10: T9 -> T10, f11: T10 -> T11, f12: T11 -> T12, f13: T12 -> T13, f14: T13 -> T14, f15: T14 -> T15, f16: T15 -> T16, f17: T16 -> T17, f18: T17 -> T18, f19: T18 -> T19);
