/// A compact conditional expression.  Rust's `if` is already an
/// expression, but `cargo fmt` spreads it across four lines, and the
/// border-handling tables in the carving code read much better as
/// single-line selections.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
