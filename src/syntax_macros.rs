//! Call-site sugar.

/// Call a dispatcher with loose arguments.
///
/// `fcall!(any, a, b)` is `any.call((a, b))`.
///
/// ```
/// use tola_fnany::prelude::*;
///
/// type Sigs = sigs![fn(i32, i32) -> i32, fn()];
///
/// let any = FunctionAny::<Sigs>::new(Function::<fn(i32, i32) -> i32>::new(|a, b| a * b));
/// assert_eq!(fcall!(any, 6, 7).get::<i32, _>(), Some(&42));
/// assert!(fcall!(any).is_no_call());
/// ```
#[macro_export]
macro_rules! fcall {
    ($any:expr $(, $arg:expr)* $(,)?) => {
        $any.call(($($arg,)*))
    };
}
