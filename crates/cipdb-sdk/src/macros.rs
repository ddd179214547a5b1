/// Conditional breakpoint at the call site.
///
/// ```rust,ignore
/// cipdb_sdk::set_trace!()?;                          // unconditional
/// cipdb_sdk::set_trace!(count > 100)?;               // condition
/// cipdb_sdk::set_trace!(id = "validate")?;           // id-gated
/// cipdb_sdk::set_trace!(errors > 5, id = "save")?;   // id decides
/// ```
///
/// With the default [`IdPolicy::Decisive`](crate::IdPolicy) an id settles the
/// call on its own; build the facade with `IdPolicy::Gate` to require the id
/// and the condition together.
///
/// Expands to [`set_trace`](crate::set_trace) and evaluates to its `Result`.
#[macro_export]
macro_rules! set_trace {
    () => {
        $crate::set_trace(true, ::core::option::Option::None)
    };
    (id = $id:expr $(,)?) => {
        $crate::set_trace(
            true,
            ::core::option::Option::Some(::core::convert::AsRef::<str>::as_ref(&$id)),
        )
    };
    ($cond:expr, id = $id:expr $(,)?) => {
        $crate::set_trace(
            $cond,
            ::core::option::Option::Some(::core::convert::AsRef::<str>::as_ref(&$id)),
        )
    };
    ($cond:expr $(,)?) => {
        $crate::set_trace($cond, ::core::option::Option::None)
    };
}
