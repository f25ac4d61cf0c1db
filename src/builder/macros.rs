//! Macros for ergonomic event declaration.

/// Build a `Vec<EventDecl>` from a compact table.
///
/// Each row is `"name": [sources] => destination`. An empty source list
/// declares the wildcard; leaving out `=> destination` declares a no-op.
///
/// # Example
///
/// ```
/// use signalfsm::events;
///
/// let events = events![
///     "unlock": ["locked"] => "unlocked",
///     "lock": ["unlocked"] => "locked",
///     "reset": [] => "locked",
///     "poke": ["locked", "unlocked"],
/// ];
/// assert_eq!(events.len(), 4);
/// ```
#[macro_export]
macro_rules! events {
    (
        $(
            $name:literal : [ $($from:expr),* $(,)? ] $(=> $to:expr)?
        ),* $(,)?
    ) => {
        vec![
            $(
                $crate::core::EventDecl::new($name)
                    $( .from($from) )*
                    $( .to($to) )?
            ),*
        ]
    };
}
