/// The runtime value type.
///
/// Defines the `Value` enum, type names used in error messages, truthiness and
/// the textual rendering used by `print` and the REPL.
pub mod core;
