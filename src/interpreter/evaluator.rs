/// Core evaluation logic.
///
/// Contains the `Evaluator`, which walks the AST against an environment and
/// writes printed output to its sink.
pub mod core;

/// Binary operator evaluation logic.
///
/// Integer arithmetic, promotion of mixed integer/float operands, comparisons
/// and the type checks that reject every other operand pairing.
pub mod binary;
