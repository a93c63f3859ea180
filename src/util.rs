/// Output formatting helpers.
///
/// Renders results with a fixed number of significant digits, the way C's
/// `%g` conversion does. The evaluator itself never formats values; this is
/// used by the command line front end.
pub mod format;
