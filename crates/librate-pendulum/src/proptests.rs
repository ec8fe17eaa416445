//! Property-based tests for the period integral and length solver.
