//! Property-based tests for the quadrature primitive.
