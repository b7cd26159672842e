//! Benchmark crate for the loam memory manager.
//!
//! Contains no library code; see `benches/` for the criterion
//! micro-benchmarks.
