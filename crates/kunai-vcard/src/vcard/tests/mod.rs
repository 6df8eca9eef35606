//! Cross-module tests exercising decode and encode together.

mod round_trip;
mod totality;
