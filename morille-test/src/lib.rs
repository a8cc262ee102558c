//! End to end tests of the morille public API live under `tests/`.
