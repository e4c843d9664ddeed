//! Test-only helpers shared between modules.
