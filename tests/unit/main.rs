//! Unit tests mirroring the `src/` layout file for file
