//! # Voxel Mesher Demo Entry Point
//!
//! Builds a small world of chunks, meshes it and logs the per-chunk geometry
//! totals. It simply calls into the library's `run()` function.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! ```

fn main() {
    voxel_mesher::run();
}
