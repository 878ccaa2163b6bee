// Resume text acquisition: uploaded PDF bytes → normalized plain text.
// Extraction is CPU-bound and runs on tokio's blocking pool.
// Failures carry a kind that maps to a user-facing notice.

pub mod error;
pub mod handlers;
pub mod normalize;
pub mod source;
