// tests/common/mod.rs
//! 共通テストユーティリティ


#[allow(unused_imports)]
pub use rows::{Row, output_rows};
#[allow(unused_imports)]
pub use temp::TempDir;
