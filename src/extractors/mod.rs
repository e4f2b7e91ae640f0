//! Request extractors that report rejections through `AppError`.

mod valid;

pub use valid::{ValidJson, ValidPath, ValidQuery};
