#[cfg(feature = "bmff")]
pub mod bmff;
