pub mod linalg;
pub mod test_utils;
