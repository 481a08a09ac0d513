pub mod common_affix;
pub mod decode;
pub mod longest_common_substring;
pub mod side;
