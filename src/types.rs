pub mod align_error;
pub mod alignment_options;
pub mod left_right_format;
