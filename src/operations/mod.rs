pub mod file_ops;
pub mod validation;

pub use file_ops::FileOperations;
pub use validation::{
    validate_path_input, validate_price_input, validate_sort_input, validate_stock_input,
};
