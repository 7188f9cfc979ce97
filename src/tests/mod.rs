mod filter_tests;
mod normalize_tests;
mod utils;
