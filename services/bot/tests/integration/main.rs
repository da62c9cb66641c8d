
mod confirm_test;
