mod helpers;

mod activate_test;
mod login_test;
