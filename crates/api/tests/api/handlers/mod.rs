mod available_matches_test;
mod config_test;
mod middleware_test;
