mod method_tests;
mod query_param_tests;
mod response_tests;
mod scheme_tests;
mod simulation_file_tests;
