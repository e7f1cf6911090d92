
mod mapper_tests;
