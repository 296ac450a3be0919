pub mod adder_test;
