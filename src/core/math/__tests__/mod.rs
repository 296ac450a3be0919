pub mod neighbor_test;
