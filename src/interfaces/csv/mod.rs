pub mod obligation_reader;
pub mod plan_writer;
