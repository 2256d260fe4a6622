//! Adapters at the system boundary. Only a CSV surface exists today.

pub mod csv;
