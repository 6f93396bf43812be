pub mod csv;
pub mod in_memory;
