mod errors;
mod reader;
mod writer;

pub use errors::DatasetError;
pub use reader::DatasetReader;
pub use writer::write_transactions;
