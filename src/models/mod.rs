mod merchant;
#[cfg(test)]
mod tests;
mod transaction;

pub use merchant::MerchantCategory;
pub use transaction::{Location, Transaction};
