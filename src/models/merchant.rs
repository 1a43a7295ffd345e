use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Merchant categories present in the dataset, in table order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MerchantCategory {
    Groceries,
    Restaurants,
    #[serde(rename = "Online Retail")]
    OnlineRetail,
    Travel,
    Utilities,
    Entertainment,
    Fuel,
    Electronics,
    Services,
    Gambling,
    Subscription
}

impl MerchantCategory {
    #[cfg(test)]
    pub const ALL: [MerchantCategory; 11] = [
        MerchantCategory::Groceries,
        MerchantCategory::Restaurants,
        MerchantCategory::OnlineRetail,
        MerchantCategory::Travel,
        MerchantCategory::Utilities,
        MerchantCategory::Entertainment,
        MerchantCategory::Fuel,
        MerchantCategory::Electronics,
        MerchantCategory::Services,
        MerchantCategory::Gambling,
        MerchantCategory::Subscription
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MerchantCategory::Groceries => "Groceries",
            MerchantCategory::Restaurants => "Restaurants",
            MerchantCategory::OnlineRetail => "Online Retail",
            MerchantCategory::Travel => "Travel",
            MerchantCategory::Utilities => "Utilities",
            MerchantCategory::Entertainment => "Entertainment",
            MerchantCategory::Fuel => "Fuel",
            MerchantCategory::Electronics => "Electronics",
            MerchantCategory::Services => "Services",
            MerchantCategory::Gambling => "Gambling",
            MerchantCategory::Subscription => "Subscription"
        }
    }
}

impl Display for MerchantCategory {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
