use crate::models::{Location, MerchantCategory};

/// Sampling profile of one merchant category.
pub struct CategoryProfile {
    pub category: MerchantCategory,
    pub names: &'static [&'static str],
    pub normal_weight: f64,
    pub fraud_weight: f64
}

impl CategoryProfile {
    pub fn weight(&self, is_fraud: bool) -> f64 {
        if is_fraud { self.fraud_weight } else { self.normal_weight }
    }
}

const fn profile(category: MerchantCategory, names: &'static [&'static str], normal_weight: f64, fraud_weight: f64) -> CategoryProfile {
    CategoryProfile { category, names, normal_weight, fraud_weight }
}

pub const MERCHANT_PROFILES: [CategoryProfile; 11] = [
    profile(MerchantCategory::Groceries, &["SuperMart", "FreshFoods", "DailyNeeds"], 0.2, 0.05),
    profile(MerchantCategory::Restaurants, &["EatWell Diner", "CafeLuxe", "BurgerJoint"], 0.15, 0.05),
    profile(MerchantCategory::OnlineRetail, &["WebShopX", "GlobalMarket", "E-Boutique"], 0.2, 0.3),
    profile(MerchantCategory::Travel, &["FlyAway Airlines", "HotelVista", "TravelGo"], 0.08, 0.1),
    profile(MerchantCategory::Utilities, &["PowerCo", "WaterWorks", "InternetNet"], 0.07, 0.01),
    profile(MerchantCategory::Entertainment, &["CinemaWorld", "GameZone", "ConcertLive"], 0.1, 0.08),
    profile(MerchantCategory::Fuel, &["QuickGas", "FuelUp"], 0.05, 0.02),
    profile(MerchantCategory::Electronics, &["TechGadgets", "ElectroHub"], 0.05, 0.1),
    profile(MerchantCategory::Services, &["CleanPro", "FixItAll"], 0.05, 0.03),
    profile(MerchantCategory::Gambling, &["BetNow", "LuckySpin Casino"], 0.01, 0.25),
    profile(MerchantCategory::Subscription, &["StreamFlix", "CloudService"], 0.04, 0.01)
];

pub const PRIMARY_LOCATIONS: [Location; 5] = [
    Location::new("Dublin", "Ireland", 53.3498, -6.2603),
    Location::new("London", "UK", 51.5074, -0.1278),
    Location::new("Paris", "France", 48.8566, 2.3522),
    Location::new("Berlin", "Germany", 52.5200, 13.4050),
    Location::new("Rome", "Italy", 41.9028, 12.4964)
];

pub const SECONDARY_LOCATIONS: [Location; 6] = [
    Location::new("New York", "USA", 40.7128, -74.0060),
    Location::new("Tokyo", "Japan", 35.6895, 139.6917),
    Location::new("Sydney", "Australia", -33.8688, 151.2093),
    Location::new("Lagos", "Nigeria", 6.5244, 3.3792),
    Location::new("Ho Chi Minh City", "Vietnam", 10.8231, 106.6297),
    // Purely online purchases carry no coordinates.
    Location::new("Online", "Global", 0.0, 0.0)
];

/// Share (in percent) of the location mass given to primary locations.
pub const NORMAL_PRIMARY_SHARE: f64 = 95.0;
pub const FRAUD_PRIMARY_SHARE: f64 = 10.0;

pub const UNUSUAL_HOURS: [u32; 8] = [0, 1, 2, 3, 4, 5, 22, 23];
pub const PROBABILITY_UNUSUAL_HOUR: f64 = 0.3;

pub const NORMAL_AMOUNT_MU: f64 = 2.5;
pub const NORMAL_AMOUNT_SIGMA: f64 = 0.8;
pub const NORMAL_AMOUNT_FLOOR: f64 = 1.0;
pub const FRAUD_AMOUNT_MU: f64 = 6.0;
pub const FRAUD_AMOUNT_SIGMA: f64 = 1.5;
pub const FRAUD_AMOUNT_FLOOR: f64 = 50.0;

pub const MERCHANT_SUFFIX_MIN: u32 = 100;
pub const MERCHANT_SUFFIX_MAX: u32 = 999;

/// Returns the locations followed by their raw weights, primary first.
pub fn location_weights(is_fraud: bool) -> impl Iterator<Item = (Location, f64)> {
    let primary_share = if is_fraud { FRAUD_PRIMARY_SHARE } else { NORMAL_PRIMARY_SHARE };
    let secondary_share = 100.0 - primary_share;

    let primary_weight = primary_share / PRIMARY_LOCATIONS.len() as f64;
    let secondary_weight = secondary_share / SECONDARY_LOCATIONS.len() as f64;

    PRIMARY_LOCATIONS.into_iter().map(move |location| (location, primary_weight))
        .chain(SECONDARY_LOCATIONS.into_iter().map(move |location| (location, secondary_weight)))
}
