use serde::{Deserialize, Serialize};

/// Amenity categories, each tied to a display icon
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AmenityCategory {
    Network,
    Display,
    Parking,
    Transfer,
    Dining,
    Breakfast,
    Bar,
    Kitchen,
    Fitness,
    WaterSpa,
    Sauna,
    Games,
    Music,
    ClimateCool,
    ClimateHeat,
    Bathroom,
    Bedroom,
    OutdoorSpace,
    Laundry,
    FrontDesk,
    Luggage,
    CurrencyExchange,
    Payment,
    Accessibility,
    Pet,
    Family,
    Smoking,
    Garden,
    Beach,
    Scenic,
    Default,
}

impl AmenityCategory {
    /// Name of the icon rendered for this category
    pub fn icon(&self) -> &'static str {
        match self {
            AmenityCategory::Network => "wifi",
            AmenityCategory::Display => "tv",
            AmenityCategory::Parking => "car",
            AmenityCategory::Transfer => "plane",
            AmenityCategory::Dining | AmenityCategory::Bar | AmenityCategory::Kitchen => "utensils",
            AmenityCategory::Breakfast => "coffee",
            AmenityCategory::Fitness => "dumbbell",
            AmenityCategory::WaterSpa | AmenityCategory::Beach => "waves",
            AmenityCategory::Sauna => "sun",
            AmenityCategory::Games => "gamepad",
            AmenityCategory::Music => "music",
            AmenityCategory::ClimateCool => "snowflake",
            AmenityCategory::ClimateHeat => "zap",
            AmenityCategory::Bathroom => "bath",
            AmenityCategory::Bedroom => "bed",
            AmenityCategory::OutdoorSpace => "wind",
            AmenityCategory::Laundry => "shirt",
            AmenityCategory::FrontDesk => "clock",
            AmenityCategory::Luggage => "users",
            AmenityCategory::CurrencyExchange => "banknote",
            AmenityCategory::Payment => "credit-card",
            AmenityCategory::Accessibility => "user-check",
            AmenityCategory::Pet => "dog",
            AmenityCategory::Family => "baby",
            AmenityCategory::Smoking => "cigarette",
            AmenityCategory::Garden => "tree-pine",
            AmenityCategory::Scenic => "camera",
            AmenityCategory::Default => "shield",
        }
    }
}

/// A label matches the rule when it contains any keyword as a substring
#[derive(Debug, Clone, Copy)]
pub struct AmenityRule {
    pub category: AmenityCategory,
    pub keywords: &'static [&'static str],
}

impl AmenityRule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

const fn rule(category: AmenityCategory, keywords: &'static [&'static str]) -> AmenityRule {
    AmenityRule { category, keywords }
}

/// Ordered rule table. The first matching rule wins, so the order decides
/// ambiguous labels ("credit card" is parking because of "car").
pub const AMENITY_RULES: &[AmenityRule] = &[
    rule(AmenityCategory::Network, &["wifi", "internet", "wireless"]),
    rule(AmenityCategory::Display, &["tv", "television", "cable"]),
    rule(AmenityCategory::Parking, &["parking", "car", "garage"]),
    rule(AmenityCategory::Transfer, &["airport", "shuttle", "transfer"]),
    rule(AmenityCategory::Dining, &["restaurant", "dining"]),
    rule(AmenityCategory::Breakfast, &["breakfast", "coffee", "cafe"]),
    rule(AmenityCategory::Bar, &["bar", "lounge", "pub"]),
    rule(AmenityCategory::Kitchen, &["room service", "kitchen", "kitchenette"]),
    rule(AmenityCategory::Fitness, &["fitness", "gym", "exercise"]),
    rule(AmenityCategory::WaterSpa, &["pool", "swimming", "spa", "jacuzzi"]),
    rule(AmenityCategory::Sauna, &["sauna", "steam"]),
    rule(AmenityCategory::Games, &["game", "entertainment", "arcade"]),
    rule(AmenityCategory::Music, &["music", "piano", "karaoke"]),
    rule(AmenityCategory::ClimateCool, &["air conditioning", "ac", "climate"]),
    rule(AmenityCategory::ClimateHeat, &["heating", "heat"]),
    rule(AmenityCategory::Bathroom, &["bath", "bathroom", "shower"]),
    rule(AmenityCategory::Bedroom, &["bed", "bedroom", "suite"]),
    rule(AmenityCategory::OutdoorSpace, &["balcony", "terrace", "patio"]),
    rule(AmenityCategory::Laundry, &["laundry", "dry cleaning", "washing"]),
    rule(AmenityCategory::FrontDesk, &["concierge", "reception", "front desk"]),
    rule(AmenityCategory::Luggage, &["luggage", "storage", "baggage"]),
    rule(AmenityCategory::CurrencyExchange, &["currency", "exchange", "atm"]),
    rule(AmenityCategory::Payment, &["credit card", "payment"]),
    rule(AmenityCategory::Accessibility, &["accessible", "wheelchair", "disability"]),
    rule(AmenityCategory::Pet, &["pet", "dog", "animal"]),
    rule(AmenityCategory::Family, &["baby", "crib", "children"]),
    rule(AmenityCategory::Smoking, &["smoking", "cigarette"]),
    rule(AmenityCategory::Garden, &["garden", "park", "nature"]),
    rule(AmenityCategory::Beach, &["beach", "ocean", "sea"]),
    rule(AmenityCategory::Scenic, &["view", "scenic", "photography"]),
];

/// Classify a free-text amenity label. Never fails.
pub fn classify(label: &str) -> AmenityCategory {
    let lowered = label.to_lowercase();
    AMENITY_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.category)
        .unwrap_or(AmenityCategory::Default)
}
