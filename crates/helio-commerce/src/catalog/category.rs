//! Storefront categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hardware categories carried by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Inverter,
    Battery,
    SolarPanel,
    ChargingStation,
    /// A configurable bundle assembled from swappable components.
    Kit,
    Accessory,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Inverter => "inverter",
            Category::Battery => "battery",
            Category::SolarPanel => "solar_panel",
            Category::ChargingStation => "charging_station",
            Category::Kit => "kit",
            Category::Accessory => "accessory",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Inverter => "Inverters",
            Category::Battery => "Batteries",
            Category::SolarPanel => "Solar Panels",
            Category::ChargingStation => "Charging Stations",
            Category::Kit => "Kits",
            Category::Accessory => "Accessories",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "inverter" => Some(Category::Inverter),
            "battery" => Some(Category::Battery),
            "solar_panel" => Some(Category::SolarPanel),
            "charging_station" => Some(Category::ChargingStation),
            "kit" => Some(Category::Kit),
            "accessory" => Some(Category::Accessory),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
