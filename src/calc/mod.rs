// Fuel arithmetic and the static vehicle table.

/// A car model the calculator knows about.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleProfile {
    pub name: &'static str, // unique display label
    pub capacity: f64,      // tank capacity in liters
}

pub const VEHICLES: &[VehicleProfile] = &[
    VehicleProfile { name: "Nissan Altima 2010 2.5L", capacity: 75.7 },
    VehicleProfile { name: "Mazda Tribute 2002", capacity: 62.09 },
    VehicleProfile { name: "Ford Ranger 2007", capacity: 64.4 },
    VehicleProfile { name: "Toyota Echo 2000", capacity: 45.046 },
];

/// Resolve a display label against the vehicle table. Unknown or empty
/// names mean "no vehicle selected", never an error.
pub fn find_vehicle(name: &str) -> Option<&'static VehicleProfile> {
    VEHICLES.iter().find(|vehicle| vehicle.name == name)
}

pub fn clamp_percentage(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

/// Price text comes straight from the input field; anything that does not
/// parse as a finite number counts as 0.
pub fn parse_price(text: &str) -> f64 {
    let parsed = text.trim().parse::<f64>().unwrap_or(0.0);
    if parsed.is_finite() {
        parsed
    } else {
        0.0
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FillEstimate {
    pub capacity: f64,
    pub current_amount: f64,
    pub liters_needed: f64,
    pub total_cost: f64,
}

/// Derive the fill volume and cost for the current inputs. Unrounded;
/// rounding belongs to the formatters below.
pub fn fill_estimate(
    vehicle: Option<&VehicleProfile>,
    percentage: u8,
    price_per_liter: f64,
) -> FillEstimate {
    let vehicle = match vehicle {
        Some(vehicle) => vehicle,
        None => return FillEstimate::default(),
    };
    let capacity = vehicle.capacity;
    let current_amount = capacity * percentage as f64 / 100.0;
    let liters_needed = capacity - current_amount;
    FillEstimate {
        capacity,
        current_amount,
        liters_needed,
        total_cost: liters_needed * price_per_liter,
    }
}

pub fn format_liters(liters: f64) -> String {
    format!("{:.1}L", liters)
}

pub fn format_cost(cost: f64) -> String {
    format!("${:.2}", cost)
}
