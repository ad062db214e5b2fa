//! Name pools for generated pilots and hulls

pub const PILOT_NAMES: [&str; 8] = [
    "Alex", "Sam", "Jordan", "Casey", "Morgan", "Taylor", "Riley", "Quinn",
];

pub const CALL_SIGNS: [&str; 8] = [
    "Maverick", "Ice", "Viper", "Ghost", "Phoenix", "Shadow", "Storm", "Wolf",
];

pub const HULL_NAMES: [&str; 6] = ["Raptor", "Viper", "Phoenix", "Falcon", "Dragon", "Hawk"];
