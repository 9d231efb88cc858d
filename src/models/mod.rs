pub mod countdown;
pub mod race;
pub mod race_type;
pub mod zone2;
