mod mode;

pub(crate) use mode::THERMAL_MANAGEMENT_FLAG;
pub use mode::ThermalMode;
