//! IEC 60664-1 기반 절연 협조(clearance/creepage/임펄스/에너지 등급) 계산 모듈 모음.

pub mod altitude;
pub mod clearance;
pub mod creepage;
pub mod energy;
pub mod impulse;

pub use altitude::altitude_factor;
pub use clearance::{clearance, test_voltage, StressType};
pub use creepage::{creepage, creepage_pcb, MaterialGroup};
pub use energy::{energy_class, es1_peak_limit, es2_peak_limit};
pub use impulse::rated_impulse_voltage;
