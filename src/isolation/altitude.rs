//! 고도 보정 계수. IEC 60664-1 표 A.2/F.10.

use crate::interp::interpolate;

// 해수면 0.784에서 20000 m의 14.5까지. 공간거리 계산에 곱셈 보정으로 쓰인다.
const ALTITUDE_M: [f64; 15] = [
    0.0, 200.0, 500.0, 1000.0, 2000.0, 3000.0, 4000.0, 5000.0, 6000.0, 7000.0, 8000.0, 9000.0,
    10000.0, 15000.0, 20000.0,
];
const FACTOR: [f64; 15] = [
    0.784, 0.803, 0.833, 0.884, 1.0, 1.14, 1.29, 1.48, 1.7, 1.95, 2.25, 2.62, 3.02, 6.67, 14.5,
];

/// 고도(m)에 대한 공간거리 보정 계수를 반환한다.
/// 20000 m 초과는 규격에 정의가 없으므로 `NaN`이 그대로 전파된다.
pub fn altitude_factor(altitude_m: f64) -> f64 {
    interpolate(altitude_m, &ALTITUDE_M, &FACTOR)
}
