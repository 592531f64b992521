//! 공간거리(clearance) 계산. IEC 60664-1 표 F.2, F.8, F.9.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::altitude::altitude_factor;
use crate::interp::interpolate;

/// 전압 스트레스 종류. 어느 규격 표를 적용할지 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum StressType {
    /// 임펄스(1.2/50 µs) 스트레스. 피크는 외란에서 온다.
    Pulse,
    /// 장시간 고전위 스트레스. 피크가 신호 자체에 포함된다.
    HighPotential,
    /// 장시간 스트레스, 부분 방전 회피 조건.
    DischargeAvoidance,
}

// 표 F.2: 임펄스 내전압 → 공간거리(mm)
const F2_VOLT: [f64; 23] = [
    330.0, 400.0, 500.0, 600.0, 800.0, 1000.0, 1200.0, 1500.0, 2000.0, 2500.0, 3000.0, 4000.0,
    5000.0, 6000.0, 8000.0, 10000.0, 12000.0, 15000.0, 20000.0, 25000.0, 30000.0, 40000.0,
    50000.0,
];
const F2_CLEAR: [f64; 23] = [
    0.01, 0.02, 0.04, 0.06, 0.10, 0.15, 0.25, 0.5, 1.0, 1.5, 2.0, 3.0, 4.0, 5.5, 8.0, 11.0, 14.0,
    18.0, 25.0, 33.0, 40.0, 60.0, 75.0,
];

// 표 F.8/F.9 공용 X축: 장시간 스트레스 전압(V)
const F8_VOLT: [f64; 30] = [
    40.0, 60.0, 100.0, 120.0, 150.0, 200.0, 250.0, 330.0, 400.0, 500.0, 600.0, 800.0, 1000.0,
    1200.0, 1500.0, 2000.0, 2500.0, 3000.0, 4000.0, 5000.0, 6000.0, 8000.0, 10000.0, 12000.0,
    15000.0, 20000.0, 25000.0, 30000.0, 40000.0, 50000.0,
];
// 표 F.8 Y열. 원 표기에는 15와 19 사이에 2.0이 끼어 있고(아마 15.2의
// 오기) 그 탓에 X축보다 한 칸 길다. 옮긴 그대로 두고 고치지 않는다.
const F8_CLEAR: [f64; 31] = [
    0.001, 0.002, 0.003, 0.004, 0.005, 0.006, 0.008, 0.01, 0.02, 0.04, 0.06, 0.13, 0.26, 0.42,
    0.76, 1.27, 1.8, 2.4, 3.8, 5.7, 7.9, 11.0, 15.0, 2.0, 19.0, 25.0, 34.0, 44.0, 55.0, 77.0,
    100.0,
];
// 표 F.9 Y열. 12000 V 초과 구간은 원 표기에서 0으로 비어 있다. 그대로 둔다.
const F9_CLEAR: [f64; 30] = [
    0.001, 0.002, 0.003, 0.004, 0.005, 0.006, 0.008, 0.01, 0.02, 0.04, 0.06, 0.13, 0.26, 0.42,
    0.76, 1.27, 2.0, 3.2, 11.0, 24.0, 64.0, 184.0, 290.0, 320.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];

/// 요구 공간거리(mm)를 계산한다.
///
/// 규칙 적용 순서가 결과를 좌우한다:
/// 1. 강화 절연이면 조회 전압을 1.6배 한다(기본 절연이 1.6배 전압을
///    견뎌야 한다는 규격 조항 — 연면거리의 출력측 2배 규칙과 다르다).
/// 2. 스트레스 종류로 표를 고른다.
/// 3. 임펄스 표에서는 오염 등급 하한(2→0.2, 3→0.8, 4→1.6 mm)을 보간
///    원값에 적용한다. 등급 1은 하한이 없다.
/// 4. 고도 보정 계수를 곱한다.
/// 5. 최종 결과만 소수 둘째 자리로 반올림한다. 하한 비교는 반올림 전
///    값으로 한다.
///
/// 전압/고도가 표 밖이면 `NaN`이 전파된다. 오염 등급이 1~4 밖이면
/// 정의 범위 밖으로 보고 `NaN`을 반환한다.
pub fn clearance(
    stress: StressType,
    volt: f64,
    altitude_m: f64,
    pollution: u8,
    reinforced: bool,
) -> f64 {
    if !(1..=4).contains(&pollution) {
        return f64::NAN;
    }

    let volt = if reinforced { volt * 1.6 } else { volt };

    let mm = match stress {
        StressType::HighPotential => interpolate(volt, &F8_VOLT, &F8_CLEAR),
        StressType::DischargeAvoidance => interpolate(volt, &F8_VOLT, &F9_CLEAR),
        StressType::Pulse => {
            let c = interpolate(volt, &F2_VOLT, &F2_CLEAR);
            if c.is_nan() {
                return c;
            }
            let floor = match pollution {
                4 => 1.6,
                3 => 0.8,
                2 => 0.2,
                _ => 0.0,
            };
            c.max(floor)
        }
    };

    round2(mm * altitude_factor(altitude_m))
}

/// IEC 60664-1:2020 6.2.2.1.4 — 고도 보정된 내전압 시험 전압.
/// 지수 m은 공간거리 구간에 따라 정해진다.
pub fn test_voltage(volt: f64, clearance_mm: f64, altitude_m: f64) -> f64 {
    let m = match clearance_mm {
        c if c > 10.0 => 0.9243,
        c if c > 1.0 => 0.8539,
        c if c > 0.0625 => 0.6361,
        c if c > 0.01 => 0.3305,
        _ => 0.9163,
    };
    volt / (1.0 / altitude_factor(altitude_m)).powf(m)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
