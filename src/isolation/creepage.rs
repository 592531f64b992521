//! 연면거리(creepage) 계산. IEC 60664-1의 일반/PCB 표.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::interp::interpolate;

/// 절연 재료 그룹(CTI 기반 분류). IIIa와 IIIb는 같은 표를 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum MaterialGroup {
    #[value(name = "1")]
    I,
    #[value(name = "2")]
    II,
    #[value(name = "3a")]
    IIIa,
    #[value(name = "3b")]
    IIIb,
}

impl std::fmt::Display for MaterialGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MaterialGroup::I => "1",
            MaterialGroup::II => "2",
            MaterialGroup::IIIa => "3a",
            MaterialGroup::IIIb => "3b",
        };
        write!(f, "{s}")
    }
}

// 공용 X축: 실효 동작 전압(V). 10 V에서 10 kV까지.
const VOLT: [f64; 31] = [
    10.0, 12.5, 16.0, 20.0, 25.0, 32.0, 40.0, 50.0, 63.0, 80.0, 100.0, 125.0, 160.0, 200.0,
    250.0, 320.0, 400.0, 500.0, 630.0, 800.0, 1000.0, 1250.0, 1600.0, 2000.0, 2500.0, 3200.0,
    4000.0, 5000.0, 6000.0, 8000.0, 10000.0,
];

// PCB 전용 표는 1000 V까지만 정의되어 있다( X축 앞 21개 구간 ).
const PCB_P1: [f64; 21] = [
    0.025, 0.025, 0.025, 0.025, 0.025, 0.025, 0.025, 0.025, 0.04, 0.063, 0.1, 0.16, 0.25, 0.4,
    0.56, 0.75, 1.0, 1.3, 1.8, 2.4, 3.2,
];
const PCB_P2: [f64; 21] = [
    0.04, 0.04, 0.04, 0.04, 0.04, 0.04, 0.04, 0.04, 0.063, 0.1, 0.16, 0.25, 0.4, 0.63, 1.0, 1.6,
    2.0, 2.5, 3.2, 4.0, 5.0,
];

// 오염 등급 1은 재료 그룹과 무관한 단일 열이다. 원 표기가 한 행 짧아
// 8000 V까지만 유효하다.
const P1: [f64; 30] = [
    0.08, 0.09, 0.1, 0.11, 0.125, 0.14, 0.16, 0.18, 0.2, 0.22, 0.25, 0.28, 0.32, 0.42, 0.56,
    0.75, 1.0, 1.3, 1.8, 2.4, 3.2, 4.2, 5.6, 7.5, 10.0, 12.5, 16.0, 20.0, 32.0, 40.0,
];

const P2_M1: [f64; 31] = [
    0.4, 0.42, 0.45, 0.48, 0.5, 0.53, 0.56, 0.6, 0.63, 0.67, 0.71, 0.75, 0.8, 1.0, 1.25, 1.6,
    2.0, 2.5, 3.2, 4.0, 5.0, 6.3, 8.0, 10.0, 12.5, 16.0, 20.0, 25.0, 32.0, 40.0, 50.0,
];
// 오염 등급 2 / 그룹 II 열도 원 표기가 한 행 짧다.
const P2_M2: [f64; 30] = [
    0.4, 0.42, 0.45, 0.48, 0.5, 0.53, 0.8, 0.85, 0.9, 1.0, 1.05, 1.1, 1.4, 1.8, 2.2, 2.8, 3.6,
    4.5, 5.6, 7.1, 9.0, 11.0, 14.0, 18.0, 22.0, 28.0, 36.0, 45.0, 56.0, 71.0,
];
const P2_M3: [f64; 31] = [
    0.4, 0.42, 0.45, 0.48, 0.5, 0.53, 1.1, 1.2, 1.25, 1.3, 1.4, 1.5, 1.6, 2.0, 2.5, 3.2, 4.0,
    5.0, 6.3, 8.0, 10.0, 12.5, 16.0, 20.0, 25.0, 32.0, 40.0, 50.0, 63.0, 80.0, 100.0,
];

const P3_M1: [f64; 31] = [
    1.0, 1.05, 1.1, 1.2, 1.25, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0, 2.5, 3.2, 4.0, 5.0, 6.3,
    8.0, 10.0, 12.5, 16.0, 20.0, 25.0, 32.0, 40.0, 50.0, 63.0, 80.0, 100.0, 125.0,
];
const P3_M2: [f64; 31] = [
    1.0, 1.05, 1.1, 1.2, 1.25, 1.3, 1.6, 1.7, 1.8, 1.9, 2.0, 2.1, 2.2, 2.8, 3.6, 4.5, 5.6, 7.1,
    9.0, 11.0, 14.0, 18.0, 22.0, 28.0, 36.0, 45.0, 56.0, 71.0, 90.0, 110.0, 140.0,
];
const P3_M3: [f64; 31] = [
    1.0, 1.05, 1.1, 1.2, 1.25, 1.3, 1.8, 1.9, 2.0, 2.1, 2.2, 2.4, 2.5, 3.2, 4.0, 5.0, 6.3, 8.0,
    10.0, 12.5, 16.0, 20.0, 25.0, 32.0, 40.0, 50.0, 63.0, 80.0, 100.0, 125.0, 160.0,
];

/// 일반(몰드/성형 재료) 연면거리(mm)를 계산한다.
///
/// 강화 절연은 조회 결과를 2배 한다. 공간거리의 입력측 1.6배 규칙과
/// 달리 출력측 배수다 — 규격의 서로 다른 조항이므로 통일하지 않는다.
/// 오염 등급 1은 재료 그룹과 무관하다. 지원하지 않는 등급(4 이상)은
/// `NaN`을 반환한다.
pub fn creepage(volt: f64, pollution: u8, material: MaterialGroup, reinforced: bool) -> f64 {
    let k = if reinforced { 2.0 } else { 1.0 };

    let table: &[f64] = match (pollution, material) {
        (1, _) => &P1,
        (2, MaterialGroup::I) => &P2_M1,
        (2, MaterialGroup::II) => &P2_M2,
        (2, MaterialGroup::IIIa | MaterialGroup::IIIb) => &P2_M3,
        (3, MaterialGroup::I) => &P3_M1,
        (3, MaterialGroup::II) => &P3_M2,
        (3, MaterialGroup::IIIa | MaterialGroup::IIIb) => &P3_M3,
        _ => return f64::NAN,
    };

    interpolate(volt, &VOLT, table) * k
}

/// PCB 표면 배선용 연면거리(mm). 오염 등급 1~2에만 정의되어 있다.
pub fn creepage_pcb(volt: f64, pollution: u8, reinforced: bool) -> f64 {
    let k = if reinforced { 2.0 } else { 1.0 };

    match pollution {
        1 => interpolate(volt, &VOLT, &PCB_P1) * k,
        2 => interpolate(volt, &VOLT, &PCB_P2) * k,
        _ => f64::NAN,
    }
}
