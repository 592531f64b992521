//! 정격 임펄스 내전압. IEC 60664-1 표 F.1.

// 공용 정격 사다리. 전압 구간과 과전압 카테고리(1~4)가 오프셋을 결정한다.
const RIV: [f64; 10] = [
    330.0, 500.0, 800.0, 1500.0, 2500.0, 4000.0, 6000.0, 8000.0, 12000.0, 15000.0,
];

/// 상-중성선 전압 `v`와 과전압 카테고리 `ovc`(1~4)에 대한 정격 임펄스
/// 내전압(V)을 반환한다. 카테고리가 1~4 밖이거나 전압이 표 상한(1500 V)을
/// 넘으면 보초값 `-1.0`을 반환한다.
///
/// 1250 V 초과 구간에서 카테고리 3은 사다리 오프셋 대신 10000 V가
/// 명시되어 있다. 규격의 예외이므로 일반화하지 않는다.
pub fn rated_impulse_voltage(v: f64, ovc: u8) -> f64 {
    if !(1..=4).contains(&ovc) {
        return -1.0;
    }
    if v > 1500.0 {
        return -1.0;
    }

    let i = ovc as usize;
    if v > 1250.0 {
        if ovc == 3 {
            return 10000.0;
        }
        return RIV[i + 5];
    }
    if v >= 1000.0 {
        return RIV[i + 4];
    }
    if v >= 600.0 {
        return RIV[i + 3];
    }
    if v >= 300.0 {
        return RIV[i + 2];
    }
    if v >= 150.0 {
        return RIV[i + 1];
    }
    if v >= 100.0 {
        return RIV[i];
    }
    RIV[i - 1]
}
