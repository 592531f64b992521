//! 에너지원 등급(ES1/ES2/ES3) 판정. IEC 62368-1 계열의 전압 한계.

/// ES1 피크 전압 한계(V). 주파수에 대한 선형식이며 1 kHz 이하에서는
/// 바닥값 42.4 V로 고정된다.
pub fn es1_peak_limit(freq_hz: f64) -> f64 {
    let limit = 41.828283 + 0.5717172 * freq_hz / 1000.0;
    limit.max(42.4)
}

/// ES2 피크 전압 한계(V). 바닥값 70.7 V.
pub fn es2_peak_limit(freq_hz: f64) -> f64 {
    let limit = 69.128283 + 1.5717172 * freq_hz / 1000.0;
    limit.max(70.7)
}

/// DC 전압과 피크 전압, 주파수로 에너지원 등급 1, 2, 3 중 하나를
/// 판정한다. 전체 정의역에서 항상 셋 중 하나를 반환한다.
///
/// 1. 정규화 스트레스 `vdc/60 + vpk/ES1한계`가 1 이하이면 등급 1.
/// 2. 아니면 피크 전압의 지수 감쇠 모델로 DC 상한을 구한다.
///    1 kHz 이하 경계 조건(vpk 0 → 120 V, vpk 70.7 → 0 부근)을 맞춘
///    경험적 상수이므로 값과 적용 순서를 바꾸면 안 된다.
/// 3. `vdc`가 그 상한 이하이면 등급 2, 아니면 등급 3.
pub fn energy_class(vdc: f64, vpk: f64, freq_hz: f64) -> u8 {
    let f1 = vdc / 60.0 + vpk / es1_peak_limit(freq_hz);
    if f1 <= 1.0 {
        return 1;
    }

    let k = -0.05;
    let a = 139.23124;
    let b = 120.0 - a;
    let vdc_max = a * (k * vpk).exp() - b;

    if vdc <= vdc_max {
        2
    } else {
        3
    }
}
