//! 열폭주(thermal runaway) 진단과 패키지 열저항 참조 값.

use crate::reliability::af_arrhenius;

/// 리크 전류 2배 상승 온도 10 °C(계수 2.05) 가정에서의 지수 상수.
pub fn default_leakage_k() -> f64 {
    10.0 / 2.05_f64.ln()
}

/// 패키지별 기본 접합-주변 열저항(°C/W). 출처: Yageo 표면실장 저항
/// 애플리케이션 노트. 모르는 패키지는 `None`.
pub fn rth(package: &str) -> Option<f64> {
    let package = package.to_ascii_lowercase();

    let value = match package.as_str() {
        "0201" => 800.0,
        "0603" => 400.0,
        "0805" => 250.0,
        "1206" => 200.0,
        "1210" => 125.0,
        "1218" => 100.0,
        "2010" => 80.0,
        "2512" => 50.0,
        _ => {
            if package.starts_with("sot23") {
                357.0
            } else {
                return None;
            }
        }
    };
    Some(value)
}

/// 소비 전력과 열저항에서 접합 온도 상승을 구한다.
pub fn delta_tj(p_w: f64, rth: f64) -> f64 {
    p_w * rth
}

/// 25 °C 기준 리크 전류 `i0`의 온도 `t`에서의 값. `k`는 지수 상수.
pub fn ileak(i0: f64, t: f64, k: f64) -> f64 {
    i0 * ((t - 25.0) / k).exp()
}

/// 활성화 에너지 0.74 eV의 Arrhenius 모델로 본 리크 전류. 비교용.
pub fn ileak_arrhenius(i0: f64, t: f64) -> f64 {
    i0 * af_arrhenius(0.74, 25.0, t)
}

/// 접합 온도의 고정점 반복으로 열폭주 여부를 판정한다.
///
/// tj = t0 + rth · vr · ileak(tj)를 반복해, 0.01 °C 이내로 수렴하면
/// 안정(false), `tmax`에 도달하거나 반복 한도 안에 수렴하지 못하면
/// 열폭주(true)로 본다.
pub fn runaway(vr: f64, i0: f64, t0: f64, rth: f64, tmax: f64, k: f64) -> bool {
    let mut tj = t0;

    for _ in 0..1000 {
        let p = ileak(i0, tj, k) * vr;
        let next = delta_tj(p, rth) + t0;

        if next >= tmax || !next.is_finite() {
            return true;
        }
        if (next - tj).abs() < 0.01 {
            return false;
        }
        tj = next;
    }
    true
}

/// 주어진 동작 조건에서 열폭주 없이 허용되는 최대 열저항(°C/W)을
/// 찾는다. 300에서 5씩 낮추며 처음 안정해지는 값을 반환하고, 0까지
/// 내려가도 안정하지 않으면 `None`.
///
/// `i0`: 25 °C 리크 전류(A), `vr`: 실회로 역전압(V), `t0`: 주변(히트
/// 싱크) 온도 °C. 최대 접합 온도는 150 °C로 본다.
pub fn max_safe_rth(i0: f64, vr: f64, t0: f64) -> Option<f64> {
    let k = default_leakage_k();
    let tmax = 150.0;
    let mut rth = 300.0;

    for _ in 0..100 {
        rth -= 5.0;
        if rth <= 0.0 {
            return None;
        }
        if !runaway(vr, i0, t0, rth, tmax, k) {
            return Some(rth);
        }
    }
    None
}
