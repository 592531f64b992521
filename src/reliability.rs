//! 가속 수명 시험의 가속 계수(acceleration factor) 모델 모음.
//! 모두 입력 숫자만으로 닫히는 순수 함수다. 온도는 °C로 받는다.

/// 1/k (K/eV)
pub const INV_BOLTZMANN: f64 = 11604.522;
/// 볼츠만 상수 (eV/K)
pub const BOLTZMANN_EV: f64 = 8.617333262e-5;

const T0: f64 = 273.15;

/// Arrhenius 모델.
pub fn af_arrhenius(ea: f64, t_test: f64, t_field: f64) -> f64 {
    (INV_BOLTZMANN * ea * (1.0 / (t_test + T0) - 1.0 / (t_field + T0))).exp()
}

/// Lawson 모델(온도 + 상대습도). 통상 ea = 0.4.
pub fn af_lawson(ea: f64, t_test: f64, rh_test: f64, t_field: f64, rh_field: f64) -> f64 {
    const B: f64 = 5.57e-4;

    let r1 = B * (rh_test.powi(2) - rh_field.powi(2));
    let r2 = -ea / BOLTZMANN_EV * (1.0 / (t_test + T0) - 1.0 / (t_field + T0));

    (r2 + r1).exp()
}

/// Coffin-Manson 모델(온도 사이클 폭 비, 지수 2.5).
pub fn af_coffin_manson(dt_test: f64, dt_field: f64) -> f64 {
    (dt_test / dt_field).powf(2.5)
}

/// 수정 Norris-Landzberg 모델(무연 SAC305 솔더).
///
/// `_f`는 필드, `_t`는 시험 조건. ZVEI 검증 가이드의 상수는
/// b = 2.3, y = 0.3, ea = 0.4 (다른 문헌은 b = 2.65, y = 0.136).
pub fn af_norris_landzberg(
    dt_f: f64,
    dt_t: f64,
    f_f: f64,
    f_t: f64,
    tmax_f: f64,
    tmax_t: f64,
    b: f64,
    y: f64,
    ea: f64,
) -> f64 {
    (dt_t / dt_f).powf(b)
        * (f_f / f_t).powf(y)
        * (INV_BOLTZMANN * ea * (1.0 / (tmax_f + T0) - 1.0 / (tmax_t + T0))).exp()
}

/// 온도 램프/유지 시간 항이 추가된 수정 Norris-Landzberg 모델.
///
/// Lee/Chiang/Wu 논문의 상수는 b = 1.9, y = 0.239, z = 0.199, ea = 0.122.
/// `tr`, `ts`는 사이클당 램프/유지 시간(초).
#[allow(clippy::too_many_arguments)]
pub fn af_norris_landzberg2(
    dt_f: f64,
    dt_t: f64,
    tr_f: f64,
    tr_t: f64,
    ts_f: f64,
    ts_t: f64,
    tmax_f: f64,
    tmax_t: f64,
    b: f64,
    y: f64,
    z: f64,
    ea: f64,
) -> f64 {
    let ft = (tr_f.powf(y) + ts_t.powf(z)) / tr_t.powf(y) + ts_f.powf(z);

    (dt_t / dt_f).powf(b)
        * ft
        * (INV_BOLTZMANN * ea * (1.0 / (tmax_f + T0) - 1.0 / (tmax_t + T0))).exp()
}

/// Basquin 모델(랜덤 진동, grms 기준).
pub fn af_basquin(grms: f64) -> f64 {
    (grms * 2.0).powf(1.5)
}

/// Peck 모델(습도 항 × Arrhenius). 기준 습도 70 %RH.
pub fn af_peck(ea: f64, rh: f64, t_test: f64, t_field: f64) -> f64 {
    (rh / 70.0).powf(4.4) * af_arrhenius(ea, t_test, t_field)
}
