//! 가속 계수 모델 회귀 테스트. 경계 조건(동일 조건 → AF = 1)과
//! 닫힌 식으로 손 계산 가능한 값을 고정한다.

use electronics_design_toolbox::reliability::{
    af_arrhenius, af_basquin, af_coffin_manson, af_lawson, af_norris_landzberg,
    af_norris_landzberg2, af_peck,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6})"
    );
}

#[test]
fn arrhenius_identity_and_direction() {
    // 시험 = 필드 조건이면 가속이 없다
    assert_close("identity", af_arrhenius(0.7, 85.0, 85.0), 1.0, 1e-12);
    // 시험 온도가 높으면 AF > 1
    assert!(af_arrhenius(0.7, 125.0, 55.0) > 1.0);
    assert!(af_arrhenius(0.7, 55.0, 125.0) < 1.0);
}

#[test]
fn coffin_manson_power_law() {
    // (ΔT_test/ΔT_field)^2.5
    assert_close("2x", af_coffin_manson(100.0, 50.0), 2.0_f64.powf(2.5), 1e-9);
    assert_close("identity", af_coffin_manson(80.0, 80.0), 1.0, 1e-12);
}

#[test]
fn basquin_power_law() {
    // (2·grms)^1.5
    assert_close("grms 1", af_basquin(1.0), 2.0_f64.powf(1.5), 1e-9);
    assert_close("grms 0.5", af_basquin(0.5), 1.0, 1e-12);
}

#[test]
fn peck_reduces_to_arrhenius_at_reference_humidity() {
    // 70 %RH에서 습도 항이 1이 된다
    assert_close(
        "70RH",
        af_peck(0.4, 70.0, 100.0, 40.0),
        af_arrhenius(0.4, 100.0, 40.0),
        1e-9,
    );
    assert!(af_peck(0.4, 85.0, 100.0, 40.0) > af_peck(0.4, 70.0, 100.0, 40.0));
}

#[test]
fn lawson_identity() {
    assert_close("identity", af_lawson(0.4, 60.0, 85.0, 60.0, 85.0), 1.0, 1e-12);
    // 시험 습도가 높으면 AF가 커진다
    assert!(af_lawson(0.4, 60.0, 95.0, 60.0, 85.0) > 1.0);
}

#[test]
fn norris_landzberg_identity() {
    let af = af_norris_landzberg(80.0, 80.0, 6.0, 6.0, 100.0, 100.0, 2.3, 0.3, 0.4);
    assert_close("identity", af, 1.0, 1e-12);
    // 시험 ΔT가 크면 가속된다
    let accelerated = af_norris_landzberg(80.0, 120.0, 6.0, 6.0, 100.0, 125.0, 2.3, 0.3, 0.4);
    assert!(accelerated > 1.0);
}

#[test]
fn norris_landzberg_ramp_dwell_variant_is_finite() {
    // Lee/Chiang/Wu 상수. 램프/유지 항 때문에 동일 조건이 AF = 1이 되지는 않는다.
    let af = af_norris_landzberg2(
        80.0, 120.0, 600.0, 300.0, 600.0, 300.0, 100.0, 125.0, 1.9, 0.239, 0.199, 0.122,
    );
    assert!(af.is_finite() && af > 0.0);
}
