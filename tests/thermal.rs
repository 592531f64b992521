//! 열폭주 진단과 패키지 열저항 테스트.

use electronics_design_toolbox::thermal::{
    default_leakage_k, delta_tj, ileak, ileak_arrhenius, max_safe_rth, rth, runaway,
};

#[test]
fn rth_known_packages() {
    assert_eq!(rth("0201"), Some(800.0));
    assert_eq!(rth("0603"), Some(400.0));
    assert_eq!(rth("2512"), Some(50.0));
    // SOT-23 계열은 접두사로 잡는다, 대소문자 무관
    assert_eq!(rth("SOT23-5"), Some(357.0));
    assert_eq!(rth("sot23"), Some(357.0));
}

#[test]
fn rth_unknown_package_is_none() {
    assert_eq!(rth("qfn16"), None);
    assert_eq!(rth(""), None);
}

#[test]
fn ileak_reference_point() {
    let k = default_leakage_k();
    // 25 °C에서는 기준 전류 그대로
    assert_eq!(ileak(50e-6, 25.0, k), 50e-6);
    // k = 10/ln(2.05)이므로 10 °C 상승마다 2.05배
    let ratio = ileak(50e-6, 35.0, k) / ileak(50e-6, 25.0, k);
    assert!((ratio - 2.05).abs() < 1e-9);
}

#[test]
fn ileak_arrhenius_reference_point() {
    // 25 °C에서는 Arrhenius 항이 1이라 기준 전류 그대로
    let i = ileak_arrhenius(50e-6, 25.0);
    assert!((i - 50e-6).abs() < 1e-18);
    assert!(ileak_arrhenius(50e-6, 85.0) > 50e-6);
}

#[test]
fn delta_tj_is_linear() {
    assert_eq!(delta_tj(0.5, 300.0), 150.0);
}

#[test]
fn runaway_depends_on_rth() {
    let k = default_leakage_k();
    // 50 µA, 35 V, 주변 75 °C: 열저항 30 °C/W에서는 약 77 °C로 수렴,
    // 300 °C/W에서는 발산한다
    assert!(!runaway(35.0, 50e-6, 75.0, 30.0, 150.0, k));
    assert!(runaway(35.0, 50e-6, 75.0, 300.0, 150.0, k));
}

#[test]
fn max_safe_rth_finds_a_stable_value() {
    let rth = max_safe_rth(50e-6, 35.0, 75.0).expect("stable rth exists");
    assert!(rth > 0.0 && rth < 300.0);
    // 반환된 값에서는 실제로 안정해야 한다
    assert!(!runaway(35.0, 50e-6, 75.0, rth, 150.0, default_leakage_k()));
}

#[test]
fn max_safe_rth_none_when_hopeless() {
    // 1 A 리크 / 100 V / 주변 100 °C는 어떤 열저항에서도 폭주한다
    assert_eq!(max_safe_rth(1.0, 100.0, 100.0), None);
}
