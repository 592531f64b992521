//! 공학 표기 값 해석 테스트.

use electronics_design_toolbox::value::{parse_value, parse_values};

fn assert_close(label: &str, actual: f64, expected: f64) {
    let tol = 1e-9 * expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:e} got {actual:e}"
    );
}

#[test]
fn plain_numbers_pass_through() {
    assert_close("int", parse_value("10"), 10.0);
    assert_close("frac", parse_value("3.3"), 3.3);
    assert_close("exp", parse_value("1e3"), 1000.0);
    assert_close("neg", parse_value("-4.7"), -4.7);
}

#[test]
fn infix_multiplier_notation() {
    // 접미사 뒤 숫자는 소수부로 내려간다
    assert_close("4k7", parse_value("4k7"), 4700.0);
    assert_close("2u2", parse_value("2u2"), 2.2e-6);
    assert_close("1k25", parse_value("1k25"), 1250.0);
}

#[test]
fn suffix_multipliers() {
    assert_close("1meg", parse_value("1meg"), 1e6);
    assert_close("47k", parse_value("47k"), 47e3);
    assert_close("47m", parse_value("47m"), 47e-3);
    assert_close("100n", parse_value("100n"), 100e-9);
    assert_close("10p", parse_value("10p"), 10e-12);
    assert_close("1f", parse_value("1f"), 1e-15);
    assert_close("2.2u", parse_value("2.2u"), 2.2e-6);
}

#[test]
fn unit_letters_are_ignored() {
    // 배수로 해석되지 않는 접미사는 단위 표기로 본다
    assert_close("3.3v", parse_value("3.3v"), 3.3);
}

#[test]
fn malformed_input_is_nan() {
    assert!(parse_value("abc").is_nan());
    assert!(parse_value("").is_nan());
}

#[test]
fn multiple_values_split_on_whitespace() {
    let vv = parse_values("1k 2k2 100n");
    assert_eq!(vv.len(), 3);
    assert_close("1k", vv[0], 1000.0);
    assert_close("2k2", vv[1], 2200.0);
    assert_close("100n", vv[2], 100e-9);
}
