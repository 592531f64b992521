//! 규격 표를 위한 단조 증가 X축 구간 선형 보간기.

/// 병렬 배열 `(xs, ys)`에 대해 `x`를 구간 선형 보간한다.
///
/// - `x`가 표 범위 밖이면 `NaN`을 반환한다. 가장자리 값으로 클램프하지
///   않으며, 호출자는 `NaN`을 "정의 범위 밖"으로 취급해야 한다.
/// - `x`가 꼭지점과 정확히 일치하면 해당 Y 값을 보간식 없이 그대로
///   반환한다. X가 중복된 행은 앞쪽 행을 우선한다.
/// - 일부 규격 표는 Y 열이 X축보다 짧게 옮겨져 있다(PCB 연면거리 표는
///   1000 V까지만 정의). 두 배열의 공통 길이까지만 유효 구간으로 본다.
pub fn interpolate(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return f64::NAN;
    }
    let xs = &xs[..n];
    let ys = &ys[..n];

    if x < xs[0] || x > xs[n - 1] {
        return f64::NAN;
    }
    if let Some(i) = xs.iter().position(|&xi| xi == x) {
        return ys[i];
    }
    for i in 0..n - 1 {
        if x > xs[i] && x < xs[i + 1] {
            return ys[i] + (x - xs[i]) * (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]);
        }
    }
    // x가 NaN이었거나 구간을 찾지 못한 경우
    f64::NAN
}
