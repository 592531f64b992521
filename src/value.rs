//! 공학 표기 문자열("4k7", "1meg", "100n")을 수치로 해석한다.

/// 공백으로 나뉜 여러 값을 해석한다.
pub fn parse_values(s: &str) -> Vec<f64> {
    s.split_whitespace().map(parse_value).collect()
}

/// 한 값을 해석한다. 실패하면 `NaN`.
///
/// 일반 실수 표기를 먼저 시도하고, 안 되면 "숫자 + 배수 접미사 + 숫자"
/// 꼴로 나눈다("4k7" = 4.7 kΩ 표기). 접미사 뒤 숫자는 자릿수만큼
/// 소수부로 내려간다("1k25" = 1250). 배수로 해석되지 않는 접미사는
/// 단위 표기("3.3v")로 보고 무시한다.
pub fn parse_value(s: &str) -> f64 {
    let s = s.trim();
    if let Ok(v) = s.parse::<f64>() {
        return v;
    }
    let s = s.to_lowercase();

    let mut head = String::new();
    let mut tail = String::new();
    let mut suffix = String::new();

    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_digit() || c == '.' {
            if suffix.is_empty() {
                head.push(c);
            } else {
                tail.push(c);
            }
        } else if c == ' ' || c == '\t' {
            continue;
        } else {
            if i == 0 {
                return f64::NAN;
            }
            suffix.push(c);
        }
    }

    if head.is_empty() {
        return f64::NAN;
    }
    let n1: f64 = head.parse().unwrap_or(0.0);
    let n2: f64 = if tail.is_empty() {
        0.0
    } else {
        tail.parse().unwrap_or(0.0)
    };
    let value = n1 + n2 / 10f64.powi(tail.len() as i32);

    if suffix.is_empty() {
        return value;
    }
    if suffix == "meg" {
        return value * 1e6;
    }

    match suffix.chars().next() {
        Some('k') => value * 1e3,
        Some('m') => value * 1e-3,
        Some('u') | Some('µ') => value * 1e-6,
        Some('n') => value * 1e-9,
        Some('p') => value * 1e-12,
        Some('f') => value * 1e-15,
        _ => value,
    }
}
