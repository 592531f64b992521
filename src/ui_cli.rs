use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::isolation::{
    altitude_factor, clearance, creepage, creepage_pcb, energy_class, es1_peak_limit,
    es2_peak_limit, rated_impulse_voltage, test_voltage, MaterialGroup, StressType,
};
use crate::reliability;
use crate::thermal;
use crate::value;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Clearance,
    Creepage,
    CreepagePcb,
    ImpulseVoltage,
    EnergyClass,
    TestVoltage,
    Acceleration,
    ThermalRunaway,
    ValueParsing,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Electronics Design Toolbox ===");
    println!(" 1) 공간거리 (clearance)");
    println!(" 2) 연면거리 (creepage, 일반)");
    println!(" 3) 연면거리 (creepage, PCB)");
    println!(" 4) 정격 임펄스 내전압");
    println!(" 5) 에너지원 등급 (ES1/ES2/ES3)");
    println!(" 6) 고도 보정 시험 전압");
    println!(" 7) 가속 계수 (신뢰성)");
    println!(" 8) 열폭주 진단");
    println!(" 9) 공학 표기 값 해석");
    println!("10) 설정");
    println!(" 0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Clearance),
            "2" => return Ok(MenuChoice::Creepage),
            "3" => return Ok(MenuChoice::CreepagePcb),
            "4" => return Ok(MenuChoice::ImpulseVoltage),
            "5" => return Ok(MenuChoice::EnergyClass),
            "6" => return Ok(MenuChoice::TestVoltage),
            "7" => return Ok(MenuChoice::Acceleration),
            "8" => return Ok(MenuChoice::ThermalRunaway),
            "9" => return Ok(MenuChoice::ValueParsing),
            "10" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 공간거리 메뉴를 처리한다.
pub fn handle_clearance(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 공간거리 --");
    let stress = read_stress_type(cfg.defaults.stress_type)?;
    let volt = read_f64("동작 전압(V): ")?;
    let altitude = read_f64_default("고도(m)", cfg.defaults.altitude_m)?;
    let pollution = read_u8_default("오염 등급(1~4)", cfg.defaults.pollution_degree)?;
    let reinforced = read_bool_default("강화 절연", cfg.defaults.reinforced)?;

    let mm = clearance(stress, volt, altitude, pollution, reinforced);
    print_mm("요구 공간거리", mm);
    Ok(())
}

/// 일반 연면거리 메뉴를 처리한다.
pub fn handle_creepage(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 연면거리 (일반) --");
    let volt = read_f64("동작 전압(V): ")?;
    let pollution = read_u8_default("오염 등급(1~3)", cfg.defaults.pollution_degree)?;
    let material = read_material_group(cfg.defaults.material_group)?;
    let reinforced = read_bool_default("강화 절연", cfg.defaults.reinforced)?;

    let mm = creepage(volt, pollution, material, reinforced);
    print_mm("요구 연면거리", mm);
    Ok(())
}

/// PCB 연면거리 메뉴를 처리한다.
pub fn handle_creepage_pcb(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 연면거리 (PCB) --");
    println!("참고: PCB 표는 오염 등급 1~2, 1000 V까지만 정의됩니다.");
    let volt = read_f64("동작 전압(V): ")?;
    let pollution = read_u8_default("오염 등급(1~2)", cfg.defaults.pollution_degree.min(2))?;
    let reinforced = read_bool_default("강화 절연", cfg.defaults.reinforced)?;

    let mm = creepage_pcb(volt, pollution, reinforced);
    print_mm("요구 연면거리", mm);
    Ok(())
}

/// 정격 임펄스 내전압 메뉴를 처리한다.
pub fn handle_impulse_voltage(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 정격 임펄스 내전압 --");
    let volt = read_f64("상-중성선 전압(V): ")?;
    let ovc = read_u8_default("과전압 카테고리(1~4)", cfg.defaults.overvoltage_category)?;

    let riv = rated_impulse_voltage(volt, ovc);
    if riv < 0.0 {
        println!("정의 범위 밖입니다 (카테고리 1~4, 전압 1500 V 이하).");
    } else {
        println!("정격 임펄스 내전압: {riv:.0} V");
    }
    Ok(())
}

/// 에너지원 등급 메뉴를 처리한다.
pub fn handle_energy_class() -> Result<(), AppError> {
    println!("\n-- 에너지원 등급 --");
    let vdc = read_f64("DC 전압(V): ")?;
    let vpk = read_f64("피크 전압(V): ")?;
    let freq = read_f64("주파수(Hz): ")?;

    let class = energy_class(vdc, vpk, freq);
    println!("에너지원 등급: ES{class}");
    println!(
        "참고 한계: ES1 피크 {:.1} V, ES2 피크 {:.1} V",
        es1_peak_limit(freq),
        es2_peak_limit(freq)
    );
    Ok(())
}

/// 고도 보정 시험 전압 메뉴를 처리한다.
pub fn handle_test_voltage(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 고도 보정 시험 전압 --");
    let volt = read_f64("규정 시험 전압(V): ")?;
    let clr = read_f64("공간거리(mm): ")?;
    let altitude = read_f64_default("시험장 고도(m)", cfg.defaults.altitude_m)?;

    let factor = altitude_factor(altitude);
    let v = test_voltage(volt, clr, altitude);
    if v.is_nan() {
        println!("정의 범위 밖입니다 (고도 0~20000 m).");
    } else {
        println!("고도 계수 {factor:.3}, 보정 시험 전압: {v:.0} V");
    }
    Ok(())
}

/// 가속 계수 메뉴를 처리한다.
pub fn handle_acceleration() -> Result<(), AppError> {
    println!("\n-- 가속 계수 --");
    println!("1) Arrhenius  2) Peck  3) Coffin-Manson  4) Norris-Landzberg  5) Basquin  6) Lawson");
    let sel = read_line("모델 선택: ")?;
    match sel.trim() {
        "1" => {
            let ea = read_f64("활성화 에너지 Ea(eV): ")?;
            let tt = read_f64("시험 온도(°C): ")?;
            let tf = read_f64("필드 온도(°C): ")?;
            println!("AF = {:.3}", reliability::af_arrhenius(ea, tt, tf));
        }
        "2" => {
            let ea = read_f64("활성화 에너지 Ea(eV): ")?;
            let rh = read_f64("시험 상대습도(%RH): ")?;
            let tt = read_f64("시험 온도(°C): ")?;
            let tf = read_f64("필드 온도(°C): ")?;
            println!("AF = {:.3}", reliability::af_peck(ea, rh, tt, tf));
        }
        "3" => {
            let dtt = read_f64("시험 ΔT(°C): ")?;
            let dtf = read_f64("필드 ΔT(°C): ")?;
            println!("AF = {:.3}", reliability::af_coffin_manson(dtt, dtf));
        }
        "4" => {
            let dtf = read_f64("필드 ΔT(°C): ")?;
            let dtt = read_f64("시험 ΔT(°C): ")?;
            let ff = read_f64("필드 사이클 빈도(/일): ")?;
            let ft = read_f64("시험 사이클 빈도(/일): ")?;
            let tmf = read_f64("필드 최고 온도(°C): ")?;
            let tmt = read_f64("시험 최고 온도(°C): ")?;
            // SAC305 무연 솔더의 ZVEI 상수
            let af = reliability::af_norris_landzberg(dtf, dtt, ff, ft, tmf, tmt, 2.3, 0.3, 0.4);
            println!("AF = {af:.3} (b=2.3, y=0.3, Ea=0.4)");
        }
        "5" => {
            let grms = read_f64("진동 grms: ")?;
            println!("AF = {:.3}", reliability::af_basquin(grms));
        }
        "6" => {
            let ea = read_f64("활성화 에너지 Ea(eV): ")?;
            let tt = read_f64("시험 온도(°C): ")?;
            let rht = read_f64("시험 상대습도(%RH): ")?;
            let tf = read_f64("필드 온도(°C): ")?;
            let rhf = read_f64("필드 상대습도(%RH): ")?;
            println!("AF = {:.3}", reliability::af_lawson(ea, tt, rht, tf, rhf));
        }
        _ => println!("지원하지 않는 번호입니다."),
    }
    Ok(())
}

/// 열폭주 진단 메뉴를 처리한다.
pub fn handle_thermal_runaway() -> Result<(), AppError> {
    println!("\n-- 열폭주 진단 --");
    let i0 = read_f64("25°C 리크 전류(A): ")?;
    let vr = read_f64("역전압(V): ")?;
    let t0 = read_f64("주변 온도(°C): ")?;

    match thermal::max_safe_rth(i0, vr, t0) {
        Some(rth) => println!("허용 최대 열저항: {rth:.0} °C/W (Tj,max 150 °C 기준)"),
        None => println!("해당 조건에서는 안정한 열저항이 없습니다."),
    }
    Ok(())
}

/// 공학 표기 값 해석 메뉴를 처리한다.
pub fn handle_value_parsing() -> Result<(), AppError> {
    println!("\n-- 공학 표기 값 해석 --");
    let s = read_line("값 입력(ex: 4k7 100n 1meg): ")?;
    for (token, v) in s.split_whitespace().zip(value::parse_values(&s)) {
        if v.is_nan() {
            println!("{token} -> 해석 불가");
        } else {
            println!("{token} -> {v:e}");
        }
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("현재 기본값: {:?}", cfg.defaults);
    cfg.defaults.altitude_m = read_f64_default("기본 고도(m)", cfg.defaults.altitude_m)?;
    cfg.defaults.pollution_degree =
        read_u8_default("기본 오염 등급(1~4)", cfg.defaults.pollution_degree)?;
    cfg.defaults.overvoltage_category =
        read_u8_default("기본 과전압 카테고리(1~4)", cfg.defaults.overvoltage_category)?;
    cfg.defaults.material_group = read_material_group(cfg.defaults.material_group)?;
    cfg.defaults.stress_type = read_stress_type(cfg.defaults.stress_type)?;
    cfg.defaults.reinforced = read_bool_default("기본 강화 절연", cfg.defaults.reinforced)?;
    cfg.save()?;
    println!("설정을 저장했습니다.");
    Ok(())
}

fn read_stress_type(default: StressType) -> Result<StressType, AppError> {
    loop {
        let s = read_line("스트레스 종류 p(임펄스)/h(고전위)/d(방전 회피) [기본값 유지: Enter]: ")?;
        match s.trim() {
            "" => return Ok(default),
            "p" => return Ok(StressType::Pulse),
            "h" => return Ok(StressType::HighPotential),
            "d" => return Ok(StressType::DischargeAvoidance),
            _ => println!("p, h, d 중 하나를 입력하세요."),
        }
    }
}

fn read_material_group(default: MaterialGroup) -> Result<MaterialGroup, AppError> {
    loop {
        let s = read_line("재료 그룹 1/2/3a/3b [기본값 유지: Enter]: ")?;
        match s.trim() {
            "" => return Ok(default),
            "1" => return Ok(MaterialGroup::I),
            "2" => return Ok(MaterialGroup::II),
            "3a" => return Ok(MaterialGroup::IIIa),
            "3b" => return Ok(MaterialGroup::IIIb),
            _ => println!("1, 2, 3a, 3b 중 하나를 입력하세요."),
        }
    }
}

fn print_mm(label: &str, mm: f64) {
    if mm.is_nan() {
        println!("{label}: 정의 범위 밖입니다 (표 범위/등급 조합을 확인하세요).");
    } else {
        println!("{label}: {mm:.2} mm");
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_f64_default(label: &str, default: f64) -> Result<f64, AppError> {
    let s = read_line(&format!("{label} [{default}]: "))?;
    let s = s.trim();
    if s.is_empty() {
        return Ok(default);
    }
    s.parse::<f64>()
        .map_err(|_| AppError::Parse(s.to_string()))
}

fn read_u8_default(label: &str, default: u8) -> Result<u8, AppError> {
    let s = read_line(&format!("{label} [{default}]: "))?;
    let s = s.trim();
    if s.is_empty() {
        return Ok(default);
    }
    s.parse::<u8>().map_err(|_| AppError::Parse(s.to_string()))
}

fn read_bool_default(label: &str, default: bool) -> Result<bool, AppError> {
    let d = if default { "y" } else { "n" };
    loop {
        let s = read_line(&format!("{label} y/n [{d}]: "))?;
        match s.trim() {
            "" => return Ok(default),
            "y" | "Y" => return Ok(true),
            "n" | "N" => return Ok(false),
            _ => println!("y 또는 n을 입력하세요."),
        }
    }
}
