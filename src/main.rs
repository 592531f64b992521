use clap::{Parser, Subcommand};

use electronics_design_toolbox::isolation::{
    clearance, creepage, creepage_pcb, energy_class, rated_impulse_voltage, MaterialGroup,
    StressType,
};
use electronics_design_toolbox::{app, config, value};

/// 절연 협조·신뢰성 계산 CLI. 서브커맨드 없이 실행하면 대화식 메뉴로 들어간다.
#[derive(Parser)]
#[command(name = "electronics_design_toolbox", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 공간거리(mm) 계산
    Clearance {
        #[arg(value_enum)]
        stress: StressType,
        /// 동작 전압(V)
        volt: f64,
        /// 고도(m)
        #[arg(long, default_value_t = 2000.0)]
        altitude: f64,
        /// 오염 등급(1~4)
        #[arg(long, default_value_t = 2)]
        pollution: u8,
        /// 강화 절연
        #[arg(long)]
        reinforced: bool,
    },
    /// 일반 연면거리(mm) 계산
    Creepage {
        /// 동작 전압(V)
        volt: f64,
        /// 오염 등급(1~3)
        #[arg(long, default_value_t = 2)]
        pollution: u8,
        /// 재료 그룹
        #[arg(long, value_enum, default_value_t = MaterialGroup::IIIa)]
        material: MaterialGroup,
        /// 강화 절연
        #[arg(long)]
        reinforced: bool,
    },
    /// PCB 연면거리(mm) 계산
    CreepagePcb {
        /// 동작 전압(V)
        volt: f64,
        /// 오염 등급(1~2)
        #[arg(long, default_value_t = 1)]
        pollution: u8,
        /// 강화 절연
        #[arg(long)]
        reinforced: bool,
    },
    /// 정격 임펄스 내전압(V) 조회
    Riv {
        /// 상-중성선 전압(V)
        volt: f64,
        /// 과전압 카테고리(1~4)
        #[arg(long, default_value_t = 2)]
        ovc: u8,
    },
    /// 에너지원 등급(ES1/ES2/ES3) 판정
    Energy {
        /// DC 전압(V)
        vdc: f64,
        /// 피크 전압(V)
        vpk: f64,
        /// 주파수(Hz)
        #[arg(long, default_value_t = 0.0)]
        freq: f64,
    },
    /// 공학 표기 값 해석 (ex: 4k7 100n 1meg)
    Value {
        tokens: Vec<String>,
    },
}

/// 프로그램의 엔트리 포인트. 서브커맨드를 처리하거나 대화식 메뉴를 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        let mut cfg = config::load_or_default()?;
        app::run(&mut cfg)?;
        return Ok(());
    };

    match command {
        Command::Clearance {
            stress,
            volt,
            altitude,
            pollution,
            reinforced,
        } => print_mm(clearance(stress, volt, altitude, pollution, reinforced)),
        Command::Creepage {
            volt,
            pollution,
            material,
            reinforced,
        } => print_mm(creepage(volt, pollution, material, reinforced)),
        Command::CreepagePcb {
            volt,
            pollution,
            reinforced,
        } => print_mm(creepage_pcb(volt, pollution, reinforced)),
        Command::Riv { volt, ovc } => {
            let riv = rated_impulse_voltage(volt, ovc);
            if riv < 0.0 {
                println!("정의 범위 밖");
            } else {
                println!("{riv:.0} V");
            }
        }
        Command::Energy { vdc, vpk, freq } => {
            println!("ES{}", energy_class(vdc, vpk, freq));
        }
        Command::Value { tokens } => {
            for token in tokens {
                let v = value::parse_value(&token);
                if v.is_nan() {
                    println!("{token} -> 해석 불가");
                } else {
                    println!("{token} -> {v:e}");
                }
            }
        }
    }
    Ok(())
}

fn print_mm(mm: f64) {
    if mm.is_nan() {
        println!("정의 범위 밖");
    } else {
        println!("{mm:.2} mm");
    }
}
