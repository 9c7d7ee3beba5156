use clap::Parser;

use boiler_fuel_switch::{app, config, i18n};

/// 커맨드라인 인자.
#[derive(Debug, Parser)]
#[command(name = "boiler_fuel_switch")]
struct Cli {
    /// UI 언어 코드 (ko/en, auto=시스템 로케일)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 일일 운전시간 샘플러 난수 시드 (재현용)
    #[arg(long)]
    seed: Option<u64>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    let tr = i18n::Translator::new_with_pack(&lang, None);
    app::run(&mut cfg, &tr, cli.seed)?;
    Ok(())
}
