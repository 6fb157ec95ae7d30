use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::QuizError;
use quiz_core::model::QuizSettings;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number<T: std::str::FromStr>(flag: &'static str, raw: String) -> Result<T, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

fn env_flag(value: Option<String>) -> bool {
    value.is_some_and(|value| {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

struct DesktopApp {
    settings: QuizSettings,
    seed: Option<u64>,
    mute: bool,
    no_mic: bool,
}

impl UiApp for DesktopApp {
    fn settings(&self) -> QuizSettings {
        self.settings.clone()
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn speech_input_enabled(&self) -> bool {
        !self.no_mic
    }

    fn speech_output_enabled(&self) -> bool {
        !self.mute
    }
}

#[derive(Debug, PartialEq)]
struct Args {
    seed: Option<u64>,
    max_operand: Option<u32>,
    mute: bool,
    no_mic: bool,
    animations: bool,
    log_filter: String,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --seed <u64>          repeatable question sequence");
    eprintln!("  --max-operand <n>     largest operand, 1 to 10000 (default 20)");
    eprintln!("  --mute                no speech output");
    eprintln!("  --no-mic              no voice answers");
    eprintln!("  --no-animations       skip transition animations");
    eprintln!("  --log <filter>        tracing filter (default info)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_SEED, QUIZ_MAX_OPERAND, QUIZ_MUTE, QUIZ_NO_MIC, QUIZ_LOG");
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            seed: env("QUIZ_SEED")
                .map(|raw| parse_number("QUIZ_SEED", raw))
                .transpose()?,
            max_operand: env("QUIZ_MAX_OPERAND")
                .map(|raw| parse_number("QUIZ_MAX_OPERAND", raw))
                .transpose()?,
            mute: env_flag(env("QUIZ_MUTE")),
            no_mic: env_flag(env("QUIZ_NO_MIC")),
            animations: true,
            log_filter: env("QUIZ_LOG").unwrap_or_else(|| "info".to_string()),
            help: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    parsed.seed = Some(parse_number("--seed", value)?);
                }
                "--max-operand" => {
                    let value = require_value(args, "--max-operand")?;
                    parsed.max_operand = Some(parse_number("--max-operand", value)?);
                }
                "--mute" => parsed.mute = true,
                "--no-mic" => parsed.no_mic = true,
                "--no-animations" => parsed.animations = false,
                "--log" => parsed.log_filter = require_value(args, "--log")?,
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn settings(&self) -> Result<QuizSettings, QuizError> {
        let defaults = QuizSettings::default();
        let settings = QuizSettings::new(
            self.max_operand.unwrap_or(defaults.max_operand()),
            defaults.name_max_len(),
            defaults.speech_rate(),
            defaults.narrator_pitch(),
            defaults.default_pitch(),
        )?;
        Ok(settings.with_animations(self.animations))
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&parsed.log_filter))
        .init();

    let settings = parsed.settings()?;
    info!(
        seed = ?parsed.seed,
        mute = parsed.mute,
        no_mic = parsed.no_mic,
        max_operand = settings.max_operand(),
        "launching quiz"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        settings,
        seed: parsed.seed,
        mute: parsed.mute,
        no_mic: parsed.no_mic,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Voice Math Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
