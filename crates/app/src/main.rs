use std::fmt;
use std::sync::Arc;

use coursehub_core::model::AccessToken;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use gateway::GatewayConfig;
use services::{AppServices, AuthService, CourseService, LessonService, QuizService, VisitTracker};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
    EmptyToken,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
            ArgsError::EmptyToken => write!(f, "--token must not be empty"),
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

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn course_service(&self) -> Arc<CourseService> {
        self.services.course_service()
    }

    fn lesson_service(&self) -> Arc<LessonService> {
        self.services.lesson_service()
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        self.services.quiz_service()
    }

    fn auth_service(&self) -> Arc<AuthService> {
        self.services.auth_service()
    }

    fn visits(&self) -> VisitTracker {
        self.services.visits()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--api-url <url>] [--token <access-token>]");
    eprintln!("  cargo run -p app -- demo                    # seeded offline catalogue");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --api-url http://localhost:8000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COURSEHUB_API_URL, COURSEHUB_API_TIMEOUT_SECS, COURSEHUB_TOKEN, COURSEHUB_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Demo,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "demo" => Some(Self::Demo),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    api_url: Option<String>,
    token: Option<AccessToken>,
}

impl Args {
    fn parse_ui(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            api_url: None,
            token: std::env::var("COURSEHUB_TOKEN")
                .ok()
                .and_then(AccessToken::new),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    parsed.api_url = Some(value);
                }
                "--token" => {
                    let value = require_value(args, "--token")?;
                    parsed.token = Some(AccessToken::new(value).ok_or(ArgsError::EmptyToken)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn parse_demo(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        match args.next() {
            None => Ok(Self::default()),
            Some(arg) if arg == "--help" || arg == "-h" => {
                print_usage();
                std::process::exit(0);
            }
            Some(arg) => Err(ArgsError::UnknownArg(arg)),
        }
    }

    fn gateway_config(&self) -> Result<GatewayConfig, Box<dyn std::error::Error>> {
        let from_env = GatewayConfig::from_env()?;
        Ok(match &self.api_url {
            Some(raw) => GatewayConfig::new(raw)?.with_timeout(from_env.timeout),
            None => from_env,
        })
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("COURSEHUB_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = match cmd {
        Command::Ui => Args::parse_ui(&mut iter),
        Command::Demo => Args::parse_demo(&mut iter),
    }
    .map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let services = match cmd {
        Command::Ui => {
            let config = parsed.gateway_config()?;
            AppServices::http(&config, parsed.token)?
        }
        Command::Demo => AppServices::demo().await?,
    };

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("CourseHub")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(err) = run().await {
        tracing::error!(error = %err, "startup failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
