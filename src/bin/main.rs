use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use wrapref::config::{self, PluginSettings};
use wrapref::refactor::{ACTION_NAME, REFACTOR_NAME};
use wrapref::text::{format_line_col, parse_locus};
use wrapref::{
    CursorLocus, FormatOptions, HostError, HostResult, LanguageService, TypeScriptProgram,
    TypeScriptService, UserPreferences, WrapFunctionReference,
};

/// Wrap a function reference passed as a callback into a forwarding closure
#[derive(Parser)]
#[command(name = "wrapref")]
#[command(version)]
#[command(about = "Wrap a function reference passed as a callback into a forwarding closure")]
struct Cli {
    /// TOML settings file (default: the user config file, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List refactors applicable at a position as JSON
    Refactors {
        /// TypeScript source file
        file: PathBuf,

        /// Byte offset `N`, range `N..M`, or 1-based `LINE:COL`
        #[arg(long)]
        at: String,
    },
    /// Wrap the function reference at a position
    Apply {
        /// TypeScript source file
        file: PathBuf,

        /// Byte offset `N`, range `N..M`, or 1-based `LINE:COL`
        #[arg(long)]
        at: String,

        /// Rewrite the file in place
        #[arg(long, conflicts_with = "diff")]
        write: bool,

        /// Print a unified diff instead of the rewritten file
        #[arg(long)]
        diff: bool,
    },
}

/// Exit status when the refactor is not offered at the position.
const NOT_APPLICABLE: u8 = 2;

fn load_settings(path: Option<&Path>) -> HostResult<PluginSettings> {
    let file = match path {
        Some(path) => Some(config::load_settings_file(path)?.ok_or_else(|| {
            HostError::config(format!("config file not found: {}", path.display()))
        })?),
        None => config::load_user_settings()?,
    };
    Ok(PluginSettings::from(file.unwrap_or_default()))
}

struct Session {
    file_name: String,
    text: String,
    locus: CursorLocus,
    service: WrapFunctionReference<TypeScriptService>,
}

impl Session {
    fn open(file: &Path, at: &str, settings: PluginSettings) -> HostResult<Self> {
        let text = std::fs::read_to_string(file)?;
        let file_name = file.to_string_lossy().into_owned();
        let locus = parse_locus(&text, at)?;
        let program = TypeScriptProgram::from_source(&file_name, &text)?;
        let service = WrapFunctionReference::new(TypeScriptService::new(program), settings);
        Ok(Self {
            file_name,
            text,
            locus,
            service,
        })
    }

    fn is_applicable(&self) -> bool {
        self.service
            .get_applicable_refactors(&self.file_name, self.locus)
            .iter()
            .any(|r| r.name == REFACTOR_NAME)
    }

    fn report_not_applicable(&self) -> ExitCode {
        eprintln!(
            "wrapref: refactor not applicable at {}:{}",
            self.file_name,
            format_line_col(&self.text, self.locus.offset())
        );
        ExitCode::from(NOT_APPLICABLE)
    }
}

fn list_refactors(session: &Session) -> HostResult<ExitCode> {
    let refactors = session
        .service
        .get_applicable_refactors(&session.file_name, session.locus);
    let json = serde_json::to_string_pretty(&refactors)?;
    println!("{}", json);
    if refactors.iter().any(|r| r.name == REFACTOR_NAME) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(NOT_APPLICABLE))
    }
}

fn apply(session: &Session, file: &Path, write: bool, diff: bool) -> HostResult<ExitCode> {
    if !session.is_applicable() {
        return Ok(session.report_not_applicable());
    }

    let info = session.service.get_edits_for_refactor(
        &session.file_name,
        &FormatOptions::default(),
        session.locus,
        REFACTOR_NAME,
        ACTION_NAME,
        &UserPreferences::default(),
    )?;
    let Some(info) = info else {
        return Ok(session.report_not_applicable());
    };

    let mut rewritten = session.text.clone();
    // Edits come back in source order; apply from the end so spans stay valid
    for edit in info.edits.iter().rev() {
        rewritten = edit.apply(&rewritten).ok_or_else(|| {
            HostError::position(
                format!("{}..{}", edit.span.start, edit.span.end()),
                "edit span outside file",
            )
        })?;
    }

    if write {
        std::fs::write(file, &rewritten)?;
        log::info!("Rewrote {}", file.display());
    } else if diff {
        let name = file.display();
        let diff = similar::TextDiff::from_lines(&session.text, &rewritten)
            .unified_diff()
            .header(&format!("a/{}", name), &format!("b/{}", name))
            .to_string();
        print!("{}", diff);
    } else {
        print!("{}", rewritten);
    }
    Ok(ExitCode::SUCCESS)
}

fn run(cli: Cli) -> HostResult<ExitCode> {
    let settings = load_settings(cli.config.as_deref())?;
    log::debug!("Effective settings: {:?}", settings);

    match cli.command {
        Commands::Refactors { file, at } => list_refactors(&Session::open(&file, &at, settings)?),
        Commands::Apply {
            file,
            at,
            write,
            diff,
        } => apply(&Session::open(&file, &at, settings)?, &file, write, diff),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
