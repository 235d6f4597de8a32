use std::io;
use std::io::Read;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::DiffState;
use crate::domain::models::EditorState;
use crate::domain::models::Language;
use crate::domain::models::Page;
use crate::domain::models::ShareLink;
use crate::domain::services::DiffMarkers;
use crate::domain::services::LocationSync;
use crate::domain::services::QueryCodec;
use crate::infrastructure::highlighter::HighlightEngine;
use crate::infrastructure::highlighter::Renderer;
use crate::infrastructure::highlighter::Syntaxes;
use crate::infrastructure::highlighter::Themes;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

fn arg_base_url() -> Arg {
    return Arg::new(ConfigKey::BaseUrl.to_string())
        .short('b')
        .long(ConfigKey::BaseUrl.to_string())
        .env("SNIPSHARE_BASE_URL")
        .num_args(1)
        .help("Base URL prepended to generated share links. Links start at the viewer route when unset.");
}

fn arg_config_file() -> Arg {
    return Arg::new(ConfigKey::ConfigFile.to_string())
        .short('c')
        .long(ConfigKey::ConfigFile.to_string())
        .env("SNIPSHARE_CONFIG_FILE")
        .num_args(1)
        .help(format!(
            "Path to a configuration file. [default: {}]",
            Config::default(ConfigKey::ConfigFile)
        ));
}

fn arg_theme() -> Arg {
    return Arg::new(ConfigKey::Theme.to_string())
        .short('t')
        .long(ConfigKey::Theme.to_string())
        .env("SNIPSHARE_THEME")
        .num_args(1)
        .help(format!(
            "Color theme used when rendering. [default: {}]",
            Config::default(ConfigKey::Theme)
        ))
        .value_parser(PossibleValuesParser::new(Themes::list()));
}

fn arg_theme_file() -> Arg {
    return Arg::new(ConfigKey::ThemeFile.to_string())
        .long(ConfigKey::ThemeFile.to_string())
        .env("SNIPSHARE_THEME_FILE")
        .num_args(1)
        .help("Path to a .tmTheme file to use in place of a bundled theme.");
}

fn arg_lang() -> Arg {
    return Arg::new("lang")
        .short('l')
        .long("lang")
        .num_args(1)
        .help("Language tag embedded in the link. [default: json]")
        .value_parser(PossibleValuesParser::new(Language::VARIANTS));
}

fn subcommand_share() -> Command {
    return Command::new("share")
        .about("Create a share link from a file, stdin, or a pair of files to diff.")
        .arg(
            Arg::new("file")
                .help("Document to share. Reads stdin when omitted.")
                .num_args(1),
        )
        .arg(arg_lang())
        .arg(
            Arg::new("transforms")
                .long("transforms")
                .action(ArgAction::SetTrue)
                .help("Enable decoration marker rendering for the shared document."),
        )
        .arg(
            Arg::new("old")
                .long("old")
                .num_args(1)
                .requires("new")
                .conflicts_with_all(["file", "transforms"])
                .help("Left-hand document of a diff share."),
        )
        .arg(
            Arg::new("new")
                .long("new")
                .num_args(1)
                .requires("old")
                .conflicts_with_all(["file", "transforms"])
                .help("Right-hand document of a diff share."),
        );
}

fn subcommand_view() -> Command {
    return Command::new("view")
        .about("Render a share link in the terminal.")
        .arg(
            Arg::new("url")
                .help("Share link, or a bare #/page?query fragment.")
                .required(true),
        );
}

fn subcommand_diff() -> Command {
    return Command::new("diff")
        .about("Render an annotated diff of two files without creating a link.")
        .arg(Arg::new("old").help("Left-hand document.").required(true))
        .arg(Arg::new("new").help("Right-hand document.").required(true))
        .arg(arg_lang());
}

fn subcommand_decode() -> Command {
    return Command::new("decode")
        .about("Print the session state carried by a share link as JSON.")
        .arg(
            Arg::new("url")
                .help("Share link, or a bare #/page?query fragment.")
                .required(true),
        );
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for Snipshare")
        .hide(true)
        .subcommand(
            Command::new("syntaxes").about("List all supported code highlighting languages."),
        )
        .subcommand(Command::new("themes").about("List all supported code highlighting themes."))
        .subcommand(
            Command::new("log-path").about("Output path to the debug log file generated when running Snipshare with environment variable RUST_LOG=snipshare"),
        );
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION")
    );

    return Command::new("snipshare")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .arg(arg_base_url())
        .arg(arg_config_file())
        .arg(arg_theme())
        .arg(arg_theme_file())
        .subcommand(subcommand_share())
        .subcommand(subcommand_view())
        .subcommand(subcommand_diff())
        .subcommand(subcommand_decode())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug());
}

async fn read_document(file: Option<&String>) -> Result<String> {
    if let Some(file_path) = file {
        return Ok(fs::read_to_string(file_path).await?);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    return Ok(buffer);
}

fn resolve_language(raw: Option<&String>, page: Page) -> Language {
    return raw
        .and_then(|e| return Language::parse(e, page))
        .unwrap_or_default();
}

async fn command_share(matches: &ArgMatches) -> Result<()> {
    let lang = matches.get_one::<String>("lang");
    let sync = LocationSync::default();

    if let (Some(old_path), Some(new_path)) = (
        matches.get_one::<String>("old"),
        matches.get_one::<String>("new"),
    ) {
        let state = DiffState {
            code_old: fs::read_to_string(old_path).await?,
            code_new: fs::read_to_string(new_path).await?,
            language: resolve_language(lang, Page::Diff),
        };

        let ticket = sync.begin();
        let query = QueryCodec::encode_diff(&state).await?;
        let link = ShareLink::new(Page::Diff, query);
        sync.commit(ticket, link.to_url(&Config::get(ConfigKey::BaseUrl)));
    } else {
        let state = EditorState {
            code: read_document(matches.get_one::<String>("file")).await?,
            language: resolve_language(lang, Page::Editor),
            use_transforms: matches.get_flag("transforms"),
        };

        let ticket = sync.begin();
        let query = QueryCodec::encode_editor(&state).await?;
        let link = ShareLink::new(Page::Editor, query);
        sync.commit(ticket, link.to_url(&Config::get(ConfigKey::BaseUrl)));
    }

    println!("{}", sync.current().unwrap_or_default());

    return Ok(());
}

async fn command_view(matches: &ArgMatches) -> Result<()> {
    let link = ShareLink::parse(matches.get_one::<String>("url").unwrap())?;

    match link.page {
        Page::Editor => {
            let state = QueryCodec::decode_editor(&link.query).await;
            let rendered =
                Renderer::render_or_raw(&state.code, state.language, state.use_transforms).await;
            println!("{rendered}");
        },
        Page::Diff => {
            let state = QueryCodec::decode_diff(&link.query).await;
            let annotated = DiffMarkers::annotate(&state.code_old, &state.code_new);
            let rendered = Renderer::render_or_raw(&annotated, state.language, true).await;
            println!("{rendered}");
        },
    }

    return Ok(());
}

async fn command_diff(matches: &ArgMatches) -> Result<()> {
    let code_old = fs::read_to_string(matches.get_one::<String>("old").unwrap()).await?;
    let code_new = fs::read_to_string(matches.get_one::<String>("new").unwrap()).await?;
    let language = resolve_language(matches.get_one::<String>("lang"), Page::Diff);

    let annotated = DiffMarkers::annotate(&code_old, &code_new);
    let rendered = Renderer::render_or_raw(&annotated, language, true).await;
    println!("{rendered}");

    return Ok(());
}

async fn command_decode(matches: &ArgMatches) -> Result<()> {
    let link = ShareLink::parse(matches.get_one::<String>("url").unwrap())?;

    let res = match link.page {
        Page::Editor => {
            let state = QueryCodec::decode_editor(&link.query).await;
            serde_json::json!({ "page": link.page.to_string(), "state": state })
        },
        Page::Diff => {
            let state = QueryCodec::decode_diff(&link.query).await;
            serde_json::json!({ "page": link.page.to_string(), "state": state })
        },
    };

    println!("{}", serde_json::to_string_pretty(&res)?);

    return Ok(());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");

    return Ok(());
}

async fn command_config(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("create", _)) => {
            create_config_file().await?;
        },
        Some(("default", _)) => {
            println!("{}", Config::serialize_default(build()));
        },
        Some(("path", _)) => {
            println!("{}", Config::default(ConfigKey::ConfigFile));
        },
        _ => {
            bail!("No config subcommand provided.");
        },
    }

    return Ok(());
}

async fn command_debug(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("syntaxes", _)) => {
            let engine = HighlightEngine::get().await?;
            println!("{}", Syntaxes::list(&engine.syntax_set).join("\n"));
        },
        Some(("themes", _)) => {
            println!("{}", Themes::list().join("\n"));
        },
        Some(("log-path", _)) => {
            let log_path = dirs::cache_dir().unwrap().join("snipshare/debug.log");
            println!("{}", log_path.to_string_lossy());
        },
        _ => {
            bail!("No debug subcommand provided.");
        },
    }

    return Ok(());
}

pub async fn parse() -> Result<()> {
    let matches = build().get_matches();
    Config::load(build(), vec![&matches]).await?;

    match matches.subcommand() {
        Some(("share", subcommand_matches)) => {
            command_share(subcommand_matches).await?;
        },
        Some(("view", subcommand_matches)) => {
            command_view(subcommand_matches).await?;
        },
        Some(("diff", subcommand_matches)) => {
            command_diff(subcommand_matches).await?;
        },
        Some(("decode", subcommand_matches)) => {
            command_decode(subcommand_matches).await?;
        },
        Some(("completions", subcommand_matches)) => {
            let shell = subcommand_matches.get_one::<Shell>("shell").unwrap();
            print_completions(*shell, &mut build());
        },
        Some(("config", subcommand_matches)) => {
            command_config(subcommand_matches).await?;
        },
        Some(("debug", subcommand_matches)) => {
            command_debug(subcommand_matches).await?;
        },
        _ => {},
    }

    return Ok(());
}
