// Command-line interface for mdreport
//
// Turns a Markdown report into one HTML page, splicing figure galleries from a directory tree
// after the numbered headings they belong to. All the work happens in mdreport-core; this binary
// reads files, resolves configuration and prints a summary.
//
// Usage:
//  mdreport [<input>] [-o <file>] [--figures <dir>]          - Convert (default command)
//  mdreport convert [<input>] [-o <file>] [--figures <dir>]  - Same as above (explicit)
//  mdreport figures [--figures <dir>] [--json]               - List figures per section
//  mdreport sections                                         - Print the section registry
//  mdreport generate-css                                     - Print the embedded stylesheet
//
// Without arguments the input, output and figure root come from the configuration
// (mdreport.toml in the working directory, or --config).
//
// Extra Parameters:
//
// Configuration overrides can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and applies them on top of the loaded config.
// Example:
//  mdreport report.md --extra-fence-policy close --extra-gallery-titles false

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command, ValueHint};
use log::{info, warn, LevelFilter};
use mdreport_config::{Loader, ReportConfig, PROJECT_FILE};
use mdreport_core::figures::{inventory, relative_url, FigureTree};
use mdreport_core::html::default_css;
use mdreport_core::{render, RenderOptions, ReportError};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

const SUBCOMMANDS: &[&str] = &["convert", "figures", "sections", "generate-css", "help"];

/// Options whose value is the following argument.
const VALUE_OPTIONS: &[&str] = &["--config", "--output", "-o", "--figures"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .map(|next| !next.starts_with('-'))
                .unwrap_or(false);

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("mdreport")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a Markdown report into a single HTML page with figure galleries")
        .long_about(
            "mdreport converts a hand-written Markdown report into one self-contained HTML page.\n\n\
            Figures found on disk are inserted as galleries after the level-3 headings of the\n\
            sections they belong to. The section → figure prefix mapping comes from the\n\
            configuration (see `mdreport sections`).\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration values:\n  \
            fence-policy, code-language, url-prefix, title, gallery-titles,\n  \
            section-keyword, css.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mdreport                                   # Convert using mdreport.toml / defaults\n  \
            mdreport report.md -o report.html          # Explicit input and output\n  \
            mdreport report.md --figures ../figures    # Different figure directory\n  \
            mdreport figures --json                    # Inventory of figures per section",
        )
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mdreport.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (-v info, -vv debug). RUST_LOG takes precedence")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a Markdown report to HTML (default command)")
                .long_about(
                    "Convert a Markdown report to a single HTML page.\n\n\
                    Input, output and figure directory default to the configured values.\n\
                    The output file is overwritten.\n\n\
                    Examples:\n  \
                    mdreport convert report.md -o report.html\n  \
                    mdreport report.md                         # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Markdown report (defaults to input.markdown from the config)")
                        .required(false)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("HTML file to write (defaults to output.html from the config)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(figures_arg()),
        )
        .subcommand(
            Command::new("figures")
                .about("List the figures found for every configured section")
                .arg(figures_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the inventory as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("sections").about("Print the configured section registry"))
        .subcommand(
            Command::new("generate-css")
                .about("Output the stylesheet embedded in generated pages")
                .long_about(
                    "Outputs the stylesheet embedded in every generated page.\n\n\
                    Save it, edit it and pass it back with --extra-css to append\n\
                    your rules after the defaults.\n\n\
                    Examples:\n  \
                    mdreport generate-css > custom.css",
                ),
        )
}

fn figures_arg() -> Arg {
    Arg::new("figures")
        .long("figures")
        .value_name("DIR")
        .help("Figure directory (defaults to figures.root from the config)")
        .value_hint(ValueHint::DirPath)
}

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => match default_command_args(&cleaned_args) {
            Some(new_args)
                if !matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
            {
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            }
            _ => e.exit(),
        },
    };

    init_logging(matches.get_count("verbose"));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches.get_one::<String>("input").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let figures = sub_matches.get_one::<String>("figures").map(|s| s.as_str());
            handle_convert_command(input, output, figures, &config);
        }
        Some(("figures", sub_matches)) => {
            let figures = sub_matches.get_one::<String>("figures").map(|s| s.as_str());
            handle_figures_command(figures, sub_matches.get_flag("json"), &config);
        }
        Some(("sections", _)) => handle_sections_command(&config),
        Some(("generate-css", _)) => handle_generate_css_command(),
        None => handle_convert_command(None, None, None, &config),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// `args` with `convert` injected, when the first positional argument is a path
/// rather than a subcommand (`mdreport -v report.md`).
fn default_command_args(args: &[String]) -> Option<Vec<String>> {
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        if VALUE_OPTIONS.contains(&arg.as_str()) {
            rest.next();
            continue;
        }
        if arg.starts_with('-') {
            continue;
        }
        if SUBCOMMANDS.contains(&arg.as_str()) {
            return None;
        }
        let mut new_args = vec![args[0].clone(), "convert".to_string()];
        new_args.extend_from_slice(&args[1..]);
        return Some(new_args);
    }
    None
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_module("mdreport", level)
        .filter_module("mdreport_core", level)
        .filter_module("mdreport_config", level)
        .format_timestamp(None)
        .format_module_path(false);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    let _ = builder.try_init();
}

/// Handle the convert command
fn handle_convert_command(
    input: Option<&str>,
    output: Option<&str>,
    figures: Option<&str>,
    config: &ReportConfig,
) {
    let input = input
        .map(PathBuf::from)
        .unwrap_or_else(|| config.input.markdown.clone());
    let output = output
        .map(PathBuf::from)
        .unwrap_or_else(|| config.output.html.clone());

    let source = fs::read_to_string(&input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {e}", input.display());
        std::process::exit(1);
    });
    info!("read {} lines from {}", source.lines().count(), input.display());

    let tree = figure_tree(config, figures, &output);
    let mut options = RenderOptions::from(config);

    if let Some(css_path) = &config.page.custom_css {
        let css = fs::read_to_string(css_path).unwrap_or_else(|e| {
            eprintln!("Error reading file '{}': {e}", css_path.display());
            std::process::exit(1);
        });
        options.page.custom_css = Some(css);
    }

    let rendered = render(&source, &options, &tree).unwrap_or_else(|e| {
        eprintln!("Error converting '{}': {e}", input.display());
        std::process::exit(1);
    });

    fs::write(&output, &rendered.html).unwrap_or_else(|e| {
        eprintln!("Error writing file '{}': {e}", output.display());
        std::process::exit(1);
    });

    println!("HTML written: {}", output.display());
    println!("Size: {:.1} KB", rendered.html.len() as f64 / 1024.0);
    if rendered.body.galleries.is_empty() {
        println!("No figures inserted");
    } else {
        println!("Figures inserted:");
        for gallery in &rendered.body.galleries {
            println!("  Section {}: {}", gallery.section, plural(gallery.figures, "figure"));
        }
    }
    println!("Total: {}", plural(rendered.body.figure_count(), "figure"));
}

/// Handle the figures command
fn handle_figures_command(figures: Option<&str>, json: bool, config: &ReportConfig) {
    let tree = figure_tree(config, figures, &config.output.html);
    let registry = config.figures.registry();

    let sections = inventory(&registry, &tree).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    if json {
        let text = serde_json::to_string_pretty(&sections).unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });
        println!("{text}");
        return;
    }

    let mut total = 0;
    for section in &sections {
        let prefixes = registry
            .prefixes_for(&section.section)
            .map(|p| p.join(", "))
            .unwrap_or_default();
        println!(
            "Section {} ({prefixes}): {}",
            section.section,
            plural(section.figures.len(), "figure")
        );
        for figure in &section.figures {
            println!("  {}", figure.path);
        }
        total += section.figures.len();
    }
    println!("Total: {}", plural(total, "figure"));
}

/// Handle the sections command
fn handle_sections_command(config: &ReportConfig) {
    for entry in config.figures.registry().iter() {
        println!("{}\t{}", entry.id, entry.prefixes.join(", "));
    }
}

/// Handle the generate-css command
fn handle_generate_css_command() {
    print!("{}", default_css());
}

fn load_cli_config(explicit_path: Option<&str>) -> ReportConfig {
    let loader = Loader::new().with_optional_file(PROJECT_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn figure_tree(config: &ReportConfig, root_override: Option<&str>, output: &Path) -> FigureTree {
    let root = root_override
        .map(PathBuf::from)
        .unwrap_or_else(|| config.figures.root.clone());
    if !root.is_dir() {
        warn!(
            "figure directory '{}' does not exist, no galleries will be inserted",
            root.display()
        );
    }
    let url_prefix = figure_url_prefix(&config.figures.url_prefix, &root, output);

    let tree = FigureTree::new(&root)
        .with_url_prefix(url_prefix)
        .with_extensions(&config.figures.extensions);
    info!(
        "figures from {} referenced as '{}'",
        tree.root().display(),
        tree.url_prefix()
    );
    tree
}

/// The configured prefix, or the figure root relative to the output file's directory.
fn figure_url_prefix(configured: &str, root: &Path, output: &Path) -> String {
    if !configured.is_empty() {
        return configured.to_string();
    }
    let base = output.parent().unwrap_or_else(|| Path::new(""));
    env::current_dir()
        .ok()
        .and_then(|cwd| relative_url(&absolute(&cwd, root), &absolute(&cwd, base)))
        .or_else(|| relative_url(root, base))
        .unwrap_or_else(|| root.to_string_lossy().replace('\\', "/"))
}

/// `path` made absolute against `cwd`, with `.` and `..` resolved lexically.
fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in cwd.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

fn apply_config_overrides(config: &mut ReportConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["fence-policy"]) {
        config.convert.fence_policy = raw.parse().unwrap_or_else(|e: ReportError| {
            eprintln!("Invalid value for --extra-fence-policy: {e}");
            std::process::exit(1);
        });
    }
    if let Some(raw) = take_override(extra_params, &["code-language", "language"]) {
        config.convert.default_code_language = raw;
    }
    if let Some(raw) = take_override(extra_params, &["url-prefix"]) {
        config.figures.url_prefix = raw;
    }
    if let Some(raw) = take_override(extra_params, &["title"]) {
        config.page.title = raw;
    }
    if let Some(raw) = take_override(extra_params, &["section-keyword"]) {
        config.convert.section_keyword = raw;
    }
    if let Some(raw) = take_override(extra_params, &["gallery-titles"]) {
        config.page.gallery_titles = parse_bool_arg("gallery-titles", &raw);
    }
    if let Some(path) = take_override(extra_params, &["css", "css-path"]) {
        config.page.custom_css = Some(PathBuf::from(path));
    }

    for key in extra_params.keys() {
        warn!("ignoring unknown option --extra-{key}");
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
