use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use printtree::parser::{tree_from_directory, InputFormat, TreeParser};
use printtree::{builtin_style_names, StyleError, StyleId, StyleRegistry, Tree};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("printtree")
        .about("Render an outline, a JSON tree or a directory as a tree diagram or list")
        .arg(
            Arg::new("input")
                .help("Input document; reads stdin when missing or '-'")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(["json", "outline"])
                .help("Input format (default: json for *.json files, outline otherwise)"),
        )
        .arg(
            Arg::new("dir")
                .long("dir")
                .value_name("PATH")
                .conflicts_with("input")
                .help("Build the tree from a directory instead of an input document"),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .short('s')
                .default_value("box")
                .help("Built-in style name, see --list-styles"),
        )
        .arg(
            Arg::new("structural")
                .long("structural")
                .num_args(4)
                .value_names(["MID", "LAST", "BYPASS", "BLANK"])
                .allow_hyphen_values(true)
                .conflicts_with("list-style")
                .help("Render with a custom structural style"),
        )
        .arg(
            Arg::new("list-style")
                .long("list-style")
                .num_args(1)
                .value_delimiter(',')
                .value_name("INDENT,TEMPLATE,...")
                .allow_hyphen_values(true)
                .help("Render with a custom list style: the indent and one template per level, comma separated"),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .action(ArgAction::SetTrue)
                .help("Sort the top-level branches by label"),
        )
        .arg(
            Arg::new("deep-sort")
                .long("deep-sort")
                .action(ArgAction::SetTrue)
                .help("Sort every level by label"),
        )
        .arg(
            Arg::new("list-styles")
                .long("list-styles")
                .action(ArgAction::SetTrue)
                .help("Print the built-in style names and exit"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log to stderr (-v info, -vv debug, -vvv trace)"),
        )
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // a second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn read_input(matches: &ArgMatches) -> Result<Tree> {
    if let Some(dir) = matches.get_one::<String>("dir") {
        info!(dir = %dir, "walking directory");
        return tree_from_directory(Path::new(dir))
            .with_context(|| format!("Failed to read directory {}", dir));
    }

    let input = matches.get_one::<String>("input").map(String::as_str);
    let (content, path_format) = match input {
        None | Some("-") => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            (content, InputFormat::Outline)
        }
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path))?;
            (content, InputFormat::from_path(Path::new(path)))
        }
    };

    let format = match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => InputFormat::Json,
        Some(_) => InputFormat::Outline,
        None => path_format,
    };
    debug!(?format, bytes = content.len(), "parsing input");

    TreeParser::new(format)
        .parse(&content)
        .context("Failed to parse input document")
}

fn select_style(matches: &ArgMatches, registry: &mut StyleRegistry) -> Result<StyleId> {
    if let Some(markup) = matches.get_many::<String>("structural") {
        let markup: Vec<&str> = markup.map(String::as_str).collect();
        return Ok(registry.register_structural_style(markup[0], markup[1], markup[2], markup[3]));
    }

    if let Some(values) = matches.get_many::<String>("list-style") {
        let values: Vec<&str> = values.map(String::as_str).collect();
        let Some((indent, templates)) = values.split_first() else {
            return Err(StyleError::EmptyTemplates.into());
        };
        let style = registry.register_list_style(indent, templates.iter().copied())?;
        return Ok(style);
    }

    let name = matches
        .get_one::<String>("style")
        .map(String::as_str)
        .unwrap_or("box");
    Ok(StyleId::from_name(name)?)
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    setup_logging(matches.get_count("verbose"));

    if matches.get_flag("list-styles") {
        for (index, name) in builtin_style_names().into_iter().enumerate() {
            println!("{:>2}  {}", index, name);
        }
        return Ok(());
    }

    let mut registry = StyleRegistry::new();
    let style = select_style(&matches, &mut registry)?;

    let mut tree = read_input(&matches)?;
    if matches.get_flag("deep-sort") {
        tree.deep_sort();
    } else if matches.get_flag("sort") {
        tree.sort();
    }

    print!("{}", registry.render(&tree, style));

    Ok(())
}
