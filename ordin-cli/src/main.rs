//! Command-line interface for ordin
//! Compares the same regulation across jurisdictions from already-fetched
//! pages and writes a tabbed comparison document.
//!
//! Usage:
//!   ordin <dir> [--jurisdictions <a,b,c>] [--base <name>] [--rank <ranking>]
//!         [--output <file>] [--export <file>] [--matrix <file>]
//!   ordin --urls-for <keyword> [--registry <file>]   - Print search URLs

use clap::{Arg, Command};
use ordin_compare::{ComparisonIndex, Ranking};
use ordin_config::Loader;
use ordin_parser::search::search_url;
use ordin_parser::{parse_markup, JurisdictionDocument, JurisdictionSet};
use ordin_report::{render, title_matrix};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

fn main() {
    let matches = Command::new("ordin")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compare municipal regulation clauses across jurisdictions")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Directory of fetched pages, one <jurisdiction>.html per jurisdiction")
                .required_unless_present("urls-for")
                .index(1),
        )
        .arg(
            Arg::new("jurisdictions")
                .long("jurisdictions")
                .short('j')
                .help("Comma-separated jurisdiction order; listed names without a page become explicit not-found rows"),
        )
        .arg(
            Arg::new("base")
                .long("base")
                .short('b')
                .help("Jurisdiction to diff against (moved to the front of the set)"),
        )
        .arg(
            Arg::new("rank")
                .long("rank")
                .short('r')
                .value_parser(["frequency", "name"])
                .default_value("frequency")
                .help("Clause-title ranking for tab order"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .default_value("comparison.html")
                .help("Where to write the comparison document"),
        )
        .arg(
            Arg::new("export")
                .long("export")
                .help("Also write the comparison index as JSON"),
        )
        .arg(
            Arg::new("matrix")
                .long("matrix")
                .help("Also write the title-presence matrix as JSON"),
        )
        .arg(
            Arg::new("registry")
                .long("registry")
                .help("Jurisdiction registry file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("urls-for")
                .long("urls-for")
                .value_name("KEYWORD")
                .help("Print per-jurisdiction search URLs for a keyword and exit"),
        )
        .get_matches();

    if let Some(keyword) = matches.get_one::<String>("urls-for") {
        handle_urls_command(keyword, matches.get_one::<String>("registry"));
        return;
    }

    let dir = matches
        .get_one::<String>("path")
        .expect("path is required unless printing URLs");
    let ranking = match matches.get_one::<String>("rank").map(String::as_str) {
        Some("name") => Ranking::Name,
        _ => Ranking::Frequency,
    };

    let pages = collect_pages(Path::new(dir));
    let mut order: Vec<String> = match matches.get_one::<String>("jurisdictions") {
        Some(listed) => listed
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect(),
        None => pages.keys().cloned().collect(),
    };
    if order.is_empty() {
        eprintln!("No jurisdiction pages found in {}", dir);
        std::process::exit(1);
    }

    if let Some(base) = matches.get_one::<String>("base") {
        match order.iter().position(|name| name == base) {
            Some(position) => {
                let name = order.remove(position);
                order.insert(0, name);
            }
            None => {
                eprintln!("Base jurisdiction '{}' is not in the comparison set", base);
                std::process::exit(1);
            }
        }
    }

    let set = assemble_set(&order, &pages);
    let index = ComparisonIndex::build(set, ranking);

    let output = matches.get_one::<String>("output").expect("has default");
    let document = render(&index).unwrap_or_else(|e| {
        eprintln!("Render error: {}", e);
        std::process::exit(1);
    });
    write_file(output, &document);
    println!("{} tabs written to {}", index.ordered_titles.len(), output);

    if let Some(path) = matches.get_one::<String>("export") {
        let json = serde_json::to_string_pretty(&index).unwrap_or_else(|e| {
            eprintln!("Export error: {}", e);
            std::process::exit(1);
        });
        write_file(path, &json);
    }

    if let Some(path) = matches.get_one::<String>("matrix") {
        let json = serde_json::to_string_pretty(&title_matrix(&index)).unwrap_or_else(|e| {
            eprintln!("Matrix export error: {}", e);
            std::process::exit(1);
        });
        write_file(path, &json);
    }
}

/// Print the search URL per registered jurisdiction.
fn handle_urls_command(keyword: &str, registry_file: Option<&String>) {
    let loader = match registry_file {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    let registry = loader.build().unwrap_or_else(|e| {
        eprintln!("Registry error: {}", e);
        std::process::exit(1);
    });
    for (name, params) in &registry.jurisdictions {
        println!("{}\t{}", name, search_url(params, keyword));
    }
}

/// Map jurisdiction names to their saved page files (`<name>.html`),
/// sorted by name.
fn collect_pages(dir: &Path) -> BTreeMap<String, PathBuf> {
    let entries = std::fs::read_dir(dir).unwrap_or_else(|e| {
        eprintln!("Cannot read {}: {}", dir.display(), e);
        std::process::exit(1);
    });

    let mut pages = BTreeMap::new();
    for entry in entries.flatten() {
        let path = entry.path();
        let is_page = path
            .extension()
            .map(|ext| ext == "html" || ext == "htm")
            .unwrap_or(false);
        if !is_page {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            pages.insert(stem.to_string(), path);
        }
    }
    pages
}

/// Assemble the jurisdiction set in the requested order. A jurisdiction
/// without a readable page stays in the set as an explicit absence.
fn assemble_set(order: &[String], pages: &BTreeMap<String, PathBuf>) -> JurisdictionSet {
    let mut set = JurisdictionSet::new();
    for name in order {
        let document = pages.get(name).and_then(|path| {
            match std::fs::read_to_string(path) {
                Ok(source) => {
                    let page = parse_markup(&source);
                    Some(JurisdictionDocument::from_markup(name, &page))
                }
                Err(e) => {
                    eprintln!("{}: unreadable page ({}), treated as not found", name, e);
                    None
                }
            }
        });
        match &document {
            Some(doc) => println!("{}: {} clauses", name, doc.clauses.len()),
            None => println!("{}: 조례 없음", name),
        }
        set.insert(name, document);
    }
    set
}

fn write_file(path: &str, contents: &str) {
    std::fs::write(path, contents).unwrap_or_else(|e| {
        eprintln!("Cannot write {}: {}", path, e);
        std::process::exit(1);
    });
}
