//! CLI command implementations.

use crate::config::{Config, CONFIG_DIR, CONFIG_FILE};
use crate::render;
use crate::repl::{self, Session};
use colored::Colorize;
use kith_graph::{load_file, KithGraph, PersonInfo};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Initialize Kith in a directory.
pub fn init(path: &Path) -> Result<()> {
    let kith_dir = path.join(CONFIG_DIR);
    let config_path = kith_dir.join(CONFIG_FILE);

    if config_path.exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    fs::create_dir_all(&kith_dir)?;
    fs::write(
        &config_path,
        serde_json::to_string_pretty(&Config::default())?,
    )?;

    println!("{} Initialized Kith in {}", "✓".green(), path.display());
    println!(
        "  Set {} in {} to load a family file on start",
        "default_file".cyan(),
        config_path.display()
    );

    Ok(())
}

/// Loads a relationship file, reporting the summary on stderr so stdout
/// only carries query output.
fn load(path: &Path) -> Result<KithGraph> {
    let result = load_file(path)?;

    eprintln!(
        "{} Read {} people ({} relationships) in {}ms",
        "✓".green(),
        result.people_declared.to_string().cyan(),
        result.graph.edge_count().to_string().cyan(),
        result.duration_ms
    );

    if !result.skipped.is_empty() {
        eprintln!("{} {} statements skipped:", "⚠".yellow(), result.skipped.len());
        for skipped in result.skipped.iter().take(5) {
            eprintln!("  {} - {}", skipped.text.red(), skipped.reason);
        }
        if result.skipped.len() > 5 {
            eprintln!("  ... and {} more", result.skipped.len() - 5);
        }
    }

    Ok(result.graph)
}

/// The file for a one-shot command; these have nothing to query without one.
fn require(file: Option<&Path>) -> Result<&Path> {
    file.ok_or_else(|| {
        format!(
            "no relationship file given (pass --file or set default_file in {}/{})",
            CONFIG_DIR, CONFIG_FILE
        )
        .into()
    })
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Start the interactive prompt.
pub fn repl(file: Option<&Path>, config: &Config) -> Result<()> {
    let graph = match file {
        Some(path) => load(path)?,
        None => KithGraph::new(),
    };

    println!("{}", "Welcome to Kith!".cyan().bold());
    println!("Type {} for the list of commands.", "help".cyan());

    let mut session = Session::new(graph);
    let stdin = io::stdin();
    repl::run(&mut session, stdin.lock(), io::stdout(), &config.prompt)?;

    Ok(())
}

/// Show one person and their relationships.
pub fn show(file: Option<&Path>, name: &str, json_output: bool) -> Result<()> {
    let graph = load(require(file)?)?;
    let person = graph
        .get_node(name)
        .ok_or_else(|| kith_graph::QueryError::PersonNotFound(name.to_string()))?;

    if json_output {
        return print_json(&PersonInfo::from(person));
    }

    println!("{}", name.cyan().bold());
    for relationship in person.edges() {
        println!(
            "  {}: {}",
            relationship.relation.to_string().dimmed(),
            relationship.target.name()
        );
    }

    Ok(())
}

/// Show a person's friends.
pub fn friends(file: Option<&Path>, name: &str, json_output: bool) -> Result<()> {
    let graph = load(require(file)?)?;
    let person = graph
        .get_node(name)
        .ok_or_else(|| kith_graph::QueryError::PersonNotFound(name.to_string()))?;

    if json_output {
        let names: Vec<&str> = person
            .edges_with(&kith_core::Relation::Friend)
            .iter()
            .map(|r| r.target.name())
            .collect();
        return print_json(&names);
    }

    println!("{}", render::friends(&person));
    Ok(())
}

/// Print every person in the graph.
pub fn dump(file: Option<&Path>, json_output: bool) -> Result<()> {
    let graph = load(require(file)?)?;

    if json_output {
        let people: Vec<PersonInfo> = graph.nodes().map(PersonInfo::from).collect();
        return print_json(&serde_json::json!({
            "people": people,
            "edges": graph.export_edges(),
        }));
    }

    print!("{}", render::dump(&graph));
    Ok(())
}

/// List people without a recorded parent.
pub fn orphans(file: Option<&Path>, json_output: bool) -> Result<()> {
    let graph = load(require(file)?)?;
    let orphans = graph.orphans();

    if json_output {
        return print_json(&orphans);
    }

    print!("{}", render::orphans(&orphans));
    Ok(())
}

/// Explain how two people are connected.
pub fn bingo(file: Option<&Path>, from: &str, to: &str, json_output: bool) -> Result<()> {
    let graph = load(require(file)?)?;
    let path = graph.shortest_path(from, to)?;

    if json_output {
        let steps: Vec<_> = path
            .windows(2)
            .map(|pair| {
                serde_json::json!({
                    "from": pair[0].name(),
                    "to": pair[1].name(),
                    "relations": graph.relations_between(pair[0].name(), pair[1].name()),
                })
            })
            .collect();
        return print_json(&serde_json::json!({
            "path": path,
            "steps": steps,
        }));
    }

    println!(
        "{} {} {}",
        from.cyan(),
        "→".dimmed(),
        to.cyan()
    );
    for line in render::path(&graph, &path) {
        println!("  {}", line);
    }

    Ok(())
}

/// List descendants generation by generation.
pub fn descendants(file: Option<&Path>, name: &str, json_output: bool) -> Result<()> {
    let graph = load(require(file)?)?;
    let result = graph.descendants(name)?;

    if json_output {
        return print_json(&result);
    }

    println!("{}", format!("Descendants of {}:", result.root).cyan().bold());
    if result.is_empty() {
        println!("  {}", "none recorded".dimmed());
    }
    for generation in &result.generations {
        println!(
            "{} {}",
            format!("{}:", generation.label()).yellow(),
            generation.names.join(", ")
        );
    }

    Ok(())
}

/// List nth cousins k times removed.
pub fn cousins(
    file: Option<&Path>,
    name: &str,
    degree: usize,
    removed: usize,
    json_output: bool,
) -> Result<()> {
    let graph = load(require(file)?)?;
    let found = graph
        .cousins(name, degree, removed)
        .map_err(|_| format!("No such person: {}", name))?;

    if json_output {
        return print_json(&found);
    }

    if found.is_empty() {
        println!("{}", "No cousins found".dimmed());
    } else {
        println!("{}", render::cousins(&found));
    }

    Ok(())
}

/// Show graph statistics.
pub fn stats(file: Option<&Path>, json_output: bool) -> Result<()> {
    let graph = load(require(file)?)?;
    let stats = graph.stats();

    if json_output {
        return print_json(&stats);
    }

    println!("{}", "Kith Status".cyan().bold());
    println!();
    println!("  {} {}", "People:".dimmed(), stats.people);
    println!("  {} {}", "Relationships:".dimmed(), stats.relationships);
    println!("  {} {}", "Orphans:".dimmed(), stats.orphans);

    Ok(())
}

/// Picks the file from the command line, falling back to the config.
pub fn resolve_file(flag: Option<PathBuf>, config: &Config) -> Option<PathBuf> {
    flag.or_else(|| config.default_file.clone())
}
