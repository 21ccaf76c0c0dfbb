//! Command-line driver for mdcst: parse a Markdown file and emit either its
//! re-serialized source (round-trip check), its HTML rendering, or its mdast
//! projection as a debug-printed tree.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use mdcst_engine::ast_external::to_mdast;

enum Mode {
    Html,
    Markdown,
    Ast,
}

struct Args {
    mode: Mode,
    path: PathBuf,
}

fn parse_args(argv: &[String]) -> Result<Args> {
    let mut mode = Mode::Html;
    let mut path = None;
    let mut iter = argv.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--html" => mode = Mode::Html,
            "--markdown" => mode = Mode::Markdown,
            "--ast" => mode = Mode::Ast,
            other if path.is_none() => path = Some(PathBuf::from(other)),
            other => anyhow::bail!("unexpected argument: {other}"),
        }
    }
    let path = path.context("missing <file> argument")?;
    Ok(Args { mode, path })
}

fn run(args: Args) -> Result<()> {
    let source = fs::read_to_string(&args.path)
        .with_context(|| format!("reading '{}'", args.path.display()))?;
    let document = mdcst_engine::parse(&source);

    match args.mode {
        Mode::Html => print!("{}", mdcst_engine::render_html(&document, &source)),
        Mode::Markdown => print!("{}", mdcst_engine::serialize(&document, &source)),
        Mode::Ast => println!("{:#?}", to_mdast(&document)),
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let argv: Vec<String> = env::args().skip(1).collect();

    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: mdcst [--html | --markdown | --ast] <file>");
            process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {e:?}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_html_mode() {
        let args = parse_args(&["file.md".to_string()]).unwrap();
        assert!(matches!(args.mode, Mode::Html));
        assert_eq!(args.path, PathBuf::from("file.md"));
    }

    #[test]
    fn flag_before_path_selects_mode() {
        let args = parse_args(&["--ast".to_string(), "file.md".to_string()]).unwrap();
        assert!(matches!(args.mode, Mode::Ast));
    }

    #[test]
    fn missing_path_is_an_error() {
        assert!(parse_args(&["--html".to_string()]).is_err());
    }
}
