use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use pathmorph::{Affine, FormatOptions, PathDocument};

#[derive(Parser, Debug)]
#[command(name = "pathmorph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the SVG `d` attribute of a path document.
    Print(PrintArgs),
    /// Apply affine matrices (in the order given) to every command.
    Transform(TransformArgs),
    /// Trace the path backwards, from its last point to its first.
    Reverse(IoArgs),
    /// List the kinds each command can be converted to.
    Convertible(InArgs),
}

#[derive(Parser, Debug)]
struct InArgs {
    /// Input path document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct PrintArgs {
    /// Input path document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Decimal places per coordinate.
    #[arg(long, default_value_t = FormatOptions::DEFAULT_PRECISION)]
    precision: u32,
}

#[derive(Parser, Debug)]
struct IoArgs {
    /// Input path document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TransformArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Matrix as `a,b,c,d,e,f` (x' = a*x + c*y + e, y' = b*x + d*y + f). Repeatable.
    #[arg(long = "matrix", value_parser = parse_matrix, required = true)]
    matrices: Vec<Affine>,
}

fn parse_matrix(s: &str) -> Result<Affine, String> {
    let coeffs = s
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid matrix entry '{v}': {e}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let coeffs: [f64; 6] = coeffs
        .try_into()
        .map_err(|v: Vec<f64>| format!("matrix needs 6 entries, got {}", v.len()))?;
    if coeffs.iter().any(|v| !v.is_finite()) {
        return Err("matrix entries must be finite".to_string());
    }
    Ok(Affine::new(coeffs))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Print(args) => cmd_print(args),
        Command::Transform(args) => cmd_transform(args),
        Command::Reverse(args) => cmd_reverse(args),
        Command::Convertible(args) => cmd_convertible(args),
    }
}

fn load(path: &Path) -> anyhow::Result<PathDocument> {
    PathDocument::from_path(path).with_context(|| format!("load '{}'", path.display()))
}

fn write_doc(doc: &PathDocument, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            doc.to_writer_pretty(&mut w)?;
            w.flush()
                .with_context(|| format!("write output '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{}", doc.to_json_string_pretty()?),
    }
    Ok(())
}

fn cmd_print(args: PrintArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    let opts = FormatOptions {
        precision: args.precision,
    };
    println!("{}", doc.path_data_with(&opts));
    Ok(())
}

fn cmd_transform(args: TransformArgs) -> anyhow::Result<()> {
    let doc = load(&args.io.in_path)?;
    let out = doc.transform(&args.matrices);
    write_doc(&out, args.io.out.as_deref())
}

fn cmd_reverse(args: IoArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    write_doc(&doc.reverse(), args.out.as_deref())
}

fn cmd_convertible(args: InArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    for (i, cmd) in doc.commands.iter().enumerate() {
        let kinds = cmd
            .convertible_kinds()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        if kinds.is_empty() {
            println!("{i}: {cmd} -> -");
        } else {
            println!("{i}: {cmd} -> {}", kinds.join(" "));
        }
    }
    Ok(())
}
