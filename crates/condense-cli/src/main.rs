use condense::graph::CompactDirectedGraph;
use condense::{Components, Kosaraju};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Input(String),
    Graph(condense::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Input(msg) => write!(f, "Malformed edge list: {msg}"),
            CliError::Graph(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<condense::Error> for CliError {
    fn from(value: condense::Error) -> Self {
        Self::Graph(value)
    }
}

impl From<condense::graph::Error> for CliError {
    fn from(value: condense::graph::Error) -> Self {
        Self::Graph(value.into())
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Solve,
    Groups,
    Demo,
}

#[derive(Debug, Clone, Copy, Default)]
enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    dump: bool,
    format: OutputFormat,
    out: Option<String>,
}

/// Largest vertex count accepted from an edge list; the graph, its transpose and the DFS state
/// all allocate per vertex.
const MAX_VERTICES: usize = 1 << 26;

/// JSON input: `{"vertices": 3, "edges": [[0, 1], [1, 2]]}`.
#[derive(Debug, Deserialize)]
struct EdgeList {
    vertices: usize,
    #[serde(default)]
    edges: Vec<(usize, usize)>,
}

#[derive(Serialize)]
struct DemoOut<'a> {
    name: &'a str,
    mapping: &'a [usize],
}

fn usage() -> &'static str {
    "condense-cli\n\
\n\
USAGE:\n\
  condense-cli [solve] [--format json|text] [--pretty] [--dump] [--out <path>] [<path>|-]\n\
  condense-cli groups [--format json|text] [--pretty] [--dump] [--out <path>] [<path>|-]\n\
  condense-cli demo [--format json|text] [--pretty] [--dump]\n\
\n\
INPUT:\n\
  JSON: {\"vertices\": N, \"edges\": [[from, to], ...]}\n\
  Text: N followed by whitespace-separated `from to` pairs; '#' starts a comment.\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Vertex counts above 67108864 are rejected.\n\
  - solve prints the 1-based component id of every vertex.\n\
  - groups prints the vertices of each component, ordered by component id.\n\
  - --dump writes the original graph, its transpose and the raw arrays to stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "solve" => args.command = Command::Solve,
            "groups" => args.command = Command::Groups,
            "demo" => args.command = Command::Demo,
            "--pretty" => args.pretty = true,
            "--dump" => args.dump = true,
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.format = fmt
                    .parse::<OutputFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn parse_number(token: &str) -> Result<usize, CliError> {
    token
        .parse::<usize>()
        .map_err(|_| CliError::Input(format!("`{token}` is not a vertex index")))
}

fn parse_edge_list(text: &str) -> Result<EdgeList, CliError> {
    let input = if text.trim_start().starts_with('{') {
        serde_json::from_str(text)?
    } else {
        parse_text_edge_list(text)?
    };
    if input.vertices > MAX_VERTICES {
        return Err(CliError::Input(format!(
            "vertex count {} exceeds the limit of {MAX_VERTICES}",
            input.vertices
        )));
    }
    Ok(input)
}

fn parse_text_edge_list(text: &str) -> Result<EdgeList, CliError> {
    let mut tokens = text
        .lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(str::split_whitespace);

    let Some(first) = tokens.next() else {
        return Err(CliError::Input("missing vertex count".to_string()));
    };
    let vertices = parse_number(first)?;

    let mut edges: Vec<(usize, usize)> = Vec::new();
    while let Some(from) = tokens.next() {
        let Some(to) = tokens.next() else {
            return Err(CliError::Input(format!(
                "vertex `{from}` has no matching edge target"
            )));
        };
        edges.push((parse_number(from)?, parse_number(to)?));
    }

    Ok(EdgeList { vertices, edges })
}

fn dump_graphs(graph: &CompactDirectedGraph, transpose: &CompactDirectedGraph) {
    eprintln!("===== Original Graph =====");
    eprint!("{graph}");
    eprintln!("===== Transpose Graph =====");
    eprint!("{transpose}");
    eprintln!("===== Raw Arrays =====");
    eprint!("{}", graph.raw_dump());
}

fn solve(input: &EdgeList, dump: bool) -> Result<Components, CliError> {
    let graph = CompactDirectedGraph::from_edges(input.vertices, input.edges.iter().copied())?;
    let transpose = graph.transpose();
    if dump {
        dump_graphs(&graph, &transpose);
    }
    Ok(Kosaraju::with_transpose(&graph, &transpose)?.solve())
}

fn to_json(value: &impl Serialize, pretty: bool) -> Result<String, CliError> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    Ok(text)
}

fn join(values: &[usize]) -> String {
    values
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn demo_graphs() -> [(&'static str, EdgeList); 2] {
    [
        (
            "textbook",
            EdgeList {
                vertices: 8,
                edges: vec![
                    (1, 2),
                    (1, 3),
                    (1, 4),
                    (2, 3),
                    (2, 4),
                    (3, 4),
                    (4, 5),
                    (4, 6),
                    (6, 7),
                    (7, 4),
                ],
            },
        ),
        (
            "wikipedia",
            EdgeList {
                vertices: 8,
                edges: vec![
                    (0, 1),
                    (1, 2),
                    (1, 4),
                    (1, 5),
                    (2, 3),
                    (2, 6),
                    (3, 2),
                    (3, 7),
                    (4, 0),
                    (4, 5),
                    (5, 6),
                    (6, 5),
                    (7, 3),
                    (7, 6),
                ],
            },
        ),
    ]
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Demo => {
            let demos = demo_graphs();
            let mut solved: Vec<(&str, Components)> = Vec::with_capacity(demos.len());
            for (name, input) in &demos {
                solved.push((*name, solve(input, args.dump)?));
            }

            let text = match args.format {
                OutputFormat::Json => {
                    let out: Vec<DemoOut<'_>> = solved
                        .iter()
                        .map(|(name, c)| DemoOut {
                            name: *name,
                            mapping: c.mapping(),
                        })
                        .collect();
                    to_json(&out, args.pretty)?
                }
                OutputFormat::Text => solved
                    .iter()
                    .map(|(name, c)| format!("{name}: {}\n", join(c.mapping())))
                    .collect(),
            };
            write_text(&text, args.out.as_deref())
        }
        Command::Solve => {
            let input = parse_edge_list(&read_input(args.input.as_deref())?)?;
            let components = solve(&input, args.dump)?;
            let text = match args.format {
                OutputFormat::Json => to_json(&components.mapping(), args.pretty)?,
                OutputFormat::Text => format!("{}\n", join(components.mapping())),
            };
            write_text(&text, args.out.as_deref())
        }
        Command::Groups => {
            let input = parse_edge_list(&read_input(args.input.as_deref())?)?;
            let groups = solve(&input, args.dump)?.groups();
            let text = match args.format {
                OutputFormat::Json => to_json(&groups, args.pretty)?,
                OutputFormat::Text => groups
                    .iter()
                    .enumerate()
                    .map(|(i, group)| format!("{}: {}\n", i + 1, join(group)))
                    .collect(),
            };
            write_text(&text, args.out.as_deref())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
