//! `confpatch` — patch JSON config documents with per-target values.
//!
//! Usage:
//!   confpatch '<edit-spec>'                     document on stdin → stdout
//!   confpatch '<edit-spec>' <file> [dest]       patch a file (in place by default)
//!   confpatch --targets <targets.json> <name>   run one named deploy target
//!
//! The edit spec is a JSON object mapping path strings to values, e.g.
//! `'{"clasp/scriptId": "NEW123"}'`. Paths use `/` as the segment
//! delimiter and `-1` to append to a sequence.

use std::io::{self, Read, Write};
use std::path::Path;

use confpatch::cli::{patch_document, patch_file, run_from_file};

const USAGE: &str = "usage: confpatch '<edit-spec>' [file] [dest]\n       confpatch --targets <targets.json> <name>";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("--targets") {
        let (targets, name) = match (args.get(1), args.get(2)) {
            (Some(t), Some(n)) => (t, n),
            _ => {
                eprintln!("{USAGE}");
                std::process::exit(1);
            }
        };
        if let Err(e) = run_from_file(Path::new(targets), name) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    }

    let spec = match args.first() {
        Some(s) => s,
        None => {
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    match (args.get(1), args.get(2)) {
        // file mode: dest defaults to patching the file in place
        (Some(file), dest) => {
            let src = Path::new(file);
            let dest = dest.map(Path::new).unwrap_or(src);
            if let Err(e) = patch_file(spec, src, dest) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        // pipe mode: document on stdin, patched document on stdout
        (None, _) => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("{e}");
                std::process::exit(1);
            }
            match patch_document(buf.trim(), spec) {
                Ok(result) => {
                    io::stdout().write_all(result.as_bytes()).unwrap();
                    io::stdout().write_all(b"\n").unwrap();
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
