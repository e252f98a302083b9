//! Hygiene: scans the crate's production sources for patterns that crash the
//! page or hide dead code. Each pattern has a budget of zero; test modules
//! (`*_test.rs`) are exempt.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

struct Budget {
    pattern: &'static str,
    max: usize,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
    Budget { pattern: "#[allow(dead_code)]", max: 0 },
];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let listing = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("{} budget exceeded: found {count}, max {}\n{listing}", budget.pattern, budget.max));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

/// Ids that server CSS and templates address inside the islands.
const ISLAND_IDS: &[&str] = &[
    "chatWidget",
    "chatMessages",
    "chatInput",
    "documentModal",
    "modalDocumentTitle",
    "modalDocumentGenre",
    "modalDocumentDate",
    "pdfViewer",
    "commentCount",
    "discussionThread",
    "commentForm",
    "commentAuthor",
    "commentContent",
    "uploadArea",
    "fileInput",
    "uploadForm",
    "fileName",
    "documentTitle",
    "uploadProgress",
    "progressFill",
    "progressText",
    "uploadResult",
    "resultTitle",
    "resultGenre",
    "resultSummary",
    "raiseTicketModal",
    "ticketForm",
    "ticketTitle",
    "ticketDescription",
];

#[test]
fn islands_keep_page_element_ids() {
    let mut components = Vec::new();
    collect_rs_files(Path::new("src/components"), &mut components);
    let markup: String = components.iter().map(|f| f.content.as_str()).collect();
    let missing: Vec<_> = ISLAND_IDS.iter().filter(|id| !markup.contains(&format!("id=\"{id}\""))).collect();
    assert!(missing.is_empty(), "element ids missing from islands: {missing:?}");
}
