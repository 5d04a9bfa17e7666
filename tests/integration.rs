//! Integration tests for the lab terminal
//!
//! Drives whole sessions through the public API: config, executor and an
//! output sink that records what a page would show.

use labterm::config::SessionConfig;
use labterm::platform::OutputSink;
use labterm::shell::{Capability, Effect, Executor, Terminal};
use labterm::vfs::{DirectoryNode, LogicalPath, VirtualTree};

/// What the page shows, line by line
#[derive(Default)]
struct Screen {
    prompt: String,
    lines: Vec<String>,
    clears: usize,
}

impl OutputSink for Screen {
    fn emit_line(&mut self, text: &str, styled: bool) {
        if styled {
            self.lines.push(format!("{} {}", self.prompt, text));
        } else {
            self.lines.push(text.to_string());
        }
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.clears += 1;
    }

    fn set_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
    }
}

/// Start a session the way the page does
fn session(lab: Option<&str>) -> (Executor, Screen) {
    let exec = Executor::from_config(SessionConfig::from_lab(lab));
    let mut screen = Screen::default();
    screen.set_prompt(&exec.prompt());
    (exec, screen)
}

fn run(exec: &mut Executor, screen: &mut Screen, line: &str) {
    exec.submit(line, screen);
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_lab2_navigation_scenario() {
    let (mut exec, mut screen) = session(Some("lab2"));

    run(&mut exec, &mut screen, "cd projects");
    assert_eq!(exec.state.cwd.to_string(), "home/projects");

    run(&mut exec, &mut screen, "cd ..");
    assert_eq!(exec.state.cwd.to_string(), "home");

    run(&mut exec, &mut screen, "cd nope");
    assert_eq!(exec.state.cwd.to_string(), "home");

    assert_eq!(
        screen.lines,
        vec![
            "user@devops-lab:~/home$ cd projects",
            "",
            "user@devops-lab:~/home/projects$ cd ..",
            "",
            "user@devops-lab:~/home$ cd nope",
            "cd: nope: No such file or directory",
        ]
    );
}

#[test]
fn test_lab1_has_no_cd() {
    let (mut exec, mut screen) = session(Some("lab1"));
    run(&mut exec, &mut screen, "cd x");
    assert_eq!(
        screen.lines,
        vec!["user@devops-lab:~/home$ cd x", "cd: command not found"]
    );
    assert!(exec.state.cwd.is_home());
}

#[test]
fn test_cd_up_never_goes_above_home() {
    let leaf = DirectoryNode::new();
    let mid = DirectoryNode::new().with_dir("c", leaf).unwrap();
    let top = DirectoryNode::new().with_dir("b", mid).unwrap();
    let root = DirectoryNode::new().with_dir("a", top).unwrap();
    let config = SessionConfig::new(Capability::Lab2).with_tree(VirtualTree::new(root));
    let mut exec = Executor::from_config(config);

    for dir in ["a", "b", "c"] {
        exec.execute_line(&format!("cd {}", dir));
    }
    assert_eq!(exec.state.cwd.depth(), 4);

    for n in 1..=10 {
        exec.execute_line("cd ..");
        assert_eq!(exec.state.cwd.depth(), 4usize.saturating_sub(n).max(1));
    }
}

#[test]
fn test_cd_sequences_keep_path_resolvable() {
    let config = SessionConfig::from_json(
        r#"{"lab": "lab2", "filesystem": {
            "projects": {"web": {"assets": {}}, "api": {}},
            "documents": {"notes.txt": "n"},
            "file1.txt": "f"
        }}"#,
    )
    .unwrap();
    let mut exec = Executor::from_config(config);

    let script = [
        "cd projects",
        "cd web",
        "cd assets",
        "cd nope",
        "cd ..",
        "cd ..",
        "cd api",
        "cd ..",
        "cd ..",
        "cd ..",
        "cd documents",
        "cd notes.txt",
        "cd ~",
        "cd file1.txt",
        "cd projects",
        "cd",
        "cd ..",
    ];
    for line in script {
        exec.execute_line(line);
        assert!(
            exec.state.tree.resolve(&exec.state.cwd).is_ok(),
            "dangling path {} after {:?}",
            exec.state.cwd,
            line
        );
    }
}

#[test]
fn test_cd_tilde_from_deep_path() {
    let (mut exec, mut screen) = session(Some("lab2"));
    run(&mut exec, &mut screen, "cd documents");
    run(&mut exec, &mut screen, "cd ~");
    assert_eq!(exec.state.cwd, LogicalPath::home());
    assert_eq!(screen.prompt, "user@devops-lab:~/home$");
}

// ============================================================================
// Listing
// ============================================================================

#[test]
fn test_ls_hidden_entries() {
    let (mut exec, mut screen) = session(Some("lab1"));
    run(&mut exec, &mut screen, "ls");
    run(&mut exec, &mut screen, "ls -a");
    assert_eq!(
        screen.lines,
        vec![
            "user@devops-lab:~/home$ ls",
            "projects  documents  file1.txt  readme.md",
            "user@devops-lab:~/home$ ls -a",
            "projects  documents  file1.txt  readme.md  .gitignore",
        ]
    );
}

#[test]
fn test_ls_la_scenario() {
    let (mut exec, _) = session(Some("lab2"));
    let result = exec.execute_line("ls -la");
    let text = match result.effects.last() {
        Some(Effect::Output(text)) => text.clone(),
        other => panic!("expected Output, got {:?}", other),
    };

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "drwxr-xr-x 1 user staff 4096 Jan 1 00:00 projects",
            "drwxr-xr-x 1 user staff 4096 Jan 1 00:00 documents",
            "-rw-r--r-- 1 user staff 4096 Jan 1 00:00 file1.txt",
            "-rw-r--r-- 1 user staff 4096 Jan 1 00:00 readme.md",
            "-rw-r--r-- 1 user staff 4096 Jan 1 00:00 .gitignore",
        ]
    );
}

#[test]
fn test_ls_denied_without_lab() {
    for lab in [None, Some("lab0"), Some("lab3"), Some("Lab1")] {
        let (mut exec, mut screen) = session(lab);
        run(&mut exec, &mut screen, "ls -la");
        assert_eq!(screen.lines.last().unwrap(), "ls: command not found");
    }
}

#[test]
fn test_ls_in_empty_directory_prints_blank_line() {
    let (mut exec, mut screen) = session(Some("lab2"));
    run(&mut exec, &mut screen, "cd projects");
    run(&mut exec, &mut screen, "ls");
    assert_eq!(screen.lines.last().unwrap(), "");
    assert_eq!(screen.lines.len(), 4);
}

// ============================================================================
// Screen handling
// ============================================================================

#[test]
fn test_clear_then_command() {
    let (mut exec, mut screen) = session(Some("lab2"));
    run(&mut exec, &mut screen, "ls");
    run(&mut exec, &mut screen, "vim");
    run(&mut exec, &mut screen, "clear");
    assert_eq!(screen.clears, 1);
    assert!(screen.lines.is_empty());

    run(&mut exec, &mut screen, "ls -a");
    assert_eq!(
        screen.lines,
        vec![
            "user@devops-lab:~/home$ ls -a",
            "projects  documents  file1.txt  readme.md  .gitignore",
        ]
    );
}

#[test]
fn test_clear_without_lab() {
    let (mut exec, mut screen) = session(None);
    run(&mut exec, &mut screen, "ls");
    run(&mut exec, &mut screen, "clear");
    assert!(screen.lines.is_empty());
}

#[test]
fn test_unknown_and_denied_look_the_same() {
    let (mut exec, mut screen) = session(Some("lab1"));
    run(&mut exec, &mut screen, "cd");
    run(&mut exec, &mut screen, "mkdir");
    assert_eq!(screen.lines[1], "cd: command not found");
    assert_eq!(screen.lines[3], "mkdir: command not found");
}

#[test]
fn test_blank_input_echoes_prompt_only() {
    let (mut exec, mut screen) = session(Some("lab2"));
    run(&mut exec, &mut screen, "   ");
    run(&mut exec, &mut screen, "\t");
    assert_eq!(
        screen.lines,
        vec!["user@devops-lab:~/home$ ", "user@devops-lab:~/home$ "]
    );
}

// ============================================================================
// Terminal front-end
// ============================================================================

#[test]
fn test_terminal_session_with_custom_tree() {
    let config = SessionConfig::from_json(
        r#"{"lab": "lab2", "filesystem": {"srv": {"app.log": "..."}, ".ssh": {}}}"#,
    )
    .unwrap();
    let mut term = Terminal::new(config);
    term.submit("cd srv");
    term.submit("ls -l");

    let lines: Vec<&str> = term.lines().map(|l| l.text.as_str()).collect();
    assert_eq!(
        lines,
        vec![
            "user@devops-lab:~/home$ cd srv",
            "",
            "user@devops-lab:~/home/srv$ ls -l",
            "-rw-r--r-- 1 user staff 4096 Jan 1 00:00 app.log",
        ]
    );
    assert!(term.lines().next().unwrap().is_input);
}
