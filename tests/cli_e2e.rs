use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn db(&self) -> PathBuf {
        self.dir.path().join("wordz.db")
    }

    fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn wordz(&self) -> Command {
        let mut cmd = Command::cargo_bin("wordz").unwrap();
        cmd.env("WORDZ_CONFIG_DIR", self.config_dir())
            .env("NO_COLOR", "1")
            .env_remove("WORDZ_LOG")
            .arg("-d")
            .arg(self.db());
        cmd
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn add_then_search_exact_and_fuzzy() {
    let env = Env::new();
    env.wordz()
        .args(["add", "Cat", "a", "small", "feline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: cat"));

    assert!(read(&env.db()).contains("\"cat\": \"a small feline\""));

    env.wordz()
        .args(["search", "cat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found with meaning: a small feline"))
        .stdout(predicate::str::contains("not found").not());

    env.wordz()
        .args(["search", "dof"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "dof not found. Looking for similar ones.",
        ))
        .stdout(predicate::str::contains("cat : a small feline"));
}

#[test]
fn add_existing_word_needs_force() {
    let env = Env::new();
    env.wordz().args(["add", "cat", "feline"]).assert().success();

    env.wordz()
        .args(["add", "cat", "kitty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cat already exists"));
    assert!(read(&env.db()).contains("feline"));

    env.wordz()
        .args(["add", "--force", "cat", "kitty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated: cat"));
    assert!(read(&env.db()).contains("kitty"));
}

#[test]
fn list_and_remove() {
    let env = Env::new();
    env.wordz()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No data in dictionary"));

    env.wordz().args(["add", "dog", "canine"]).assert().success();
    env.wordz().args(["add", "cat", "feline"]).assert().success();

    env.wordz()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)cat\s+feline.*dog\s+canine").unwrap());

    env.wordz()
        .args(["rm", "DOG"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed: dog"));
    assert!(!read(&env.db()).contains("dog"));

    env.wordz()
        .args(["remove", "dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dog is not in the dictionary"));
}

#[test]
fn search_on_empty_dictionary() {
    let env = Env::new();
    env.wordz()
        .args(["search", "owl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No similar words found"));
}

#[test]
fn search_limit_flag() {
    let env = Env::new();
    for word in ["aa", "ab", "ac"] {
        env.wordz().args(["add", word, "x"]).assert().success();
    }
    let output = env
        .wordz()
        .args(["search", "zz", "-n", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.matches(" : x").count(), 1);
}

#[test]
fn apply_operations_from_stdin() {
    let env = Env::new();
    let ops = r#"[
        {"operation": "add", "word": "gato", "meaning": "cat"},
        {"operation": "add", "word": "perro", "meaning": "dog"},
        {"operation": "remove", "word": "perro"},
        {"operation": "search", "word": "gatto"}
    ]"#;

    env.wordz()
        .arg("apply")
        .write_stdin(ops)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: gato"))
        .stdout(predicate::str::contains("Removed: perro"))
        .stdout(predicate::str::contains("gato : cat"));

    let raw = read(&env.db());
    assert!(raw.contains("gato"));
    assert!(!raw.contains("perro"));
}

#[test]
fn apply_rejects_bad_operations() {
    let env = Env::new();
    let file = env.dir.path().join("ops.json");
    std::fs::write(&file, r#"[{"operation": "fly", "word": "x"}]"#).unwrap();

    env.wordz()
        .arg("apply")
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid operation list"));
}

#[test]
fn menu_session_over_stdin() {
    let env = Env::new();
    env.wordz()
        .write_stdin("a\nowl\na bird\ns\nowl\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(">>> "))
        .stdout(predicate::str::contains("found with meaning: a bird"))
        .stdout(predicate::str::contains("(Exiting...)"));
    assert!(read(&env.db()).contains("owl"));
}

#[test]
fn malformed_dictionary_is_not_overwritten() {
    let env = Env::new();
    std::fs::write(env.db(), "[1, 2").unwrap();

    env.wordz()
        .args(["add", "cat", "feline"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse dictionary file"));
    assert_eq!(read(&env.db()), "[1, 2");
}

#[test]
fn config_round_trip() {
    let env = Env::new();
    env.wordz()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("fuzzy-limit = 3"));

    env.wordz()
        .args(["config", "fuzzy-limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fuzzy-limit set to 1"));

    env.wordz()
        .args(["config", "fuzzy-limit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1"));

    env.wordz()
        .args(["config", "fuzzy-limit", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fuzzy-limit").and(predicate::str::contains("set to").not()));
}

#[test]
fn config_runs_even_with_malformed_dictionary() {
    let env = Env::new();
    std::fs::write(env.db(), "garbage").unwrap();
    env.wordz().arg("config").assert().success();
}

#[test]
fn configured_limit_applies_to_search() {
    let env = Env::new();
    env.wordz()
        .args(["config", "fuzzy-limit", "1"])
        .assert()
        .success();
    for word in ["aa", "ab"] {
        env.wordz().args(["add", word, "x"]).assert().success();
    }
    let output = env
        .wordz()
        .args(["search", "zz"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(output).unwrap().matches(" : x").count(), 1);
}

#[test]
fn search_rejects_zero_limit() {
    let env = Env::new();
    env.wordz().args(["add", "cat", "feline"]).assert().success();
    env.wordz()
        .args(["search", "cot", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn logs_are_plain_text_when_redirected() {
    let env = Env::new();
    env.wordz()
        .args(["-l", "debug", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("using dictionary"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[cfg(unix)]
#[test]
fn interrupt_saves_before_exiting() {
    use std::io::{Read, Write};
    use std::process::{Command as StdCommand, Stdio};
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    let env = Env::new();
    let mut child = StdCommand::new(assert_cmd::cargo::cargo_bin("wordz"))
        .env("WORDZ_CONFIG_DIR", env.config_dir())
        .env("NO_COLOR", "1")
        .arg("-d")
        .arg(env.db())
        .arg("menu")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // stdin stays open so the menu is still waiting at its prompt
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"a\nowl\nbird\n").unwrap();
    stdin.flush().unwrap();

    let mut stdout = child.stdout.take().unwrap();
    let (added_tx, added_rx) = mpsc::channel();
    thread::spawn(move || {
        let mut seen = String::new();
        let mut buf = [0u8; 256];
        while let Ok(n) = stdout.read(&mut buf) {
            if n == 0 {
                break;
            }
            seen.push_str(&String::from_utf8_lossy(&buf[..n]));
            if seen.contains("Added: owl") {
                let _ = added_tx.send(());
            }
        }
    });
    added_rx
        .recv_timeout(Duration::from_secs(30))
        .expect("menu did not add the word");
    assert!(!env.db().exists());

    let sent = StdCommand::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(sent.success());

    let status = child.wait().unwrap();
    drop(stdin);
    assert_eq!(status.code(), Some(130));
    assert!(read(&env.db()).contains("\"owl\": \"bird\""));
}

#[test]
fn rejects_unknown_log_level() {
    let env = Env::new();
    env.wordz()
        .args(["-l", "loud", "list"])
        .assert()
        .failure();
}
