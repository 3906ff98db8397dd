//! End-to-end tests for the txmerkle binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use txmerkle::{MerkleTree, ProofDocument};

/// Command with an isolated config file
fn txmerkle(temp_dir: &TempDir) -> anyhow::Result<Command> {
    let mut cmd = Command::cargo_bin("txmerkle")?;
    cmd.env("TXMERKLE_CONFIG", temp_dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn test_root_matches_library() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let expected = MerkleTree::build(&["tx1", "tx2", "tx3"])?.root().to_hex();

    txmerkle(&temp_dir)?
        .args(["root", "tx1", "tx2", "tx3"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected));
    Ok(())
}

#[test]
fn test_root_json() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let output = txmerkle(&temp_dir)?
        .args(["root", "--json", "a", "b", "c", "d", "e"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(value["leaf_count"], 5);
    assert_eq!(value["height"], 3);
    assert_eq!(value["root"].as_str().map(str::len), Some(64));
    Ok(())
}

#[test]
fn test_root_without_leaves_fails() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    txmerkle(&temp_dir)?
        .arg("root")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no leaves given"));
    Ok(())
}

#[test]
fn test_root_from_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let leaves_path = temp_dir.path().join("leaves.txt");
    fs::write(&leaves_path, "tx1\ntx2\ntx3\ntx4\n")?;
    let expected = MerkleTree::build(&["tx1", "tx2", "tx3", "tx4"])?.root().to_hex();

    txmerkle(&temp_dir)?
        .args(["root", "--file"])
        .arg(&leaves_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
    Ok(())
}

#[test]
fn test_tree_folder_marks_duplicate() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    txmerkle(&temp_dir)?
        .args(["tree", "--style", "folder", "tx1", "tx2", "tx3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merkle Root:"))
        .stdout(predicate::str::contains("tx3 (duplicated)"));
    Ok(())
}

#[test]
fn test_tree_rejects_unknown_style() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    txmerkle(&temp_dir)?
        .args(["tree", "--style", "diagram", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tree style"));
    Ok(())
}

#[test]
fn test_tree_rejects_zero_hash_len() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    txmerkle(&temp_dir)?
        .args(["tree", "--hash-len", "0", "a", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));

    txmerkle(&temp_dir)?
        .args(["tree", "--hash-len", "4", "a", "b"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn test_prove_then_verify() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let proof_path = temp_dir.path().join("proof.json");

    txmerkle(&temp_dir)?
        .args(["prove", "--target", "tx3", "--output"])
        .arg(&proof_path)
        .args(["tx1", "tx2", "tx3", "tx4"])
        .assert()
        .success();

    let document = ProofDocument::from_json(&fs::read_to_string(&proof_path)?)?;
    assert_eq!(document.leaf_index, 2);
    assert_eq!(document.path.len(), 2);

    let root = MerkleTree::build(&["tx1", "tx2", "tx3", "tx4"])?.root().to_hex();
    txmerkle(&temp_dir)?
        .arg("verify")
        .arg(&proof_path)
        .args(["--root", root.as_str(), "--leaf", "tx3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("successful"));
    Ok(())
}

#[test]
fn test_verbose_verify_reports_both_roots() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let proof_path = temp_dir.path().join("proof.json");
    let document = ProofDocument::for_target(&["tx1", "tx2", "tx3"], b"tx3")?;
    fs::write(&proof_path, document.to_json()?)?;

    txmerkle(&temp_dir)?
        .args(["--verbose", "--color", "never", "verify"])
        .arg(&proof_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Expected root:"))
        .stderr(predicate::str::contains(format!(
            "Calculated root: {}",
            document.root.to_hex()
        )));
    Ok(())
}

#[test]
fn test_prove_by_index_to_stdout() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let output = txmerkle(&temp_dir)?
        .args(["--quiet", "prove", "--index", "3", "dup", "a", "b", "dup"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let document = ProofDocument::from_json(std::str::from_utf8(&output)?)?;
    assert_eq!(document.leaf_index, 3);
    assert!(document.verify());

    txmerkle(&temp_dir)?
        .args(["verify", "--from-stdin"])
        .write_stdin(output)
        .assert()
        .success();
    Ok(())
}

#[test]
fn test_prove_missing_target() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    txmerkle(&temp_dir)?
        .args(["prove", "--target", "tx9", "tx1", "tx2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Target not found"));
    Ok(())
}

#[test]
fn test_verify_against_wrong_root_fails() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let proof_path = temp_dir.path().join("proof.json");
    let document = ProofDocument::for_target(&["tx1", "tx2"], b"tx1")?;
    fs::write(&proof_path, document.to_json()?)?;

    let wrong_root = MerkleTree::build(&["tx1", "tx3"])?.root().to_hex();
    txmerkle(&temp_dir)?
        .arg("verify")
        .arg(&proof_path)
        .args(["--root", wrong_root.as_str()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("failed"));
    Ok(())
}

#[test]
fn test_verify_tampered_document_fails() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let proof_path = temp_dir.path().join("proof.json");
    let mut document = ProofDocument::for_target(&["tx1", "tx2", "tx3"], b"tx2")?;
    document.path = txmerkle::Proof::new(
        document
            .path
            .steps()
            .iter()
            .cloned()
            .map(|mut step| {
                step.position = step.position.flipped();
                step
            })
            .collect(),
    );
    fs::write(&proof_path, document.to_json()?)?;

    txmerkle(&temp_dir)?
        .arg("verify")
        .arg(&proof_path)
        .assert()
        .failure();
    Ok(())
}

#[test]
fn test_config_set_and_get() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    txmerkle(&temp_dir)?
        .args(["config", "display.short_hash_len", "12"])
        .assert()
        .success();

    txmerkle(&temp_dir)?
        .args(["config", "display.short_hash_len"])
        .assert()
        .success()
        .stdout("12\n");

    assert!(temp_dir.path().join("config.toml").exists());

    txmerkle(&temp_dir)?
        .args(["config", "output.format", "binary"])
        .assert()
        .failure();
    Ok(())
}
