//! Proof renderers

use super::RenderOptions;
use crate::core::hash::sha256;
use crate::proofs::proof::{Proof, ProofDocument};

/// Leaf hash followed by numbered proof steps
pub fn render_proof(target: &[u8], proof: &Proof, options: &RenderOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Merkle proof for '{}'\n",
        String::from_utf8_lossy(target)
    ));
    output.push_str(&format!(
        "Leaf hash: {}\n",
        sha256(target).short(options.short_hash_len)
    ));
    output.push_str(&format!("Proof path ({} steps):\n", proof.len()));

    for (i, step) in proof.iter().enumerate() {
        output.push_str(&format!(
            "  Step {}: {} ({})\n",
            i + 1,
            step.hash.short(options.short_hash_len),
            step.position
        ));
    }

    output
}

/// Text form of a full proof document
pub fn render_document(document: &ProofDocument, options: &RenderOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!("Proof Version: {}\n", document.version));
    output.push_str(&format!(
        "Leaf Index: {} of {}\n",
        document.leaf_index, document.leaf_count
    ));
    output.push_str(&format!("Root Hash: {}\n", document.root));
    output.push_str(&format!("Generated: {}\n", document.generated_at));

    match document.leaf_bytes() {
        Ok(leaf) => output.push_str(&render_proof(&leaf, &document.path, options)),
        Err(_) => output.push_str(&format!("Leaf: <undecodable {}>\n", document.leaf)),
    }

    output
}
